use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::zones::geo::{valid_latitude, valid_longitude};
use crate::zones::{format_coords, haversine_km, RegionFilterView, RegionRow, TimezoneResolver, ZoneRecord, ZoneRow};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub region: String,
    pub zone: String,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub formatted_coords: String,
}

impl From<&ZoneRecord> for ZoneResponse {
    fn from(r: &ZoneRecord) -> Self {
        Self {
            region: r.region().to_string(),
            zone: r.zone().to_string(),
            name: r.display_text(),
            country: r.country().to_string(),
            lat: r.latitude(),
            lon: r.longitude(),
            formatted_coords: format_coords(r.latitude(), r.longitude()),
        }
    }
}

// ─── GET /api/regions ────────────────────────────────────────────

pub async fn regions(State(state): State<Arc<AppState>>) -> Json<Vec<RegionRow>> {
    Json(state.catalogue.regions().rows())
}

// ─── GET /api/zones ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ZonesQuery {
    pub region: Option<String>,
}

pub async fn zones(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ZonesQuery>,
) -> Json<Vec<ZoneRow>> {
    let start = Instant::now();
    let mut view = RegionFilterView::new(&state.catalogue);
    if let Some(ref region) = params.region {
        view.set_region(region);
    }
    let rows = view.rows();

    tracing::info!(
        region = view.region(),
        zones = rows.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/zones"
    );
    Json(rows)
}

// ─── GET /api/resolve ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    #[serde(flatten)]
    pub zone: ZoneResponse,
    pub distance_km: f64,
    /// True when the catalogue was empty and the default zone was used.
    pub fallback: bool,
}

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let start = Instant::now();

    let (lat, lon) = match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => (lat, lon),
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Provide 'lat' and 'lon' parameters")),
    };
    if !valid_latitude(lat) || !valid_longitude(lon) {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Invalid coordinates. Lat: -90..90, Lon: -180..180",
        ));
    }

    let resolver = TimezoneResolver::new(&state.catalogue);
    let record = resolver.resolve(lat, lon);

    tracing::info!(
        lat,
        lon,
        zone = %record,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "GET /api/resolve"
    );

    Ok(Json(ResolveResponse {
        zone: ZoneResponse::from(record),
        distance_km: haversine_km(lat, lon, record.latitude(), record.longitude()),
        fallback: state.catalogue.is_empty(),
    }))
}

// ─── GET /api/lookup ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LookupQuery {
    pub region: Option<String>,
    pub zone: Option<String>,
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LookupQuery>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let (region, zone) = match (params.region.as_deref(), params.zone.as_deref()) {
        (Some(r), Some(z)) => (r, z),
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "Provide 'region' and 'zone' parameters")),
    };

    let resolver = TimezoneResolver::new(&state.catalogue);
    match resolver.lookup_by_name(region, zone) {
        Some(record) => Ok(Json(ZoneResponse::from(record))),
        None => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("Zone not found: '{}/{}'", region, zone),
        )),
    }
}
