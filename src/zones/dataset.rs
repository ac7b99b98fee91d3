//! Zone datasets: the compiled-in default and external JSON files.
//!
//! Anchor points follow the public `zone.tab` coordinates, rounded to two
//! decimals. Row order is the canonical catalogue order.

use super::types::{DatasetError, ZoneRecord};
use std::fs;
use std::path::Path;

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinZone {
    region: &'static str,
    zone: &'static str,
    country: &'static str,
    lat: f64,
    lon: f64,
}

const fn z(region: &'static str, zone: &'static str, country: &'static str, lat: f64, lon: f64) -> BuiltinZone {
    BuiltinZone { region, zone, country, lat, lon }
}

const BUILTIN_ZONES: &[BuiltinZone] = &[
    z("Africa", "Abidjan", "CI", 5.32, -4.03),
    z("Africa", "Accra", "GH", 5.55, -0.22),
    z("Africa", "Addis_Ababa", "ET", 9.03, 38.70),
    z("Africa", "Algiers", "DZ", 36.78, 3.05),
    z("Africa", "Cairo", "EG", 30.05, 31.25),
    z("Africa", "Casablanca", "MA", 33.65, -7.58),
    z("Africa", "Dakar", "SN", 14.67, -17.43),
    z("Africa", "Dar_es_Salaam", "TZ", -6.80, 39.28),
    z("Africa", "Johannesburg", "ZA", -26.25, 28.00),
    z("Africa", "Khartoum", "SD", 15.60, 32.53),
    z("Africa", "Kinshasa", "CD", -4.30, 15.30),
    z("Africa", "Lagos", "NG", 6.45, 3.40),
    z("Africa", "Luanda", "AO", -8.80, 13.23),
    z("Africa", "Maputo", "MZ", -25.97, 32.58),
    z("Africa", "Nairobi", "KE", -1.28, 36.82),
    z("Africa", "Tripoli", "LY", 32.90, 13.18),
    z("Africa", "Tunis", "TN", 36.80, 10.18),
    z("Africa", "Windhoek", "NA", -22.57, 17.10),
    z("America", "Adak", "US", 51.88, -176.66),
    z("America", "Anchorage", "US", 61.22, -149.90),
    z("America", "Argentina/Buenos_Aires", "AR", -34.60, -58.45),
    z("America", "Bogota", "CO", 4.60, -74.08),
    z("America", "Caracas", "VE", 10.50, -66.93),
    z("America", "Chicago", "US", 41.85, -87.65),
    z("America", "Denver", "US", 39.74, -104.98),
    z("America", "Edmonton", "CA", 53.55, -113.47),
    z("America", "Guatemala", "GT", 14.63, -90.52),
    z("America", "Halifax", "CA", 44.65, -63.60),
    z("America", "Havana", "CU", 23.13, -82.37),
    z("America", "La_Paz", "BO", -16.50, -68.15),
    z("America", "Lima", "PE", -12.05, -77.05),
    z("America", "Los_Angeles", "US", 34.05, -118.24),
    z("America", "Mexico_City", "MX", 19.40, -99.15),
    z("America", "Montevideo", "UY", -34.91, -56.21),
    z("America", "New_York", "US", 40.71, -74.01),
    z("America", "Noronha", "BR", -3.85, -32.42),
    z("America", "Nuuk", "GL", 64.18, -51.73),
    z("America", "Panama", "PA", 8.97, -79.53),
    z("America", "Phoenix", "US", 33.45, -112.07),
    z("America", "Santiago", "CL", -33.45, -70.67),
    z("America", "Sao_Paulo", "BR", -23.53, -46.62),
    z("America", "St_Johns", "CA", 47.57, -52.72),
    z("America", "Toronto", "CA", 43.65, -79.38),
    z("America", "Vancouver", "CA", 49.27, -123.12),
    z("America", "Winnipeg", "CA", 49.88, -97.15),
    z("Antarctica", "Casey", "AQ", -66.28, 110.52),
    z("Antarctica", "Davis", "AQ", -68.58, 77.97),
    z("Antarctica", "DumontDUrville", "AQ", -66.67, 140.02),
    z("Antarctica", "Macquarie", "AU", -54.50, 158.95),
    z("Antarctica", "Mawson", "AQ", -67.60, 62.88),
    z("Antarctica", "McMurdo", "AQ", -77.83, 166.60),
    z("Antarctica", "Palmer", "AQ", -64.80, -64.10),
    z("Antarctica", "Rothera", "AQ", -67.57, -68.13),
    z("Antarctica", "Syowa", "AQ", -69.01, 39.59),
    z("Antarctica", "Troll", "AQ", -72.01, 2.53),
    z("Antarctica", "Vostok", "AQ", -78.40, 106.90),
    z("Arctic", "Longyearbyen", "SJ", 78.00, 16.00),
    z("Asia", "Almaty", "KZ", 43.25, 76.95),
    z("Asia", "Anadyr", "RU", 64.75, 177.48),
    z("Asia", "Baghdad", "IQ", 33.35, 44.42),
    z("Asia", "Baku", "AZ", 40.38, 49.85),
    z("Asia", "Bangkok", "TH", 13.75, 100.52),
    z("Asia", "Beirut", "LB", 33.88, 35.50),
    z("Asia", "Colombo", "LK", 6.93, 79.85),
    z("Asia", "Damascus", "SY", 33.50, 36.30),
    z("Asia", "Dhaka", "BD", 23.72, 90.42),
    z("Asia", "Dubai", "AE", 25.30, 55.30),
    z("Asia", "Ho_Chi_Minh", "VN", 10.75, 106.67),
    z("Asia", "Hong_Kong", "HK", 22.28, 114.15),
    z("Asia", "Jakarta", "ID", -6.17, 106.80),
    z("Asia", "Jerusalem", "IL", 31.78, 35.22),
    z("Asia", "Kabul", "AF", 34.52, 69.20),
    z("Asia", "Kamchatka", "RU", 53.02, 158.65),
    z("Asia", "Karachi", "PK", 24.87, 67.05),
    z("Asia", "Kathmandu", "NP", 27.72, 85.32),
    z("Asia", "Kolkata", "IN", 22.53, 88.37),
    z("Asia", "Kuala_Lumpur", "MY", 3.17, 101.70),
    z("Asia", "Magadan", "RU", 59.57, 150.80),
    z("Asia", "Manila", "PH", 14.59, 120.98),
    z("Asia", "Riyadh", "SA", 24.63, 46.72),
    z("Asia", "Seoul", "KR", 37.55, 126.97),
    z("Asia", "Shanghai", "CN", 31.23, 121.47),
    z("Asia", "Singapore", "SG", 1.28, 103.85),
    z("Asia", "Taipei", "TW", 25.05, 121.50),
    z("Asia", "Tashkent", "UZ", 41.33, 69.30),
    z("Asia", "Tehran", "IR", 35.67, 51.43),
    z("Asia", "Tokyo", "JP", 35.65, 139.74),
    z("Asia", "Ulaanbaatar", "MN", 47.92, 106.88),
    z("Asia", "Vladivostok", "RU", 43.17, 131.93),
    z("Asia", "Yakutsk", "RU", 62.00, 129.67),
    z("Asia", "Yekaterinburg", "RU", 56.85, 60.60),
    z("Atlantic", "Azores", "PT", 37.73, -25.67),
    z("Atlantic", "Canary", "ES", 28.10, -15.40),
    z("Atlantic", "Cape_Verde", "CV", 14.92, -23.52),
    z("Atlantic", "Reykjavik", "IS", 64.15, -21.85),
    z("Atlantic", "South_Georgia", "GS", -54.27, -36.53),
    z("Atlantic", "Stanley", "FK", -51.70, -57.85),
    z("Australia", "Adelaide", "AU", -34.92, 138.58),
    z("Australia", "Brisbane", "AU", -27.47, 153.03),
    z("Australia", "Darwin", "AU", -12.47, 130.83),
    z("Australia", "Hobart", "AU", -42.88, 147.32),
    z("Australia", "Perth", "AU", -31.95, 115.85),
    z("Australia", "Sydney", "AU", -33.87, 151.22),
    z("Europe", "Amsterdam", "NL", 52.37, 4.90),
    z("Europe", "Athens", "GR", 37.97, 23.72),
    z("Europe", "Berlin", "DE", 52.50, 13.37),
    z("Europe", "Brussels", "BE", 50.83, 4.33),
    z("Europe", "Bucharest", "RO", 44.43, 26.10),
    z("Europe", "Budapest", "HU", 47.50, 19.08),
    z("Europe", "Dublin", "IE", 53.33, -6.25),
    z("Europe", "Helsinki", "FI", 60.17, 24.97),
    z("Europe", "Istanbul", "TR", 41.02, 28.97),
    z("Europe", "Kyiv", "UA", 50.43, 30.52),
    z("Europe", "Lisbon", "PT", 38.72, -9.13),
    z("Europe", "London", "GB", 51.51, -0.13),
    z("Europe", "Madrid", "ES", 40.40, -3.68),
    z("Europe", "Moscow", "RU", 55.76, 37.62),
    z("Europe", "Oslo", "NO", 59.92, 10.75),
    z("Europe", "Paris", "FR", 48.87, 2.33),
    z("Europe", "Prague", "CZ", 50.08, 14.43),
    z("Europe", "Rome", "IT", 41.90, 12.48),
    z("Europe", "Stockholm", "SE", 59.33, 18.05),
    z("Europe", "Vienna", "AT", 48.22, 16.33),
    z("Europe", "Warsaw", "PL", 52.25, 21.00),
    z("Europe", "Zurich", "CH", 47.38, 8.53),
    z("Indian", "Chagos", "IO", -7.33, 72.42),
    z("Indian", "Maldives", "MV", 4.17, 73.50),
    z("Indian", "Mauritius", "MU", -20.17, 57.50),
    z("Indian", "Reunion", "RE", -20.87, 55.47),
    z("Pacific", "Apia", "WS", -13.83, -171.73),
    z("Pacific", "Auckland", "NZ", -36.87, 174.77),
    z("Pacific", "Chatham", "NZ", -43.95, -176.55),
    z("Pacific", "Fiji", "FJ", -18.13, 178.42),
    z("Pacific", "Funafuti", "TV", -8.52, 179.22),
    z("Pacific", "Galapagos", "EC", -0.90, -89.60),
    z("Pacific", "Guam", "GU", 13.47, 144.75),
    z("Pacific", "Honolulu", "US", 21.31, -157.86),
    z("Pacific", "Kiritimati", "KI", 1.87, -157.33),
    z("Pacific", "Noumea", "NC", -22.27, 166.45),
    z("Pacific", "Pago_Pago", "AS", -14.27, -170.70),
    z("Pacific", "Port_Moresby", "PG", -9.50, 147.17),
    z("Pacific", "Tahiti", "PF", -17.53, -149.57),
    z("Pacific", "Tarawa", "KI", 1.42, 173.00),
    z("Pacific", "Tongatapu", "TO", -21.13, -175.20),
    z("Pacific", "Wallis", "WF", -13.30, -176.17),
];

/// The compiled-in dataset, in canonical order.
pub fn builtin_records() -> Vec<ZoneRecord> {
    BUILTIN_ZONES
        .iter()
        .map(|b| ZoneRecord::new(b.region, b.zone, b.country, b.lat, b.lon))
        .collect()
}

// ─── External dataset ───────────────────────────────────────────

/// Read a JSON array of records. No validation happens here; pass the
/// result to `Catalogue::build`.
pub fn load_records(path: &Path) -> Result<Vec<ZoneRecord>, DatasetError> {
    let data = fs::read_to_string(path)?;
    parse_records(&data)
}

pub fn parse_records(json: &str) -> Result<Vec<ZoneRecord>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}
