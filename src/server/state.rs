use crate::zones::Catalogue;

pub struct AppState {
    pub catalogue: Catalogue,
}
