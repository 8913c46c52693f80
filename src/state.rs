use crate::config::HttpLimits;
use crate::dex::DexSource;

pub struct AppState {
    /// The exact `Authorization` value `/guess` accepts.
    pub authorization: String,
    pub dex: DexSource,
    pub limits: HttpLimits,
}

impl AppState {
    pub fn new(secret: String, dex: DexSource, limits: HttpLimits) -> Self {
        Self {
            authorization: format!("Bearer {}", secret),
            dex,
            limits,
        }
    }
}
