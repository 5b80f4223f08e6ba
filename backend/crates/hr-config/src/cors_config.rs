use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins allowed to call the API. Empty list allows any origin.
    pub allowed_origins: Vec<String>,
}
