/// Runtime configuration for an export run.
///
/// `query` and `location` are optional here because the CLI may supply them
/// as flags; the binary resolves the final values before starting a run.
#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub query: Option<String>,
    pub location: Option<String>,
    pub pages: u32,
    pub radius_meters: u32,
    pub page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub api_base_url: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("query", &self.query)
            .field("location", &self.location)
            .field("pages", &self.pages)
            .field("radius_meters", &self.radius_meters)
            .field("page_delay_ms", &self.page_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
