pub const DEFAULT_APP_PATH: &str = "/skyeng/";
pub const DEFAULT_PREDICT_ENDPOINT: &str = "get-predicted-words";
pub const DEFAULT_HISTORY_TITLE: &str = "Word predict";
pub const DEFAULT_SOURCE_ERROR: &str = "Error while requesting server";

/// Paths and fixed texts the page works with.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Path the page is mounted on; pushed history URLs point here.
    pub app_path: String,
    /// Endpoint answering with sections of predicted words, relative to the page.
    pub predict_endpoint: String,
    pub history_title: String,
    /// Shown in the seed area when an alternate source cannot be loaded.
    pub source_error: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            app_path: DEFAULT_APP_PATH.to_owned(),
            predict_endpoint: DEFAULT_PREDICT_ENDPOINT.to_owned(),
            history_title: DEFAULT_HISTORY_TITLE.to_owned(),
            source_error: DEFAULT_SOURCE_ERROR.to_owned(),
        }
    }
}

impl PredictorConfig {
    /// Replace the mount path, keeping it wrapped in slashes.
    pub fn with_app_path(mut self, app_path: Option<&str>) -> Self {
        if let Some(path) = app_path
            && !path.trim_matches('/').is_empty()
        {
            self.app_path = format!("/{}/", path.trim_matches('/'));
        }
        self
    }

    /// `seeds_param` must already be percent-encoded; it is forwarded as is.
    pub fn predict_url(&self, seeds_param: &str) -> String {
        format!("{}?seeds={}", self.predict_endpoint, seeds_param)
    }
}
