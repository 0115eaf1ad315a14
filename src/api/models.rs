use serde::{Deserialize, Serialize};

/// Response from the /compile endpoint
///
/// Some server variants answer with an empty body instead; both fields
/// default so the two cases decode the same way.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompileResponse {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "downloadLink", default)]
    pub download_link: String,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}
