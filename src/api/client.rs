use bytes::Bytes;
use reqwest::multipart;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::models::{ApiConfig, CompileResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server returned error: {0}")]
    ApiError(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&self.config.base_url)?.join(path)?)
    }

    /// Submit a script for compilation as a multipart form with a single
    /// `file` field carrying the original filename.
    pub async fn compile_script(&self, file_name: &str, data: Vec<u8>) -> Result<CompileResponse> {
        let url = self.endpoint("/compile")?;

        let part = multipart::Part::bytes(data).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::ApiError(format!("Compile request failed: {}", e)))?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(CompileResponse::default());
        }

        // Anything that is not the expected JSON shape counts the same as
        // an empty body.
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// Fetch a compiled artifact, whole body in memory.
    pub async fn download_artifact(&self, path: &str) -> Result<Bytes> {
        let url = self.endpoint(path)?;

        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::ApiError(format!("Download request failed: {}", e)))?;

        Ok(response.bytes().await?)
    }
}
