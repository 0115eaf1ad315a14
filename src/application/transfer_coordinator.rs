use std::path::PathBuf;

use crate::{
    api::{ApiClient, ApiError},
    domain::{AppError, CompileOutcome, DownloadTarget, DownloadedArtifact, FilenameSource},
    utils::ensure_amx_extension,
};

const DEFAULT_COMPILE_MESSAGE: &str = "File uploaded and compiled successfully.";

/// Orchestrates both panel actions: validation, the compile upload, and
/// the artifact download with its save-as step.
#[derive(Clone)]
pub struct TransferCoordinator {
    api_client: ApiClient,
    filename_source: FilenameSource,
}

impl TransferCoordinator {
    pub fn new(api_client: ApiClient, filename_source: FilenameSource) -> Self {
        Self {
            api_client,
            filename_source,
        }
    }

    /// Ask for a script to upload.
    pub async fn choose_script(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .add_filter("Pawn script", &["pwn"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    /// Read the selected script and submit it for compilation.
    ///
    /// A missing selection is a validation failure; no request goes out.
    pub async fn upload_script(&self, selected: Option<PathBuf>) -> Result<CompileOutcome, AppError> {
        let path = selected.ok_or(AppError::NoFileSelected)?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("script.pwn")
            .to_string();

        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let response = self
            .api_client
            .compile_script(&file_name, data)
            .await
            .map_err(|e| remote_failure(e, AppError::CompileRequest))?;

        let message = if response.message.is_empty() {
            DEFAULT_COMPILE_MESSAGE.to_string()
        } else {
            response.message
        };
        let download_link = Some(response.download_link).filter(|link| !link.is_empty());

        Ok(CompileOutcome {
            message,
            download_link,
        })
    }

    /// Turn the panel inputs into a download target, per configuration.
    ///
    /// Fails locally when there is nothing to download; no request goes out.
    pub fn resolve_target(
        &self,
        download_link: Option<&str>,
        typed_name: &str,
    ) -> Result<DownloadTarget, AppError> {
        match self.filename_source {
            FilenameSource::ServerProvided => download_link
                .filter(|link| !link.is_empty())
                .map(|link| DownloadTarget::ServerProvided(link.to_string()))
                .ok_or(AppError::NoDownloadLink),
            FilenameSource::UserTyped => {
                let typed = typed_name.trim();
                if typed.is_empty() {
                    return Err(AppError::EmptyFilename);
                }
                Ok(DownloadTarget::UserTyped(ensure_amx_extension(typed)))
            }
        }
    }

    /// Fetch the compiled artifact for a resolved target.
    pub async fn fetch_artifact(
        &self,
        target: &DownloadTarget,
    ) -> Result<DownloadedArtifact, AppError> {
        let request_path = match target {
            DownloadTarget::ServerProvided(link) => link.clone(),
            DownloadTarget::UserTyped(name) => format!("/download/{}", name),
        };

        let payload = self
            .api_client
            .download_artifact(&request_path)
            .await
            .map_err(|e| remote_failure(e, AppError::DownloadRequest))?;

        Ok(DownloadedArtifact {
            suggested_filename: target.suggested_filename(),
            payload,
        })
    }

    /// Offer a save-as dialog and write the artifact to the chosen path.
    ///
    /// Returns `None` when the dialog is cancelled.
    pub async fn save_artifact(
        &self,
        artifact: DownloadedArtifact,
    ) -> Result<Option<PathBuf>, AppError> {
        let Some(path) = rfd::AsyncFileDialog::new()
            .set_file_name(&artifact.suggested_filename)
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
        else {
            return Ok(None);
        };

        tokio::fs::write(&path, &artifact.payload)
            .await
            .map_err(|e| AppError::Io(format!("Failed to save {}: {}", path.display(), e)))?;

        Ok(Some(path))
    }
}

/// Collapse a request failure into its generic user-facing error. The
/// cause goes to stderr only.
fn remote_failure(cause: ApiError, shown: AppError) -> AppError {
    eprintln!("request failed: {}", cause);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiConfig;

    fn coordinator(base_url: String, source: FilenameSource) -> TransferCoordinator {
        TransferCoordinator::new(ApiClient::new(ApiConfig { base_url }), source)
    }

    fn offline_coordinator(source: FilenameSource) -> TransferCoordinator {
        coordinator("http://localhost:3000".to_string(), source)
    }

    fn write_script(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, b"main() { print(\"hi\"); }").unwrap();
        path
    }

    #[tokio::test]
    async fn test_upload_without_selection_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/compile").expect(0).create_async().await;

        let err = coordinator(server.url(), FilenameSource::ServerProvided)
            .upload_script(None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NoFileSelected));
        assert!(err.is_validation());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_returns_outcome() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/compile")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"ok","downloadLink":"/download/script.amx"}"#)
            .create_async()
            .await;

        let script = write_script("upload_outcome.pwn");
        let outcome = coordinator(server.url(), FilenameSource::ServerProvided)
            .upload_script(Some(script))
            .await
            .unwrap();

        assert_eq!(outcome.message, "ok");
        assert_eq!(
            outcome.download_link.as_deref(),
            Some("/download/script.amx")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_defaults_message_for_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/compile")
            .with_status(200)
            .with_body("")
            .create_async()
            .await;

        let script = write_script("upload_empty_body.pwn");
        let outcome = coordinator(server.url(), FilenameSource::ServerProvided)
            .upload_script(Some(script))
            .await
            .unwrap();

        assert_eq!(outcome.message, DEFAULT_COMPILE_MESSAGE);
        assert!(outcome.download_link.is_none());
    }

    #[tokio::test]
    async fn test_upload_collapses_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/compile")
            .with_status(500)
            .with_body("backend stack trace")
            .create_async()
            .await;

        let script = write_script("upload_server_error.pwn");
        let err = coordinator(server.url(), FilenameSource::ServerProvided)
            .upload_script(Some(script))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::CompileRequest));
        assert!(!err.to_string().contains("stack trace"));
    }

    #[test]
    fn test_resolve_target_requires_link() {
        let err = offline_coordinator(FilenameSource::ServerProvided)
            .resolve_target(None, "ignored")
            .unwrap_err();

        assert!(matches!(err, AppError::NoDownloadLink));
    }

    #[test]
    fn test_resolve_target_uses_link_verbatim() {
        let target = offline_coordinator(FilenameSource::ServerProvided)
            .resolve_target(Some("/download/script.amx"), "")
            .unwrap();

        assert_eq!(
            target,
            DownloadTarget::ServerProvided("/download/script.amx".to_string())
        );
    }

    #[test]
    fn test_resolve_target_rejects_empty_name() {
        let coordinator = offline_coordinator(FilenameSource::UserTyped);

        assert!(matches!(
            coordinator.resolve_target(None, "").unwrap_err(),
            AppError::EmptyFilename
        ));
        assert!(matches!(
            coordinator.resolve_target(None, "   ").unwrap_err(),
            AppError::EmptyFilename
        ));
    }

    #[test]
    fn test_resolve_target_normalizes_extension() {
        let coordinator = offline_coordinator(FilenameSource::UserTyped);

        assert_eq!(
            coordinator.resolve_target(None, "script").unwrap(),
            DownloadTarget::UserTyped("script.amx".to_string())
        );
        assert_eq!(
            coordinator.resolve_target(None, "script.amx").unwrap(),
            DownloadTarget::UserTyped("script.amx".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_artifact_payload_and_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/download/script.amx")
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body(vec![0x42u8; 2048])
            .create_async()
            .await;

        let target = DownloadTarget::UserTyped("script.amx".to_string());
        let artifact = coordinator(server.url(), FilenameSource::UserTyped)
            .fetch_artifact(&target)
            .await
            .unwrap();

        assert_eq!(artifact.payload.len(), 2048);
        assert_eq!(artifact.suggested_filename, "script.amx");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_artifact_follows_server_link() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/download/other.amx")
            .with_status(200)
            .with_body(vec![0u8; 16])
            .create_async()
            .await;

        let target = DownloadTarget::ServerProvided("/download/other.amx".to_string());
        let artifact = coordinator(server.url(), FilenameSource::ServerProvided)
            .fetch_artifact(&target)
            .await
            .unwrap();

        assert_eq!(artifact.suggested_filename, "other.amx");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_artifact_collapses_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/download/missing.amx")
            .with_status(404)
            .with_body("no such artifact")
            .create_async()
            .await;

        let target = DownloadTarget::UserTyped("missing.amx".to_string());
        let err = coordinator(server.url(), FilenameSource::UserTyped)
            .fetch_artifact(&target)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DownloadRequest));
        assert!(!err.to_string().contains("no such artifact"));
    }
}
