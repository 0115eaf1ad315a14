use bytes::Bytes;

use crate::utils::{artifact_name_from_link, sanitize_filename};

/// Panel status, passed as a value through the rendering layer.
///
/// At most one status is displayed at a time. Transitions:
/// Idle -> InProgress -> {Success, Failure} -> Idle (on dismiss).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    Idle,
    InProgress(String),
    Success(String),
    Failure(String),
}

impl TransferStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransferStatus::Idle)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TransferStatus::Failure(_))
    }
}

/// Which input feeds the download request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilenameSource {
    /// Use the path returned by the last successful upload.
    #[default]
    ServerProvided,
    /// Use the filename typed into the panel.
    UserTyped,
}

/// Resolved download request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    /// Verbatim path from the upload response, e.g. "/download/script.amx".
    ServerProvided(String),
    /// Normalized typed artifact name, e.g. "script.amx".
    UserTyped(String),
}

impl DownloadTarget {
    /// Name offered in the save dialog.
    pub fn suggested_filename(&self) -> String {
        match self {
            DownloadTarget::ServerProvided(link) => artifact_name_from_link(link),
            DownloadTarget::UserTyped(name) => sanitize_filename(name),
        }
    }
}

/// Result of a successful compile request.
#[derive(Debug, Clone)]
pub struct CompileOutcome {
    pub message: String,
    pub download_link: Option<String>,
}

/// Fetched artifact waiting to be saved.
#[derive(Debug, Clone)]
pub struct DownloadedArtifact {
    pub suggested_filename: String,
    pub payload: Bytes,
}
