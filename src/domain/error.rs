use thiserror::Error;

/// Everything the panel can show the user.
///
/// Remote failures deliberately carry no detail; the underlying cause only
/// goes to stderr.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Please select a file first.")]
    NoFileSelected,

    #[error("Please enter the name of the file to download.")]
    EmptyFilename,

    #[error("No compiled file is available to download yet.")]
    NoDownloadLink,

    #[error("There was an error compiling the file.")]
    CompileRequest,

    #[error("There was an error downloading the file.")]
    DownloadRequest,

    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Local validation failures, raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::NoFileSelected | AppError::EmptyFilename | AppError::NoDownloadLink
        )
    }
}
