pub mod error;
pub mod model;

pub use error::AppError;
pub use model::{CompileOutcome, DownloadTarget, DownloadedArtifact, FilenameSource, TransferStatus};
