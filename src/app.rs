use crate::api::{ApiClient, ApiConfig};
use crate::application::TransferCoordinator;
use crate::domain::{AppError, CompileOutcome, DownloadedArtifact, FilenameSource, TransferStatus};
use crate::ui::{TransferMessage, TransferView};
use iced::Task;
use std::path::PathBuf;

pub struct TransferApp {
    view: TransferView,
    coordinator: TransferCoordinator,
}

impl Default for TransferApp {
    fn default() -> Self {
        Self::new(FilenameSource::default())
    }
}

impl TransferApp {
    pub fn new(filename_source: FilenameSource) -> Self {
        let coordinator =
            TransferCoordinator::new(ApiClient::new(ApiConfig::default()), filename_source);

        Self {
            view: TransferView::new(filename_source),
            coordinator,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(TransferMessage),
    FilePicked(Option<PathBuf>),
    UploadFinished(Result<CompileOutcome, AppError>),
    ArtifactFetched(Result<DownloadedArtifact, AppError>),
    /// Saved path, or `None` when the save dialog was cancelled
    ArtifactSaved(Result<Option<PathBuf>, AppError>),
}

pub fn update(app: &mut TransferApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                TransferMessage::PickFilePressed => {
                    let coordinator = app.coordinator.clone();

                    return Task::perform(
                        async move { coordinator.choose_script().await },
                        Message::FilePicked,
                    );
                }
                TransferMessage::UploadPressed => {
                    let Some(selected) = app.view.selected_file.clone() else {
                        app.view.status =
                            TransferStatus::Failure(AppError::NoFileSelected.to_string());
                        return Task::none();
                    };

                    app.view.status =
                        TransferStatus::InProgress("Uploading file...".to_string());
                    let coordinator = app.coordinator.clone();

                    return Task::perform(
                        async move { coordinator.upload_script(Some(selected)).await },
                        Message::UploadFinished,
                    );
                }
                TransferMessage::DownloadPressed => {
                    let resolved = app.coordinator.resolve_target(
                        app.view.download_link.as_deref(),
                        &app.view.typed_filename,
                    );

                    match resolved {
                        Ok(target) => {
                            app.view.status =
                                TransferStatus::InProgress("Starting download...".to_string());
                            let coordinator = app.coordinator.clone();

                            return Task::perform(
                                async move { coordinator.fetch_artifact(&target).await },
                                Message::ArtifactFetched,
                            );
                        }
                        Err(e) => {
                            app.view.status = TransferStatus::Failure(e.to_string());
                        }
                    }
                }
                TransferMessage::DismissPressed => {
                    app.view.status = TransferStatus::Idle;
                }
                TransferMessage::FilenameChanged(_) => {}
            }
        }
        Message::FilePicked(path) => {
            // Cancelling the picker keeps the previous selection.
            if let Some(path) = path {
                app.view.selected_file = Some(path);
            }
        }
        Message::UploadFinished(result) => match result {
            Ok(outcome) => {
                app.view.download_link = outcome.download_link.clone();
                app.view.status = TransferStatus::Success(outcome.message);
            }
            Err(e) => {
                app.view.status = TransferStatus::Failure(e.to_string());
            }
        },
        Message::ArtifactFetched(result) => match result {
            Ok(artifact) => {
                app.view.status =
                    TransferStatus::InProgress("Choose where to save the file...".to_string());
                let coordinator = app.coordinator.clone();

                return Task::perform(
                    async move { coordinator.save_artifact(artifact).await },
                    Message::ArtifactSaved,
                );
            }
            Err(e) => {
                app.view.status = TransferStatus::Failure(e.to_string());
            }
        },
        Message::ArtifactSaved(result) => match result {
            Ok(Some(_path)) => {
                app.view.status = TransferStatus::Success("Download complete.".to_string());
            }
            Ok(None) => {
                app.view.status = TransferStatus::Idle;
            }
            Err(e) => {
                app.view.status = TransferStatus::Failure(e.to_string());
            }
        },
    }
    Task::none()
}

pub fn view(app: &TransferApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}
