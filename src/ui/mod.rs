use std::path::PathBuf;

use iced::{
    widget::{
        button, center, column, container, mouse_area, opaque, row, stack, text, text_input, Space,
    },
    Element, Length,
};

use crate::domain::{FilenameSource, TransferStatus};

/// Panel state fed by user input and handler results.
pub struct TransferView {
    pub selected_file: Option<PathBuf>,
    pub typed_filename: String,
    pub download_link: Option<String>,
    pub status: TransferStatus,
    pub filename_source: FilenameSource,
}

impl TransferView {
    pub fn new(filename_source: FilenameSource) -> Self {
        Self {
            selected_file: None,
            typed_filename: String::new(),
            download_link: None,
            status: TransferStatus::Idle,
            filename_source,
        }
    }
}

impl Default for TransferView {
    fn default() -> Self {
        Self::new(FilenameSource::default())
    }
}

#[derive(Debug, Clone)]
pub enum TransferMessage {
    PickFilePressed,
    FilenameChanged(String),
    UploadPressed,
    DownloadPressed,
    DismissPressed,
}

impl TransferView {
    pub fn update(&mut self, message: TransferMessage) {
        match message {
            TransferMessage::FilenameChanged(name) => {
                self.typed_filename = name;
            }
            // Picking, submitting and dismissing are handled by the app.
            TransferMessage::PickFilePressed
            | TransferMessage::UploadPressed
            | TransferMessage::DownloadPressed
            | TransferMessage::DismissPressed => {}
        }
    }

    pub fn view(&self) -> Element<'_, TransferMessage> {
        let panel = column![
            text("Manage .pwn and .amx files").size(32),
            Space::new().height(Length::Fixed(20.0)),
            self.upload_card(),
            Space::new().height(Length::Fixed(20.0)),
            self.download_card(),
        ]
        .padding(20)
        .spacing(10);

        if self.status.is_idle() {
            panel.into()
        } else {
            stack![
                panel,
                opaque(
                    mouse_area(center(opaque(self.status_card())))
                        .on_press(TransferMessage::DismissPressed)
                )
            ]
            .into()
        }
    }

    fn upload_card(&self) -> Element<'_, TransferMessage> {
        let selected = match &self.selected_file {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "No file selected".to_string(),
        };

        column![
            text("Upload .pwn script").size(20),
            row![
                button("Choose file...")
                    .on_press(TransferMessage::PickFilePressed)
                    .padding(10),
                text(selected).size(14),
            ]
            .spacing(10),
            button("Upload and compile")
                .on_press(TransferMessage::UploadPressed)
                .padding([10, 20]),
        ]
        .spacing(10)
        .into()
    }

    fn download_card(&self) -> Element<'_, TransferMessage> {
        let controls: Element<'_, TransferMessage> = match self.filename_source {
            FilenameSource::UserTyped => column![
                text_input("File name (without .amx)", &self.typed_filename)
                    .on_input(TransferMessage::FilenameChanged)
                    .padding(10),
                button("Download .amx")
                    .on_press(TransferMessage::DownloadPressed)
                    .padding([10, 20]),
            ]
            .spacing(10)
            .into(),
            FilenameSource::ServerProvided => {
                if self.download_link.is_some() {
                    button("Download file")
                        .on_press(TransferMessage::DownloadPressed)
                        .padding([10, 20])
                        .into()
                } else {
                    text("Upload a file to enable the download.").size(14).into()
                }
            }
        };

        column![text("Download compiled file").size(20), controls]
            .spacing(10)
            .into()
    }

    fn status_card(&self) -> Element<'_, TransferMessage> {
        let (heading, message) = match &self.status {
            TransferStatus::Failure(message) => ("Error", message.as_str()),
            TransferStatus::Success(message) | TransferStatus::InProgress(message) => {
                ("Message", message.as_str())
            }
            TransferStatus::Idle => ("Message", ""),
        };

        container(
            column![
                text(heading).size(20),
                text(message).size(14),
                button("Close")
                    .on_press(TransferMessage::DismissPressed)
                    .padding([10, 20]),
            ]
            .spacing(10),
        )
        .width(Length::Fixed(360.0))
        .padding(20)
        .style(container::rounded_box)
        .into()
    }
}
