mod api;
mod app;
mod application;
mod domain;
mod ui;
mod utils;

fn main() -> iced::Result {
    iced::application(app::TransferApp::default, app::update, app::view)
        .title("Pawn File Manager")
        .run()
}
