mod constants;
mod content;
mod error;
mod types;
mod ui;

use crate::ui::app::WelcomeApp;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(constants::WINDOW_TITLE)
            .with_app_id(constants::APP_ID)
            .with_inner_size(constants::WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        constants::WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(WelcomeApp::new(cc)))),
    )
}
