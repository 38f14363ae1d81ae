use crate::{config::Config, ui::spawn_ui_thread};

mod config;
mod core;
mod ui;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::info!(
        "Using {} ({} cards of {} notes)",
        config.endpoint,
        config.card_count,
        config.notes_per_card
    );
    // Ui thread (main thread). Opens the app window
    spawn_ui_thread(config)
}
