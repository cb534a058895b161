use amiibo_dash::{
    core::{
        tasks::TaskManager,
        DashError,
    },
    gui::{
        app::DashApp,
        settings::{
            SettingsData,
            SETTINGS_FILE,
        },
    },
    persistence::load_json_or_default,
};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DashError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
    info!(region = settings.release_region.key(), catalog = %settings.catalog_url, "settings loaded");

    let task_manager = TaskManager::new()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Amiibo Dash")
            .with_inner_size([1280.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Amiibo Dash",
        options,
        Box::new(move |cc| Ok(Box::new(DashApp::new(cc, settings, task_manager)))),
    )
    .map_err(|e| DashError::Gui(e.to_string()))
}
