use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use panita::application::ThemePreferenceUseCase;
use panita::infrastructure::{
    ApiColombiaClient, AppConfig, CliArgs, DepartmentImageLoader, FilePreferenceStore,
    StorageManager,
};
use panita::presentation::App;
use panita::presentation::theme::Theme;
use panita::presentation::ui::{Backend, ExplorerScreenState};
use panita::presentation::widgets::PictureManager;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.filter_directive()));

    // Logging to stderr would corrupt the alternate screen.
    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = panita::VERSION, base_url = %config.api.base_url, "Starting Panita");

    let geo_data = Arc::new(ApiColombiaClient::with_base_url(&config.api.base_url)?);
    let theme_preference = ThemePreferenceUseCase::new(Arc::new(FilePreferenceStore::new()));
    let images = DepartmentImageLoader::new(config.effective_assets_dir());

    let mode = theme_preference.load().await;
    let theme = Theme::new(mode, &config.theme.accent_color);

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let backend = Backend::new(
        geo_data,
        &config.api.country,
        images,
        theme_preference,
        command_rx,
        action_tx,
    );
    tokio::spawn(backend.run());

    let mut terminal = ratatui::init();

    // The picker queries the terminal, so it needs raw mode.
    let pictures = PictureManager::new();
    info!(protocol = ?pictures.protocol_type(), "Image protocol selected");

    let state = ExplorerScreenState::new(theme, pictures);
    let result = App::new(state, command_tx, action_rx)
        .run(&mut terminal)
        .await;

    ratatui::restore();

    result
}
