mod app_state;
mod cli;
mod headless;

use std::process::ExitCode;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use winit::event_loop::EventLoop;

use starfield_common::StarfieldError;
use starfield_config::StarfieldConfig;

const DEFAULT_LOG_DIRECTIVE: &str = "starfield=info";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn env_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse().or_else(|_| DEFAULT_LOG_DIRECTIVE.parse()) {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber. The filter can be swapped later once the
/// config's log level is known.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

/// Load the config. An explicit `--config` path must load cleanly; the
/// default path falls back to defaults on error.
fn load_config(args: &cli::Args) -> Result<StarfieldConfig, StarfieldError> {
    match args.config.as_deref() {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            Ok(starfield_config::load_config(Some(path))?)
        }
        None => Ok(starfield_config::load_config(None).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            StarfieldConfig::default()
        })),
    }
}

fn run_windowed(config: StarfieldConfig) -> starfield_common::Result<()> {
    let controls = starfield_platform::ControlMap::from_config(&config.keybinds);
    tracing::info!("Control map loaded ({} bindings)", controls.len());

    let event_loop = EventLoop::new().map_err(|e| StarfieldError::Window(e.to_string()))?;
    let mut app = app_state::StarfieldApp::new(config, controls);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| StarfieldError::Window(e.to_string()))?;

    if let Some(e) = app.take_fatal() {
        return Err(e);
    }
    app.report_exit();
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let cli_directive = args.log_directive();
    let filter_handle = init_logging(cli_directive.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE));

    tracing::info!("Starfield v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if cli_directive.is_none() {
        let directive = config.logging.level.directive();
        if let Err(e) = filter_handle.reload(env_filter(directive)) {
            tracing::warn!("Failed to apply log level '{directive}': {e}");
        }
    }

    args.apply_overrides(&mut config);
    if let Err(e) = starfield_config::validation::validate(&config) {
        tracing::error!("Invalid settings: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        stars = config.field.star_count,
        projection = ?config.camera.projection,
        frame_rate = config.performance.frame_rate,
        "Config loaded"
    );

    if args.print_config {
        println!("{}", starfield_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    if let Some(frames) = args.headless {
        headless::run(&config, frames);
        return ExitCode::SUCCESS;
    }

    match run_windowed(config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
