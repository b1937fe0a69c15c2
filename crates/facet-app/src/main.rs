mod app_state;
mod cli;
mod input;
mod scene;

use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use facet_config::FacetConfig;

const DEFAULT_DIRECTIVE: &str = "facet=info";

/// `--log-level` wins over `[logging] level`, which wins over the default.
fn log_directive(cli_level: Option<&str>, config: Option<&FacetConfig>) -> String {
    match (cli_level, config) {
        (Some(level), _) => level.to_string(),
        (None, Some(config)) => config.logging.level.as_directive().to_string(),
        (None, None) => DEFAULT_DIRECTIVE.to_string(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive '{directive}': {e}");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config comes first so its log level can seed the subscriber.
    let loaded = facet_config::load_config(args.config.as_deref());
    init_logging(&log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok(),
    ));

    tracing::info!("facet v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FacetConfig::default()
        }
    };

    let config_path = match facet_config::resolve_config_path(args.config.as_deref()) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("No config path to watch: {e}");
            None
        }
    };

    let scene = match scene::build(&args.command, &config) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("Failed to set up scene: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("Scene: {}", scene.title());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::FacetApp::new(config, config_path, scene);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
