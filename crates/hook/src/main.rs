use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plexdrop_core::{
    load_config, load_config_from_env, validate_config, Config, FileHookLog, FsPlacer,
    HookRunner, Placer,
};

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "PLEXDROP_CONFIG";

/// Configuration file looked up beside the executable
const DEFAULT_CONFIG_FILE: &str = "plexdrop.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    // Diagnostics go to stderr; the hook log is written separately
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_hook_config()?;
    validate_config(&config).context("Configuration validation failed")?;

    debug!("Downloads root: {}", config.paths.downloads_root);
    debug!("Movies root: {}", config.paths.movies_root);
    debug!("Series root: {}", config.paths.series_root);

    let log = FileHookLog::from_config(&config.log);
    debug!("Hook log: {}", log.path().display());

    let placer = FsPlacer::new(config.placer.clone());
    placer.validate().await.context("Placer validation failed")?;

    let runner =
        HookRunner::new(&config, placer, log).context("Failed to build series matcher")?;

    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let outcome = runner.run(&args).await;
    Ok(outcome.exit_code(config.hook.exit_policy))
}

/// Returns the configuration path and whether it was named explicitly.
fn config_path() -> (PathBuf, bool) {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return (PathBuf::from(path), true);
    }
    let path = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    (path, false)
}

/// Loads the configuration file, or defaults when none sits at the default
/// location. A file named through `PLEXDROP_CONFIG` must exist.
fn load_hook_config() -> Result<Config> {
    let (path, explicit) = config_path();

    if explicit || path.exists() {
        info!("Loading configuration from {:?}", path);
        load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
    } else {
        debug!("No configuration at {:?}, using defaults", path);
        load_config_from_env().context("Failed to read configuration from environment")
    }
}
