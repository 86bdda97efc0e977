use std::path::Path;

use chroma_common::{ChromaError, Result};
use chroma_tally::VOTE_TARGET;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter::filter_fn, EnvFilter};

use crate::config::NodeConfig;

/// Loads the config at `path`, writing the default one first if it does not
/// exist yet.
pub fn ensure_config(path: &Path) -> Result<NodeConfig> {
    if !path.exists() {
        NodeConfig::default().save_to_file(path)?;
    }
    NodeConfig::load_from_file(path)
}

/// Installs the global subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` or else `log_filter`. When
/// `audit_log` is set, vote events are written there instead of stderr. The
/// returned guard must be held until exit so the audit file gets flushed.
pub fn init_tracing(config: &NodeConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| ChromaError::Config(format!("invalid log filter: {}", e)))?;

    let (audit_layer, guard) = match &config.audit_log {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                ChromaError::Config(format!("audit_log has no file name: {}", path.display()))
            })?;
            std::fs::create_dir_all(dir)?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter_fn(|metadata| metadata.target() == VOTE_TARGET));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let audit_enabled = guard.is_some();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(env_filter)
        .with_filter(filter_fn(move |metadata| {
            !(audit_enabled && metadata.target() == VOTE_TARGET)
        }));

    tracing_subscriber::registry()
        .with(audit_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ChromaError::Config(format!("tracing already initialized: {}", e)))?;

    Ok(guard)
}
