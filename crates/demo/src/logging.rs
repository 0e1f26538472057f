//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Default log file location.
pub fn default_log_path() -> PathBuf {
	dirs::cache_dir()
		.unwrap_or_else(std::env::temp_dir)
		.join("overlay-toast.log")
}

/// Installs a global subscriber appending to `path`.
///
/// `RUST_LOG` takes precedence over the `verbose` default.
pub fn init(path: &Path, verbose: bool) -> anyhow::Result<()> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)
			.with_context(|| format!("creating log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("opening log file {}", path.display()))?;

	let default_level = if verbose { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(false)
		.with_writer(Mutex::new(file))
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}
