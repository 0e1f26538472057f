//! Error types for loading the demo configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or an unexpected key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// An easing curve name is unknown.
	#[error("invalid easing curve: {0}")]
	InvalidEasing(String),

	/// A numeric value is outside its allowed range.
	#[error("{key} must be between {min} and {max}, got {value}")]
	OutOfRange {
		/// Config key.
		key: &'static str,
		/// Value found.
		value: u64,
		/// Smallest allowed value.
		min: u64,
		/// Largest allowed value.
		max: u64,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
