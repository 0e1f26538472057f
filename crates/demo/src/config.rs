//! Demo settings, read from an optional TOML file.
//!
//! ```toml
//! anchor = "bottom"
//! animation-ms = 350
//! easing = "smooth"
//! frame-ms = 16
//! spacing = 1
//! accent-bar-width = 1
//! background = "#1c1c20"
//! ```
//!
//! Every key is optional. Without `--config`, the file is looked up at
//! `$XDG_CONFIG_HOME/overlay-toast/config.toml` and skipped if absent.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use overlay_toast::animation::Easing;
use overlay_toast::{DEFAULT_DURATION, DEFAULT_SPACING, ToastAnchor, ToastStyle};
use ratatui::style::Color;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Toast edge as written in the config file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSetting {
	/// Toasts above the content.
	Top,
	/// Toasts below the content.
	Bottom,
}

impl From<AnchorSetting> for ToastAnchor {
	fn from(setting: AnchorSetting) -> Self {
		match setting {
			AnchorSetting::Top => ToastAnchor::Top,
			AnchorSetting::Bottom => ToastAnchor::Bottom,
		}
	}
}

/// File contents before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
	anchor: Option<AnchorSetting>,
	animation_ms: Option<u64>,
	easing: Option<String>,
	frame_ms: Option<u64>,
	spacing: Option<u16>,
	accent_bar_width: Option<u16>,
	background: Option<String>,
}

/// Validated demo settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
	/// Initial toast edge.
	pub anchor: ToastAnchor,
	/// Length of one show or hide animation.
	pub animation: Duration,
	/// Animation curve.
	pub easing: Easing,
	/// Redraw interval while a toast is animating.
	pub frame_interval: Duration,
	/// Rows between toast and content.
	pub spacing: u16,
	/// Card colors and metrics.
	pub style: ToastStyle,
}

impl Default for DemoConfig {
	fn default() -> Self {
		Self {
			anchor: ToastAnchor::Top,
			animation: DEFAULT_DURATION,
			easing: Easing::default(),
			frame_interval: DEFAULT_FRAME_INTERVAL,
			spacing: DEFAULT_SPACING,
			style: ToastStyle::default(),
		}
	}
}

impl DemoConfig {
	/// Loads settings from `path`, or from the default location when `None`.
	///
	/// An explicit path must exist; the default one may be missing.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let (path, required) = match path {
			Some(path) => (path.to_path_buf(), true),
			None => match default_path() {
				Some(path) => (path, false),
				None => return Ok(Self::default()),
			},
		};

		if !required && !path.exists() {
			tracing::debug!(path = %path.display(), "no config file, using defaults");
			return Ok(Self::default());
		}

		let text = std::fs::read_to_string(&path).map_err(|error| ConfigError::Io {
			path: path.clone(),
			error,
		})?;
		let config = Self::parse(&text)?;
		tracing::info!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Parses and validates TOML text.
	pub fn parse(text: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(text)?;
		let mut config = Self::default();

		if let Some(anchor) = raw.anchor {
			config.anchor = anchor.into();
		}
		if let Some(ms) = raw.animation_ms {
			config.animation = Duration::from_millis(in_range("animation-ms", ms, 1, 10_000)?);
		}
		if let Some(name) = raw.easing {
			config.easing = Easing::from_str(&name).map_err(|_| ConfigError::InvalidEasing(name))?;
		}
		if let Some(ms) = raw.frame_ms {
			config.frame_interval = Duration::from_millis(in_range("frame-ms", ms, 1, 1_000)?);
		}
		if let Some(spacing) = raw.spacing {
			config.spacing = in_range("spacing", spacing.into(), 0, 10)? as u16;
		}
		if let Some(width) = raw.accent_bar_width {
			config.style.accent_bar_width = in_range("accent-bar-width", width.into(), 0, 10)? as u16;
		}
		if let Some(color) = raw.background {
			config.style.background =
				Color::from_str(&color).map_err(|_| ConfigError::InvalidColor(color))?;
		}

		Ok(config)
	}
}

/// Default config file location.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("overlay-toast").join("config.toml"))
}

fn in_range(key: &'static str, value: u64, min: u64, max: u64) -> Result<u64> {
	if (min..=max).contains(&value) {
		Ok(value)
	} else {
		Err(ConfigError::OutOfRange {
			key,
			value,
			min,
			max,
		})
	}
}
