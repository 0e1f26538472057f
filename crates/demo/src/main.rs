//! Terminal example screen for the overlay toast widget.

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod mouse;
mod screen;

use std::io::stdout;

use anyhow::Context as _;
use clap::Parser;

use crate::app::App;
use crate::cli::Cli;
use crate::config::DemoConfig;
use crate::mouse::MouseCapture;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let log_path = cli
		.log_file
		.clone()
		.unwrap_or_else(logging::default_log_path);
	logging::init(&log_path, cli.verbose)?;

	let mut config = DemoConfig::load(cli.config.as_deref()).context("loading config")?;
	if let Some(anchor) = cli.anchor {
		config.anchor = anchor.into();
	}
	tracing::info!(
		anchor = ?config.anchor,
		animation_ms = config.animation.as_millis() as u64,
		easing = %config.easing,
		log = %log_path.display(),
		"starting overlay-toast-demo"
	);

	let mut terminal = ratatui::init();
	let capture = MouseCapture::enable(stdout())
		.inspect_err(|error| tracing::warn!(%error, "mouse capture unavailable"))
		.ok();

	let result = app::run(&mut terminal, App::new(config));

	drop(capture);
	ratatui::restore();

	if let Err(error) = &result {
		tracing::error!(error = %error, "demo exited with an error");
	}
	result
}
