use std::path::PathBuf;

use clap::Parser;

use crate::config::AnchorSetting;

#[derive(Parser, Debug)]
#[command(name = "overlay-toast-demo")]
#[command(about = "Interactive example of edge-anchored overlay toasts")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to $XDG_CONFIG_HOME/overlay-toast/config.toml when present)
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Edge the toasts start anchored to
	#[arg(long, short = 'a', value_enum)]
	pub anchor: Option<AnchorSetting>,

	/// Log file (defaults to overlay-toast.log in the cache directory)
	#[arg(long, value_name = "PATH")]
	pub log_file: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}
