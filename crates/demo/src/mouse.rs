//! Mouse capture tied to a scope.

use std::io::{self, Write};

use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

/// Keeps mouse reporting on until dropped.
///
/// Dropping also runs while a panic unwinds, so the terminal never stays in
/// mouse mode after the demo exits.
pub struct MouseCapture<W: Write> {
	writer: W,
}

impl<W: Write> MouseCapture<W> {
	pub fn enable(mut writer: W) -> io::Result<Self> {
		execute!(writer, EnableMouseCapture)?;
		Ok(Self { writer })
	}
}

impl<W: Write> Drop for MouseCapture<W> {
	fn drop(&mut self) {
		if let Err(error) = execute!(self.writer, DisableMouseCapture) {
			tracing::warn!(%error, "failed to disable mouse capture");
		}
	}
}
