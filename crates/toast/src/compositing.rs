//! Offscreen rendering groups.
//!
//! A widget rendered into a [`CompositingGroup`] is isolated from its
//! siblings: opacity and offset applied while compositing touch only the
//! group's own cells.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::animation::Animatable;

/// A widget rendered into its own buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositingGroup {
	buffer: Buffer,
}

impl CompositingGroup {
	/// Renders `widget` offscreen into `area`.
	///
	/// The buffer keeps `area`'s absolute coordinates, so widgets that record
	/// screen positions while rendering see the same values as on screen.
	pub fn render<W: Widget>(widget: W, area: Rect) -> Self {
		let mut buffer = Buffer::empty(area);
		widget.render(area, &mut buffer);
		Self { buffer }
	}

	/// Renders `widget` offscreen on top of a copy of `backdrop` within `area`.
	///
	/// Use this for content that does not paint every cell, so whatever was
	/// drawn underneath survives compositing.
	pub fn render_on<W: Widget>(widget: W, area: Rect, backdrop: &Buffer) -> Self {
		let mut buffer = Buffer::empty(area);
		for y in area.top()..area.bottom() {
			for x in area.left()..area.right() {
				let position = Position::new(x, y);
				if let (Some(from), Some(to)) = (backdrop.cell(position), buffer.cell_mut(position)) {
					*to = from.clone();
				}
			}
		}
		widget.render(area, &mut buffer);
		Self { buffer }
	}

	/// Area the group was rendered into.
	pub fn area(&self) -> Rect {
		self.buffer.area
	}

	/// Offscreen contents.
	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Copies the group into `dst`, moved down by `offset_y` rows.
	///
	/// Cells landing outside `clip` or outside `dst` are dropped. Below full
	/// opacity, colors are blended toward the destination's background; at
	/// zero opacity nothing is drawn.
	pub fn composite(&self, dst: &mut Buffer, clip: Rect, offset_y: i32, opacity: f32) {
		let opacity = opacity.clamp(0.0, 1.0);
		if opacity <= 0.0 {
			return;
		}
		let clip = clip.intersection(dst.area);
		if clip.is_empty() {
			return;
		}

		let src = self.buffer.area;
		for y in src.top()..src.bottom() {
			let target_y = i32::from(y) + offset_y;
			if target_y < i32::from(clip.top()) || target_y >= i32::from(clip.bottom()) {
				continue;
			}
			let target_y = target_y as u16;
			for x in src.left()..src.right() {
				let target = Position::new(x, target_y);
				if !clip.contains(target) {
					continue;
				}
				let Some(source) = self.buffer.cell(Position::new(x, y)) else {
					continue;
				};
				let Some(cell) = dst.cell_mut(target) else {
					continue;
				};
				if opacity >= 1.0 {
					*cell = source.clone();
				} else {
					let under = cell.bg;
					*cell = source.clone();
					cell.fg = blend(under, source.fg, opacity);
					cell.bg = blend(under, source.bg, opacity);
				}
			}
		}
	}
}

/// Mixes `color` over `under` at `opacity`. `Reset` on either side has no
/// value to mix, so the nearer end wins.
fn blend(under: Color, color: Color, opacity: f32) -> Color {
	under.lerp(&color, opacity)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use ratatui::style::{Style, Stylize};
	use ratatui::text::Line;

	use super::*;

	fn lines(buf: &Buffer) -> Vec<String> {
		let area = buf.area;
		(area.top()..area.bottom())
			.map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
			.collect()
	}

	struct TwoRows;

	impl Widget for TwoRows {
		fn render(self, area: Rect, buf: &mut Buffer) {
			buf.set_string(area.x, area.y, "aaaa", Style::default());
			buf.set_string(area.x, area.y + 1, "bbbb", Style::default());
		}
	}

	fn two_rows(area: Rect) -> CompositingGroup {
		CompositingGroup::render(TwoRows, area)
	}

	#[test]
	fn keeps_absolute_coordinates() {
		let group = CompositingGroup::render(Line::from("hi"), Rect::new(3, 2, 4, 1));
		assert_eq!(group.area(), Rect::new(3, 2, 4, 1));
		assert_eq!(group.buffer()[(3, 2)].symbol(), "h");
	}

	#[test]
	fn render_on_keeps_the_backdrop() {
		let area = Rect::new(0, 0, 4, 1);
		let mut dst = Buffer::empty(area);
		dst.set_style(area, Style::default().on_blue());

		CompositingGroup::render_on(Line::from("hi"), area, &dst).composite(&mut dst, area, 0, 1.0);
		assert_eq!(lines(&dst), ["hi  "]);
		assert_eq!(dst[(3, 0)].bg, Color::Blue);
	}

	#[test]
	fn opaque_copy_in_place() {
		let mut dst = Buffer::empty(Rect::new(0, 0, 4, 3));
		let full = dst.area;
		two_rows(Rect::new(0, 1, 4, 2)).composite(&mut dst, full, 0, 1.0);
		assert_eq!(lines(&dst), ["    ", "aaaa", "bbbb"]);
	}

	#[test]
	fn offset_is_clipped_to_the_clip_rect() {
		let mut dst = Buffer::empty(Rect::new(0, 0, 4, 3));
		let area = Rect::new(0, 1, 4, 2);
		two_rows(area).composite(&mut dst, area, -1, 1.0);
		assert_eq!(lines(&dst), ["    ", "bbbb", "    "]);

		let mut dst = Buffer::empty(Rect::new(0, 0, 4, 3));
		two_rows(area).composite(&mut dst, area, 1, 1.0);
		assert_eq!(lines(&dst), ["    ", "    ", "aaaa"]);
	}

	#[test]
	fn fully_offset_group_draws_nothing() {
		let mut dst = Buffer::empty(Rect::new(0, 0, 4, 3));
		let area = Rect::new(0, 1, 4, 2);
		two_rows(area).composite(&mut dst, area, -3, 1.0);
		assert_eq!(dst, Buffer::empty(Rect::new(0, 0, 4, 3)));
	}

	#[test]
	fn never_writes_outside_destination() {
		let mut dst = Buffer::empty(Rect::new(0, 0, 2, 1));
		two_rows(Rect::new(0, 0, 4, 2)).composite(&mut dst, Rect::new(0, 0, 10, 10), 0, 1.0);
		assert_eq!(lines(&dst), ["aa"]);
	}

	#[test]
	fn zero_opacity_draws_nothing() {
		let area = Rect::new(0, 0, 4, 2);
		let mut dst = Buffer::empty(area);
		two_rows(area).composite(&mut dst, area, 0, 0.0);
		assert_eq!(dst, Buffer::empty(Rect::new(0, 0, 4, 2)));
	}

	#[test]
	fn partial_opacity_blends_toward_background() {
		let area = Rect::new(0, 0, 1, 1);
		let mut dst = Buffer::empty(area);
		dst.set_style(area, Style::default().bg(Color::Rgb(0, 0, 0)));

		let group = CompositingGroup::render(Line::from("x").white().on_red(), area);
		group.composite(&mut dst, area, 0, 0.5);

		let cell = &dst[(0, 0)];
		assert_eq!(cell.symbol(), "x");
		assert_eq!(cell.fg, Color::Rgb(128, 128, 128));
		assert_eq!(cell.bg, Color::Rgb(103, 0, 0));
	}
}
