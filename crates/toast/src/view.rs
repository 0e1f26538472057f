//! The toast card widget.

use std::borrow::Cow;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::animation::Animatable;
use crate::config::ToastConfig;
use crate::icon::resolve_icon;

/// Opacity of the tint wash behind the text.
pub const WASH_OPACITY: f32 = 0.15;

const ELLIPSIS: char = '…';

/// Colors and cell metrics of a toast card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
	/// Base fill under the tint wash.
	pub background: Color,
	/// Title text color (always bold).
	pub title: Color,
	/// Subtitle text color.
	pub subtitle: Color,
	/// Action glyph color.
	pub action: Color,
	/// Width of the solid tint bar on the leading edge.
	pub accent_bar_width: u16,
	/// Empty columns left and right of the content.
	pub padding_h: u16,
	/// Empty rows above and below the content.
	pub padding_v: u16,
	/// Columns between icon, text and action glyph.
	pub gap: u16,
}

impl Default for ToastStyle {
	fn default() -> Self {
		Self {
			background: Color::Rgb(28, 28, 32),
			title: Color::White,
			subtitle: Color::DarkGray,
			action: Color::DarkGray,
			accent_bar_width: 1,
			padding_h: 2,
			padding_v: 1,
			gap: 1,
		}
	}
}

/// Renders a [`ToastConfig`] as a single card.
///
/// Layout, left to right: accent bar over the left padding, icon, title with
/// optional subtitle underneath, flexible space, action glyph. Text never
/// wraps; it is cut with an ellipsis.
#[derive(Debug, Clone, Copy)]
pub struct ToastView<'a> {
	config: &'a ToastConfig,
	style: ToastStyle,
}

/// Cell positions of the card's parts inside a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardLayout {
	content_x: u16,
	title_y: u16,
	text_x: u16,
	text_width: u16,
	action: Option<Rect>,
}

impl<'a> ToastView<'a> {
	/// Creates a view of `config` with the default style.
	pub fn new(config: &'a ToastConfig) -> Self {
		Self {
			config,
			style: ToastStyle::default(),
		}
	}

	/// Sets the card style.
	#[must_use]
	pub fn style(mut self, style: ToastStyle) -> Self {
		self.style = style;
		self
	}

	/// Rendered height of the card in rows.
	///
	/// One row for the title, one more when the subtitle is non-empty, plus
	/// vertical padding.
	pub fn height(&self) -> u16 {
		let text_rows = if self.config.has_subtitle() { 2 } else { 1 };
		self.style.padding_v.saturating_mul(2).saturating_add(text_rows)
	}

	/// Screen rectangle of the action glyph when the card is drawn in `area`.
	///
	/// `None` when the glyph does not fit.
	pub fn action_area(&self, area: Rect) -> Option<Rect> {
		self.layout(area).action
	}

	fn layout(&self, area: Rect) -> CardLayout {
		let style = &self.style;
		let content_x = area.x.saturating_add(style.padding_h);
		let content_end = area.right().saturating_sub(style.padding_h).max(content_x);
		let title_y = area.y.saturating_add(style.padding_v);

		let icon_width = resolve_icon(&self.config.icon).width() as u16;
		let action_width = resolve_icon(&self.config.action_icon).width() as u16;

		let text_x = content_x
			.saturating_add(icon_width)
			.saturating_add(style.gap)
			.min(content_end);

		let action_x = content_end.saturating_sub(action_width);
		let action = (action_width > 0 && action_x >= text_x && title_y < area.bottom())
			.then(|| Rect::new(action_x, title_y, action_width, 1));

		let text_end = match action {
			Some(rect) => rect.x.saturating_sub(style.gap).max(text_x),
			None => content_end,
		};

		CardLayout {
			content_x,
			title_y,
			text_x,
			text_width: text_end - text_x,
			action,
		}
	}

	fn paint_background(&self, area: Rect, buf: &mut Buffer) {
		let tint = self.config.tint;
		let wash = self.style.background.lerp(&tint, WASH_OPACITY);
		let bar_end = area.x.saturating_add(self.style.accent_bar_width);
		for y in area.top()..area.bottom() {
			for x in area.left()..area.right() {
				if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
					cell.set_bg(if x < bar_end { tint } else { wash });
				}
			}
		}
	}
}

impl Widget for ToastView<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let area = area.intersection(buf.area);
		if area.is_empty() {
			return;
		}

		for y in area.top()..area.bottom() {
			for x in area.left()..area.right() {
				if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
					cell.reset();
				}
			}
		}

		let layout = self.layout(area);
		let config = self.config;
		let rows_end = area.bottom().saturating_sub(self.style.padding_v);

		if layout.title_y < rows_end {
			let icon = resolve_icon(&config.icon);
			if layout.content_x.saturating_add(icon.width() as u16) <= layout.text_x {
				buf.set_string(
					layout.content_x,
					layout.title_y,
					icon,
					Style::default().fg(config.tint),
				);
			}

			let title = truncate(&config.title, layout.text_width);
			buf.set_stringn(
				layout.text_x,
				layout.title_y,
				title,
				layout.text_width as usize,
				Style::default()
					.fg(self.style.title)
					.add_modifier(Modifier::BOLD),
			);

			if let Some(action) = layout.action {
				buf.set_string(
					action.x,
					action.y,
					resolve_icon(&config.action_icon),
					Style::default().fg(self.style.action),
				);
			}
		}

		let subtitle_y = layout.title_y.saturating_add(1);
		if config.has_subtitle() && subtitle_y < rows_end {
			let subtitle = truncate(&config.subtitle, layout.text_width);
			buf.set_stringn(
				layout.text_x,
				subtitle_y,
				subtitle,
				layout.text_width as usize,
				Style::default().fg(self.style.subtitle),
			);
		}

		// Wide glyphs reset the cell they cover, so colors go on last.
		self.paint_background(area, buf);
	}
}

/// Cuts `text` to `max_width` display columns, ending in an ellipsis when cut.
pub fn truncate(text: &str, max_width: u16) -> Cow<'_, str> {
	let max_width = max_width as usize;
	if text.width() <= max_width {
		return Cow::Borrowed(text);
	}
	if max_width == 0 {
		return Cow::Borrowed("");
	}

	let budget = max_width - 1;
	let mut used = 0;
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		let width = ch.width().unwrap_or(0);
		if used + width > budget {
			break;
		}
		used += width;
		out.push(ch);
	}
	out.push(ELLIPSIS);
	Cow::Owned(out)
}
