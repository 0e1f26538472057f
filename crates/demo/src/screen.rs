//! The example screen the toasts are attached to.

use overlay_toast::ToastAnchor;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

const BUTTON_BG: Color = Color::Blue;
const CAPTION: Color = Color::DarkGray;

/// Width the screen is laid out at; wider terminals center it.
pub const SCREEN_WIDTH: u16 = 60;

/// Call shown in the usage box.
pub const USAGE: &str = ".overlay_toast(alignment, config, is_presented, &mut presence)";

/// Something on the screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTarget {
	/// Toggles the error toast.
	ErrorButton,
	/// Toggles the success toast.
	SuccessButton,
	/// Selects a toast edge.
	Anchor(ToastAnchor),
}

/// Areas of the screen's interactive parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
	pub error_button: Rect,
	pub success_button: Rect,
	pub usage_caption: Rect,
	pub usage: Rect,
	pub anchor_caption: Rect,
	pub anchor_top: Rect,
	pub anchor_bottom: Rect,
}

impl ScreenLayout {
	/// Lays the screen out in `area`.
	pub fn new(area: Rect) -> Self {
		let [_, buttons, _, usage_caption, usage, _, anchor_caption, picker, _] =
			Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Fill(1),
			])
			.areas(area);
		let [error_button, success_button] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
				.spacing(2)
				.areas(buttons);
		let [anchor_top, anchor_bottom] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(picker);

		Self {
			error_button,
			success_button,
			usage_caption,
			usage,
			anchor_caption,
			anchor_top,
			anchor_bottom,
		}
	}

	/// What a click at `position` lands on.
	pub fn hit(&self, position: Position) -> Option<ScreenTarget> {
		[
			(self.error_button, ScreenTarget::ErrorButton),
			(self.success_button, ScreenTarget::SuccessButton),
			(self.anchor_top, ScreenTarget::Anchor(ToastAnchor::Top)),
			(self.anchor_bottom, ScreenTarget::Anchor(ToastAnchor::Bottom)),
		]
		.into_iter()
		.find(|(area, _)| area.contains(position))
		.map(|(_, target)| target)
	}
}

/// Two buttons, a usage snippet and the anchor picker.
#[derive(Debug, Clone, Copy)]
pub struct ExampleScreen {
	anchor: ToastAnchor,
}

impl ExampleScreen {
	pub fn new(anchor: ToastAnchor) -> Self {
		Self { anchor }
	}
}

impl Widget for ExampleScreen {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let layout = ScreenLayout::new(area);

		button("Error Example", layout.error_button, buf);
		button("Success Example", layout.success_button, buf);

		Line::from("Usage").fg(CAPTION).render(layout.usage_caption, buf);
		Paragraph::new(USAGE)
			.block(Block::bordered().border_type(BorderType::Rounded).fg(CAPTION))
			.style(Style::default().fg(Color::Reset))
			.render(layout.usage, buf);

		Line::from("Toast Anchor").fg(CAPTION).render(layout.anchor_caption, buf);
		segment("Top", self.anchor == ToastAnchor::Top, layout.anchor_top, buf);
		segment(
			"Bottom",
			self.anchor == ToastAnchor::Bottom,
			layout.anchor_bottom,
			buf,
		);
	}
}

fn button(label: &str, area: Rect, buf: &mut Buffer) {
	buf.set_style(area, Style::default().bg(BUTTON_BG).fg(Color::White));
	let [_, middle, _] = Layout::vertical([Constraint::Fill(1); 3]).areas(area);
	Line::from(label)
		.alignment(Alignment::Center)
		.render(middle, buf);
}

fn segment(label: &str, selected: bool, area: Rect, buf: &mut Buffer) {
	let style = if selected {
		Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
	} else {
		Style::default().fg(CAPTION)
	};
	buf.set_style(area, style);
	Line::from(label)
		.alignment(Alignment::Center)
		.render(area, buf);
}
