//! Presentation descriptor for a single toast.

use std::fmt;
use std::rc::Rc;

use ratatui::style::Color;

/// Edge of the host a toast is attached to, or animates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastAnchor {
	/// Above the host content (default).
	#[default]
	Top,
	/// Below the host content.
	Bottom,
}

impl ToastAnchor {
	/// The other edge.
	pub fn flipped(self) -> Self {
		match self {
			Self::Top => Self::Bottom,
			Self::Bottom => Self::Top,
		}
	}
}

/// Callback invoked when the toast's action glyph is activated.
pub type ActionHandler = Rc<dyn Fn()>;

/// Everything needed to draw one toast.
///
/// A config has no visibility of its own: whether it is shown is decided by a
/// caller-owned flag passed alongside it. Build a fresh one each frame.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use overlay_toast::{ToastAnchor, ToastConfig};
/// use ratatui::style::Color;
///
/// let shown = Rc::new(Cell::new(true));
/// let flag = Rc::clone(&shown);
/// let toast = ToastConfig::new("xmark.circle", "Saved", "", Color::Green, "xmark")
///     .anchor(ToastAnchor::Bottom)
///     .animation_anchor(ToastAnchor::Bottom)
///     .on_action(move || flag.set(false));
///
/// toast.trigger_action();
/// assert!(!shown.get());
/// ```
#[derive(Clone)]
pub struct ToastConfig {
	/// Symbolic name of the leading icon.
	pub icon: String,
	/// Bold first line.
	pub title: String,
	/// Second line; empty means no second line.
	pub subtitle: String,
	/// Accent color for the icon, the accent bar and the background wash.
	pub tint: Color,
	/// Edge of the host the toast is stacked against.
	pub anchor: ToastAnchor,
	/// Edge the slide animation starts from.
	pub animation_anchor: ToastAnchor,
	/// Symbolic name of the trailing action glyph.
	pub action_icon: String,
	action: ActionHandler,
}

impl ToastConfig {
	/// Creates a config anchored and animating from the top, with a no-op action.
	pub fn new(
		icon: impl Into<String>,
		title: impl Into<String>,
		subtitle: impl Into<String>,
		tint: Color,
		action_icon: impl Into<String>,
	) -> Self {
		Self {
			icon: icon.into(),
			title: title.into(),
			subtitle: subtitle.into(),
			tint,
			anchor: ToastAnchor::default(),
			animation_anchor: ToastAnchor::default(),
			action_icon: action_icon.into(),
			action: Rc::new(|| {}),
		}
	}

	/// Sets the edge the toast is stacked against.
	#[must_use]
	pub fn anchor(mut self, anchor: ToastAnchor) -> Self {
		self.anchor = anchor;
		self
	}

	/// Sets the edge the slide animation starts from.
	#[must_use]
	pub fn animation_anchor(mut self, anchor: ToastAnchor) -> Self {
		self.animation_anchor = anchor;
		self
	}

	/// Sets the callback run when the action glyph is activated.
	#[must_use]
	pub fn on_action(mut self, handler: impl Fn() + 'static) -> Self {
		self.action = Rc::new(handler);
		self
	}

	/// Runs the action callback once.
	pub fn trigger_action(&self) {
		tracing::debug!(title = %self.title, "toast action");
		(self.action)();
	}

	/// Whether the subtitle row is rendered.
	pub fn has_subtitle(&self) -> bool {
		!self.subtitle.is_empty()
	}
}

impl fmt::Debug for ToastConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ToastConfig")
			.field("icon", &self.icon)
			.field("title", &self.title)
			.field("subtitle", &self.subtitle)
			.field("tint", &self.tint)
			.field("anchor", &self.anchor)
			.field("animation_anchor", &self.animation_anchor)
			.field("action_icon", &self.action_icon)
			.finish_non_exhaustive()
	}
}
