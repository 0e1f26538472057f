//! Per-toast animation state kept by the caller next to its presentation flag.

use std::time::Duration;

use ratatui::layout::{Position, Rect};

use crate::animation::{Easing, ToggleTween};
use crate::config::ToastAnchor;
use crate::transition::{ToastVisual, toast_transition};

/// Default length of one show or hide animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(350);

/// Where a toast is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceState {
	/// Hidden and not mounted.
	#[default]
	Idle,
	/// Animating toward fully shown.
	Appearing,
	/// Fully shown and at rest.
	Visible,
	/// Animating toward hidden; still mounted.
	Disappearing,
}

/// Animation state for one toast.
///
/// Holds the transition phase, the toast's last measured height and the areas
/// laid out on the last render. The overlay syncs it with the presentation
/// flag on every render; the owner advances it with [`tick`](Self::tick).
#[derive(Debug, Clone)]
pub struct ToastPresence {
	phase: ToggleTween<f32>,
	measured_height: Option<u16>,
	host_area: Option<Rect>,
	action_area: Option<Rect>,
}

impl Default for ToastPresence {
	fn default() -> Self {
		Self::new(DEFAULT_DURATION, Easing::default())
	}
}

impl ToastPresence {
	/// Creates an idle presence with the given animation curve.
	pub fn new(duration: Duration, easing: Easing) -> Self {
		Self {
			phase: ToggleTween::new(0.0, 1.0, duration).with_easing(easing),
			measured_height: None,
			host_area: None,
			action_area: None,
		}
	}

	/// Follows the presentation flag. Returns true when an animation started.
	///
	/// A change mid-animation reverses from the current phase.
	pub fn sync(&mut self, is_presented: bool) -> bool {
		let changed = self.phase.set_active(is_presented);
		if changed {
			tracing::trace!(is_presented, phase = self.phase(), "toast transition started");
			if !is_presented {
				self.action_area = None;
			}
		}
		changed
	}

	/// Advances the running animation by `delta`.
	pub fn tick(&mut self, delta: Duration) {
		if self.phase.is_complete() {
			return;
		}
		self.phase.advance(delta);
		if self.phase.is_complete() {
			tracing::trace!(state = ?self.state(), "toast transition finished");
		}
	}

	/// Transition phase: 0.0 hidden, 1.0 at rest.
	pub fn phase(&self) -> f32 {
		self.phase.value()
	}

	/// Where the toast is in its cycle.
	pub fn state(&self) -> PresenceState {
		match (self.phase.is_active(), self.phase.is_complete()) {
			(true, true) => PresenceState::Visible,
			(true, false) => PresenceState::Appearing,
			(false, false) => PresenceState::Disappearing,
			(false, true) => PresenceState::Idle,
		}
	}

	/// Whether the toast occupies a slot in the stack.
	pub fn is_mounted(&self) -> bool {
		self.state() != PresenceState::Idle
	}

	/// Whether an animation is running and frames should keep coming.
	pub fn is_animating(&self) -> bool {
		matches!(
			self.state(),
			PresenceState::Appearing | PresenceState::Disappearing
		)
	}

	/// Records the toast's height after layout.
	pub fn record_height(&mut self, height: u16) {
		self.measured_height = Some(height);
	}

	/// Last recorded toast height; `None` before the first layout.
	pub fn measured_height(&self) -> Option<u16> {
		self.measured_height
	}

	/// Opacity and offset for the current phase.
	pub fn visual(&self, animation_anchor: ToastAnchor, spacing: u16) -> ToastVisual {
		toast_transition(self.phase(), animation_anchor, self.measured_height, spacing)
	}

	/// Area the host content was drawn in on the last render.
	pub fn host_area(&self) -> Option<Rect> {
		self.host_area
	}

	/// Area of the action glyph on the last render, while presented.
	pub fn action_area(&self) -> Option<Rect> {
		self.action_area
	}

	/// Whether `position` falls on the action glyph.
	pub fn hits_action(&self, position: Position) -> bool {
		self.action_area.is_some_and(|area| area.contains(position))
	}

	pub(crate) fn record_layout(&mut self, host: Rect, action: Option<Rect>) {
		self.host_area = Some(host);
		self.action_area = if self.phase.is_active() { action } else { None };
	}
}
