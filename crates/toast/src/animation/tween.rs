//! Frame-driven tweens.
//!
//! Nothing here reads a clock. Owners feed in the elapsed time of each
//! frame, so a given sequence of frames always yields the same values.

use std::time::Duration;

use crate::animation::easing::Easing;
use crate::animation::lerp::Animatable;

/// Moves a value from `start` to `end` over a fixed duration.
///
/// ```
/// use std::time::Duration;
/// use overlay_toast::animation::{Easing, Tween};
///
/// let mut tween = Tween::new(0.0f32, 100.0f32, Duration::from_millis(500))
///     .with_easing(Easing::Linear);
/// tween.advance(Duration::from_millis(250));
/// assert_eq!(tween.value(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tween<T: Animatable> {
	start: T,
	end: T,
	elapsed: Duration,
	duration: Duration,
	easing: Easing,
}

impl<T: Animatable> Tween<T> {
	/// A linear tween sitting at `start`.
	pub fn new(start: T, end: T, duration: Duration) -> Self {
		Self {
			start,
			end,
			elapsed: Duration::ZERO,
			duration,
			easing: Easing::Linear,
		}
	}

	#[must_use]
	pub fn with_easing(mut self, easing: Easing) -> Self {
		self.easing = easing;
		self
	}

	/// Adds `delta` to the elapsed time, stopping at the duration.
	pub fn advance(&mut self, delta: Duration) {
		self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
	}

	/// Elapsed fraction of the duration. A zero duration is always done.
	pub fn progress(&self) -> f32 {
		if self.duration.is_zero() {
			1.0
		} else {
			(self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
		}
	}

	pub fn value(&self) -> T {
		self.start.lerp(&self.end, self.easing.apply(self.progress()))
	}

	pub fn is_complete(&self) -> bool {
		self.elapsed >= self.duration
	}

	/// Heads for `end` from wherever the value is now, over a full duration.
	pub fn retarget(&mut self, end: T) {
		self.start = self.value();
		self.end = end;
		self.elapsed = Duration::ZERO;
	}

	fn finish(&mut self) {
		self.elapsed = self.duration;
	}
}

/// A tween that runs toward `on` while active and back to `off` otherwise.
///
/// ```
/// use std::time::Duration;
/// use overlay_toast::animation::ToggleTween;
///
/// let mut toggle = ToggleTween::new(0.0f32, 1.0f32, Duration::from_millis(200));
/// toggle.set_active(true);
/// toggle.advance(Duration::from_millis(200));
/// assert_eq!(toggle.value(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ToggleTween<T: Animatable> {
	tween: Tween<T>,
	active: bool,
	off: T,
	on: T,
}

impl<T: Animatable> ToggleTween<T> {
	/// Inactive, resting at `off`.
	pub fn new(off: T, on: T, duration: Duration) -> Self {
		let mut tween = Tween::new(off.clone(), off.clone(), duration);
		tween.finish();
		Self {
			tween,
			active: false,
			off,
			on,
		}
	}

	#[must_use]
	pub fn with_easing(mut self, easing: Easing) -> Self {
		self.tween.easing = easing;
		self
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Switches direction. Returns false when `active` is already the state.
	pub fn set_active(&mut self, active: bool) -> bool {
		if self.active == active {
			return false;
		}
		self.active = active;
		let target = if active { &self.on } else { &self.off };
		self.tween.retarget(target.clone());
		true
	}

	pub fn advance(&mut self, delta: Duration) {
		self.tween.advance(delta);
	}

	pub fn value(&self) -> T {
		self.tween.value()
	}

	pub fn is_complete(&self) -> bool {
		self.tween.is_complete()
	}
}
