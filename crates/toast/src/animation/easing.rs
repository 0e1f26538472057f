//! Easing functions for animation curves.
//!
//! Easing functions transform linear progress (0.0 to 1.0) into curved
//! progress, creating more natural-feeling animations.

use core::fmt;
use core::str::FromStr;

/// Stiffness of the [`Easing::Smooth`] spring, in units of the animation duration.
const SMOOTH_STIFFNESS: f32 = 8.0;

/// Easing function for controlling animation curves.
///
/// Transforms linear progress `t ∈ [0.0, 1.0]` into curved progress.
///
/// # Example
///
/// ```
/// use overlay_toast::animation::Easing;
///
/// let eased = Easing::EaseOut.apply(0.5);
/// assert!(eased > 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
	/// Constant speed.
	Linear,

	/// Quadratic ease-in: `t²`
	EaseIn,

	/// Quadratic ease-out: `1 - (1-t)²`
	EaseOut,

	/// Quadratic ease-in-out.
	EaseInOut,

	/// Cubic ease-out: `1 - (1-t)³`
	EaseOutCubic,

	/// Cubic ease-in-out.
	EaseInOutCubic,

	/// Critically damped spring response, normalized to land exactly on 1.0.
	///
	/// Fast start, long gentle settle, never overshoots.
	#[default]
	Smooth,
}

impl Easing {
	/// All curves, in declaration order.
	pub const ALL: [Easing; 7] = [
		Easing::Linear,
		Easing::EaseIn,
		Easing::EaseOut,
		Easing::EaseInOut,
		Easing::EaseOutCubic,
		Easing::EaseInOutCubic,
		Easing::Smooth,
	];

	/// Apply the easing function to linear progress.
	///
	/// Input `t` is clamped to `[0.0, 1.0]`.
	#[inline]
	pub fn apply(self, t: f32) -> f32 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseIn => ease_in_quad(t),
			Easing::EaseOut => ease_out_quad(t),
			Easing::EaseInOut => ease_in_out_quad(t),
			Easing::EaseOutCubic => ease_out_cubic(t),
			Easing::EaseInOutCubic => ease_in_out_cubic(t),
			Easing::Smooth => smooth(t),
		}
	}

	/// Kebab-case name, as accepted by [`FromStr`].
	pub fn name(self) -> &'static str {
		match self {
			Easing::Linear => "linear",
			Easing::EaseIn => "ease-in",
			Easing::EaseOut => "ease-out",
			Easing::EaseInOut => "ease-in-out",
			Easing::EaseOutCubic => "ease-out-cubic",
			Easing::EaseInOutCubic => "ease-in-out-cubic",
			Easing::Smooth => "smooth",
		}
	}
}

impl fmt::Display for Easing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when parsing an unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEasing(pub String);

impl fmt::Display for UnknownEasing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown easing curve '{}'", self.0)
	}
}

impl std::error::Error for UnknownEasing {}

impl FromStr for Easing {
	type Err = UnknownEasing;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Easing::ALL
			.into_iter()
			.find(|easing| easing.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownEasing(s.to_string()))
	}
}

/// Quadratic ease-in: `t²`
#[inline]
fn ease_in_quad(t: f32) -> f32 {
	t * t
}

/// Quadratic ease-out: `1 - (1-t)²`
#[inline]
fn ease_out_quad(t: f32) -> f32 {
	1.0 - (1.0 - t).powi(2)
}

/// Quadratic ease-in-out.
#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
	if t < 0.5 {
		2.0 * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
	}
}

/// Cubic ease-out: `1 - (1-t)³`
#[inline]
fn ease_out_cubic(t: f32) -> f32 {
	1.0 - (1.0 - t).powi(3)
}

/// Cubic ease-in-out.
#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Critically damped spring: `1 - (1 + kt)·e^(-kt)`, scaled so `smooth(1) == 1`.
#[inline]
fn smooth(t: f32) -> f32 {
	spring(t) / spring(1.0)
}

#[inline]
fn spring(t: f32) -> f32 {
	let kt = SMOOTH_STIFFNESS * t;
	1.0 - (1.0 + kt) * (-kt).exp()
}
