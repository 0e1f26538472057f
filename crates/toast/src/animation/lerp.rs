//! The [`Animatable`] trait for types that support interpolation.

use ratatui::style::Color;

/// A type that can be linearly interpolated.
///
/// # Example
///
/// ```
/// use overlay_toast::animation::Animatable;
///
/// assert_eq!(0.0f32.lerp(&100.0, 0.5), 50.0);
/// ```
pub trait Animatable: Clone {
	/// Linearly interpolate between `self` and `target`.
	///
	/// `t = 0.0` returns `self`, `t = 1.0` returns `target`. Implementations
	/// clamp `t` to `[0.0, 1.0]`.
	fn lerp(&self, target: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		self + (target - self) * t
	}
}

impl Animatable for u8 {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		let t = t.clamp(0.0, 1.0);
		let result = *self as f32 + (*target as f32 - *self as f32) * t;
		result.round() as u8
	}
}

/// RGB color tuple (r, g, b).
impl Animatable for (u8, u8, u8) {
	#[inline]
	fn lerp(&self, target: &Self, t: f32) -> Self {
		(self.0.lerp(&target.0, t), self.1.lerp(&target.1, t), self.2.lerp(&target.2, t))
	}
}

/// Blends in RGB space when both ends have an RGB value.
///
/// `Reset` and indexed colors have no fixed RGB value; those snap from
/// `self` to `target` at the midpoint.
impl Animatable for Color {
	fn lerp(&self, target: &Self, t: f32) -> Self {
		match (rgb(*self), rgb(*target)) {
			(Some(from), Some(to)) => {
				let (r, g, b) = from.lerp(&to, t);
				Color::Rgb(r, g, b)
			}
			_ if t < 0.5 => *self,
			_ => *target,
		}
	}
}

/// RGB approximation of a terminal color, using the xterm default palette.
pub fn rgb(color: Color) -> Option<(u8, u8, u8)> {
	Some(match color {
		Color::Rgb(r, g, b) => (r, g, b),
		Color::Black => (0, 0, 0),
		Color::Red => (205, 0, 0),
		Color::Green => (0, 205, 0),
		Color::Yellow => (205, 205, 0),
		Color::Blue => (0, 0, 238),
		Color::Magenta => (205, 0, 205),
		Color::Cyan => (0, 205, 205),
		Color::Gray => (229, 229, 229),
		Color::DarkGray => (127, 127, 127),
		Color::LightRed => (255, 0, 0),
		Color::LightGreen => (0, 255, 0),
		Color::LightYellow => (255, 255, 0),
		Color::LightBlue => (92, 92, 255),
		Color::LightMagenta => (255, 0, 255),
		Color::LightCyan => (0, 255, 255),
		Color::White => (255, 255, 255),
		Color::Reset | Color::Indexed(_) => return None,
	})
}
