//! Slide and fade transition of a toast.

use crate::animation::Animatable;
use crate::config::ToastAnchor;

/// Visual state of a toast at one point of its transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastVisual {
	/// 0.0 is invisible, 1.0 fully drawn.
	pub opacity: f32,
	/// Vertical displacement from the resting position, in rows. Negative is up.
	pub offset_y: f32,
}

impl ToastVisual {
	/// Resting, fully visible.
	pub const IDENTITY: Self = Self {
		opacity: 1.0,
		offset_y: 0.0,
	};

	/// Offset rounded to whole rows.
	pub fn offset_rows(&self) -> i32 {
		self.offset_y.round() as i32
	}
}

/// Computes the toast's look at `phase`.
///
/// `phase` runs from 0.0 (hidden) to 1.0 (resting); values outside are
/// clamped. Opacity follows the phase. The offset shrinks from the full slide
/// distance to zero, where the slide distance is the toast's measured height
/// plus `spacing`, upward for [`ToastAnchor::Top`] and downward for
/// [`ToastAnchor::Bottom`]. An unmeasured toast counts as zero rows tall.
///
/// ```
/// use overlay_toast::{ToastAnchor, toast_transition};
///
/// let hidden = toast_transition(0.0, ToastAnchor::Top, Some(4), 1);
/// assert_eq!(hidden.opacity, 0.0);
/// assert_eq!(hidden.offset_y, -5.0);
/// ```
pub fn toast_transition(
	phase: f32,
	animation_anchor: ToastAnchor,
	measured_height: Option<u16>,
	spacing: u16,
) -> ToastVisual {
	let phase = phase.clamp(0.0, 1.0);
	let distance = f32::from(measured_height.unwrap_or(0)) + f32::from(spacing);
	let hidden_offset = match animation_anchor {
		ToastAnchor::Top => -distance,
		ToastAnchor::Bottom => distance,
	};

	ToastVisual {
		opacity: 0.0f32.lerp(&1.0, phase),
		offset_y: hidden_offset.lerp(&0.0, phase),
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(ToastAnchor::Top, -15.0)]
	#[case(ToastAnchor::Bottom, 15.0)]
	fn hidden_offset_is_height_plus_spacing(#[case] anchor: ToastAnchor, #[case] expected: f32) {
		let visual = toast_transition(0.0, anchor, Some(5), 10);
		assert_eq!(visual.offset_y, expected);
		assert_eq!(visual.opacity, 0.0);
	}

	#[rstest]
	#[case(ToastAnchor::Top)]
	#[case(ToastAnchor::Bottom)]
	fn identity_rests_in_place(#[case] anchor: ToastAnchor) {
		assert_eq!(toast_transition(1.0, anchor, Some(4), 1), ToastVisual::IDENTITY);
	}

	#[test]
	fn unmeasured_toast_only_clears_spacing() {
		assert_eq!(toast_transition(0.0, ToastAnchor::Top, None, 1).offset_y, -1.0);
		assert_eq!(toast_transition(0.0, ToastAnchor::Bottom, Some(0), 0).offset_y, 0.0);
	}

	#[test]
	fn opacity_is_monotonic_in_phase() {
		let mut previous = -1.0;
		for step in 0..=20 {
			let visual = toast_transition(step as f32 / 20.0, ToastAnchor::Top, Some(4), 1);
			assert!(visual.opacity > previous);
			assert!((0.0..=1.0).contains(&visual.opacity));
			previous = visual.opacity;
		}
	}

	#[test]
	fn offset_is_linear_in_phase() {
		let visual = toast_transition(0.5, ToastAnchor::Bottom, Some(3), 1);
		assert_eq!(visual.offset_y, 2.0);
		assert_eq!(visual.opacity, 0.5);
		assert_eq!(visual.offset_rows(), 2);
	}

	#[test]
	fn phase_is_clamped() {
		assert_eq!(toast_transition(-1.0, ToastAnchor::Top, Some(2), 1).opacity, 0.0);
		assert_eq!(toast_transition(2.0, ToastAnchor::Top, Some(2), 1), ToastVisual::IDENTITY);
	}
}
