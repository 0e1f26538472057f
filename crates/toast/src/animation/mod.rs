//! Animation primitives for smooth transitions.
//!
//! Provides the [`Animatable`] trait for types that can be interpolated,
//! [`Easing`] functions for animation curves, and frame-driven [`Tween`]s.

mod easing;
mod lerp;
mod tween;

pub use easing::{Easing, UnknownEasing};
pub use lerp::{Animatable, rgb};
pub use tween::{ToggleTween, Tween};
