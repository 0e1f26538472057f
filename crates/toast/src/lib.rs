//! # Overlay Toast
//!
//! A transient notification card for [ratatui](https://ratatui.rs) that sits
//! against the top or bottom edge of any widget and slides in and out from an
//! edge while fading.
//!
//! Visibility belongs to the caller: keep a `bool` and a [`ToastPresence`]
//! per toast, build a [`ToastConfig`] every frame, and wrap the content with
//! [`OverlayToastExt::overlay_toast`]. Advance the presence with the frame's
//! elapsed time so the transition runs.
//!
//! ```no_run
//! use std::time::Duration;
//! use overlay_toast::{OverlayToastExt, ToastAnchor, ToastConfig, ToastPresence};
//! use ratatui::layout::Alignment;
//! use ratatui::style::Color;
//! use ratatui::widgets::Paragraph;
//!
//! let mut terminal = ratatui::init();
//! let mut presence = ToastPresence::default();
//! let shown = true;
//!
//! terminal
//!     .draw(|frame| {
//!         let toast = ToastConfig::new(
//!             "checkmark.circle.fill",
//!             "Password Reset Email Sent!",
//!             "",
//!             Color::Green,
//!             "xmark",
//!         )
//!         .anchor(ToastAnchor::Bottom)
//!         .animation_anchor(ToastAnchor::Bottom);
//!
//!         let content = Paragraph::new("Hello");
//!         frame.render_widget(
//!             content.overlay_toast(Alignment::Center, toast, shown, &mut presence),
//!             frame.area(),
//!         );
//!     })
//!     .unwrap();
//! presence.tick(Duration::from_millis(16));
//! ratatui::restore();
//! ```

pub mod animation;
pub mod compositing;
pub mod config;
pub mod icon;
pub mod overlay;
pub mod presence;
pub mod transition;
pub mod view;

pub use compositing::CompositingGroup;
pub use config::{ActionHandler, ToastAnchor, ToastConfig};
pub use overlay::{
	DEFAULT_SPACING, OverlayLayout, OverlayToast, OverlayToastExt, StackItem, StackLayout,
	stack_order,
};
pub use presence::{DEFAULT_DURATION, PresenceState, ToastPresence};
pub use transition::{ToastVisual, toast_transition};
pub use view::{ToastStyle, ToastView};
