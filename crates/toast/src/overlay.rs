//! Attaching a toast to any widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Widget;

use crate::compositing::CompositingGroup;
use crate::config::{ToastAnchor, ToastConfig};
use crate::presence::ToastPresence;
use crate::transition::ToastVisual;
use crate::view::{ToastStyle, ToastView};

/// Rows between the toast and the host, also added to the slide distance.
pub const DEFAULT_SPACING: u16 = 1;

/// One element of the overlay's vertical stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackItem {
	/// The wrapped widget.
	Host,
	/// The toast card.
	Toast,
}

/// Top-to-bottom order of the stack.
///
/// A top toast comes before the host, a bottom toast after it. An unmounted
/// toast takes no slot.
pub fn stack_order(anchor: ToastAnchor, mounted: bool) -> &'static [StackItem] {
	match (mounted, anchor) {
		(false, _) => &[StackItem::Host],
		(true, ToastAnchor::Top) => &[StackItem::Toast, StackItem::Host],
		(true, ToastAnchor::Bottom) => &[StackItem::Host, StackItem::Toast],
	}
}

/// Areas assigned to the stack's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
	/// Where the host is drawn.
	pub host: Rect,
	/// Where the toast rests, when mounted.
	pub toast: Option<Rect>,
}

/// Parameters of the vertical stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLayout {
	/// Edge the toast sits on.
	pub anchor: ToastAnchor,
	/// Horizontal placement of a host narrower than the area.
	pub alignment: Alignment,
	/// Rows between toast and host.
	pub spacing: u16,
	/// Fixed host width; `None` fills the area.
	pub host_width: Option<u16>,
}

impl StackLayout {
	/// Splits `area` between host and toast.
	///
	/// `toast_height` is `None` when no toast is mounted. The toast gets its
	/// full height when it fits, the gap comes next, the host takes the rest.
	pub fn split(&self, area: Rect, toast_height: Option<u16>) -> OverlayLayout {
		let toast_h = toast_height.map_or(0, |height| height.min(area.height));
		let gap = match toast_height {
			Some(_) => self.spacing.min(area.height - toast_h),
			None => 0,
		};
		let host_h = area.height - toast_h - gap;

		let mut host = Rect::new(area.x, area.y, area.width, host_h);
		let mut toast = None;
		let mut y = area.y;
		for (index, item) in stack_order(self.anchor, toast_height.is_some())
			.iter()
			.enumerate()
		{
			if index > 0 {
				y += gap;
			}
			match item {
				StackItem::Host => {
					host = Rect::new(area.x, y, area.width, host_h);
					y += host_h;
				}
				StackItem::Toast => {
					toast = Some(Rect::new(area.x, y, area.width, toast_h));
					y += toast_h;
				}
			}
		}

		OverlayLayout {
			host: self.align_host(host),
			toast,
		}
	}

	fn align_host(&self, row: Rect) -> Rect {
		let Some(width) = self.host_width else {
			return row;
		};
		let width = width.min(row.width);
		let slack = row.width - width;
		let x = match self.alignment {
			Alignment::Left => row.x,
			Alignment::Center => row.x + slack / 2,
			Alignment::Right => row.x + slack,
		};
		Rect::new(x, row.y, width, row.height)
	}
}

/// A host widget with a toast stacked against its top or bottom edge.
///
/// The host and the toast are each rendered into their own
/// [`CompositingGroup`]; the slide and fade apply to the toast only and are
/// clipped to the toast's slot, and nothing is drawn outside the overlay's
/// area.
///
/// ```
/// use overlay_toast::{OverlayToastExt, ToastConfig, ToastPresence};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::{Alignment, Rect};
/// use ratatui::style::Color;
/// use ratatui::text::Line;
/// use ratatui::widgets::Widget;
///
/// let mut presence = ToastPresence::default();
/// let config = ToastConfig::new("info.circle.fill", "Hello", "", Color::Blue, "xmark");
/// let mut buf = Buffer::empty(Rect::new(0, 0, 30, 8));
///
/// Line::from("content")
///     .overlay_toast(Alignment::Left, config, true, &mut presence)
///     .render(buf.area, &mut buf);
/// assert!(presence.is_mounted());
/// ```
#[derive(Debug)]
pub struct OverlayToast<'a, W> {
	host: W,
	config: ToastConfig,
	is_presented: bool,
	presence: &'a mut ToastPresence,
	style: ToastStyle,
	layout: StackLayout,
}

impl<'a, W: Widget> OverlayToast<'a, W> {
	/// Wraps `host` with the toast described by `config`.
	///
	/// `alignment` places the host horizontally once it has a fixed width
	/// (see [`host_width`](Self::host_width)); a host filling the whole
	/// width is unaffected by it.
	pub fn new(
		host: W,
		alignment: Alignment,
		config: ToastConfig,
		is_presented: bool,
		presence: &'a mut ToastPresence,
	) -> Self {
		let layout = StackLayout {
			anchor: config.anchor,
			alignment,
			spacing: DEFAULT_SPACING,
			host_width: None,
		};
		Self {
			host,
			config,
			is_presented,
			presence,
			style: ToastStyle::default(),
			layout,
		}
	}

	/// Sets the card style.
	#[must_use]
	pub fn style(mut self, style: ToastStyle) -> Self {
		self.style = style;
		self
	}

	/// Sets the rows between toast and host.
	#[must_use]
	pub fn spacing(mut self, spacing: u16) -> Self {
		self.layout.spacing = spacing;
		self
	}

	/// Gives the host a fixed width, placed by the alignment.
	#[must_use]
	pub fn host_width(mut self, width: u16) -> Self {
		self.layout.host_width = Some(width);
		self
	}
}

impl<W: Widget> Widget for OverlayToast<'_, W> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		let Self {
			host,
			config,
			is_presented,
			presence,
			style,
			layout,
		} = self;

		presence.sync(is_presented);
		let area = area.intersection(buf.area);

		let view = ToastView::new(&config).style(style);
		let toast_height = presence.is_mounted().then(|| view.height());
		let slots = layout.split(area, toast_height);

		CompositingGroup::render_on(host, slots.host, buf).composite(buf, slots.host, 0, 1.0);

		let action = match slots.toast {
			Some(slot) => {
				presence.record_height(slot.height);
				let visual = presence.visual(config.animation_anchor, layout.spacing);
				CompositingGroup::render(view, slot).composite(
					buf,
					slot,
					visual.offset_rows(),
					visual.opacity,
				);
				drawn_action_area(view.action_area(slot), slot, visual)
			}
			None => None,
		};

		presence.record_layout(slots.host, action);
	}
}

/// Where the action glyph lands on screen this frame.
///
/// Follows the slide offset and the slot's clipping. An invisible or fully
/// clipped glyph has no area.
fn drawn_action_area(resting: Option<Rect>, slot: Rect, visual: ToastVisual) -> Option<Rect> {
	if visual.opacity <= 0.0 {
		return None;
	}
	let resting = resting?;
	let y = u16::try_from(i32::from(resting.y) + visual.offset_rows()).ok()?;
	let drawn = Rect { y, ..resting }.intersection(slot);
	(!drawn.is_empty()).then_some(drawn)
}

/// Adds [`overlay_toast`](OverlayToastExt::overlay_toast) to every widget.
pub trait OverlayToastExt: Widget + Sized {
	/// Stacks a toast against this widget, shown while `is_presented` is true.
	///
	/// `presence` keeps the animation state between frames and must belong to
	/// this toast alone.
	fn overlay_toast(
		self,
		alignment: Alignment,
		config: ToastConfig,
		is_presented: bool,
		presence: &mut ToastPresence,
	) -> OverlayToast<'_, Self> {
		OverlayToast::new(self, alignment, config, is_presented, presence)
	}
}

impl<W: Widget> OverlayToastExt for W {}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use pretty_assertions::assert_eq;
	use ratatui::layout::Position;
	use ratatui::style::Color;
	use ratatui::text::Line;
	use rstest::rstest;

	use super::*;
	use crate::animation::Easing;
	use crate::presence::PresenceState;

	const DURATION: Duration = Duration::from_millis(200);

	fn error_toast(anchor: ToastAnchor) -> ToastConfig {
		ToastConfig::new(
			"exclamationmark.circle.fill",
			"Incorrect password :(",
			"Oops! That didn't match.",
			Color::Red,
			"xmark",
		)
		.anchor(anchor)
		.animation_anchor(anchor)
	}

	fn success_toast(anchor: ToastAnchor) -> ToastConfig {
		ToastConfig::new("checkmark.circle.fill", "Sent!", "", Color::Green, "xmark")
			.anchor(anchor)
			.animation_anchor(anchor)
	}

	fn presence() -> ToastPresence {
		ToastPresence::new(DURATION, Easing::Linear)
	}

	fn row(buf: &Buffer, y: u16) -> String {
		(buf.area.left()..buf.area.right())
			.map(|x| buf[(x, y)].symbol())
			.collect()
	}

	fn draw(config: ToastConfig, shown: bool, presence: &mut ToastPresence) -> Buffer {
		let mut buf = Buffer::empty(Rect::new(0, 0, 30, 10));
		let area = buf.area;
		Line::from("host")
			.overlay_toast(Alignment::Left, config, shown, presence)
			.render(area, &mut buf);
		buf
	}

	#[rstest]
	#[case(ToastAnchor::Top, false, &[StackItem::Host])]
	#[case(ToastAnchor::Bottom, false, &[StackItem::Host])]
	#[case(ToastAnchor::Top, true, &[StackItem::Toast, StackItem::Host])]
	#[case(ToastAnchor::Bottom, true, &[StackItem::Host, StackItem::Toast])]
	fn orders_stack(
		#[case] anchor: ToastAnchor,
		#[case] mounted: bool,
		#[case] expected: &[StackItem],
	) {
		assert_eq!(stack_order(anchor, mounted), expected);
	}

	#[test]
	fn split_top_puts_toast_first() {
		let layout = StackLayout {
			anchor: ToastAnchor::Top,
			alignment: Alignment::Left,
			spacing: 1,
			host_width: None,
		};
		assert_eq!(
			layout.split(Rect::new(0, 0, 30, 10), Some(4)),
			OverlayLayout {
				toast: Some(Rect::new(0, 0, 30, 4)),
				host: Rect::new(0, 5, 30, 5),
			}
		);
	}

	#[test]
	fn split_bottom_puts_toast_last() {
		let layout = StackLayout {
			anchor: ToastAnchor::Bottom,
			alignment: Alignment::Left,
			spacing: 1,
			host_width: None,
		};
		assert_eq!(
			layout.split(Rect::new(2, 1, 30, 10), Some(3)),
			OverlayLayout {
				host: Rect::new(2, 1, 30, 6),
				toast: Some(Rect::new(2, 8, 30, 3)),
			}
		);
	}

	#[rstest]
	#[case(ToastAnchor::Top)]
	#[case(ToastAnchor::Bottom)]
	fn split_places_slots_in_stack_order(#[case] anchor: ToastAnchor) {
		let layout = StackLayout {
			anchor,
			alignment: Alignment::Left,
			spacing: 1,
			host_width: None,
		};
		let slots = layout.split(Rect::new(0, 0, 30, 10), Some(3));
		let toast = slots.toast.unwrap();

		let mut by_row = [(StackItem::Host, slots.host.y), (StackItem::Toast, toast.y)];
		by_row.sort_by_key(|(_, y)| *y);
		let order: Vec<StackItem> = by_row.iter().map(|(item, _)| *item).collect();
		assert_eq!(order, stack_order(anchor, true));
	}

	#[test]
	fn split_without_toast_gives_host_everything() {
		let layout = StackLayout {
			anchor: ToastAnchor::Top,
			alignment: Alignment::Left,
			spacing: 1,
			host_width: None,
		};
		let area = Rect::new(0, 0, 30, 10);
		assert_eq!(
			layout.split(area, None),
			OverlayLayout {
				host: area,
				toast: None
			}
		);
	}

	#[test]
	fn split_in_tiny_area_never_overflows() {
		let layout = StackLayout {
			anchor: ToastAnchor::Bottom,
			alignment: Alignment::Left,
			spacing: 1,
			host_width: None,
		};
		let slots = layout.split(Rect::new(0, 0, 10, 2), Some(4));
		assert_eq!(slots.toast, Some(Rect::new(0, 0, 10, 2)));
		assert_eq!(slots.host.height, 0);
	}

	#[rstest]
	#[case(Alignment::Left, 0)]
	#[case(Alignment::Center, 10)]
	#[case(Alignment::Right, 20)]
	fn aligns_fixed_width_host(#[case] alignment: Alignment, #[case] x: u16) {
		let layout = StackLayout {
			anchor: ToastAnchor::Top,
			alignment,
			spacing: 1,
			host_width: Some(10),
		};
		let slots = layout.split(Rect::new(0, 0, 30, 10), Some(3));
		assert_eq!(slots.host, Rect::new(x, 4, 10, 6));
	}

	#[test]
	fn hidden_toast_leaves_host_alone() {
		let mut presence = presence();
		let buf = draw(error_toast(ToastAnchor::Top), false, &mut presence);
		assert!(row(&buf, 0).starts_with("host"));
		assert_eq!(presence.state(), PresenceState::Idle);
		assert_eq!(presence.host_area(), Some(buf.area));
	}

	#[test]
	fn rendering_presented_flag_starts_appearing() {
		let mut presence = presence();
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);
		assert_eq!(presence.state(), PresenceState::Appearing);
		assert_eq!(presence.measured_height(), Some(4));
		// Slot is reserved immediately, contents still fully transparent.
		assert!(row(&buf, 5).starts_with("host"));
		for y in 0..4 {
			assert_eq!(row(&buf, y).trim(), "", "row {y}");
		}
	}

	#[test]
	fn top_toast_rests_above_host() {
		let mut presence = presence();
		draw(error_toast(ToastAnchor::Top), true, &mut presence);
		presence.tick(DURATION);
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);

		assert_eq!(presence.state(), PresenceState::Visible);
		assert!(row(&buf, 1).contains("Incorrect password :("));
		assert!(row(&buf, 2).contains("Oops!"));
		assert_eq!(row(&buf, 4).trim(), "");
		assert!(row(&buf, 5).starts_with("host"));
	}

	#[test]
	fn bottom_toast_rests_below_host() {
		let mut presence = presence();
		draw(success_toast(ToastAnchor::Bottom), true, &mut presence);
		presence.tick(DURATION);
		let buf = draw(success_toast(ToastAnchor::Bottom), true, &mut presence);

		assert!(row(&buf, 0).starts_with("host"));
		assert!(row(&buf, 8).contains("Sent!"));
		assert_eq!(presence.host_area(), Some(Rect::new(0, 0, 30, 6)));
	}

	#[test]
	fn mid_transition_slides_from_anchor_edge() {
		let mut presence = presence();
		draw(error_toast(ToastAnchor::Top), true, &mut presence);
		presence.tick(Duration::from_millis(150));
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);

		// Phase 0.75 of a 4-row toast with 1 row of spacing: 1.25 rows up.
		assert!(row(&buf, 0).contains("Incorrect password :("));
		assert!(row(&buf, 1).contains("Oops!"));
		assert!(row(&buf, 5).starts_with("host"));
	}

	#[test]
	fn divergent_animation_anchor_stays_in_its_slot() {
		let config = error_toast(ToastAnchor::Top).animation_anchor(ToastAnchor::Bottom);
		let mut presence = presence();
		draw(config.clone(), true, &mut presence);
		presence.tick(Duration::from_millis(150));
		let buf = draw(config, true, &mut presence);

		// Slides up from below, clipped to the slot; host untouched.
		assert!(row(&buf, 2).contains("Incorrect password :("));
		assert_eq!(row(&buf, 4).trim(), "");
		assert!(row(&buf, 5).starts_with("host"));
	}

	#[test]
	fn exit_then_unmount() {
		let mut presence = presence();
		draw(success_toast(ToastAnchor::Top), true, &mut presence);
		presence.tick(DURATION);
		draw(success_toast(ToastAnchor::Top), false, &mut presence);
		assert_eq!(presence.state(), PresenceState::Disappearing);
		assert_eq!(presence.action_area(), None);

		presence.tick(DURATION);
		let buf = draw(success_toast(ToastAnchor::Top), false, &mut presence);
		assert_eq!(presence.state(), PresenceState::Idle);
		assert!(row(&buf, 0).starts_with("host"));
	}

	#[test]
	fn records_action_area_for_hit_testing() {
		let mut presence = presence();
		draw(error_toast(ToastAnchor::Top), true, &mut presence);
		presence.tick(DURATION);
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);

		assert_eq!(presence.action_area(), Some(Rect::new(27, 1, 1, 1)));
		assert_eq!(buf[(27, 1)].symbol(), "✕");
		assert!(presence.hits_action(Position::new(27, 1)));
	}

	#[test]
	fn transparent_toast_has_no_action_area() {
		let mut presence = presence();
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);

		assert_eq!(presence.phase(), 0.0);
		assert_eq!(buf[(27, 1)].symbol(), " ");
		assert_eq!(presence.action_area(), None);
		assert!(!presence.hits_action(Position::new(27, 1)));
	}

	#[test]
	fn action_area_follows_the_slide() {
		let mut presence = presence();
		draw(error_toast(ToastAnchor::Top), true, &mut presence);
		presence.tick(Duration::from_millis(150));
		let buf = draw(error_toast(ToastAnchor::Top), true, &mut presence);

		// One row up from rest, where the glyph is actually drawn.
		assert_eq!(presence.action_area(), Some(Rect::new(27, 0, 1, 1)));
		assert_eq!(buf[(27, 0)].symbol(), "✕");
		assert!(!presence.hits_action(Position::new(27, 1)));
	}

	#[test]
	fn action_clipped_out_of_the_slot_has_no_area() {
		let mut presence = presence();
		draw(error_toast(ToastAnchor::Top), true, &mut presence);
		// Phase 0.5: 2.5 rows up rounds to 3, pushing the title row above the slot.
		presence.tick(Duration::from_millis(100));
		draw(error_toast(ToastAnchor::Top), true, &mut presence);

		assert_eq!(presence.action_area(), None);
	}

	#[test]
	fn nested_overlays_stack_outer_toast_first() {
		let mut inner = presence();
		let mut outer = presence();
		let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
		let area = buf.area;

		for _ in 0..2 {
			Line::from("host")
				.overlay_toast(Alignment::Left, error_toast(ToastAnchor::Top), true, &mut inner)
				.overlay_toast(Alignment::Left, success_toast(ToastAnchor::Top), true, &mut outer)
				.render(area, &mut buf);
			inner.tick(DURATION);
			outer.tick(DURATION);
		}

		assert!(row(&buf, 1).contains("Sent!"));
		assert!(row(&buf, 5).contains("Incorrect password :("));
		assert!(row(&buf, 9).starts_with("host"));
		assert_eq!(outer.host_area(), Some(Rect::new(0, 4, 30, 8)));
		assert_eq!(inner.host_area(), Some(Rect::new(0, 9, 30, 3)));
	}

	#[test]
	fn draws_nothing_outside_its_area() {
		let mut presence = presence();
		let mut buf = Buffer::empty(Rect::new(0, 0, 30, 12));
		let area = Rect::new(0, 4, 30, 6);
		for _ in 0..3 {
			Line::from("host")
				.overlay_toast(Alignment::Left, error_toast(ToastAnchor::Top), true, &mut presence)
				.render(area, &mut buf);
			presence.tick(Duration::from_millis(60));
		}
		for y in (0..4).chain(10..12) {
			assert_eq!(row(&buf, y).trim(), "", "row {y}");
		}
	}
}
