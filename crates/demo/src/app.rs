//! Demo state, input handling and the frame loop.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use overlay_toast::{OverlayToastExt, ToastAnchor, ToastConfig, ToastPresence};
use ratatui::crossterm::event::{
	self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
	MouseEventKind,
};
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Position};
use ratatui::style::{Color, Stylize};
use ratatui::text::Line;
use ratatui::{DefaultTerminal, Frame};

use crate::config::DemoConfig;
use crate::screen::{ExampleScreen, SCREEN_WIDTH, ScreenLayout, ScreenTarget};

const IDLE_POLL: Duration = Duration::from_millis(250);
const TITLE: &str = "Overlay Toast Example";
const HINTS: &str = "1 error  2 success  t/b anchor  x dismiss  q quit";

/// The example screen with an error toast and a success toast.
pub struct App {
	config: DemoConfig,
	anchor: ToastAnchor,
	show_error: Rc<Cell<bool>>,
	show_success: Rc<Cell<bool>>,
	error_presence: ToastPresence,
	success_presence: ToastPresence,
	should_quit: bool,
}

impl App {
	pub fn new(config: DemoConfig) -> Self {
		let presence = ToastPresence::new(config.animation, config.easing);
		Self {
			anchor: config.anchor,
			show_error: Rc::new(Cell::new(false)),
			show_success: Rc::new(Cell::new(false)),
			error_presence: presence.clone(),
			success_presence: presence,
			should_quit: false,
			config,
		}
	}

	pub fn anchor(&self) -> ToastAnchor {
		self.anchor
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Whether a toast is mid-transition.
	pub fn is_animating(&self) -> bool {
		self.error_presence.is_animating() || self.success_presence.is_animating()
	}

	/// How long to wait for input before the next frame.
	pub fn poll_timeout(&self) -> Duration {
		if self.is_animating() {
			self.config.frame_interval
		} else {
			IDLE_POLL
		}
	}

	/// The error toast as it looks right now.
	pub fn error_toast(&self) -> ToastConfig {
		let flag = Rc::clone(&self.show_error);
		ToastConfig::new(
			"exclamationmark.circle.fill",
			"Incorrect password :(",
			"Oops! That didn\u{2019}t match. Give it another shot.",
			Color::Red,
			"xmark",
		)
		.anchor(self.anchor)
		.animation_anchor(self.anchor)
		.on_action(move || flag.set(false))
	}

	/// The success toast as it looks right now.
	pub fn success_toast(&self) -> ToastConfig {
		let flag = Rc::clone(&self.show_success);
		ToastConfig::new(
			"checkmark.circle.fill",
			"Password Reset Email Sent!",
			"",
			Color::Green,
			"xmark",
		)
		.anchor(self.anchor)
		.animation_anchor(self.anchor)
		.on_action(move || flag.set(false))
	}

	pub fn toggle_error(&mut self) {
		toggle(&self.show_error);
		tracing::debug!(shown = self.show_error.get(), "error toast toggled");
	}

	pub fn toggle_success(&mut self) {
		toggle(&self.show_success);
		tracing::debug!(shown = self.show_success.get(), "success toast toggled");
	}

	pub fn set_anchor(&mut self, anchor: ToastAnchor) {
		if self.anchor != anchor {
			tracing::debug!(?anchor, "toast anchor changed");
			self.anchor = anchor;
		}
	}

	/// Runs the action of every presented toast.
	pub fn dismiss_presented(&mut self) {
		if self.show_error.get() {
			self.error_toast().trigger_action();
		}
		if self.show_success.get() {
			self.success_toast().trigger_action();
		}
	}

	pub fn handle_event(&mut self, event: &Event) {
		match event {
			Event::Key(key) => self.handle_key(*key),
			Event::Mouse(mouse) => self.handle_mouse(*mouse),
			_ => {}
		}
	}

	pub fn handle_key(&mut self, key: KeyEvent) {
		if key.kind != KeyEventKind::Press {
			return;
		}
		match key.code {
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.should_quit = true;
			}
			KeyCode::Char('q') => self.should_quit = true,
			KeyCode::Char('1' | 'e') => self.toggle_error(),
			KeyCode::Char('2' | 's') => self.toggle_success(),
			KeyCode::Char('t') => self.set_anchor(ToastAnchor::Top),
			KeyCode::Char('b') => self.set_anchor(ToastAnchor::Bottom),
			KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
				self.set_anchor(self.anchor.flipped());
			}
			KeyCode::Char('x') | KeyCode::Esc => self.dismiss_presented(),
			_ => {}
		}
	}

	/// Left clicks on toast actions, buttons and the anchor picker.
	///
	/// Uses the areas recorded on the last render; the outer success toast
	/// is drawn last and so is tested first.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return;
		}
		let position = Position::new(mouse.column, mouse.row);

		if self.success_presence.hits_action(position) {
			self.success_toast().trigger_action();
			return;
		}
		if self.error_presence.hits_action(position) {
			self.error_toast().trigger_action();
			return;
		}

		let Some(screen) = self.error_presence.host_area() else {
			return;
		};
		match ScreenLayout::new(screen).hit(position) {
			Some(ScreenTarget::ErrorButton) => self.toggle_error(),
			Some(ScreenTarget::SuccessButton) => self.toggle_success(),
			Some(ScreenTarget::Anchor(anchor)) => self.set_anchor(anchor),
			None => {}
		}
	}

	/// Advances both toast animations.
	pub fn tick(&mut self, delta: Duration) {
		self.error_presence.tick(delta);
		self.success_presence.tick(delta);
	}

	pub fn render(&mut self, frame: &mut Frame) {
		let [title, body, hints] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Fill(1),
			Constraint::Length(1),
		])
		.areas(frame.area());

		frame.render_widget(Line::from(TITLE).bold().centered(), title);
		frame.render_widget(Line::from(HINTS).dark_gray().centered(), hints);

		let error = self.error_toast();
		let success = self.success_toast();
		let style = self.config.style;
		let spacing = self.config.spacing;

		let content = ExampleScreen::new(self.anchor)
			.overlay_toast(
				Alignment::Center,
				error,
				self.show_error.get(),
				&mut self.error_presence,
			)
			.host_width(SCREEN_WIDTH)
			.style(style)
			.spacing(spacing)
			.overlay_toast(
				Alignment::Center,
				success,
				self.show_success.get(),
				&mut self.success_presence,
			)
			.style(style)
			.spacing(spacing);
		frame.render_widget(content, body.inner(Margin::new(2, 0)));
	}
}

fn toggle(flag: &Cell<bool>) {
	flag.set(!flag.get());
}

/// Draws and handles input until the user quits.
pub fn run(terminal: &mut DefaultTerminal, mut app: App) -> anyhow::Result<()> {
	let mut last_frame = Instant::now();
	while !app.should_quit() {
		terminal.draw(|frame| app.render(frame))?;

		if event::poll(app.poll_timeout())? {
			app.handle_event(&event::read()?);
		}

		let now = Instant::now();
		app.tick(now.duration_since(last_frame));
		last_frame = now;
	}
	tracing::info!(anchor = ?app.anchor(), "quit");
	Ok(())
}
