//! Browser runtime for the particle field.
//!
//! [`initialize`] binds a canvas to a [`ParticleField`], attaches resize and
//! pointer listeners, and drives `render_frame` from `requestAnimationFrame`.
//! Listeners and the frame callback only hold weak references to the field;
//! the running field itself is owned by a thread-local registry, so
//! [`FieldHandle::stop`] cancels the pending frame, detaches every listener and
//! drops the field on the spot.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent,
	Window,
};

use super::config::FieldConfig;
use super::lifecycle::{ListenerSet, Registry, Subscription, Teardown};
use super::render;
use super::state::FieldState;
use super::theme::Theme;

/// A canvas together with the field animated on it.
pub struct ParticleField {
	state: FieldState,
	theme: Theme,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl ParticleField {
	/// Sizes the canvas and generates the initial particle set.
	pub fn new(
		canvas: HtmlCanvasElement,
		ctx: CanvasRenderingContext2d,
		width: f64,
		height: f64,
		seed: u64,
	) -> Self {
		let theme = Theme::default();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		Self {
			state: FieldState::new(width, height, FieldConfig::default(), &theme, seed),
			theme,
			canvas,
			ctx,
		}
	}

	/// Apply new viewport dimensions and regenerate the particle set.
	pub fn handle_resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
		self.state.resize(width, height, &self.theme);
		debug!(
			"particle-swirl: resized to {}x{}, {} particles",
			width,
			height,
			self.state.particles.len()
		);
	}

	/// Record the pointer; it is applied on the next frame.
	pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
		self.state.set_pointer(x, y);
	}

	/// Forget the pointer until it moves again.
	pub fn clear_pointer(&mut self) {
		self.state.clear_pointer();
	}

	/// Update every particle and draw the frame.
	pub fn render_frame(&mut self, timestamp_ms: f64) {
		self.state.tick();
		if let Err(e) = render::render(&self.state, &self.ctx, &self.theme, timestamp_ms) {
			debug!("particle-swirl: frame dropped: {:?}", e);
		}
	}

	/// Number of particles in the current set.
	pub fn particle_count(&self) -> usize {
		self.state.particles.len()
	}
}

/// Everything a running field keeps alive.
struct RunningField {
	field: Rc<RefCell<ParticleField>>,
	listeners: ListenerSet<EventListener>,
	animate: Closure<dyn FnMut(f64)>,
	frame: Option<i32>,
}

impl Teardown for RunningField {
	fn teardown(self) {
		if let (Some(frame), Some(window)) = (self.frame, web_sys::window()) {
			let _ = window.cancel_animation_frame(frame);
		}
		info!(
			"particle-swirl: field stopped, {} listeners detached, {} particles released",
			self.listeners.len(),
			self.field.borrow().particle_count()
		);
		// Dropping `self` detaches the listeners and frees the frame callback.
	}
}

thread_local! {
	static RUNNING: Registry<RunningField> = Registry::default();
}

/// Controls a running field. Cloning shares the same loop.
#[derive(Clone, Debug)]
pub struct FieldHandle {
	id: u64,
	running: Arc<AtomicBool>,
}

impl FieldHandle {
	fn new(id: u64) -> Self {
		Self {
			id,
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	/// Stop the render loop and release the field. Safe to call more than once.
	pub fn stop(&self) {
		RUNNING.with(|registry| {
			self.stop_in(registry);
			debug!("particle-swirl: {} fields still running", registry.len());
		});
	}

	fn stop_in<T: Teardown>(&self, registry: &Registry<T>) {
		if self.running.swap(false, Ordering::AcqRel) {
			registry.release(self.id);
		}
	}

	/// Whether `stop` has not been called yet.
	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Acquire)
	}
}

/// A DOM event listener, kept alive while attached.
struct EventListener {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
	fn new(target: &EventTarget, kind: &'static str, callback: impl FnMut(Event) + 'static) -> Self {
		Self {
			target: target.clone(),
			kind,
			callback: Closure::<dyn FnMut(Event)>::new(callback),
		}
	}
}

impl Subscription for EventListener {
	fn attach(&self) -> Result<(), JsValue> {
		self.target
			.add_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
	}

	fn detach(&self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
	}
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
	let width = window
		.inner_width()?
		.as_f64()
		.ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
	let height = window
		.inner_height()?
		.as_f64()
		.ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
	Ok((width, height))
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Runs `f` on the field if it is still alive.
fn with_field(field: &Weak<RefCell<ParticleField>>, f: impl FnOnce(&mut ParticleField)) {
	if let Some(field) = field.upgrade() {
		f(&mut field.borrow_mut());
	}
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.ok()
}

fn attach_listeners(
	window: &Window,
	field: &Rc<RefCell<ParticleField>>,
) -> Result<ListenerSet<EventListener>, JsValue> {
	let mut listeners = ListenerSet::new();

	let weak = Rc::downgrade(field);
	listeners.attach(EventListener::new(window, "resize", move |_: Event| {
		let Some(win) = web_sys::window() else {
			return;
		};
		match viewport_size(&win) {
			Ok((w, h)) => with_field(&weak, |f| f.handle_resize(w, h)),
			Err(e) => debug!("particle-swirl: viewport size unavailable: {:?}", e),
		}
	}))?;

	let weak = Rc::downgrade(field);
	listeners.attach(EventListener::new(window, "mousemove", move |ev: Event| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
			with_field(&weak, |f| f.handle_pointer_move(x, y));
		}
	}))?;

	let weak = Rc::downgrade(field);
	listeners.attach(EventListener::new(window, "touchmove", move |ev: Event| {
		let Some(touch) = ev.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0)) else {
			return;
		};
		let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
		with_field(&weak, |f| f.handle_pointer_move(x, y));
	}))?;

	let weak = Rc::downgrade(field);
	listeners.attach(EventListener::new(window, "touchend", move |ev: Event| {
		if ev
			.dyn_ref::<TouchEvent>()
			.is_some_and(|t| t.touches().length() == 0)
		{
			with_field(&weak, |f| f.clear_pointer());
		}
	}))?;

	if let Some(root) = window.document().and_then(|d| d.document_element()) {
		let weak = Rc::downgrade(field);
		listeners.attach(EventListener::new(&root, "mouseleave", move |_: Event| {
			with_field(&weak, |f| f.clear_pointer());
		}))?;
	}

	Ok(listeners)
}

/// Bind a canvas, size it to the viewport, and start the render loop.
pub fn initialize(canvas: HtmlCanvasElement) -> Result<FieldHandle, JsValue> {
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("2d context unavailable"))?
		.dyn_into()?;

	let (w, h) = viewport_size(&window)?;
	let field = Rc::new(RefCell::new(ParticleField::new(
		canvas,
		ctx,
		w,
		h,
		random_seed(),
	)));
	let listeners = attach_listeners(&window, &field)?;

	let id = RUNNING.with(|registry| registry.reserve_id());
	let weak = Rc::downgrade(&field);
	let animate = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
		let Some(field) = weak.upgrade() else {
			return;
		};
		field.borrow_mut().render_frame(timestamp);
		RUNNING.with(|registry| {
			registry.with_mut(id, |running| running.frame = request_frame(&running.animate));
		});
	});
	let frame = window.request_animation_frame(animate.as_ref().unchecked_ref())?;

	info!(
		"particle-swirl: field started at {}x{} with {} particles, {} listeners",
		w,
		h,
		field.borrow().particle_count(),
		listeners.len()
	);
	RUNNING.with(|registry| {
		registry.insert(
			id,
			RunningField {
				field,
				listeners,
				animate,
				frame: Some(frame),
			},
		)
	});

	Ok(FieldHandle::new(id))
}
