use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop owned by whoever holds the handle.
///
/// The frame closure re-schedules itself through a shared slot, so the loop
/// keeps a reference cycle alive until [`AnimationLoop::stop`] empties that
/// slot. Dropping the handle stops the loop.
pub struct AnimationLoop {
	label: &'static str,
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
	running: Rc<Cell<bool>>,
}

impl AnimationLoop {
	/// Schedule `tick` once per rendered frame. Returns `None` when there is
	/// no window to schedule against.
	pub fn start(label: &'static str, mut tick: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let running = Rc::new(Cell::new(true));

		let (callback_inner, pending_inner, running_inner) =
			(callback.clone(), pending.clone(), running.clone());
		let frame_window = window.clone();
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if !running_inner.get() {
				return;
			}
			tick();
			if let Some(ref cb) = *callback_inner.borrow() {
				if let Ok(id) = frame_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					pending_inner.set(Some(id));
				}
			}
		}));

		let scheduled = callback
			.borrow()
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		let Some(id) = scheduled else {
			callback.borrow_mut().take();
			return None;
		};
		pending.set(Some(id));
		debug!("{label}: animation loop started");

		Some(Self {
			label,
			callback,
			pending,
			running,
		})
	}

	/// Cancel the pending frame and release the frame closure.
	pub fn stop(&self) {
		if !self.running.replace(false) {
			return;
		}
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
		debug!("{}: animation loop stopped", self.label);
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
