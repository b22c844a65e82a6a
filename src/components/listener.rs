use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A non-passive DOM listener, so the handler may call `prevent_default`.
/// Removed from its target on drop.
pub struct ActiveListener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl ActiveListener {
	pub fn attach(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		let options = AddEventListenerOptions::new();
		options.set_passive(false);
		target
			.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				callback.as_ref().unchecked_ref(),
				&options,
			)
			.ok()?;
		Some(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for ActiveListener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
