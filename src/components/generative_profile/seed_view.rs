use leptos::prelude::*;
use log::debug;
use web_sys::HtmlCanvasElement;

use super::flow_field::FlowField;
use super::render;
use super::seed::{AddressSeed, Stream};
use super::types::PrivacyMode;
use crate::components::animation::AnimationLoop;

/// Animated flow field keyed off the owner's address.
#[component]
pub fn SeedCanvas(
	#[prop(into)] address: Signal<String>,
	#[prop(into)] privacy: Signal<PrivacyMode>,
	nonce: u64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<AnimationLoop>);

	Effect::new(move |_| {
		let (owner, mode) = (address.get(), privacy.get());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		running.set_value(None);

		let Some(ctx) = render::context_2d(&canvas) else {
			return;
		};
		let ((w, h), _) = render::fit_to_parent(&canvas);
		let seed = AddressSeed::from_address(&owner);
		let mut field = FlowField::new(
			mode.flow_config(),
			seed,
			w,
			h,
			seed.rng(nonce, mode, Stream::Particles),
		);
		render::clear(&ctx, w, h);
		debug!(
			"seed field {:016x} for {owner}: {} particles ({})",
			seed.value(),
			field.particles().len(),
			mode.as_str()
		);

		running.set_value(AnimationLoop::start("seed", move || {
			if let ((nw, nh), true) = render::fit_to_parent(&canvas) {
				field.resize(nw, nh);
				render::clear(&ctx, nw, nh);
			}
			field.step();
			render::render_flow_field(&field, &ctx);
		}));
	});

	on_cleanup(move || {
		let _ = running.try_update_value(|slot| slot.take());
	});

	view! { <canvas node_ref=canvas_ref class="seed-canvas" style="display: block; width: 100%; height: 100%;" /> }
}
