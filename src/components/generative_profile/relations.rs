use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent};

use super::ledger::{PeerHistory, peer_history};
use super::render;
use super::types::{GraphNode, Transaction};
use super::viewport::{Projection, Viewport};
use crate::components::animation::AnimationLoop;
use crate::components::listener::ActiveListener;

fn local_point(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x - rect.left(), client_y - rect.top())
}

/// Pan/zoom canvas of the owner's peers plus the selected-peer panel.
#[component]
pub fn RelationGraph(
	nodes: Memo<Vec<GraphNode>>,
	transactions: Memo<Vec<Transaction>>,
	viewport: RwSignal<Viewport>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<AnimationLoop>);
	let listeners = StoredValue::new_local(Vec::<ActiveListener>::new());

	// A press on a node selects it and never starts a drag.
	let press = move |client_x: f64, client_y: f64| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = local_point(&canvas, client_x, client_y);
		let projection = Projection::new(canvas.width() as f64, canvas.height() as f64);
		let hit = nodes.with_untracked(|nodes| {
			viewport.with_untracked(|vp| projection.node_at(vp, nodes, x, y).map(|n| n.id.clone()))
		});
		viewport.update(|vp| vp.press(hit, client_x, client_y));
	};
	let drag = move |client_x: f64, client_y: f64| {
		if viewport.with_untracked(Viewport::is_dragging) {
			viewport.update(|vp| {
				vp.pointer_move(client_x, client_y);
			});
		}
	};
	let release = move || {
		if viewport.with_untracked(Viewport::is_dragging) {
			viewport.update(Viewport::pointer_up);
		}
	};
	let leave = move || {
		if viewport.with_untracked(Viewport::is_dragging) {
			viewport.update(Viewport::pointer_leave);
		}
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		running.set_value(None);

		// Wheel and touchmove must be able to cancel page scrolling.
		let wheel = ActiveListener::attach(&canvas, "wheel", move |ev| {
			if let Some(ev) = ev.dyn_ref::<WheelEvent>() {
				ev.prevent_default();
				viewport.update(|vp| vp.wheel(ev.delta_y()));
			}
		});
		let touchmove = ActiveListener::attach(&canvas, "touchmove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<TouchEvent>() {
				ev.prevent_default();
				if let Some(t) = ev.touches().get(0) {
					drag(t.client_x() as f64, t.client_y() as f64);
				}
			}
		});
		listeners.set_value(wheel.into_iter().chain(touchmove).collect());

		let Some(ctx) = render::context_2d(&canvas) else {
			return;
		};
		let started = js_sys::Date::now();
		running.set_value(AnimationLoop::start("relations", move || {
			let (size, _) = render::fit_to_parent(&canvas);
			let elapsed = (js_sys::Date::now() - started) / 1000.0;
			nodes.with_untracked(|nodes| {
				viewport.with_untracked(|vp| render::render_graph(&ctx, size, nodes, vp, elapsed))
			});
		}));
	});

	on_cleanup(move || {
		let _ = running.try_update_value(|slot| slot.take());
		let _ = listeners.try_update_value(std::mem::take);
	});

	let on_mousedown = move |ev: MouseEvent| press(ev.client_x() as f64, ev.client_y() as f64);
	let on_mousemove = move |ev: MouseEvent| drag(ev.client_x() as f64, ev.client_y() as f64);
	let on_mouseup = move |_: MouseEvent| release();
	let on_mouseleave = move |_: MouseEvent| leave();
	let on_touchstart = move |ev: TouchEvent| {
		if let Some(t) = ev.touches().get(0) {
			press(t.client_x() as f64, t.client_y() as f64);
		}
	};
	let on_touchend = move |_: TouchEvent| release();
	let on_touchcancel = move |_: TouchEvent| leave();

	let zoom = Memo::new(move |_| viewport.with(|vp| vp.zoom));

	view! {
		<div class="relation-graph" style="position: relative; width: 100%; height: 100%; overflow: hidden;">
			<canvas
				node_ref=canvas_ref
				class="relation-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				on:touchstart=on_touchstart
				on:touchend=on_touchend
				on:touchcancel=on_touchcancel
				style="display: block; cursor: move;"
			/>
			<div class="graph-overlay">
				<h4>"Navigation"</h4>
				<p>{move || format!("Scroll to Zoom ({:.1}x)", zoom.get())}</p>
				<p>"Drag to Pan"</p>
			</div>
			<DetailPanel transactions=transactions viewport=viewport />
		</div>
	}
}

/// History of the selected peer, or nothing when no peer is selected.
#[component]
fn DetailPanel(
	transactions: Memo<Vec<Transaction>>,
	viewport: RwSignal<Viewport>,
) -> impl IntoView {
	let selected = Memo::new(move |_| viewport.with(|vp| vp.selected.clone()));

	move || {
		selected.get().map(|peer| {
			let history = transactions.with(|txs| peer_history(txs, &peer));
			let summary = format!("{} Transactions", history.len());
			let body = match history {
				PeerHistory::Empty => view! {
					<div class="empty-state">
						"No direct transactions found in this batch."
						<br />
						"(Calculated via graph distance)"
					</div>
				}
				.into_any(),
				PeerHistory::Entries(txs) => txs
					.into_iter()
					.map(|tx| {
						let date = js_sys::Date::new(&tx.timestamp_ms.into())
							.to_locale_date_string("default", &Default::default());
						view! {
							<div class="peer-tx">
								<div class="peer-tx-head">
									<span class="method">{tx.method.as_str()}</span>
									<span class="date">{String::from(date)}</span>
								</div>
								<div class="hash">{tx.hash.clone()}</div>
								<div class="peer-tx-foot">
									<span>{format!("Block {}", tx.block)}</span>
									<span class="value">{tx.value_label()}</span>
								</div>
							</div>
						}
					})
					.collect_view()
					.into_any(),
			};

			view! {
				<aside class="detail-panel">
					<header>
						<span>"Interaction Data"</span>
						<button class="close" on:click=move |_| viewport.update(Viewport::clear_selection)>
							"×"
						</button>
					</header>
					<section class="peer-identity">
						<label>"Peer Identity"</label>
						<div class="mono">{peer}</div>
					</section>
					<div class="history-summary">
						<span>"History"</span>
						<span>{summary}</span>
					</div>
					<div class="history">{body}</div>
				</aside>
			}
		})
	}
}
