use std::f64::consts::{PI, TAU};

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::{BACKGROUND, CENTER_NODE_RADIUS, FADE_STYLE, GRAPH_CENTER, LINK_OPACITY};
use super::flow_field::FlowField;
use super::types::GraphNode;
use super::viewport::{Projection, Viewport};

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);
const LABEL_FONT: &str = "2px monospace";

/// The canvas' 2D context, or `None` when the browser refuses one.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		warn!("2d drawing surface unavailable; skipping render");
	}
	ctx
}

/// Match the canvas backing store to its parent's size. Returns the size and
/// whether it changed.
pub fn fit_to_parent(canvas: &HtmlCanvasElement) -> ((f64, f64), bool) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE);
	let changed = canvas.width() != w as u32 || canvas.height() != h as u32;
	if changed {
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
	}
	((w, h), changed)
}

pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
}

pub fn render_flow_field(field: &FlowField, ctx: &CanvasRenderingContext2d) {
	let (width, height) = field.size();

	// Fade instead of clearing so particles leave trails.
	let _ = ctx.set_global_composite_operation("source-over");
	ctx.set_fill_style_str(FADE_STYLE);
	ctx.fill_rect(0.0, 0.0, width, height);
	let _ = ctx.set_global_composite_operation("lighter");

	let radius = field.config().particle_radius;
	for p in field.particles() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, TAU);
		ctx.set_fill_style_str(p.color);
		ctx.fill();
	}

	for flash in field.flashes().iter() {
		ctx.set_global_alpha(flash.alpha.clamp(0.0, 1.0));
		ctx.begin_path();
		let _ = ctx.arc(flash.x, flash.y, flash.radius, 0.0, TAU);
		ctx.set_fill_style_str(flash.color);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
	let _ = ctx.set_global_composite_operation("source-over");
}

/// Radius of node `i` at `elapsed` seconds; each node breathes with its own
/// period so the graph never pulses in lockstep.
pub fn pulse_radius(base: f64, i: usize, elapsed: f64) -> f64 {
	let period = 3.0 + i as f64;
	base + 0.5 * (0.5 - 0.5 * (elapsed * TAU / period).cos())
}

pub fn render_graph(
	ctx: &CanvasRenderingContext2d,
	(width, height): (f64, f64),
	nodes: &[GraphNode],
	viewport: &Viewport,
	elapsed: f64,
) {
	let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
	clear(ctx, width, height);

	let (k, tx, ty) = Projection::new(width, height).transform(viewport);
	let _ = ctx.set_transform(k, 0.0, 0.0, k, tx, ty);

	draw_links(ctx, nodes, viewport);
	draw_center(ctx);
	draw_nodes(ctx, nodes, viewport, elapsed);

	let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
}

fn draw_links(ctx: &CanvasRenderingContext2d, nodes: &[GraphNode], viewport: &Viewport) {
	ctx.set_global_alpha(LINK_OPACITY);
	ctx.set_line_width(viewport.link_width());
	for node in nodes {
		ctx.set_stroke_style_str(node.color);
		ctx.begin_path();
		ctx.move_to(GRAPH_CENTER, GRAPH_CENTER);
		ctx.line_to(node.x, node.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_center(ctx: &CanvasRenderingContext2d) {
	ctx.save();
	ctx.set_shadow_color("rgba(255, 255, 255, 0.8)");
	ctx.set_shadow_blur(12.0);
	ctx.begin_path();
	let _ = ctx.arc(GRAPH_CENTER, GRAPH_CENTER, CENTER_NODE_RADIUS, 0.0, TAU);
	ctx.set_fill_style_str("white");
	ctx.fill();
	ctx.restore();

	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	ctx.set_fill_style_str("#888");
	let _ = ctx.fill_text("YOU", GRAPH_CENTER, GRAPH_CENTER + 10.0);
}

fn draw_nodes(
	ctx: &CanvasRenderingContext2d,
	nodes: &[GraphNode],
	viewport: &Viewport,
	elapsed: f64,
) {
	ctx.set_font(LABEL_FONT);
	ctx.set_text_align("center");
	for (i, node) in nodes.iter().enumerate() {
		let radius = pulse_radius(node.radius, i, elapsed);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.color);
		ctx.fill();

		if viewport.is_selected(&node.id) {
			ctx.set_stroke_style_str("#fff");
			ctx.set_line_width(0.5);
			ctx.stroke();
		}

		if viewport.shows_label(&node.id) {
			ctx.set_fill_style_str("#aaa");
			let _ = ctx.fill_text(&node.short_label(), node.x, node.y + node.radius + 3.0);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pulse_stays_within_half_unit() {
		for i in 0..25 {
			for step in 0..200 {
				let r = pulse_radius(3.0, i, step as f64 * 0.1);
				assert!((3.0..=3.5 + 1e-12).contains(&r));
			}
		}
		assert_eq!(pulse_radius(2.0, 0, 0.0), 2.0);
	}
}
