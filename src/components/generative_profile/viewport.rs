use super::config::{
	GRAPH_CENTER, GRAPH_EXTENT, HIT_SLOP, LABEL_ZOOM_THRESHOLD, LINK_WIDTH, PAN_SENSITIVITY,
	ZOOM_MAX, ZOOM_MIN, ZOOM_SENSITIVITY,
};
use super::types::{GraphNode, PrivacyMode, ViewMode};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
	#[default]
	Idle,
	Dragging { last_x: f64, last_y: f64 },
}

/// Pan/zoom/selection state of the relationship graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	pub zoom: f64,
	pub pan_x: f64,
	pub pan_y: f64,
	pub selected: Option<String>,
	interaction: Interaction,
	/// Last (view, privacy) pair seen; a change resets the viewport.
	modes: Option<(ViewMode, PrivacyMode)>,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			zoom: 1.0,
			pan_x: 0.0,
			pan_y: 0.0,
			selected: None,
			interaction: Interaction::Idle,
			modes: None,
		}
	}
}

impl Viewport {
	#[cfg(test)]
	pub fn interaction(&self) -> Interaction {
		self.interaction
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.interaction, Interaction::Dragging { .. })
	}

	/// Pointer pressed at `(x, y)`. A press on a node selects it and never
	/// starts a drag; a press on the background starts one and keeps the
	/// current selection.
	pub fn press(&mut self, hit: Option<String>, x: f64, y: f64) {
		match hit {
			Some(id) => self.select(id),
			None => self.pointer_down(x, y),
		}
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.interaction = Interaction::Dragging {
			last_x: x,
			last_y: y,
		};
	}

	/// Pans by the pointer delta, scaled down as zoom grows. Returns whether
	/// the pan changed.
	pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
		let Interaction::Dragging { last_x, last_y } = self.interaction else {
			return false;
		};
		if !(x.is_finite() && y.is_finite()) {
			return false;
		}
		let sensitivity = PAN_SENSITIVITY / self.zoom;
		self.pan_x += (x - last_x) * sensitivity;
		self.pan_y += (y - last_y) * sensitivity;
		self.interaction = Interaction::Dragging {
			last_x: x,
			last_y: y,
		};
		true
	}

	pub fn pointer_up(&mut self) {
		self.interaction = Interaction::Idle;
	}

	pub fn pointer_leave(&mut self) {
		self.pointer_up();
	}

	pub fn wheel(&mut self, delta_y: f64) {
		if !delta_y.is_finite() {
			return;
		}
		self.zoom = (self.zoom - delta_y * ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
	}

	pub fn select(&mut self, id: impl Into<String>) {
		self.selected = Some(id.into());
	}

	pub fn clear_selection(&mut self) {
		self.selected = None;
	}

	/// Back to zoom 1, no pan, no selection, idle.
	pub fn reset(&mut self) {
		let modes = self.modes;
		*self = Self::default();
		self.modes = modes;
	}

	/// Record the active view and privacy modes, resetting when either
	/// differs from the last pair. Returns whether a reset happened.
	pub fn enter_modes(&mut self, view: ViewMode, privacy: PrivacyMode) -> bool {
		let key = Some((view, privacy));
		if self.modes == key {
			return false;
		}
		self.reset();
		self.modes = key;
		true
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	pub fn shows_label(&self, id: &str) -> bool {
		self.zoom > LABEL_ZOOM_THRESHOLD || self.is_selected(id)
	}

	/// Link stroke in graph units; constant on screen regardless of zoom.
	pub fn link_width(&self) -> f64 {
		LINK_WIDTH / self.zoom
	}
}

/// Maps the 0-100 graph space onto a canvas of a given size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
	unit: f64,
	origin_x: f64,
	origin_y: f64,
}

impl Projection {
	pub fn new(width: f64, height: f64) -> Self {
		let unit = width.min(height).max(1.0) / GRAPH_EXTENT;
		Self {
			unit,
			origin_x: (width - GRAPH_EXTENT * unit) / 2.0,
			origin_y: (height - GRAPH_EXTENT * unit) / 2.0,
		}
	}

	/// Affine `(scale, tx, ty)` taking graph coordinates to screen pixels.
	/// Zoom is applied about the graph centre, pan after it.
	pub fn transform(&self, viewport: &Viewport) -> (f64, f64, f64) {
		let scale = self.unit * viewport.zoom;
		let shift = GRAPH_CENTER * (1.0 - viewport.zoom);
		(
			scale,
			self.origin_x + self.unit * (viewport.pan_x + shift),
			self.origin_y + self.unit * (viewport.pan_y + shift),
		)
	}

	#[cfg(test)]
	pub fn to_screen(&self, viewport: &Viewport, gx: f64, gy: f64) -> (f64, f64) {
		let (k, tx, ty) = self.transform(viewport);
		(tx + gx * k, ty + gy * k)
	}

	pub fn to_graph(&self, viewport: &Viewport, sx: f64, sy: f64) -> (f64, f64) {
		let (k, tx, ty) = self.transform(viewport);
		((sx - tx) / k, (sy - ty) / k)
	}

	/// Topmost node under the screen point.
	pub fn node_at<'a>(
		&self,
		viewport: &Viewport,
		nodes: &'a [GraphNode],
		sx: f64,
		sy: f64,
	) -> Option<&'a GraphNode> {
		let (gx, gy) = self.to_graph(viewport, sx, sy);
		nodes.iter().rev().find(|node| {
			let (dx, dy) = (node.x - gx, node.y - gy);
			(dx * dx + dy * dy).sqrt() < node.radius + HIT_SLOP
		})
	}
}
