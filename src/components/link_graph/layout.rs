//! Static node placement for the link graph.
//!
//! The graph never changes, so the `force_graph` simulation is settled once
//! up front instead of running per frame. The settled positions are then fit
//! into the SVG viewport, and edge geometry is derived from them.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{Edge, Graph, NodeId};

/// Simulation steps run before the layout is frozen.
const SETTLE_STEPS: usize = 400;
const SETTLE_DT: f32 = 0.016;

/// A position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

/// Frozen node positions plus the viewport they were fit into.
#[derive(Clone, Debug)]
pub struct Layout {
	pub width: f64,
	pub height: f64,
	pub node_radius: f64,
	positions: HashMap<NodeId, Point>,
}

impl Layout {
	/// Settles `graph` with the force simulation and fits it to `width` x `height`.
	pub fn settle(graph: &Graph, width: f64, height: f64, node_radius: f64) -> Self {
		let seeded = circle_positions(graph.nodes().len(), width, height);
		let simulated = simulate(graph, &seeded);
		let raw = if simulated.iter().all(|p| p.is_finite()) {
			simulated
		} else {
			log::warn!("link-graph: force layout diverged, using circle layout");
			seeded
		};

		let padding = node_radius * 3.0;
		let fitted = fit(&raw, width, height, padding);

		let mut positions = HashMap::new();
		for (id, point) in graph.nodes().iter().zip(fitted) {
			positions.entry(id.clone()).or_insert(point);
		}

		Self {
			width,
			height,
			node_radius,
			positions,
		}
	}

	pub fn position(&self, node: &NodeId) -> Option<Point> {
		self.positions.get(node).copied()
	}

	pub fn view_box(&self) -> String {
		format!("0 0 {} {}", self.width, self.height)
	}

	/// SVG path data for `edge`, ending on the target's rim so an arrow marker
	/// touches the node. `None` when an endpoint was never placed.
	pub fn edge_path(&self, edge: &Edge) -> Option<String> {
		let from = self.position(&edge.source)?;
		let to = self.position(&edge.target)?;
		let r = self.node_radius;

		if edge.is_self_loop() {
			return Some(self_loop_path(from, r));
		}

		let (dx, dy) = (to.x - from.x, to.y - from.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return Some(self_loop_path(from, r));
		}
		let (ux, uy) = (dx / dist, dy / dist);
		Some(format!(
			"M {:.1} {:.1} L {:.1} {:.1}",
			from.x + ux * r,
			from.y + uy * r,
			to.x - ux * r,
			to.y - uy * r,
		))
	}
}

/// Loop leaving the top-left of the node rim and re-entering at the top-right.
fn self_loop_path(center: Point, r: f64) -> String {
	let start_angle = -2.0 * PI / 3.0;
	let end_angle = -PI / 3.0;
	let (sx, sy) = (center.x + r * start_angle.cos(), center.y + r * start_angle.sin());
	let (ex, ey) = (center.x + r * end_angle.cos(), center.y + r * end_angle.sin());
	let lift = r * 3.2;
	format!(
		"M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
		sx,
		sy,
		center.x - r * 1.6,
		center.y - lift,
		center.x + r * 1.6,
		center.y - lift,
		ex,
		ey,
	)
}

fn circle_positions(count: usize, width: f64, height: f64) -> Vec<Point> {
	let radius = width.min(height) * 0.3;
	(0..count)
		.map(|i| {
			let angle = (i as f64) * 2.0 * PI / count as f64 - PI / 2.0;
			Point {
				x: width / 2.0 + radius * angle.cos(),
				y: height / 2.0 + radius * angle.sin(),
			}
		})
		.collect()
}

fn simulate(graph: &Graph, seeded: &[Point]) -> Vec<Point> {
	let mut sim: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let mut id_to_idx = HashMap::new();
	for (i, (id, start)) in graph.nodes().iter().zip(seeded).enumerate() {
		let idx = sim.add_node(NodeData {
			x: start.x as f32,
			y: start.y as f32,
			mass: 10.0,
			is_anchor: false,
			user_data: i,
		});
		id_to_idx.entry(id.clone()).or_insert(idx);
	}

	// Self-loops exert no spring force, and dangling edges have no node to pull.
	for edge in graph.edges().iter().filter(|e| !e.is_self_loop()) {
		if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
		{
			sim.add_edge(src, tgt, EdgeData::default());
		}
	}

	for _ in 0..SETTLE_STEPS {
		sim.update(SETTLE_DT);
	}

	let mut settled = seeded.to_vec();
	sim.visit_nodes(|node| {
		if let Some(slot) = settled.get_mut(node.data.user_data) {
			*slot = Point {
				x: node.x() as f64,
				y: node.y() as f64,
			};
		}
	});
	settled
}

/// Uniformly scales and centers `points` into the padded viewport.
fn fit(points: &[Point], width: f64, height: f64, padding: f64) -> Vec<Point> {
	let Some(first) = points.first() else {
		return Vec::new();
	};
	let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
	for p in points {
		min_x = min_x.min(p.x);
		max_x = max_x.max(p.x);
		min_y = min_y.min(p.y);
		max_y = max_y.max(p.y);
	}

	let (span_x, span_y) = (max_x - min_x, max_y - min_y);
	let (avail_x, avail_y) = ((width - 2.0 * padding).max(0.0), (height - 2.0 * padding).max(0.0));
	let scale = match (span_x > 0.001, span_y > 0.001) {
		(true, true) => (avail_x / span_x).min(avail_y / span_y),
		(true, false) => avail_x / span_x,
		(false, true) => avail_y / span_y,
		(false, false) => 0.0,
	};
	let (mid_x, mid_y) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

	points
		.iter()
		.map(|p| Point {
			x: width / 2.0 + (p.x - mid_x) * scale,
			y: height / 2.0 + (p.y - mid_y) * scale,
		})
		.collect()
}
