//! Turns surface interactions into selection changes.
//!
//! The controller owns the [`Selection`] and is its only writer. After every
//! write it projects the new selection and hands the result to the
//! [`Surface`], so the state change always happens before the render.

use log::{debug, warn};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::model::Graph;
use super::projector::{self, Projection};
use super::selection::Selection;
use super::types::NodeId;

/// Receiver for projections, implemented by whatever draws the graph.
pub trait Surface {
	fn present(&mut self, projection: Projection);
}

/// Input events the surface forwards to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Interaction {
	/// A node was clicked.
	Activate(NodeId),
	/// Follow a random outgoing link, or jump anywhere when there is none.
	RandomJump,
	/// Go back to the default node.
	Reset,
}

pub struct Controller<S, R = StdRng> {
	graph: Graph,
	default_node: NodeId,
	selection: Selection,
	surface: S,
	rng: R,
}

impl<S: Surface, R: Rng> Controller<S, R> {
	/// Creates the controller and renders the default selection.
	pub fn new(graph: Graph, default_node: NodeId, surface: S, rng: R) -> Self {
		let mut controller = Self {
			graph,
			selection: Selection::new(default_node.clone()),
			default_node,
			surface,
			rng,
		};
		controller.render();
		controller
	}

	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	pub fn current(&self) -> &NodeId {
		self.selection.current()
	}

	pub fn default_node(&self) -> &NodeId {
		&self.default_node
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn handle(&mut self, interaction: Interaction) {
		match interaction {
			Interaction::Activate(node) => self.select(node),
			Interaction::RandomJump => match self.random_target() {
				Some(node) => self.select(node),
				None => warn!("link-graph: random jump with no declared nodes"),
			},
			Interaction::Reset => self.select(self.default_node.clone()),
		}
	}

	/// Overwrites the selection, then re-renders.
	pub fn select(&mut self, node: NodeId) {
		debug!("link-graph: select {node}");
		self.selection.select(node);
		self.render();
	}

	/// A uniformly chosen outgoing neighbor of the current node, falling back
	/// to a uniformly chosen declared node. `None` only for an empty graph.
	pub fn random_target(&mut self) -> Option<NodeId> {
		let options = self.graph.outgoing(self.selection.current());
		if let Some(next) = options.choose(&mut self.rng) {
			return Some(next.clone());
		}
		self.graph.nodes().choose(&mut self.rng).cloned()
	}

	fn render(&mut self) {
		let projection = projector::project(&self.graph, self.selection.current());
		self.surface.present(projection);
	}
}
