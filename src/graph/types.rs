//! Graph data structures: node identifiers, directed edges and the static
//! configuration the viewer is started with.

use std::fmt;

use serde::Deserialize;

/// Opaque identifier of a page in the graph. Identity is string equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for NodeId {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl From<String> for NodeId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// A directed link from `source` to `target`.
///
/// Self-loops and duplicates are allowed; edge lists keep insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Edge {
	/// Page the link starts on.
	pub source: NodeId,
	/// Page the link points to.
	pub target: NodeId,
}

impl Edge {
	pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}

	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Static graph configuration, read once at startup.
///
/// Expected JSON: `{ "nodes": ["A", ...], "links": [{ "source": "A", "target": "C" }], "default": "A" }`.
/// `default` is optional and falls back to the first declared node.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphConfig {
	pub nodes: Vec<NodeId>,
	pub links: Vec<Edge>,
	#[serde(default)]
	pub default: Option<NodeId>,
}

impl GraphConfig {
	/// The node selected at startup and on reset.
	pub fn default_node(&self) -> Option<NodeId> {
		self.default.clone().or_else(|| self.nodes.first().cloned())
	}
}

impl Default for GraphConfig {
	/// The four-page sample graph.
	fn default() -> Self {
		Self {
			nodes: ["A", "B", "C", "D"].into_iter().map(NodeId::from).collect(),
			links: vec![
				Edge::new("A", "C"),
				Edge::new("B", "A"),
				Edge::new("B", "D"),
				Edge::new("C", "A"),
				Edge::new("C", "D"),
				Edge::new("D", "D"),
			],
			default: Some(NodeId::from("A")),
		}
	}
}
