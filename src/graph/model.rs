//! Static graph model with direct-neighbor queries.
//!
//! The graph never changes after construction, so the per-node adjacency is
//! computed once and cached.

use super::types::{Edge, GraphConfig, NodeId};

/// Ordered outgoing-neighbor lists, one entry per declared node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
	entries: Vec<(NodeId, Vec<NodeId>)>,
}

impl Adjacency {
	/// Entries in declared node order.
	pub fn entries(&self) -> &[(NodeId, Vec<NodeId>)] {
		&self.entries
	}

	/// Outgoing targets recorded for `node`, if it was declared.
	pub fn get(&self, node: &NodeId) -> Option<&[NodeId]> {
		self.entries
			.iter()
			.find(|(id, _)| id == node)
			.map(|(_, targets)| targets.as_slice())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Immutable directed graph: declared nodes plus an ordered edge list.
///
/// Edges may reference ids that are not declared; queries still see them,
/// the adjacency only lists declared nodes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
	nodes: Vec<NodeId>,
	edges: Vec<Edge>,
	adjacency: Adjacency,
}

impl Graph {
	pub fn new(nodes: Vec<NodeId>, edges: Vec<Edge>) -> Self {
		let entries = nodes
			.iter()
			.map(|node| (node.clone(), outgoing_of(&edges, node)))
			.collect();
		Self {
			nodes,
			edges,
			adjacency: Adjacency { entries },
		}
	}

	pub fn from_config(config: &GraphConfig) -> Self {
		Self::new(config.nodes.clone(), config.links.clone())
	}

	pub fn nodes(&self) -> &[NodeId] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Whether `node` is part of the declared node set.
	pub fn contains(&self, node: &NodeId) -> bool {
		self.nodes.contains(node)
	}

	/// Targets of every edge leaving `node`, in edge order.
	pub fn outgoing(&self, node: &NodeId) -> Vec<NodeId> {
		outgoing_of(&self.edges, node)
	}

	/// Sources of every edge entering `node`, in edge order.
	pub fn incoming(&self, node: &NodeId) -> Vec<NodeId> {
		self.edges
			.iter()
			.filter(|edge| &edge.target == node)
			.map(|edge| edge.source.clone())
			.collect()
	}

	pub fn adjacency(&self) -> &Adjacency {
		&self.adjacency
	}
}

fn outgoing_of(edges: &[Edge], node: &NodeId) -> Vec<NodeId> {
	edges
		.iter()
		.filter(|edge| &edge.source == node)
		.map(|edge| edge.target.clone())
		.collect()
}

#[cfg(test)]
mod tests {
	use rstest::{fixture, rstest};

	use super::*;

	fn ids(names: &[&str]) -> Vec<NodeId> {
		names.iter().copied().map(NodeId::from).collect()
	}

	#[fixture]
	fn sample() -> Graph {
		Graph::from_config(&GraphConfig::default())
	}

	#[rstest]
	#[case("A", &["C"], &["B", "C"])]
	#[case("B", &["A", "D"], &[])]
	#[case("C", &["A", "D"], &["A"])]
	#[case("D", &["D"], &["B", "C", "D"])]
	fn neighbors_follow_edge_order(
		sample: Graph,
		#[case] node: &str,
		#[case] outgoing: &[&str],
		#[case] incoming: &[&str],
	) {
		let node = NodeId::from(node);
		assert_eq!(sample.outgoing(&node), ids(outgoing));
		assert_eq!(sample.incoming(&node), ids(incoming));
	}

	#[rstest]
	fn unknown_node_has_no_neighbors(sample: Graph) {
		let ghost = NodeId::from("Z");
		assert!(sample.outgoing(&ghost).is_empty());
		assert!(sample.incoming(&ghost).is_empty());
		assert!(!sample.contains(&ghost));
		assert_eq!(sample.adjacency().get(&ghost), None);
	}

	#[rstest]
	fn adjacency_lists_declared_nodes_in_order(sample: Graph) {
		let adjacency = sample.adjacency();
		let order: Vec<&str> = adjacency.entries().iter().map(|(id, _)| id.as_str()).collect();

		assert_eq!(order, ["A", "B", "C", "D"]);
		assert_eq!(adjacency.get(&"A".into()), Some(ids(&["C"]).as_slice()));
		assert_eq!(adjacency.get(&"B".into()), Some(ids(&["A", "D"]).as_slice()));
		assert_eq!(adjacency.get(&"C".into()), Some(ids(&["A", "D"]).as_slice()));
		assert_eq!(adjacency.get(&"D".into()), Some(ids(&["D"]).as_slice()));
	}

	#[test]
	fn duplicate_edges_are_kept() {
		let graph = Graph::new(
			ids(&["A", "B"]),
			vec![Edge::new("A", "B"), Edge::new("A", "B")],
		);
		assert_eq!(graph.outgoing(&"A".into()), ids(&["B", "B"]));
		assert_eq!(graph.incoming(&"B".into()), ids(&["A", "A"]));
	}

	#[test]
	fn dangling_edge_is_queryable_but_not_in_adjacency() {
		let graph = Graph::new(ids(&["A"]), vec![Edge::new("A", "X"), Edge::new("X", "A")]);

		assert_eq!(graph.outgoing(&"A".into()), ids(&["X"]));
		assert_eq!(graph.outgoing(&"X".into()), ids(&["A"]));
		assert_eq!(graph.adjacency().len(), 1);
	}
}
