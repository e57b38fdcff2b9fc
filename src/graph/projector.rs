//! Pure projection from the current selection to what the surface displays.
//!
//! Nothing here keeps state between calls: the same graph and selection
//! always project to the same [`Projection`].

use super::model::Graph;
use super::types::{Edge, NodeId};

/// Opacity of edges touching the selected node.
pub const HIGHLIGHT_OPACITY: f64 = 0.95;
/// Opacity of edges unrelated to the selection.
pub const DIMMED_OPACITY: f64 = 0.25;

/// Placeholder list item for an empty neighbor list.
pub const EMPTY_ITEM: &str = "None";

/// How an edge relates to the selected node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeClass {
	/// Neither end is the selected node.
	#[default]
	None,
	/// The edge leaves the selected node (includes its self-loops).
	Outgoing,
	/// The edge enters the selected node.
	Incoming,
}

impl EdgeClass {
	/// CSS class name set on the edge element; empty for unrelated edges.
	pub fn css_class(self) -> &'static str {
		match self {
			EdgeClass::None => "",
			EdgeClass::Outgoing => "outgoing",
			EdgeClass::Incoming => "incoming",
		}
	}

	pub fn opacity(self) -> f64 {
		match self {
			EdgeClass::None => DIMMED_OPACITY,
			EdgeClass::Outgoing | EdgeClass::Incoming => HIGHLIGHT_OPACITY,
		}
	}
}

/// Highlight state of one declared node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeHighlight {
	pub id: NodeId,
	pub active: bool,
}

/// Highlight state of one edge, in edge-list order.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeHighlight {
	pub edge: Edge,
	pub class: EdgeClass,
}

impl EdgeHighlight {
	pub fn opacity(&self) -> f64 {
		self.class.opacity()
	}
}

/// Everything the surface shows for one selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
	pub selected: NodeId,
	pub summary: String,
	pub outgoing: Vec<String>,
	pub incoming: Vec<String>,
	pub nodes: Vec<NodeHighlight>,
	pub edges: Vec<EdgeHighlight>,
}

/// Summary sentence for a page with `count` outgoing links.
pub fn summary(count: usize) -> String {
	match count {
		0 => "This page has no outgoing links.".to_string(),
		1 => "This page links out to one other page.".to_string(),
		n => format!("This page links out to {n} other pages."),
	}
}

/// One list item per neighbor, or a single placeholder when there are none.
pub fn list_items(neighbors: &[NodeId]) -> Vec<String> {
	if neighbors.is_empty() {
		return vec![EMPTY_ITEM.to_string()];
	}
	neighbors.iter().map(NodeId::to_string).collect()
}

/// Outgoing wins over incoming, so a self-loop on the selection is outgoing.
pub fn classify(edge: &Edge, selected: &NodeId) -> EdgeClass {
	if &edge.source == selected {
		EdgeClass::Outgoing
	} else if &edge.target == selected {
		EdgeClass::Incoming
	} else {
		EdgeClass::None
	}
}

/// `"A: [C, D]"` lines, one per declared node in declared order.
pub fn adjacency_lines(graph: &Graph) -> Vec<String> {
	graph
		.adjacency()
		.entries()
		.iter()
		.map(|(node, targets)| {
			let targets: Vec<&str> = targets.iter().map(NodeId::as_str).collect();
			format!("{node}: [{}]", targets.join(", "))
		})
		.collect()
}

pub fn adjacency_text(graph: &Graph) -> String {
	adjacency_lines(graph).join("\n")
}

/// Projects `selected` against `graph`.
pub fn project(graph: &Graph, selected: &NodeId) -> Projection {
	let outgoing = graph.outgoing(selected);
	let incoming = graph.incoming(selected);

	Projection {
		selected: selected.clone(),
		summary: summary(outgoing.len()),
		outgoing: list_items(&outgoing),
		incoming: list_items(&incoming),
		nodes: graph
			.nodes()
			.iter()
			.map(|id| NodeHighlight {
				id: id.clone(),
				active: id == selected,
			})
			.collect(),
		edges: graph
			.edges()
			.iter()
			.map(|edge| EdgeHighlight {
				edge: edge.clone(),
				class: classify(edge, selected),
			})
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use rstest::{fixture, rstest};

	use super::*;
	use crate::graph::types::GraphConfig;

	#[fixture]
	fn sample() -> Graph {
		Graph::from_config(&GraphConfig::default())
	}

	#[rstest]
	#[case(0, "This page has no outgoing links.")]
	#[case(1, "This page links out to one other page.")]
	#[case(2, "This page links out to 2 other pages.")]
	#[case(17, "This page links out to 17 other pages.")]
	fn summary_wording(#[case] count: usize, #[case] expected: &str) {
		assert_eq!(summary(count), expected);
	}

	#[test]
	fn empty_list_renders_placeholder() {
		assert_eq!(list_items(&[]), vec!["None".to_string()]);
		assert_eq!(
			list_items(&["B".into(), "C".into()]),
			vec!["B".to_string(), "C".to_string()]
		);
	}

	#[test]
	fn self_loop_on_selection_is_outgoing() {
		let d = NodeId::from("D");
		assert_eq!(classify(&Edge::new("D", "D"), &d), EdgeClass::Outgoing);
		assert_eq!(classify(&Edge::new("D", "D"), &"A".into()), EdgeClass::None);
	}

	#[test]
	fn classify_by_endpoint() {
		let a = NodeId::from("A");
		assert_eq!(classify(&Edge::new("A", "C"), &a), EdgeClass::Outgoing);
		assert_eq!(classify(&Edge::new("B", "A"), &a), EdgeClass::Incoming);
		assert_eq!(classify(&Edge::new("B", "D"), &a), EdgeClass::None);
	}

	#[test]
	fn class_controls_opacity() {
		assert_eq!(EdgeClass::Outgoing.opacity(), HIGHLIGHT_OPACITY);
		assert_eq!(EdgeClass::Incoming.opacity(), HIGHLIGHT_OPACITY);
		assert_eq!(EdgeClass::None.opacity(), DIMMED_OPACITY);
		assert_eq!(EdgeClass::None.css_class(), "");
	}

	#[rstest]
	fn project_a(sample: Graph) {
		let projection = project(&sample, &"A".into());

		assert_eq!(projection.selected.as_str(), "A");
		assert_eq!(projection.outgoing, ["C"]);
		assert_eq!(projection.incoming, ["B", "C"]);
		assert_eq!(projection.summary, "This page links out to one other page.");

		let active: Vec<&str> = projection
			.nodes
			.iter()
			.filter(|n| n.active)
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(active, ["A"]);

		let classes: Vec<EdgeClass> = projection.edges.iter().map(|e| e.class).collect();
		assert_eq!(
			classes,
			[
				EdgeClass::Outgoing,
				EdgeClass::Incoming,
				EdgeClass::None,
				EdgeClass::Incoming,
				EdgeClass::None,
				EdgeClass::None,
			]
		);
	}

	#[rstest]
	fn project_c(sample: Graph) {
		let projection = project(&sample, &"C".into());
		assert_eq!(projection.outgoing, ["A", "D"]);
		assert_eq!(projection.incoming, ["A"]);
		assert_eq!(projection.summary, "This page links out to 2 other pages.");
	}

	#[rstest]
	fn project_d(sample: Graph) {
		let projection = project(&sample, &"D".into());
		assert_eq!(projection.outgoing, ["D"]);
		assert_eq!(projection.incoming, ["B", "C", "D"]);

		let self_loop = projection.edges.last().expect("self-loop edge");
		assert_eq!(self_loop.class, EdgeClass::Outgoing);
		assert_eq!(self_loop.opacity(), HIGHLIGHT_OPACITY);
	}

	#[rstest]
	fn project_b_has_no_incoming(sample: Graph) {
		let projection = project(&sample, &"B".into());
		assert_eq!(projection.incoming, ["None"]);
	}

	#[rstest]
	fn unknown_selection_degrades_to_empty(sample: Graph) {
		let projection = project(&sample, &"Z".into());
		assert_eq!(projection.summary, "This page has no outgoing links.");
		assert_eq!(projection.outgoing, ["None"]);
		assert_eq!(projection.incoming, ["None"]);
		assert!(projection.nodes.iter().all(|n| !n.active));
		assert!(projection.edges.iter().all(|e| e.class == EdgeClass::None));
	}

	#[rstest]
	fn adjacency_dump(sample: Graph) {
		assert_eq!(
			adjacency_text(&sample),
			"A: [C]\nB: [A, D]\nC: [A, D]\nD: [D]"
		);
	}

	#[test]
	fn adjacency_dump_shows_empty_lists() {
		let graph = Graph::new(vec!["solo".into()], Vec::new());
		assert_eq!(adjacency_lines(&graph), ["solo: []"]);
	}
}
