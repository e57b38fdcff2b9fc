//! link-graph: Interactive viewer for a small directed graph of pages.
//!
//! Click a page to select it: its outgoing and incoming links are listed and
//! highlighted, unrelated links are dimmed. The graph core lives in [`graph`]
//! and has no DOM dependency; [`components`] renders it with Leptos.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod graph;

pub use components::link_graph::{Layout, LinkGraphSvg, SelectionPanel, SignalSurface, Theme};
pub use graph::{Controller, Edge, Graph, GraphConfig, Interaction, NodeId, Projection, Surface};

const GRAPH_WIDTH: f64 = 640.0;
const GRAPH_HEIGHT: f64 = 420.0;
const NODE_RADIUS: f64 = 20.0;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("link-graph: logging initialized");
}

/// Parse a graph configuration, rejecting ones with no declared nodes.
pub fn parse_graph_config(json_text: &str) -> Option<GraphConfig> {
	match serde_json::from_str::<GraphConfig>(json_text) {
		Ok(config) if config.nodes.is_empty() => {
			warn!("link-graph: graph data declares no nodes");
			None
		}
		Ok(config) => {
			info!(
				"link-graph: loaded {} nodes, {} links",
				config.nodes.len(),
				config.links.len()
			);
			Some(config)
		}
		Err(e) => {
			warn!("link-graph: failed to parse graph data: {}", e);
			None
		}
	}
}

/// Load graph configuration from a script element with id="graph-data".
fn load_graph_config() -> Option<GraphConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	parse_graph_config(&json_text)
}

/// Main application component.
/// Loads the graph from the DOM (or the built-in sample) and wires the
/// controller between the SVG graph and the side panel.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_graph_config().unwrap_or_else(|| {
		info!("link-graph: using built-in sample graph");
		GraphConfig::default()
	});
	let graph = Graph::from_config(&config);
	let default_node = config.default_node().unwrap_or_default();
	let layout = Layout::settle(&graph, GRAPH_WIDTH, GRAPH_HEIGHT, NODE_RADIUS);
	let adjacency = graph::projector::adjacency_text(&graph);

	let (projection, set_projection) = signal(Projection::default());
	let controller = StoredValue::new(Controller::new(
		graph.clone(),
		default_node,
		SignalSurface::new(set_projection),
		StdRng::from_entropy(),
	));
	let dispatch = move |interaction: Interaction| {
		controller.update_value(|c| c.handle(interaction));
	};

	let on_activate = Callback::new(move |id: NodeId| dispatch(Interaction::Activate(id)));
	let on_random = Callback::new(move |_: ()| dispatch(Interaction::RandomJump));
	let on_reset = Callback::new(move |_: ()| dispatch(Interaction::Reset));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Page Link Graph" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<main class="link-graph-app">
			<section class="graph-view">
				<LinkGraphSvg graph=graph layout=layout projection=projection on_activate=on_activate />
			</section>
			<SelectionPanel
				projection=projection
				adjacency=adjacency
				on_random=on_random
				on_reset=on_reset
			/>
		</main>
	}
}
