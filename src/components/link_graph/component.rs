//! Leptos component drawing the link graph as SVG.
//!
//! Node and edge elements carry the data attributes and highlight classes the
//! page stylesheet keys on (`.node.active`, `.edge.outgoing`, `.edge.incoming`),
//! and also get theme colors and opacity inline so they read without CSS.

use leptos::prelude::*;

use super::layout::Layout;
use super::theme::Theme;
use crate::graph::{EdgeClass, Graph, NodeId, Projection};

fn marker_id(class: EdgeClass) -> &'static str {
	match class {
		EdgeClass::None => "arrow-none",
		EdgeClass::Outgoing => "arrow-outgoing",
		EdgeClass::Incoming => "arrow-incoming",
	}
}

fn edge_class_attr(class: EdgeClass) -> String {
	match class {
		EdgeClass::None => "edge".to_string(),
		other => format!("edge {}", other.css_class()),
	}
}

/// Renders every declared node and every placed edge of `graph`.
///
/// Highlighting follows the `projection` signal; clicking a node reports its
/// id through `on_activate`.
#[component]
pub fn LinkGraphSvg(
	graph: Graph,
	layout: Layout,
	#[prop(into)] projection: Signal<Projection>,
	#[prop(into)] on_activate: Callback<NodeId>,
	#[prop(optional)] theme: Theme,
) -> impl IntoView {
	let r = layout.node_radius;

	let markers = [EdgeClass::None, EdgeClass::Outgoing, EdgeClass::Incoming]
		.into_iter()
		.map(|class| {
			view! {
				<marker
					id=marker_id(class)
					viewBox="0 0 10 10"
					refX="10"
					refY="5"
					markerWidth="7"
					markerHeight="7"
					orient="auto-start-reverse"
				>
					<path d="M 0 0 L 10 5 L 0 10 z" fill=theme.edge_color(class).to_css() />
				</marker>
			}
		})
		.collect_view();

	let edges = graph
		.edges()
		.iter()
		.enumerate()
		.filter_map(|(index, edge)| {
			let d = layout.edge_path(edge)?;
			let class = Memo::new(move |_| {
				projection.with(|p| p.edges.get(index).map(|e| e.class).unwrap_or_default())
			});
			let theme = theme.clone();
			Some(view! {
				<path
					d=d
					class=move || edge_class_attr(class.get())
					data-source=edge.source.to_string()
					data-target=edge.target.to_string()
					fill="none"
					stroke=move || theme.edge_color(class.get()).to_css()
					stroke-width="2"
					marker-end=move || format!("url(#{})", marker_id(class.get()))
					style=move || format!("opacity: {}", class.get().opacity())
				/>
			})
		})
		.collect_view();

	let nodes = graph
		.nodes()
		.iter()
		.enumerate()
		.filter_map(|(index, id)| {
			let at = layout.position(id)?;
			let active = Memo::new(move |_| {
				projection.with(|p| p.nodes.get(index).is_some_and(|n| n.active))
			});
			let clicked = id.clone();
			let fill_theme = theme.clone();
			let ring = theme.active_ring.to_css();
			Some(view! {
				<g
					class=move || if active.get() { "node active" } else { "node" }
					data-id=id.to_string()
					style="cursor: pointer;"
					on:click=move |_| on_activate.run(clicked.clone())
				>
					<circle
						cx=format!("{:.1}", at.x)
						cy=format!("{:.1}", at.y)
						r=format!("{:.1}", r)
						fill=move || fill_theme.node_fill(index, active.get()).to_css()
						stroke=move || if active.get() { ring.clone() } else { "none".to_string() }
						stroke-width="3"
					/>
					<text
						x=format!("{:.1}", at.x)
						y=format!("{:.1}", at.y)
						text-anchor="middle"
						dominant-baseline="central"
						fill=theme.label.to_css()
						style="pointer-events: none; font: 600 14px sans-serif;"
					>
						{id.to_string()}
					</text>
				</g>
			})
		})
		.collect_view();

	view! {
		<svg
			class="link-graph"
			viewBox=layout.view_box()
			preserveAspectRatio="xMidYMid meet"
			style="display: block; width: 100%; height: 100%;"
		>
			<rect width="100%" height="100%" fill=theme.background.to_css() />
			<defs>{markers}</defs>
			<g class="edges">{edges}</g>
			<g class="nodes">{nodes}</g>
		</svg>
	}
}
