//! Side panel: current page, link summary, neighbor lists and actions.

use leptos::prelude::*;

use crate::graph::Projection;

fn list_view(items: Vec<String>) -> impl IntoView {
	items
		.into_iter()
		.map(|item| view! { <li>{item}</li> })
		.collect_view()
}

/// Text surfaces for the current selection plus the two action buttons.
///
/// `adjacency` is the static adjacency dump; it does not depend on the
/// selection.
#[component]
pub fn SelectionPanel(
	#[prop(into)] projection: Signal<Projection>,
	adjacency: String,
	#[prop(into)] on_random: Callback<()>,
	#[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
	view! {
		<aside class="panel">
			<h2>
				"Current page: "
				<span id="currentPage">{move || projection.with(|p| p.selected.to_string())}</span>
			</h2>
			<p id="pageSummary">{move || projection.with(|p| p.summary.clone())}</p>

			<h3>"Outgoing links"</h3>
			<ul id="outgoingList">{move || list_view(projection.with(|p| p.outgoing.clone()))}</ul>

			<h3>"Incoming links"</h3>
			<ul id="incomingList">{move || list_view(projection.with(|p| p.incoming.clone()))}</ul>

			<h3>"Adjacency list"</h3>
			<pre id="adjacency">{adjacency}</pre>

			<div class="actions">
				<button id="randomClick" on:click=move |_| on_random.run(())>
					"Random click"
				</button>
				<button id="resetView" on:click=move |_| on_reset.run(())>
					"Reset"
				</button>
			</div>
		</aside>
	}
}
