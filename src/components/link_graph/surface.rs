//! Bridges the graph controller to Leptos reactivity.

use leptos::prelude::*;

use crate::graph::{Projection, Surface};

/// A [`Surface`] that publishes each projection into a Leptos signal.
/// Components reading the paired `ReadSignal` re-render from it.
pub struct SignalSurface {
	sink: WriteSignal<Projection>,
}

impl SignalSurface {
	pub fn new(sink: WriteSignal<Projection>) -> Self {
		Self { sink }
	}
}

impl Surface for SignalSurface {
	fn present(&mut self, projection: Projection) {
		self.sink.set(projection);
	}
}
