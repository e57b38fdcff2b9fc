//! Graph core: the static page graph, the selection and its projection.
//!
//! Everything in this module is plain Rust with no DOM access, so it runs
//! (and is tested) on any target. The Leptos components in
//! [`crate::components`] are one [`Surface`] implementation.

mod controller;
mod model;
pub mod projector;
mod selection;
mod types;

pub use controller::{Controller, Interaction, Surface};
pub use model::{Adjacency, Graph};
pub use projector::{EdgeClass, EdgeHighlight, NodeHighlight, Projection};
pub use selection::Selection;
pub use types::{Edge, GraphConfig, NodeId};
