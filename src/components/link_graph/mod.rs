//! Link graph visualization components.
//!
//! Renders the page graph as SVG next to a side panel:
//! - Node positions settled once via force simulation
//! - Selected node marked active, its outgoing and incoming edges highlighted
//! - Unrelated edges dimmed
//! - Outgoing/incoming lists, link summary and the adjacency dump
//!
//! # Example
//!
//! ```ignore
//! use link_graph::{Graph, GraphConfig, Layout, LinkGraphSvg};
//!
//! let graph = Graph::from_config(&GraphConfig::default());
//! let layout = Layout::settle(&graph, 640.0, 420.0, 20.0);
//!
//! view! { <LinkGraphSvg graph layout projection on_activate /> }
//! ```

mod component;
pub mod layout;
mod panel;
mod surface;
pub mod theme;

pub use component::LinkGraphSvg;
pub use layout::Layout;
pub use panel::SelectionPanel;
pub use surface::SignalSurface;
pub use theme::Theme;
