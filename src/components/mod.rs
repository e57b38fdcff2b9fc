//! UI components for the link graph viewer.

pub mod link_graph;
