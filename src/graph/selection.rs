//! The single "currently selected page" value.

use super::types::NodeId;

/// Holds exactly one selected node for the lifetime of the page session.
///
/// Only the controller writes to it, through [`Selection::select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
	current: NodeId,
}

impl Selection {
	pub fn new(initial: NodeId) -> Self {
		Self { current: initial }
	}

	pub fn current(&self) -> &NodeId {
		&self.current
	}

	/// Overwrite the selection. Any id is accepted, declared or not.
	pub fn select(&mut self, node: NodeId) {
		self.current = node;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn select_overwrites_without_validation() {
		let mut selection = Selection::new("A".into());
		assert_eq!(selection.current().as_str(), "A");

		selection.select("not-a-page".into());
		assert_eq!(selection.current().as_str(), "not-a-page");
	}
}
