//! Visual theming for the link graph.
//!
//! Colors are applied as SVG presentation attributes so the graph reads
//! correctly even without a stylesheet.

use crate::graph::EdgeClass;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Fill colors cycled over nodes by declared index.
#[derive(Clone, Debug)]
pub struct NodePalette {
	pub colors: Vec<Color>,
}

impl NodePalette {
	/// Muted slate blues and teals (default)
	pub fn slate() -> Self {
		Self {
			colors: vec![
				Color::rgb(94, 129, 172),  // Steel blue
				Color::rgb(100, 148, 160), // Teal gray
				Color::rgb(108, 142, 173), // Air force blue
				Color::rgb(122, 153, 168), // Dusty blue
			],
		}
	}

	/// Warm earth tones
	pub fn earth() -> Self {
		Self {
			colors: vec![
				Color::rgb(180, 136, 100), // Tan
				Color::rgb(170, 145, 115), // Khaki
				Color::rgb(145, 120, 95),  // Umber
				Color::rgb(155, 130, 105), // Bronze
			],
		}
	}

	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(128, 128, 128);
		}
		self.colors[index % self.colors.len()]
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub background: Color,
	pub label: Color,
	/// Ring drawn around the active node.
	pub active_ring: Color,
	/// Edge color when unrelated to the selection.
	pub edge: Color,
	pub outgoing: Color,
	pub incoming: Color,
	pub palette: NodePalette,
}

impl Theme {
	/// Dark slate theme (default)
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			background: Color::rgb(22, 27, 34),
			label: Color::rgba(255, 255, 255, 0.9),
			active_ring: Color::rgb(255, 255, 255),
			edge: Color::rgb(140, 160, 180),
			outgoing: Color::rgb(236, 164, 84),
			incoming: Color::rgb(96, 196, 150),
			palette: NodePalette::slate(),
		}
	}

	/// Warm variant on a brown background
	pub fn ember() -> Self {
		Self {
			name: "ember",
			background: Color::rgb(28, 24, 22),
			label: Color::rgba(255, 245, 235, 0.9),
			active_ring: Color::rgb(255, 230, 200),
			edge: Color::rgb(160, 130, 110),
			outgoing: Color::rgb(230, 120, 80),
			incoming: Color::rgb(200, 190, 110),
			palette: NodePalette::earth(),
		}
	}

	/// Stroke color for an edge in the given class.
	pub fn edge_color(&self, class: EdgeClass) -> Color {
		match class {
			EdgeClass::None => self.edge,
			EdgeClass::Outgoing => self.outgoing,
			EdgeClass::Incoming => self.incoming,
		}
	}

	/// Fill color of the node at `index`, brighter when active.
	pub fn node_fill(&self, index: usize, active: bool) -> Color {
		let base = self.palette.get(index);
		if active { base.lighten(0.35) } else { base }
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_drops_alpha_when_opaque() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn palette_wraps_around() {
		let palette = NodePalette::slate();
		assert_eq!(palette.get(0), palette.get(palette.colors.len()));
	}

	#[test]
	fn edge_color_follows_class() {
		let theme = Theme::ember();
		assert_eq!(theme.edge_color(EdgeClass::Outgoing), theme.outgoing);
		assert_eq!(theme.edge_color(EdgeClass::Incoming), theme.incoming);
		assert_eq!(theme.edge_color(EdgeClass::None), theme.edge);
	}

	#[test]
	fn active_node_is_lighter() {
		let theme = Theme::default();
		let idle = theme.node_fill(1, false);
		let active = theme.node_fill(1, true);
		assert!(active.r >= idle.r && active.g >= idle.g && active.b >= idle.b);
		assert_ne!(active, idle);
	}
}
