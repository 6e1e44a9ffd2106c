use crate::tree::NodeKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

/// Colours the canvas renderer draws with.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
	pub background: &'static str,
	/// `rgba(r, g, b, ` prefix; the renderer appends alpha.
	pub edge_rgb: &'static str,
	pub label_rgb: &'static str,
	pub selection: &'static str,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	pub fn palette(self) -> Palette {
		match self {
			Theme::Light => Palette {
				background: "#f9fafb",
				edge_rgb: "148, 163, 184",
				label_rgb: "17, 24, 39",
				selection: "#ef4444",
			},
			Theme::Dark => Palette {
				background: "#1a1a2e",
				edge_rgb: "100, 180, 255",
				label_rgb: "255, 255, 255",
				selection: "#facc15",
			},
		}
	}
}

/// Fill colour of a node by kind.
pub fn kind_color(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Object => "#3b82f6",
		NodeKind::Array => "#10b981",
		NodeKind::Primitive => "#f59e0b",
	}
}
