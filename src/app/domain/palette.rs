use serde::{Deserialize, Serialize};

/// A color used to tell inline links apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkColor {
    Emerald,
    Sky,
    Fuchsia,
    Amber,
    Indigo,
    Rose,
    Cyan,
    Lime,
}

impl LinkColor {
    /// Style class name for this color.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Emerald => "text-emerald-400",
            Self::Sky => "text-sky-400",
            Self::Fuchsia => "text-fuchsia-400",
            Self::Amber => "text-amber-400",
            Self::Indigo => "text-indigo-400",
            Self::Rose => "text-rose-400",
            Self::Cyan => "text-cyan-400",
            Self::Lime => "text-lime-400",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Emerald => (52, 211, 153),
            Self::Sky => (56, 189, 248),
            Self::Fuchsia => (232, 121, 249),
            Self::Amber => (251, 191, 36),
            Self::Indigo => (129, 140, 248),
            Self::Rose => (251, 113, 133),
            Self::Cyan => (34, 211, 238),
            Self::Lime => (163, 230, 53),
        }
    }

    /// `#rrggbb`, as understood by `HelpView` font tags.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn all() -> &'static [LinkColor] {
        &[
            Self::Emerald,
            Self::Sky,
            Self::Fuchsia,
            Self::Amber,
            Self::Indigo,
            Self::Rose,
            Self::Cyan,
            Self::Lime,
        ]
    }
}

/// Ordered, never-empty list of link colors, cycled by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<LinkColor>,
}

impl Palette {
    /// Build a palette; an empty list falls back to the default order.
    pub fn new(colors: Vec<LinkColor>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the `index`-th link, wrapping around the palette.
    pub fn color_at(&self, index: usize) -> LinkColor {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: LinkColor::all().to_vec(),
        }
    }
}
