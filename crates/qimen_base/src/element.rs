//! The five elements (wuxing) attached to stars and gates.

use serde::{Serialize, Serializer};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Water,
    Fire,
    Wood,
    Metal,
    Earth,
}

/// All five elements, Wood first.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Fire => "fire",
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Earth => "earth",
        }
    }

    /// Chinese glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Water => "水",
            Self::Fire => "火",
            Self::Wood => "木",
            Self::Metal => "金",
            Self::Earth => "土",
        }
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
