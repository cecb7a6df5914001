//! The nine stars (jiuxing) and their home palaces.

use crate::element::Element;
use crate::palace::Palace;
use crate::symbol::{Symbol, serialize_as_glyph};

/// The nine stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Star {
    Peng,
    Ren,
    Chong,
    Fu,
    Ying,
    Rui,
    Zhu,
    Xin,
    Qin,
}

/// All nine stars in traditional order: Kan, Gen, Zhen, Xun, Li, Kun, Dui, Qian, Center.
pub const ALL_STARS: [Star; 9] = [
    Star::Peng,
    Star::Ren,
    Star::Chong,
    Star::Fu,
    Star::Ying,
    Star::Rui,
    Star::Zhu,
    Star::Xin,
    Star::Qin,
];

/// Star resting in each palace before any rotation, indexed by palace number - 1.
const ORIGINAL_STARS: [Star; 9] = [
    Star::Peng,
    Star::Rui,
    Star::Chong,
    Star::Fu,
    Star::Qin,
    Star::Xin,
    Star::Zhu,
    Star::Ren,
    Star::Ying,
];

impl Star {
    /// Palace the star occupies on an unrotated board.
    pub const fn home(self) -> Palace {
        match self {
            Self::Peng => Palace::Kan,
            Self::Ren => Palace::Gen,
            Self::Chong => Palace::Zhen,
            Self::Fu => Palace::Xun,
            Self::Ying => Palace::Li,
            Self::Rui => Palace::Kun,
            Self::Zhu => Palace::Dui,
            Self::Xin => Palace::Qian,
            Self::Qin => Palace::Center,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Peng => Element::Water,
            Self::Ren | Self::Rui | Self::Qin => Element::Earth,
            Self::Chong | Self::Fu => Element::Wood,
            Self::Ying => Element::Fire,
            Self::Zhu | Self::Xin => Element::Metal,
        }
    }
}

/// Star resting in `palace` on an unrotated board.
pub const fn original_star(palace: Palace) -> Star {
    ORIGINAL_STARS[palace.index()]
}

impl Symbol for Star {
    fn glyph(self) -> &'static str {
        match self {
            Self::Peng => "天蓬",
            Self::Ren => "天任",
            Self::Chong => "天冲",
            Self::Fu => "天辅",
            Self::Ying => "天英",
            Self::Rui => "天芮",
            Self::Zhu => "天柱",
            Self::Xin => "天心",
            Self::Qin => "天禽",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Peng => "Tianpeng",
            Self::Ren => "Tianren",
            Self::Chong => "Tianchong",
            Self::Fu => "Tianfu",
            Self::Ying => "Tianying",
            Self::Rui => "Tianrui",
            Self::Zhu => "Tianzhu",
            Self::Xin => "Tianxin",
            Self::Qin => "Tianqin",
        }
    }
}

serialize_as_glyph!(Star);
