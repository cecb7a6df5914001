//! The eight gates (bamen) and their home palaces.
//!
//! Gates never rest in the center palace.

use crate::element::Element;
use crate::palace::Palace;
use crate::symbol::{Symbol, serialize_as_glyph};

/// The eight gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// 休 Xiu
    Rest,
    /// 生 Sheng
    Life,
    /// 伤 Shang
    Harm,
    /// 杜 Du
    Block,
    /// 景 Jing
    View,
    /// 死 Si
    Death,
    /// 惊 Jing
    Fright,
    /// 开 Kai
    Open,
}

/// All eight gates in traditional order: Kan, Gen, Zhen, Xun, Li, Kun, Dui, Qian.
pub const ALL_GATES: [Gate; 8] = [
    Gate::Rest,
    Gate::Life,
    Gate::Harm,
    Gate::Block,
    Gate::View,
    Gate::Death,
    Gate::Fright,
    Gate::Open,
];

/// Gate resting in each palace before any rotation, indexed by palace number - 1.
const ORIGINAL_GATES: [Option<Gate>; 9] = [
    Some(Gate::Rest),
    Some(Gate::Death),
    Some(Gate::Harm),
    Some(Gate::Block),
    None,
    Some(Gate::Open),
    Some(Gate::Fright),
    Some(Gate::Life),
    Some(Gate::View),
];

impl Gate {
    /// Palace the gate occupies on an unrotated board.
    pub const fn home(self) -> Palace {
        match self {
            Self::Rest => Palace::Kan,
            Self::Life => Palace::Gen,
            Self::Harm => Palace::Zhen,
            Self::Block => Palace::Xun,
            Self::View => Palace::Li,
            Self::Death => Palace::Kun,
            Self::Fright => Palace::Dui,
            Self::Open => Palace::Qian,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Rest => Element::Water,
            Self::Life | Self::Death => Element::Earth,
            Self::Harm | Self::Block => Element::Wood,
            Self::View => Element::Fire,
            Self::Fright | Self::Open => Element::Metal,
        }
    }
}

/// Gate resting in `palace` on an unrotated board; the center reports the
/// gate of the palace hosting it (Death in Kun).
pub const fn original_gate(palace: Palace) -> Gate {
    match ORIGINAL_GATES[palace.lodged().index()] {
        Some(g) => g,
        None => Gate::Death,
    }
}

impl Symbol for Gate {
    fn glyph(self) -> &'static str {
        match self {
            Self::Rest => "休",
            Self::Life => "生",
            Self::Harm => "伤",
            Self::Block => "杜",
            Self::View => "景",
            Self::Death => "死",
            Self::Fright => "惊",
            Self::Open => "开",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Rest => "Rest",
            Self::Life => "Life",
            Self::Harm => "Harm",
            Self::Block => "Block",
            Self::View => "View",
            Self::Death => "Death",
            Self::Fright => "Fright",
            Self::Open => "Open",
        }
    }
}

serialize_as_glyph!(Gate);
