//! Star layer: the nine stars turned so the duty star sits on the hour-stem palace.

use crate::layer::Layer;
use crate::palace::Palace;
use crate::star::{Star, original_star};
use crate::style::BoardStyle;
use crate::topology::{CenterPolicy, Topology, rotate};

/// Rotate the original star table so `duty_star` lands on `to`.
///
/// On rotary boards Tianqin travels with Tianrui in Kun and the center is
/// left empty. On flying boards Tianqin is an ordinary member of the cycle.
pub fn layout_stars(style: BoardStyle, duty_star: Star, to: Palace) -> Layer<Star> {
    let (topology, center) = match style {
        BoardStyle::Rotary => (Topology::RotaryRing, CenterPolicy::Empty),
        BoardStyle::Flying => (Topology::NineCycle, CenterPolicy::Direct),
    };
    rotate(topology, center, duty_star.home(), to, |p| {
        Some(original_star(p))
    })
}
