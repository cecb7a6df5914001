//! Heaven layer: the earth stems carried along by the duty star.

use crate::ganzhi::Stem;
use crate::layer::Layer;
use crate::palace::{CENTER_HOST, Palace};
use crate::style::BoardStyle;
use crate::topology::{CenterPolicy, Topology, rotate};

/// Rotate the earth layer so the stem under the duty star's home palace
/// (`from`) lands on the hour-stem palace (`to`).
///
/// Rotary boards turn the outer ring and the center repeats Kun. Flying
/// boards move all nine palaces, center included.
pub fn layout_heaven(
    style: BoardStyle,
    earth: &Layer<Stem>,
    from: Palace,
    to: Palace,
) -> Layer<Stem> {
    let (topology, center) = match style {
        BoardStyle::Rotary => (Topology::RotaryRing, CenterPolicy::MergeTo(CENTER_HOST)),
        BoardStyle::Flying => (Topology::NineCycle, CenterPolicy::Direct),
    };
    rotate(topology, center, from, to, |p| earth.get(p))
}
