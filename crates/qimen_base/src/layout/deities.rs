//! Deity layer: the deity sequence dealt from the palace the duty star lands on.

use crate::deity::{Deity, DeityTable};
use crate::layer::Layer;
use crate::palace::Palace;
use crate::style::{BoardStyle, DunType};
use crate::topology::{CenterPolicy, Topology, walk};

/// Seat the deities starting with Zhifu at `anchor`.
///
/// Rotary boards deal the eight-deity sequence around the ring (a center
/// anchor lodges in Kun) and leave the center empty. Flying boards deal
/// the nine-deity sequence over 1..9 from the raw anchor.
pub fn layout_deities(
    style: BoardStyle,
    dun: DunType,
    anchor: Palace,
    table: &DeityTable,
) -> Layer<Deity> {
    match style {
        BoardStyle::Rotary => walk(
            Topology::RotaryRing,
            CenterPolicy::Empty,
            anchor,
            dun.direction(),
            table.rotary(),
        ),
        BoardStyle::Flying => walk(
            Topology::NineCycle,
            CenterPolicy::Direct,
            anchor,
            dun.direction(),
            table.flying(),
        ),
    }
}
