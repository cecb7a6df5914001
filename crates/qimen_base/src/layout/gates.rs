//! Gate layer: the duty gate follows the hour branch, the others follow it.

use crate::decade::DecadeHead;
use crate::ganzhi::Branch;
use crate::gate::{Gate, original_gate};
use crate::layer::Layer;
use crate::palace::Palace;
use crate::style::{BoardStyle, DunType};
use crate::topology::{CenterPolicy, Topology, rotate};

/// Palace the duty gate moves to for this hour.
///
/// Counts the branches from the decade head to the hour branch and steps
/// that many palaces from `duty_palace` over 1..9, forward for yang dun and
/// backward for yin dun. The result may be the center.
pub fn duty_gate_target(
    dun: DunType,
    duty_palace: Palace,
    decade_head: DecadeHead,
    time_branch: Branch,
) -> Palace {
    let distance = time_branch.steps_from(decade_head.branch());
    Topology::NineCycle.step(duty_palace, distance as i32, dun.direction())
}

/// Rotate the original gate table so `duty_gate` lands on `target`.
///
/// Gates never occupy the center: a center target lodges in Kun and the
/// center palace is always empty.
pub fn layout_gates(style: BoardStyle, duty_gate: Gate, target: Palace) -> Layer<Gate> {
    let topology = match style {
        BoardStyle::Rotary => Topology::RotaryRing,
        BoardStyle::Flying => Topology::GateRing,
    };
    rotate(topology, CenterPolicy::Empty, duty_gate.home(), target, |p| {
        Some(original_gate(p))
    })
}
