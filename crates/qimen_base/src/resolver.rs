//! Board resolver: earth layer, decade head, duty star and gate, hour-stem palace.
//!
//! The resolver is total. A stem/branch pair that names no decade falls
//! back to 甲子, and an hour stem of 甲 (which never appears on the earth
//! layer) is looked up through the stem it hides under.

use crate::decade::DecadeHead;
use crate::ganzhi::{Branch, Stem};
use crate::gate::{Gate, original_gate};
use crate::layer::Layer;
use crate::layout::layout_earth;
use crate::palace::Palace;
use crate::star::{Star, original_star};
use crate::style::{BoardStyle, DunType};
use crate::symbol::Symbol;

/// Everything the layer generators need, derived from the five inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Earth layer (dipan).
    pub earth: Layer<Stem>,
    /// Decade head of the hour.
    pub decade_head: DecadeHead,
    /// Home palace of the duty star; never the center.
    pub duty_star_palace: Palace,
    /// Home palace of the duty gate; same palace as the duty star.
    pub duty_gate_palace: Palace,
    /// Duty star (zhifu).
    pub duty_star: Star,
    /// Duty gate (zhishi).
    pub duty_gate: Gate,
    /// Earth palace of the hour stem. Rotary boards lodge a center result in Kun.
    pub time_stem_palace: Palace,
}

/// Resolve the board anchors for one hour.
///
/// `method` is nominally 1..=9 and is not re-validated here.
pub fn resolve(
    style: BoardStyle,
    dun: DunType,
    method: u8,
    time_stem: Stem,
    time_branch: Branch,
) -> Resolution {
    let earth = layout_earth(dun, method);
    let decade_head = DecadeHead::from_hour(time_stem, time_branch);

    let duty_palace = stem_palace(&earth, decade_head.hidden_stem()).lodged();

    let lookup_stem = if time_stem == Stem::Jia {
        tracing::trace!(
            decade_head = decade_head.glyph(),
            hidden = decade_head.hidden_stem().glyph(),
            "hour stem 甲 resolved through its hidden stem"
        );
        decade_head.hidden_stem()
    } else {
        time_stem
    };
    let time_stem_palace = match style {
        BoardStyle::Rotary => stem_palace(&earth, lookup_stem).lodged(),
        BoardStyle::Flying => stem_palace(&earth, lookup_stem),
    };

    Resolution {
        earth,
        decade_head,
        duty_star_palace: duty_palace,
        duty_gate_palace: duty_palace,
        duty_star: original_star(duty_palace),
        duty_gate: original_gate(duty_palace),
        time_stem_palace,
    }
}

/// Earth palace holding `stem`. Every non-Jia stem is on the earth layer
/// exactly once; Kan is returned for a stem that is not.
fn stem_palace(earth: &Layer<Stem>, stem: Stem) -> Palace {
    earth.find(stem).unwrap_or(Palace::Kan)
}
