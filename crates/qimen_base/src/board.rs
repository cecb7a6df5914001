//! Full board computation: resolver plus the five layer generators.

use serde::Serialize;

use crate::decade::{DecadeHead, VoidPair};
use crate::deity::{Deity, DeityTable};
use crate::error::QimenError;
use crate::ganzhi::{Branch, Stem};
use crate::gate::Gate;
use crate::layer::Layer;
use crate::layout::{duty_gate_target, layout_deities, layout_gates, layout_heaven, layout_stars};
use crate::palace::Palace;
use crate::resolver::resolve;
use crate::star::Star;
use crate::style::{BoardStyle, DunType};
use crate::symbol::Symbol;

/// Inputs of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardRequest {
    pub style: BoardStyle,
    pub dun: DunType,
    /// Method number (ju), 1..=9.
    pub method: u8,
    /// Hour stem.
    pub time_stem: Stem,
    /// Hour branch.
    pub time_branch: Branch,
}

impl BoardRequest {
    /// Build a request, rejecting method numbers outside 1..=9.
    ///
    /// The struct fields are public; callers that construct it directly
    /// skip this check and get the wrapping behaviour of [`compute_board`].
    pub fn new(
        style: BoardStyle,
        dun: DunType,
        method: u8,
        time_stem: Stem,
        time_branch: Branch,
    ) -> Result<Self, QimenError> {
        if !(1..=9).contains(&method) {
            return Err(QimenError::MethodOutOfRange(method));
        }
        Ok(Self {
            style,
            dun,
            method,
            time_stem,
            time_branch,
        })
    }
}

/// The five palace-indexed layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BoardLayers {
    /// Earth stems (dipan).
    pub earth: Layer<Stem>,
    /// Heaven stems (tianpan).
    pub heaven: Layer<Stem>,
    pub stars: Layer<Star>,
    pub gates: Layer<Gate>,
    pub deities: Layer<Deity>,
}

/// Derived metadata of a board, plus the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardMeta {
    pub decade_head: DecadeHead,
    pub duty_star: Star,
    pub duty_gate: Gate,
    pub time_stem: Stem,
    pub void: VoidPair,
    pub style: BoardStyle,
    pub dun: DunType,
    pub method: u8,
    pub time_branch: Branch,
    /// Home palace of the duty star and duty gate.
    pub duty_palace: Palace,
    /// Palace the duty gate moved to (before any center lodging).
    pub duty_gate_target: Palace,
    /// Palace the duty star moved to.
    pub time_stem_palace: Palace,
}

/// A computed board. Serializes to `{earth, heaven, stars, gates, deities, meta}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    #[serde(flatten)]
    pub layers: BoardLayers,
    pub meta: BoardMeta,
}

/// Compute a board with the standard deity tables.
pub fn compute_board(request: &BoardRequest) -> Board {
    compute_board_with(request, &DeityTable::STANDARD)
}

/// Compute a board with caller-supplied deity tables.
pub fn compute_board_with(request: &BoardRequest, deities: &DeityTable) -> Board {
    let BoardRequest {
        style,
        dun,
        method,
        time_stem,
        time_branch,
    } = *request;

    let r = resolve(style, dun, method, time_stem, time_branch);

    let heaven = layout_heaven(style, &r.earth, r.duty_star_palace, r.time_stem_palace);
    let stars = layout_stars(style, r.duty_star, r.time_stem_palace);
    let gate_target = duty_gate_target(dun, r.duty_gate_palace, r.decade_head, time_branch);
    let gates = layout_gates(style, r.duty_gate, gate_target);
    let deity_layer = layout_deities(style, dun, r.time_stem_palace, deities);

    tracing::debug!(
        style = style.name(),
        dun = dun.name(),
        method,
        time_stem = time_stem.glyph(),
        time_branch = time_branch.glyph(),
        decade_head = r.decade_head.glyph(),
        duty_star = r.duty_star.glyph(),
        duty_gate = r.duty_gate.glyph(),
        duty_palace = r.duty_star_palace.number(),
        star_to = r.time_stem_palace.number(),
        gate_to = gate_target.number(),
        "board computed"
    );

    Board {
        layers: BoardLayers {
            earth: r.earth,
            heaven,
            stars,
            gates,
            deities: deity_layer,
        },
        meta: BoardMeta {
            decade_head: r.decade_head,
            duty_star: r.duty_star,
            duty_gate: r.duty_gate,
            time_stem,
            void: r.decade_head.void(),
            style,
            dun,
            method,
            time_branch,
            duty_palace: r.duty_star_palace,
            duty_gate_target: gate_target,
            time_stem_palace: r.time_stem_palace,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_method_zero_and_ten() {
        for m in [0, 10, 255] {
            let err = BoardRequest::new(BoardStyle::Rotary, DunType::Yang, m, Stem::Jia, Branch::Zi)
                .unwrap_err();
            assert_eq!(err, QimenError::MethodOutOfRange(m));
        }
    }

    #[test]
    fn new_accepts_one_through_nine() {
        for m in 1..=9 {
            assert!(
                BoardRequest::new(BoardStyle::Flying, DunType::Yin, m, Stem::Yi, Branch::Chou)
                    .is_ok()
            );
        }
    }

    #[test]
    fn unvalidated_method_wraps() {
        let wrapped = BoardRequest {
            style: BoardStyle::Rotary,
            dun: DunType::Yang,
            method: 10,
            time_stem: Stem::Bing,
            time_branch: Branch::Yin,
        };
        let one = BoardRequest { method: 1, ..wrapped };
        assert_eq!(compute_board(&wrapped).layers, compute_board(&one).layers);
    }

    #[test]
    fn void_follows_decade_head() {
        let req = BoardRequest::new(BoardStyle::Rotary, DunType::Yang, 1, Stem::Yi, Branch::Hai)
            .unwrap();
        let board = compute_board(&req);
        assert_eq!(board.meta.decade_head, DecadeHead::JiaXu);
        assert_eq!(board.meta.void, DecadeHead::JiaXu.void());
    }

    #[test]
    fn ten_name_table_matches_nine_name_board() {
        use crate::deity::FlyingDeityVariant;

        let req = BoardRequest::new(BoardStyle::Flying, DunType::Yang, 4, Stem::Ding, Branch::Mao)
            .unwrap();
        let ten = DeityTable::with_flying_variant(FlyingDeityVariant::Ten);
        assert_eq!(compute_board_with(&req, &ten), compute_board(&req));
    }
}
