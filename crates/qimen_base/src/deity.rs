//! The deities (shen) and the tables that order them on a board.
//!
//! Rotary boards seat eight deities around the outer ring. Flying boards
//! seat nine over all palaces. A ten-name flying sequence also circulates;
//! only its first nine entries find a seat on a nine-palace board.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::QimenError;
use crate::symbol::{Symbol, find_by_label, serialize_as_glyph};

/// The deities across all tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Deity {
    Zhifu,
    Tengshe,
    Taiyin,
    Liuhe,
    Baihu,
    Xuanwu,
    Jiudi,
    Jiutian,
    Gouchen,
    Zhuque,
}

/// Every deity, each once.
pub const ALL_DEITIES: [Deity; 10] = [
    Deity::Zhifu,
    Deity::Tengshe,
    Deity::Taiyin,
    Deity::Liuhe,
    Deity::Baihu,
    Deity::Xuanwu,
    Deity::Jiudi,
    Deity::Jiutian,
    Deity::Gouchen,
    Deity::Zhuque,
];

/// Rotary-board sequence.
pub const ROTARY_DEITIES: [Deity; 8] = [
    Deity::Zhifu,
    Deity::Tengshe,
    Deity::Taiyin,
    Deity::Liuhe,
    Deity::Baihu,
    Deity::Xuanwu,
    Deity::Jiudi,
    Deity::Jiutian,
];

/// Flying-board sequence (default).
pub const FLYING_DEITIES: [Deity; 9] = [
    Deity::Zhifu,
    Deity::Tengshe,
    Deity::Taiyin,
    Deity::Liuhe,
    Deity::Gouchen,
    Deity::Zhuque,
    Deity::Jiudi,
    Deity::Jiutian,
    Deity::Xuanwu,
];

/// Ten-name flying sequence.
pub const FLYING_DEITIES_TEN: [Deity; 10] = [
    Deity::Zhifu,
    Deity::Tengshe,
    Deity::Taiyin,
    Deity::Liuhe,
    Deity::Gouchen,
    Deity::Zhuque,
    Deity::Jiudi,
    Deity::Jiutian,
    Deity::Xuanwu,
    Deity::Baihu,
];

impl Symbol for Deity {
    fn glyph(self) -> &'static str {
        match self {
            Self::Zhifu => "值符",
            Self::Tengshe => "腾蛇",
            Self::Taiyin => "太阴",
            Self::Liuhe => "六合",
            Self::Baihu => "白虎",
            Self::Xuanwu => "玄武",
            Self::Jiudi => "九地",
            Self::Jiutian => "九天",
            Self::Gouchen => "勾陈",
            Self::Zhuque => "朱雀",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Zhifu => "Zhifu",
            Self::Tengshe => "Tengshe",
            Self::Taiyin => "Taiyin",
            Self::Liuhe => "Liuhe",
            Self::Baihu => "Baihu",
            Self::Xuanwu => "Xuanwu",
            Self::Jiudi => "Jiudi",
            Self::Jiutian => "Jiutian",
            Self::Gouchen => "Gouchen",
            Self::Zhuque => "Zhuque",
        }
    }
}

impl FromStr for Deity {
    type Err = QimenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_by_label(&ALL_DEITIES, s).ok_or_else(|| QimenError::UnknownSymbol {
            kind: "deity",
            label: s.to_string(),
        })
    }
}

serialize_as_glyph!(Deity);

/// Built-in flying sequences.
///
/// Only nine deities are seated on a flying board, and the first nine
/// names of [`FLYING_DEITIES_TEN`] are [`FLYING_DEITIES`]. Both variants
/// therefore produce the same deity layer; `Ten` only names the longer
/// table a chart was read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlyingDeityVariant {
    /// [`FLYING_DEITIES`]
    #[default]
    Nine,
    /// [`FLYING_DEITIES_TEN`]
    Ten,
}

impl FlyingDeityVariant {
    pub const fn sequence(self) -> &'static [Deity] {
        match self {
            Self::Nine => &FLYING_DEITIES,
            Self::Ten => &FLYING_DEITIES_TEN,
        }
    }
}

/// Deity orderings used by the deity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeityTable {
    rotary: [Deity; 8],
    flying: [Deity; 9],
}

impl DeityTable {
    /// Default rotary and nine-name flying sequences.
    pub const STANDARD: DeityTable = DeityTable {
        rotary: ROTARY_DEITIES,
        flying: FLYING_DEITIES,
    };

    /// Build a table from arbitrary sequences.
    ///
    /// `rotary` must hold exactly 8 distinct deities. `flying` must hold at
    /// least 9; the first nine are seated and must be distinct.
    pub fn new(rotary: &[Deity], flying: &[Deity]) -> Result<Self, QimenError> {
        let rotary: [Deity; 8] = rotary.try_into().map_err(|_| {
            QimenError::InvalidDeityTable(format!(
                "rotary sequence needs 8 deities, got {}",
                rotary.len()
            ))
        })?;
        if flying.len() < 9 {
            return Err(QimenError::InvalidDeityTable(format!(
                "flying sequence needs at least 9 deities, got {}",
                flying.len()
            )));
        }
        let mut seated = [Deity::Zhifu; 9];
        seated.copy_from_slice(&flying[..9]);

        check_distinct("rotary", &rotary)?;
        check_distinct("flying", &seated)?;
        Ok(Self {
            rotary,
            flying: seated,
        })
    }

    /// Default rotary sequence with a built-in flying variant.
    pub fn with_flying_variant(variant: FlyingDeityVariant) -> Self {
        let mut table = Self::STANDARD;
        table.flying.copy_from_slice(&variant.sequence()[..9]);
        table
    }

    pub fn rotary(&self) -> &[Deity; 8] {
        &self.rotary
    }

    pub fn flying(&self) -> &[Deity; 9] {
        &self.flying
    }
}

impl Default for DeityTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn check_distinct(which: &str, seq: &[Deity]) -> Result<(), QimenError> {
    for (i, d) in seq.iter().enumerate() {
        if seq[..i].contains(d) {
            return Err(QimenError::InvalidDeityTable(format!(
                "{which} sequence repeats {}",
                d.glyph()
            )));
        }
    }
    Ok(())
}
