//! Decade heads (xunshou), their hidden stems and void branches.
//!
//! Every stem-branch pair belongs to one of six ten-hour decades, each
//! opened by a Jia stem. The decade is identified by the branch distance
//! `(branch - stem) mod 12`, which is always even for a valid pair.
//! Jia never appears on the board; it hides under the decade's "six
//! ordinary" stem (liuyi).

use serde::{Serialize, Serializer};

use crate::ganzhi::{Branch, Stem};
use crate::symbol::Symbol;

/// The six decade heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DecadeHead {
    JiaZi,
    JiaXu,
    JiaShen,
    JiaWu,
    JiaChen,
    JiaYin,
}

/// All six decade heads in sexagenary order.
pub const ALL_DECADE_HEADS: [DecadeHead; 6] = [
    DecadeHead::JiaZi,
    DecadeHead::JiaXu,
    DecadeHead::JiaShen,
    DecadeHead::JiaWu,
    DecadeHead::JiaChen,
    DecadeHead::JiaYin,
];

/// Decade head used when a stem-branch pair has no decade.
pub const FALLBACK_DECADE_HEAD: DecadeHead = DecadeHead::JiaZi;

impl DecadeHead {
    /// Decade containing `(stem, branch)`, or `None` for a pair of
    /// mismatched parity (which names no real hour).
    pub const fn lookup(stem: Stem, branch: Branch) -> Option<DecadeHead> {
        let diff = (branch.index() + 12 - stem.index()) % 12;
        match diff {
            0 => Some(Self::JiaZi),
            10 => Some(Self::JiaXu),
            8 => Some(Self::JiaShen),
            6 => Some(Self::JiaWu),
            4 => Some(Self::JiaChen),
            2 => Some(Self::JiaYin),
            _ => None,
        }
    }

    /// Decade containing `(stem, branch)`, falling back to
    /// [`FALLBACK_DECADE_HEAD`] for mismatched pairs.
    pub fn from_hour(stem: Stem, branch: Branch) -> DecadeHead {
        Self::lookup(stem, branch).unwrap_or_else(|| {
            tracing::warn!(
                stem = stem.glyph(),
                branch = branch.glyph(),
                fallback = FALLBACK_DECADE_HEAD.glyph(),
                "stem/branch pair names no decade; using fallback decade head"
            );
            FALLBACK_DECADE_HEAD
        })
    }

    /// Branch paired with Jia at the head of the decade.
    pub const fn branch(self) -> Branch {
        match self {
            Self::JiaZi => Branch::Zi,
            Self::JiaXu => Branch::Xu,
            Self::JiaShen => Branch::Shen,
            Self::JiaWu => Branch::Wu,
            Self::JiaChen => Branch::Chen,
            Self::JiaYin => Branch::Yin,
        }
    }

    /// The liuyi stem that carries the hidden Jia on the board.
    pub const fn hidden_stem(self) -> Stem {
        match self {
            Self::JiaZi => Stem::Wu,
            Self::JiaXu => Stem::Ji,
            Self::JiaShen => Stem::Geng,
            Self::JiaWu => Stem::Xin,
            Self::JiaChen => Stem::Ren,
            Self::JiaYin => Stem::Gui,
        }
    }

    /// The two branches left without a stem in this decade (kongwang).
    pub const fn void(self) -> VoidPair {
        let (first, second) = match self {
            Self::JiaZi => (Branch::Xu, Branch::Hai),
            Self::JiaXu => (Branch::Shen, Branch::You),
            Self::JiaShen => (Branch::Wu, Branch::Wei),
            Self::JiaWu => (Branch::Chen, Branch::Si),
            Self::JiaChen => (Branch::Yin, Branch::Mao),
            Self::JiaYin => (Branch::Zi, Branch::Chou),
        };
        VoidPair { first, second }
    }

    /// Two-glyph name, e.g. "甲子".
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::JiaZi => "甲子",
            Self::JiaXu => "甲戌",
            Self::JiaShen => "甲申",
            Self::JiaWu => "甲午",
            Self::JiaChen => "甲辰",
            Self::JiaYin => "甲寅",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::JiaZi => "Jia-Zi",
            Self::JiaXu => "Jia-Xu",
            Self::JiaShen => "Jia-Shen",
            Self::JiaWu => "Jia-Wu",
            Self::JiaChen => "Jia-Chen",
            Self::JiaYin => "Jia-Yin",
        }
    }
}

impl Serialize for DecadeHead {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.glyph())
    }
}

/// The two void branches of a decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoidPair {
    pub first: Branch,
    pub second: Branch,
}

impl VoidPair {
    pub fn contains(&self, branch: Branch) -> bool {
        self.first == branch || self.second == branch
    }

    /// Both glyphs joined, e.g. "戌亥".
    pub fn glyphs(&self) -> String {
        format!("{}{}", self.first.glyph(), self.second.glyph())
    }
}

impl Serialize for VoidPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.glyphs())
    }
}
