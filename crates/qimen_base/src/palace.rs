//! The nine palaces of the Luoshu square and their grid placement.
//!
//! Palaces are numbered 1-9 by the Luoshu magic square; 5 is the center.
//! On a 3x3 grid read row-major from the top-left (south on top):
//!
//! ```text
//!   4 巽 | 9 离 | 2 坤
//!   3 震 | 5 中 | 7 兑
//!   8 艮 | 1 坎 | 6 乾
//! ```

use serde::{Serialize, Serializer};

/// One of the nine palaces, named by its trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Palace {
    Kan = 1,
    Kun = 2,
    Zhen = 3,
    Xun = 4,
    Center = 5,
    Qian = 6,
    Dui = 7,
    Gen = 8,
    Li = 9,
}

/// All palaces in numeric order (index 0 = palace 1).
pub const ALL_PALACES: [Palace; 9] = [
    Palace::Kan,
    Palace::Kun,
    Palace::Zhen,
    Palace::Xun,
    Palace::Center,
    Palace::Qian,
    Palace::Dui,
    Palace::Gen,
    Palace::Li,
];

/// Palace that hosts the center whenever a layer cannot address palace 5.
pub const CENTER_HOST: Palace = Palace::Kun;

/// Grid cell (row-major, 0-8) → palace.
pub const GRID_TO_PALACE: [Palace; 9] = [
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Zhen,
    Palace::Center,
    Palace::Dui,
    Palace::Gen,
    Palace::Kan,
    Palace::Qian,
];

/// Palace number - 1 → grid cell (row-major, 0-8). Inverse of [`GRID_TO_PALACE`].
const PALACE_TO_GRID: [usize; 9] = [7, 2, 3, 0, 4, 8, 5, 6, 1];

impl Palace {
    /// Luoshu number (1-9).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// 0-based index (palace 1 = 0).
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Palace from its Luoshu number; `None` outside 1..=9.
    pub const fn from_number(n: u8) -> Option<Palace> {
        match n {
            1..=9 => Some(ALL_PALACES[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Palace at a 0-based position of the numeric cycle, wrapping in both directions.
    pub const fn from_cycle(pos: i32) -> Palace {
        ALL_PALACES[pos.rem_euclid(9) as usize]
    }

    /// Trigram glyph.
    pub const fn trigram(self) -> &'static str {
        match self {
            Self::Kan => "坎",
            Self::Kun => "坤",
            Self::Zhen => "震",
            Self::Xun => "巽",
            Self::Center => "中",
            Self::Qian => "乾",
            Self::Dui => "兑",
            Self::Gen => "艮",
            Self::Li => "离",
        }
    }

    /// Romanized trigram name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kan => "Kan",
            Self::Kun => "Kun",
            Self::Zhen => "Zhen",
            Self::Xun => "Xun",
            Self::Center => "Center",
            Self::Qian => "Qian",
            Self::Dui => "Dui",
            Self::Gen => "Gen",
            Self::Li => "Li",
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }

    /// The center folds onto [`CENTER_HOST`]; every other palace is itself.
    pub const fn lodged(self) -> Palace {
        if self.is_center() { CENTER_HOST } else { self }
    }

    /// Grid cell (row-major, 0-8) showing this palace.
    pub const fn grid_index(self) -> usize {
        PALACE_TO_GRID[self.index()]
    }

    /// `(row, col)` of this palace on the 3x3 grid.
    pub const fn grid_position(self) -> (u8, u8) {
        let cell = self.grid_index() as u8;
        (cell / 3, cell % 3)
    }

    /// Palace shown at a grid cell (row-major, 0-8).
    pub const fn at_grid(cell: usize) -> Option<Palace> {
        if cell < 9 { Some(GRID_TO_PALACE[cell]) } else { None }
    }
}

impl Serialize for Palace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, p) in ALL_PALACES.iter().enumerate() {
            assert_eq!(p.number() as usize, i + 1);
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn from_number_bounds() {
        assert_eq!(Palace::from_number(0), None);
        assert_eq!(Palace::from_number(1), Some(Palace::Kan));
        assert_eq!(Palace::from_number(9), Some(Palace::Li));
        assert_eq!(Palace::from_number(10), None);
    }

    #[test]
    fn from_cycle_wraps_both_ways() {
        assert_eq!(Palace::from_cycle(0), Palace::Kan);
        assert_eq!(Palace::from_cycle(9), Palace::Kan);
        assert_eq!(Palace::from_cycle(-1), Palace::Li);
        assert_eq!(Palace::from_cycle(-10), Palace::Li);
    }

    #[test]
    fn grid_tables_are_inverse() {
        for (cell, p) in GRID_TO_PALACE.iter().enumerate() {
            assert_eq!(p.grid_index(), cell);
        }
        for p in ALL_PALACES {
            assert_eq!(GRID_TO_PALACE[p.grid_index()], p);
        }
    }

    #[test]
    fn luoshu_rows_sum_to_15() {
        for row in 0..3 {
            let sum: u8 = (0..3).map(|c| GRID_TO_PALACE[row * 3 + c].number()).sum();
            assert_eq!(sum, 15);
        }
        for col in 0..3 {
            let sum: u8 = (0..3).map(|r| GRID_TO_PALACE[r * 3 + col].number()).sum();
            assert_eq!(sum, 15);
        }
    }

    #[test]
    fn center_sits_mid_grid() {
        assert_eq!(Palace::Center.grid_position(), (1, 1));
        assert_eq!(Palace::Kan.grid_position(), (2, 1));
        assert_eq!(Palace::Li.grid_position(), (0, 1));
    }

    #[test]
    fn lodged_only_moves_center() {
        assert_eq!(Palace::Center.lodged(), Palace::Kun);
        for p in ALL_PALACES.iter().filter(|p| !p.is_center()) {
            assert_eq!(p.lodged(), *p);
        }
    }
}
