//! Projection of a board onto the 3x3 display grid.
//!
//! The projection only re-indexes: cell `i` (row-major) shows palace
//! `GRID_TO_PALACE[i]` with the five layer values found there.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::board::{Board, BoardLayers};
use crate::deity::Deity;
use crate::ganzhi::Stem;
use crate::gate::Gate;
use crate::palace::{GRID_TO_PALACE, Palace};
use crate::star::Star;
use crate::symbol::Symbol;

/// One grid cell and everything the board places in its palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
    pub palace: Palace,
    pub earth: Option<Stem>,
    pub heaven: Option<Stem>,
    pub star: Option<Star>,
    pub gate: Option<Gate>,
    pub deity: Option<Deity>,
}

impl GridCell {
    /// Identifier of the cell in the display grid, `cell-<row>-<col>`.
    pub fn cell_id(&self) -> String {
        format!("cell-{}-{}", self.row, self.col)
    }
}

/// The nine cells of `board` in row-major order.
pub fn grid_cells(board: &Board) -> [GridCell; 9] {
    let layers = &board.layers;
    std::array::from_fn(|cell| {
        let palace = GRID_TO_PALACE[cell];
        GridCell {
            row: (cell / 3) as u8,
            col: (cell % 3) as u8,
            palace,
            earth: layers.earth.get(palace),
            heaven: layers.heaven.get(palace),
            star: layers.stars.get(palace),
            gate: layers.gates.get(palace),
            deity: layers.deities.get(palace),
        }
    })
}

/// Rebuild the palace-indexed layers from grid cells.
///
/// Inverse of [`grid_cells`]; a palace missing from `cells` stays empty.
pub fn layers_from_grid(cells: &[GridCell]) -> BoardLayers {
    let mut layers = BoardLayers::default();
    for cell in cells {
        layers.earth.set(cell.palace, cell.earth);
        layers.heaven.set(cell.palace, cell.heaven);
        layers.stars.set(cell.palace, cell.star);
        layers.gates.set(cell.palace, cell.gate);
        layers.deities.set(cell.palace, cell.deity);
    }
    layers
}

fn glyph_or_empty<T: Symbol>(value: Option<T>) -> &'static str {
    value.map_or("", Symbol::glyph)
}

impl Serialize for GridCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("GridCell", 9)?;
        s.serialize_field("cell_id", &self.cell_id())?;
        s.serialize_field("row", &self.row)?;
        s.serialize_field("col", &self.col)?;
        s.serialize_field("palace", &self.palace)?;
        s.serialize_field("earth", glyph_or_empty(self.earth))?;
        s.serialize_field("heaven", glyph_or_empty(self.heaven))?;
        s.serialize_field("star", glyph_or_empty(self.star))?;
        s.serialize_field("gate", glyph_or_empty(self.gate))?;
        s.serialize_field("deity", glyph_or_empty(self.deity))?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardRequest, compute_board};
    use crate::ganzhi::Branch;
    use crate::style::{BoardStyle, DunType};

    fn sample() -> Board {
        let req = BoardRequest::new(BoardStyle::Rotary, DunType::Yang, 1, Stem::Yi, Branch::Hai)
            .unwrap();
        compute_board(&req)
    }

    #[test]
    fn cells_follow_luoshu_layout() {
        let cells = grid_cells(&sample());
        let numbers: Vec<u8> = cells.iter().map(|c| c.palace.number()).collect();
        assert_eq!(numbers, vec![4, 9, 2, 3, 5, 7, 8, 1, 6]);
        assert_eq!(cells[0].cell_id(), "cell-0-0");
        assert_eq!(cells[7].cell_id(), "cell-2-1");
    }

    #[test]
    fn cell_position_matches_palace() {
        for cell in grid_cells(&sample()) {
            assert_eq!(cell.palace.grid_position(), (cell.row, cell.col));
        }
    }

    #[test]
    fn center_cell_shows_center_values() {
        let board = sample();
        let center = grid_cells(&board)[4];
        assert_eq!(center.palace, Palace::Center);
        assert_eq!(center.earth, Some(Stem::Ren));
        assert_eq!(center.heaven, board.layers.heaven.get(Palace::Kun));
        assert_eq!(center.star, None);
        assert_eq!(center.gate, None);
        assert_eq!(center.deity, None);
    }

    #[test]
    fn partial_cells_leave_rest_empty() {
        let cells = grid_cells(&sample());
        let layers = layers_from_grid(&cells[..1]);
        assert_eq!(layers.earth.len(), 1);
        assert!(layers.earth.get(Palace::Xun).is_some());
    }
}
