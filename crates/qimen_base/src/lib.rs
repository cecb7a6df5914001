//! QiMen Dunjia board engine.
//!
//! This crate provides:
//! - Stem, branch, star, gate and deity tables with their home palaces
//! - The three palace traversal orders and a shared rotation primitive
//! - The board resolver (decade head, duty star, duty gate)
//! - Earth, heaven, star, gate and deity layer generators for rotary and
//!   flying boards
//! - A projection of the finished board onto the 3x3 Luoshu grid
//!
//! Everything here is a pure function of its inputs and constant tables.
//!
//! ```
//! use qimen_base::{BoardRequest, BoardStyle, Branch, DunType, Palace, Stem, compute_board};
//!
//! let req = BoardRequest::new(BoardStyle::Rotary, DunType::Yang, 1, Stem::Yi, Branch::Hai)?;
//! let board = compute_board(&req);
//! assert_eq!(board.meta.decade_head.glyph(), "甲戌");
//! assert_eq!(board.layers.heaven.get(Palace::Li), Some(Stem::Ji));
//! # Ok::<(), qimen_base::QimenError>(())
//! ```

pub mod board;
pub mod decade;
pub mod deity;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod gate;
pub mod grid;
pub mod layer;
pub mod layout;
pub mod palace;
pub mod resolver;
pub mod star;
pub mod style;
pub mod symbol;
pub mod topology;

pub use board::{Board, BoardLayers, BoardMeta, BoardRequest, compute_board, compute_board_with};
pub use decade::{ALL_DECADE_HEADS, DecadeHead, FALLBACK_DECADE_HEAD, VoidPair};
pub use deity::{
    ALL_DEITIES, Deity, DeityTable, FLYING_DEITIES, FLYING_DEITIES_TEN, FlyingDeityVariant,
    ROTARY_DEITIES,
};
pub use element::{ALL_ELEMENTS, Element};
pub use error::QimenError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, Branch, Stem};
pub use gate::{ALL_GATES, Gate, original_gate};
pub use grid::{GridCell, grid_cells, layers_from_grid};
pub use layer::Layer;
pub use layout::{
    EARTH_SEQUENCE, duty_gate_target, layout_deities, layout_earth, layout_gates, layout_heaven,
    layout_stars,
};
pub use palace::{ALL_PALACES, CENTER_HOST, GRID_TO_PALACE, Palace};
pub use resolver::{Resolution, resolve};
pub use star::{ALL_STARS, Star, original_star};
pub use style::{BoardStyle, DunType};
pub use symbol::Symbol;
pub use topology::{CenterPolicy, Direction, Topology, rotate, walk};
