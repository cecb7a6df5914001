//! Palace-indexed layers of a board.

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::palace::{ALL_PALACES, Palace};
use crate::symbol::Symbol;

/// A total mapping palace → optional symbol.
///
/// An empty cell means the layer places nothing in that palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layer<T> {
    cells: [Option<T>; 9],
}

impl<T: Copy> Layer<T> {
    /// A layer with every palace empty.
    pub fn empty() -> Self {
        Self { cells: [None; 9] }
    }

    pub fn get(&self, palace: Palace) -> Option<T> {
        self.cells[palace.index()]
    }

    pub(crate) fn set(&mut self, palace: Palace, value: Option<T>) {
        self.cells[palace.index()] = value;
    }

    /// `(palace, value)` for all nine palaces in numeric order.
    pub fn iter(&self) -> impl Iterator<Item = (Palace, Option<T>)> + '_ {
        ALL_PALACES.iter().map(|&p| (p, self.get(p)))
    }

    /// Occupied palaces only.
    pub fn occupied(&self) -> impl Iterator<Item = (Palace, T)> + '_ {
        self.iter().filter_map(|(p, v)| v.map(|v| (p, v)))
    }

    /// Number of occupied palaces.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy + PartialEq> Layer<T> {
    /// First palace (in numeric order) holding `value`.
    pub fn find(&self, value: T) -> Option<Palace> {
        self.occupied().find(|&(_, v)| v == value).map(|(p, _)| p)
    }
}

impl<T: Copy> Default for Layer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Copy> FromIterator<(Palace, T)> for Layer<T> {
    fn from_iter<I: IntoIterator<Item = (Palace, T)>>(iter: I) -> Self {
        let mut layer = Self::empty();
        for (p, v) in iter {
            layer.set(p, Some(v));
        }
        layer
    }
}

impl<T> Index<Palace> for Layer<T> {
    type Output = Option<T>;

    fn index(&self, palace: Palace) -> &Option<T> {
        &self.cells[palace.index()]
    }
}

/// Serialized as `{"1": glyph, ..., "9": glyph}`, empty string for an empty palace.
impl<T: Symbol> Serialize for Layer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (palace, value) in self.iter() {
            let key = palace.number().to_string();
            map.serialize_entry(&key, value.map_or("", Symbol::glyph))?;
        }
        map.end()
    }
}
