//! The playfield: a fixed grid of atom cells
//!
//! Cells are addressed by [`Coords`] with y selecting the row and x the
//! column. Coordinates are expected to lie in [0, GRID_WIDTH) x
//! [0, GRID_HEIGHT); accesses outside that range panic via the slice
//! bounds check rather than being validated here.

use serde::{Deserialize, Serialize};

use super::coords::Coords;
use crate::consts::{GRID_HEIGHT, GRID_WIDTH};

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Atom {
    /// Empty cell
    #[default]
    None,
    Salt,
    Air,
    Earth,
    Fire,
    Water,
    Mercury,
    Gold,
    Silver,
    Copper,
    Iron,
    Tin,
    Lead,
    Life,
    Death,
    Repeat,
}

impl Atom {
    /// True for the empty cell marker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Atom::None)
    }
}

/// The 32x32 playfield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Atom; GRID_WIDTH]; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self {
            cells: [[Atom::None; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    /// Read the cell at `coords`.
    #[inline]
    pub fn atom_at(&self, coords: Coords) -> Atom {
        self.cells[coords.y as usize][coords.x as usize]
    }

    /// Write one cell directly (scenario setup).
    #[inline]
    pub fn set_atom(&mut self, coords: Coords, atom: Atom) {
        self.cells[coords.y as usize][coords.x as usize] = atom;
    }

    /// Relocate whatever is at `start` to `end`, clearing `start`.
    ///
    /// `end` is overwritten unconditionally; an atom already sitting there
    /// is lost.
    pub fn move_atom(&mut self, start: Coords, end: Coords) {
        let atom = self.atom_at(start);
        self.set_atom(end, atom);
        self.set_atom(start, Atom::None);
    }
}
