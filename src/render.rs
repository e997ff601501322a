//! Terminal rendering of the playfield
//!
//! Maps each atom type to a glyph (ANSI-colored for the classical
//! substances) and formats a rectangular viewport of the grid as text.
//! Display only; the sim module never depends on this.

use std::ops::Range;

use crate::consts::GRID_WIDTH;
use crate::sim::{Atom, Coords, Grid};

/// Terminal glyph for one atom type.
pub fn atom_glyph(atom: Atom) -> &'static str {
    match atom {
        Atom::None => " ",
        Atom::Salt => "ө",
        Atom::Air => "\x1b[36;9m▲\x1b[m",
        Atom::Earth => "\x1b[32;9m▼\x1b[m",
        Atom::Fire => "\x1b[31m▲\x1b[m",
        Atom::Water => "\x1b[34m▼\x1b[m",
        Atom::Mercury => "\x1b[33m☿\x1b[m",
        Atom::Gold => "\x1b[33m◉\x1b[m",
        Atom::Silver => "\x1b[37m◉\x1b[m",
        Atom::Copper => "\x1b[31m◉\x1b[m",
        Atom::Iron => "\x1b[35m◉\x1b[m",
        Atom::Tin => "\x1b[36m◉\x1b[m",
        Atom::Lead => "\x1b[90m◉\x1b[m",
        Atom::Life => "\x1b[92m❋\x1b[m",
        Atom::Death => "\x1b[91m❋\x1b[m",
        Atom::Repeat => "⟳",
    }
}

/// Format the given rows of the grid, one text line per row.
pub fn render_viewport(grid: &Grid, rows: Range<i32>) -> String {
    let mut out = String::new();
    for y in rows {
        for x in 0..GRID_WIDTH as i32 {
            out.push_str(atom_glyph(grid.atom_at(Coords::new(x, y))));
        }
        out.push('\n');
    }
    out
}
