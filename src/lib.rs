//! Athanor - a terminal molecular-assembly puzzle machine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, arms, instruction tapes)
//! - `render`: ASCII viewport rendering for the terminal driver

pub mod render;
pub mod sim;

pub use sim::{Arm, Atom, Coords, Grid, Instruction, SimState, run_cycle};

/// Simulation constants
pub mod consts {
    /// Playfield width in cells
    pub const GRID_WIDTH: usize = 32;
    /// Playfield height in cells
    pub const GRID_HEIGHT: usize = 32;

    /// Instructions per arm tape; one slot executes per cycle
    pub const TAPE_LEN: usize = 8;

    /// Grid rows shown by the demo driver's viewport
    pub const VIEW_ROWS: std::ops::Range<i32> = 10..20;
}
