//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - Exactly one instruction per arm per cycle
//! - Stable execution order (by arm index)
//! - No rendering or platform dependencies

pub mod arm;
pub mod coords;
pub mod cycle;
pub mod grid;
pub mod state;

pub use arm::{Arm, Instruction, Tape};
pub use coords::{Coords, cardinal, direction};
pub use cycle::run_cycle;
pub use grid::{Atom, Grid};
pub use state::SimState;
