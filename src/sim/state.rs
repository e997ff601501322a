//! Simulation state owned by the driver

use serde::{Deserialize, Serialize};

use super::arm::Arm;
use super::grid::Grid;

/// Complete simulation state (deterministic, serializable).
///
/// Owns the playfield and every arm. The cycle stepper takes it by mutable
/// reference, so independent simulations can run side by side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimState {
    /// The shared playfield
    pub grid: Grid,
    /// Arms, executed in index order each cycle
    pub arms: Vec<Arm>,
}

impl SimState {
    /// Empty grid, no arms.
    pub fn new() -> Self {
        Self::default()
    }
}
