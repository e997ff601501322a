//! Arms and their instruction tapes

use serde::{Deserialize, Serialize};

use super::coords::Coords;
use crate::consts::TAPE_LEN;

/// One step of an arm's program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Instruction {
    /// Do nothing this cycle
    #[default]
    Nop,
    /// Close the gripper on whatever sits at the tip
    Grab,
    /// Open the gripper
    Release,
    /// Lengthen the arm one step along its heading
    Extend,
    /// Shorten the arm one step along its heading
    Retract,
}

/// An arm's program, one instruction per cycle index.
pub type Tape = [Instruction; TAPE_LEN];

/// A pivoted gripper arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arm {
    /// Pivot cell; fixed for the arm's lifetime
    pub pos: Coords,
    /// Heading and extension: the tip sits at `pos + d`
    pub d: Coords,
    /// Whether the gripper holds the atom at its tip
    pub grab: bool,
    /// Instruction tape
    pub code: Tape,
}

impl Arm {
    /// A new arm with an open gripper.
    pub fn new(pos: Coords, d: Coords, code: Tape) -> Self {
        Self {
            pos,
            d,
            grab: false,
            code,
        }
    }

    /// Grid cell currently under the gripper.
    #[inline]
    pub fn tip(&self) -> Coords {
        self.pos + self.d
    }
}
