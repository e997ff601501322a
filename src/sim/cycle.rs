//! Per-cycle instruction execution
//!
//! Core stepping loop that advances every arm deterministically. The driver
//! calls [`run_cycle`] once per cycle index, in increasing order, and reads
//! the grid back between calls.

use super::arm::{Arm, Instruction};
use super::coords::direction;
use super::grid::Grid;
use super::state::SimState;

/// Execute tape slot `cycle` for every arm, in index order.
///
/// Arms run strictly one after another within a cycle, so a later arm
/// observes an earlier arm's completed effects; overlapping writes to the
/// same cell are last-write-wins.
pub fn run_cycle(state: &mut SimState, cycle: usize) {
    let SimState { grid, arms } = state;
    for arm in arms.iter_mut() {
        exec(arm.code[cycle], arm, grid);
    }
}

/// Apply a single instruction to one arm.
///
/// `Extend` and `Retract` are mirror operations: snapshot the old tip,
/// mutate the heading, then (if grabbing) relocate the atom from the old
/// tip to the new one. That ordering makes a grabbed atom ride along one
/// cell per cycle, tracking the tip instead of teleporting.
fn exec(instruction: Instruction, arm: &mut Arm, grid: &mut Grid) {
    match instruction {
        Instruction::Nop => {}
        Instruction::Grab => arm.grab = true,
        Instruction::Release => arm.grab = false,
        Instruction::Extend => {
            let start = arm.tip();
            arm.d += direction(arm.d);
            if arm.grab {
                grid.move_atom(start, arm.tip());
            }
        }
        Instruction::Retract => {
            let start = arm.tip();
            arm.d -= direction(arm.d);
            if arm.grab {
                grid.move_atom(start, arm.tip());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TAPE_LEN;
    use crate::sim::Instruction::*;
    use crate::sim::{Atom, Coords};

    fn tape(prefix: &[Instruction]) -> [Instruction; TAPE_LEN] {
        let mut code = [Nop; TAPE_LEN];
        code[..prefix.len()].copy_from_slice(prefix);
        code
    }

    #[test]
    fn test_extend_retract_restores_heading() {
        let mut state = SimState::new();
        state
            .arms
            .push(Arm::new(Coords::new(15, 16), Coords::new(1, 0), tape(&[Extend, Retract])));

        run_cycle(&mut state, 0);
        assert_eq!(state.arms[0].d, Coords::new(2, 0));

        run_cycle(&mut state, 1);
        assert_eq!(state.arms[0].d, Coords::new(1, 0));
    }

    #[test]
    fn test_extend_carries_grabbed_atom() {
        let mut state = SimState::new();
        state.grid.set_atom(Coords::new(16, 16), Atom::Salt);
        state.arms.push(Arm {
            pos: Coords::new(15, 16),
            d: Coords::new(1, 0),
            grab: true,
            code: tape(&[Extend]),
        });

        run_cycle(&mut state, 0);

        assert_eq!(state.grid.atom_at(Coords::new(17, 16)), Atom::Salt);
        assert_eq!(state.grid.atom_at(Coords::new(16, 16)), Atom::None);
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut state = SimState::new();
        state.grid.set_atom(Coords::new(16, 16), Atom::Salt);
        state
            .arms
            .push(Arm::new(Coords::new(15, 16), Coords::new(1, 0), tape(&[Release, Release])));

        let grid_before = state.grid.clone();

        run_cycle(&mut state, 0);
        assert!(!state.arms[0].grab);

        run_cycle(&mut state, 1);
        assert!(!state.arms[0].grab);
        assert_eq!(state.grid, grid_before);
    }

    #[test]
    fn test_demo_scenario_end_to_end() {
        // The hardcoded demo: grab the salt, drag it one cell right,
        // let go, pull the empty gripper back.
        let mut state = SimState::new();
        state.grid.set_atom(Coords::new(16, 16), Atom::Salt);
        state.arms.push(Arm::new(
            Coords::new(15, 16),
            Coords::new(1, 0),
            tape(&[Grab, Extend, Release, Retract]),
        ));

        // Cycle 0: grab closes on the salt, grid untouched
        run_cycle(&mut state, 0);
        assert!(state.arms[0].grab);
        assert_eq!(state.grid.atom_at(Coords::new(16, 16)), Atom::Salt);

        // Cycle 1: extend drags the salt to the new tip
        run_cycle(&mut state, 1);
        assert_eq!(state.arms[0].d, Coords::new(2, 0));
        assert_eq!(state.grid.atom_at(Coords::new(16, 16)), Atom::None);
        assert_eq!(state.grid.atom_at(Coords::new(17, 16)), Atom::Salt);

        // Cycle 2: release opens the gripper, grid untouched
        run_cycle(&mut state, 2);
        assert!(!state.arms[0].grab);
        assert_eq!(state.grid.atom_at(Coords::new(17, 16)), Atom::Salt);

        // Cycle 3: retract shortens the arm but carries nothing back
        run_cycle(&mut state, 3);
        assert_eq!(state.arms[0].d, Coords::new(1, 0));
        assert_eq!(state.grid.atom_at(Coords::new(16, 16)), Atom::None);
        assert_eq!(state.grid.atom_at(Coords::new(17, 16)), Atom::Salt);

        // Remaining tape is all nops
        for cycle in 4..TAPE_LEN {
            run_cycle(&mut state, cycle);
        }
        assert_eq!(state.arms[0].d, Coords::new(1, 0));
        assert_eq!(state.grid.atom_at(Coords::new(17, 16)), Atom::Salt);
    }

    #[test]
    fn test_same_cell_last_write_wins() {
        // Two arms drag atoms onto (7, 5) in the same cycle; the
        // higher-indexed arm runs second and its atom survives.
        let mut state = SimState::new();
        state.grid.set_atom(Coords::new(6, 5), Atom::Salt);
        state.grid.set_atom(Coords::new(8, 5), Atom::Gold);
        state.arms.push(Arm {
            pos: Coords::new(5, 5),
            d: Coords::new(1, 0),
            grab: true,
            code: tape(&[Extend]),
        });
        state.arms.push(Arm {
            pos: Coords::new(9, 5),
            d: Coords::new(-1, 0),
            grab: true,
            code: tape(&[Extend]),
        });

        run_cycle(&mut state, 0);

        assert_eq!(state.grid.atom_at(Coords::new(7, 5)), Atom::Gold);
        assert_eq!(state.grid.atom_at(Coords::new(6, 5)), Atom::None);
        assert_eq!(state.grid.atom_at(Coords::new(8, 5)), Atom::None);
    }

    #[test]
    fn test_diagonal_heading_extends_both_axes() {
        let mut state = SimState::new();
        state
            .arms
            .push(Arm::new(Coords::new(10, 10), Coords::new(1, -1), tape(&[Extend])));

        run_cycle(&mut state, 0);

        assert_eq!(state.arms[0].d, Coords::new(2, -2));
        assert_eq!(state.arms[0].tip(), Coords::new(12, 8));
    }
}
