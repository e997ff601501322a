//! Athanor entry point
//!
//! Wires the hardcoded demo scenario and steps the engine once per cycle,
//! printing the viewport after each step.

use athanor::consts::{TAPE_LEN, VIEW_ROWS};
use athanor::render::{atom_glyph, render_viewport};
use athanor::sim::{Arm, Atom, Coords, SimState, run_cycle};

fn main() {
    env_logger::init();
    log::info!("athanor starting");

    print_recipe();

    let mut state = demo_scenario();
    for cycle in 0..TAPE_LEN {
        run_cycle(&mut state, cycle);
        log::debug!("cycle {} done", cycle);
        print!("{}", render_viewport(&state.grid, VIEW_ROWS));
        println!();
    }
}

/// One salt atom and one arm that drags it a cell to the right.
fn demo_scenario() -> SimState {
    use athanor::sim::Instruction::*;

    let mut state = SimState::new();
    state.grid.set_atom(Coords::new(16, 16), Atom::Salt);
    state.arms.push(Arm::new(
        Coords::new(15, 16),
        Coords::new(1, 0),
        [Grab, Extend, Release, Retract, Nop, Nop, Nop, Nop],
    ));
    state
}

/// Static recipe diagram for the demo scenario.
fn print_recipe() {
    println!("  {}───{}", atom_glyph(Atom::Fire), atom_glyph(Atom::Air));
    println!(" ╱ ╲ ╱ ╲");
    println!(
        "{}───{}───{}",
        atom_glyph(Atom::Salt),
        atom_glyph(Atom::Salt),
        atom_glyph(Atom::Salt)
    );
    println!(" ╲ ╱ ╲ ╱");
    println!("  {}───{}", atom_glyph(Atom::Earth), atom_glyph(Atom::Water));
}
