//! Fixed-frame explicit Euler integrator
//!
//! One call advances the whole registry by one frame:
//! gravity -> keyboard bias -> free bodies drift -> gated player move.
//! There is no time step; velocities are in units per frame.

use super::forces::simulate_gravity;
use super::input::KeyEdges;
use super::observer::StepObserver;
use super::params::Parameters;
use super::player::{MoveOutcome, PlayerController};
use super::states::System;

/// Summary of one frame, mostly for tests and headless runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub pair_evaluations: usize,
    pub bias: i32,
    pub player: MoveOutcome,
}

/// Advance every body except the player by its velocity: x += v
pub fn euler_drift<O>(sys: &mut System, skip: usize, observer: &mut O)
where
    O: StepObserver + ?Sized,
{
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        if i == skip {
            continue;
        }
        b.x += b.v;
        observer.body_moved(i, b);
    }
}

/// Step the system by one frame
pub fn euler_frame<O>(
    sys: &mut System,
    player: &mut PlayerController,
    params: &Parameters,
    edges: KeyEdges,
    observer: &mut O,
) -> FrameReport
where
    O: StepObserver + ?Sized,
{
    let pair_evaluations = simulate_gravity(sys, params, observer);

    let bias = player.apply_input(sys, edges);

    // others move first so the player tests against where they are now
    euler_drift(sys, player.index, observer);
    let outcome = player.update(sys, params, observer);

    sys.frame += 1;

    FrameReport {
        pair_evaluations,
        bias,
        player: outcome,
    }
}
