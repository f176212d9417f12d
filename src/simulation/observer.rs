//! Observability hook for the frame stepper
//!
//! The stepper never prints. Anything that wants to watch a frame
//! (logging, tests counting force evaluations) implements [`StepObserver`]
//! and overrides the callbacks it cares about. `()` ignores everything.

use crate::simulation::states::{Body, NVec2};

pub trait StepObserver {
    /// Force `force` acting on body `i` towards body `j` was just applied
    fn pair_force(&mut self, _i: usize, _j: usize, _force: NVec2) {}

    /// A free (non-player) body advanced to its new position
    fn body_moved(&mut self, _i: usize, _body: &Body) {}

    /// The player passed the collision gate and moved
    fn player_moved(&mut self, _player: usize, _body: &Body) {}

    /// The player's candidate position overlapped `target`; it stays put
    fn player_blocked(&mut self, _player: usize, _target: usize) {}
}

impl StepObserver for () {}

/// Forwards every callback to the `log` facade
///
/// Per-pair and per-body records go to `trace`, collisions to `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl StepObserver for LogObserver {
    fn pair_force(&mut self, i: usize, j: usize, force: NVec2) {
        log::trace!("gravity: pair ({i}, {j}) force = ({:.6}, {:.6})", force.x, force.y);
    }

    fn body_moved(&mut self, i: usize, body: &Body) {
        log::trace!("body {i} '{}' at ({:.3}, {:.3})", body.name, body.x.x, body.x.y);
    }

    fn player_moved(&mut self, _player: usize, body: &Body) {
        log::trace!("player '{}' velocity ({:.3}, {:.3})", body.name, body.v.x, body.v.y);
    }

    fn player_blocked(&mut self, player: usize, target: usize) {
        log::debug!("collision: player {player} blocked by body {target}");
    }
}
