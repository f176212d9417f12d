//! The player-controlled body
//!
//! The player is an ordinary [`Body`] in the registry. `PlayerController`
//! holds what only the player has: its registry index, the sprite box used
//! for collisions and the keyboard latch. Each frame the player either
//! moves by its full velocity or, on contact, stops dead where it is.

use crate::simulation::collision::{circle_rect_overlap, Rect};
use crate::simulation::input::{InputLatch, KeyEdges};
use crate::simulation::observer::StepObserver;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// What happened to the player during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked { target: usize },
}

#[derive(Debug, Clone)]
pub struct PlayerController {
    pub index: usize, // position of the player's body in `System::bodies`
    pub sprite_size: NVec2, // width, height of the collision box
    pub latch: InputLatch,
}

impl PlayerController {
    pub fn new(index: usize, sprite_size: NVec2) -> Self {
        Self {
            index,
            sprite_size,
            latch: InputLatch::default(),
        }
    }

    pub fn body<'a>(&self, sys: &'a System) -> &'a Body {
        &sys.bodies[self.index]
    }

    /// Collision box at the player's current position
    pub fn bounding_box(&self, sys: &System) -> Rect {
        Rect::new(self.body(sys).x, self.sprite_size)
    }

    /// Run the key latch and layer its bias onto the horizontal velocity
    pub fn apply_input(&mut self, sys: &mut System, edges: KeyEdges) -> i32 {
        let bias = self.latch.apply(edges);
        sys.bodies[self.index].v.x += f64::from(bias);
        bias
    }

    /// Collision-gated Euler step
    ///
    /// The box at `x + v` is tested against every other collidable body.
    /// The first hit zeroes the velocity and skips the move for this frame.
    pub fn update<O>(&self, sys: &mut System, params: &Parameters, observer: &mut O) -> MoveOutcome
    where
        O: StepObserver + ?Sized,
    {
        let me = &sys.bodies[self.index];
        let candidate = Rect::new(me.x + me.v, self.sprite_size);

        let hit = sys
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, b)| *i != self.index && b.can_collide)
            .find(|(_, b)| circle_rect_overlap(b.x, params.collision_radius, &candidate))
            .map(|(i, _)| i);

        let player = &mut sys.bodies[self.index];
        match hit {
            Some(target) => {
                player.v = NVec2::zeros();
                observer.player_blocked(self.index, target);
                MoveOutcome::Blocked { target }
            }
            None => {
                player.x += player.v;
                observer.player_moved(self.index, player);
                MoveOutcome::Moved
            }
        }
    }
}
