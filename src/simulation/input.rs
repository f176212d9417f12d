//! Left/right key latch feeding the player's horizontal velocity
//!
//! Raw key edges come from the windowing layer. A held key contributes
//! its unit of bias exactly once and gives it back on release.

/// Key edges observed during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEdges {
    pub left_pressed: bool,
    pub left_released: bool,
    pub right_pressed: bool,
    pub right_released: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputLatch {
    pub left_held: bool,
    pub right_held: bool,
    pub bias: i32, // horizontal velocity bias, -1, 0 or 1 in practice
}

impl InputLatch {
    /// Apply one frame of edges and return the resulting bias
    ///
    /// Order: left press, right press, left release, right release. A press
    /// and release of the same key within one frame cancel out.
    pub fn apply(&mut self, edges: KeyEdges) -> i32 {
        if edges.left_pressed && !self.left_held {
            self.left_held = true;
            self.bias -= 1;
        }
        if edges.right_pressed && !self.right_held {
            self.right_held = true;
            self.bias += 1;
        }
        if edges.left_released && self.left_held {
            self.left_held = false;
            self.bias += 1;
        }
        if edges.right_released && self.right_held {
            self.right_held = false;
            self.bias -= 1;
        }
        self.bias
    }
}
