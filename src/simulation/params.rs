//! Numerical and physical parameters for the simulation
//!
//! `Parameters` replaces the old process-wide constants:
//! - gravitational tuning constant `g`,
//! - distance floor used by the force law,
//! - collision radius of circular bodies and their drawn radius

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational tuning constant
    pub min_distance: f64, // separations below this are clamped up to it
    pub collision_radius: f64, // radius used when a body blocks the player
    pub draw_radius: f64, // radius circles are drawn with
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 0.26,
            min_distance: 1.0,
            collision_radius: 20.0,
            draw_radius: 20.0,
        }
    }
}
