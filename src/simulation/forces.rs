//! Pairwise gravity for the solar-system demo
//!
//! The force law is deliberately simple: `F = g * m1 * m2 / max(d, d_min)^2`
//! along the line joining the two bodies. It is applied as a velocity
//! impulse once per frame (no time step), scaled by each body's own mass.

use crate::simulation::observer::StepObserver;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Which (i, j) pairs the gravity pass visits
///
/// Only `UpperTriangular` is a real mode. `FullMatrix` reproduces an old
/// defect (every ordered pair, self-pairs included, so each force lands
/// twice) and exists for regression tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairIteration {
    #[default]
    UpperTriangular,
    #[cfg(test)]
    FullMatrix,
}

/// Gravity with a hard floor on the separation distance
#[derive(Debug, Clone, Copy)]
pub struct FlooredGravity {
    pub g: f64, // tuning constant
    pub min_distance: f64, // separation floor
}

impl From<&Parameters> for FlooredGravity {
    fn from(p: &Parameters) -> Self {
        Self {
            g: p.g,
            min_distance: p.min_distance,
        }
    }
}

impl FlooredGravity {
    /// Force felt by `a` towards `b`
    pub fn force(&self, a: &Body, b: &Body) -> NVec2 {
        // r points from a to b
        let r = b.x - a.x;
        let d = r.norm().max(self.min_distance);
        let magnitude = self.g * a.m * b.m / (d * d);
        // zero displacement has no direction, so no force
        r.try_normalize(0.0).unwrap_or_else(NVec2::zeros) * magnitude
    }
}

/// Apply one frame of gravity to every body's velocity
///
/// Returns the number of force evaluations performed: n(n-1)/2.
pub fn simulate_gravity<O>(sys: &mut System, params: &Parameters, observer: &mut O) -> usize
where
    O: StepObserver + ?Sized,
{
    accumulate_pairs(sys, params, PairIteration::UpperTriangular, observer)
}

pub(crate) fn accumulate_pairs<O>(sys: &mut System, params: &Parameters, pairs: PairIteration, observer: &mut O) -> usize
where
    O: StepObserver + ?Sized,
{
    let law = FlooredGravity::from(params);
    let n = sys.bodies.len();
    let mut evaluations = 0;

    for i in 0..n {
        let start = match pairs {
            PairIteration::UpperTriangular => i + 1,
            #[cfg(test)]
            PairIteration::FullMatrix => 0,
        };
        for j in start..n {
            let force = law.force(&sys.bodies[i], &sys.bodies[j]);
            evaluations += 1;

            // equal and opposite, each scaled by its own mass
            let mi = sys.bodies[i].m;
            sys.bodies[i].v += force / mi;
            let mj = sys.bodies[j].m;
            sys.bodies[j].v -= force / mj;

            observer.pair_force(i, j, force);
        }
    }
    evaluations
}
