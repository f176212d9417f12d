//! Build a fully-initialized scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` holding:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - the body registry (`System`, player's body last)
//! - the player controller and its sprite path
//!
//! The scenario is inserted into Bevy as a `Resource` and driven by the
//! physics and visualization systems, or stepped directly when headless.

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::input::KeyEdges;
use crate::simulation::integrator::{euler_frame, FrameReport};
use crate::simulation::observer::{LogObserver, StepObserver};
use crate::simulation::params::Parameters;
use crate::simulation::player::PlayerController;
use crate::simulation::states::{Body, DrawRequest, NVec2, System};

/// Reasons a `ScenarioConfig` cannot become a runnable `Scenario`
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("body '{name}' has mass {m}, mass must be positive and finite")]
    BadMass { name: String, m: f64 },
    #[error("player sprite size {w}x{h} must be positive")]
    BadSpriteSize { w: f64, h: f64 },
    #[error("scenario lists no bodies besides the player")]
    NoBodies,
    #[error("fps must be at least 1")]
    ZeroFps,
    #[error("parameter '{0}' must be positive")]
    NonPositive(&'static str),
}

#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub player: PlayerController,
    pub sprite: String, // asset path of the player's sprite
}

fn body_from_config(bc: &BodyConfig) -> Result<Body, ScenarioError> {
    if !(bc.m.is_finite() && bc.m > 0.0) {
        return Err(ScenarioError::BadMass {
            name: bc.name.clone(),
            m: bc.m,
        });
    }
    Ok(Body {
        name: bc.name.clone(),
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        color: bc.color,
        can_collide: bc.can_collide,
    })
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        if cfg.bodies.is_empty() {
            return Err(ScenarioError::NoBodies);
        }

        // Bodies: the listed ones first, the player's body appended last
        let mut bodies = cfg
            .bodies
            .iter()
            .map(body_from_config)
            .collect::<Result<Vec<Body>, _>>()?;
        bodies.push(body_from_config(&cfg.player.body)?);
        let player_index = bodies.len() - 1;

        let [w, h] = cfg.player.sprite_size;
        if !(w > 0.0 && h > 0.0) {
            return Err(ScenarioError::BadSpriteSize { w, h });
        }

        let p_cfg = cfg.parameters;
        if !(p_cfg.min_distance > 0.0) {
            return Err(ScenarioError::NonPositive("min_distance"));
        }
        if !(p_cfg.collision_radius > 0.0) {
            return Err(ScenarioError::NonPositive("collision_radius"));
        }
        let parameters = Parameters {
            g: p_cfg.g,
            min_distance: p_cfg.min_distance,
            collision_radius: p_cfg.collision_radius,
            draw_radius: p_cfg.draw_radius,
        };

        let e_cfg = cfg.engine;
        if e_cfg.fps == 0 {
            return Err(ScenarioError::ZeroFps);
        }
        if !(e_cfg.camera_zoom > 0.0) {
            return Err(ScenarioError::NonPositive("camera_zoom"));
        }
        let engine = Engine {
            width: e_cfg.width,
            height: e_cfg.height,
            title: e_cfg.title,
            fps: e_cfg.fps,
            camera_zoom: e_cfg.camera_zoom,
            trace: e_cfg.trace,
        };

        log::info!(
            "scenario: {} bodies, player '{}' at index {player_index}",
            bodies.len(),
            cfg.player.body.name
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            player: PlayerController::new(player_index, NVec2::new(w, h)),
            sprite: cfg.player.sprite,
        })
    }

    /// One frame, reporting through `LogObserver` when `engine.trace` is set
    pub fn step(&mut self, edges: KeyEdges) -> FrameReport {
        if self.engine.trace {
            self.step_with(edges, &mut LogObserver)
        } else {
            self.step_with(edges, &mut ())
        }
    }

    pub fn step_with<O>(&mut self, edges: KeyEdges, observer: &mut O) -> FrameReport
    where
        O: StepObserver + ?Sized,
    {
        euler_frame(&mut self.system, &mut self.player, &self.parameters, edges, observer)
    }

    pub fn draw_requests(&self) -> Vec<DrawRequest> {
        self.system
            .draw_requests(&self.parameters, self.player.index, self.player.sprite_size)
    }

    /// Where the camera should look: the player's position
    pub fn camera_target(&self) -> NVec2 {
        self.player.body(&self.system).x
    }
}
