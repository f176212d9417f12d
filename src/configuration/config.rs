//! Configuration types for loading scenarios from YAML.
//!
//! A scenario is described by:
//!
//! - [`EngineConfig`]     – window, frame pacing, camera, trace logging
//! - [`ParametersConfig`] – gravity constant, distance floor, radii
//! - [`BodyConfig`]       – initial state of each circular body
//! - [`PlayerConfig`]     – the player's body plus its sprite
//! - [`ScenarioConfig`]   – top-level wrapper
//!
//! Every `engine` and `parameters` field has a default, so a file only
//! needs to list what it changes.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   width: 900
//!   height: 600
//!   title: "Solar System Simulation"
//!   fps: 60
//!   camera_zoom: 0.5
//!   trace: false
//!
//! parameters:
//!   g: 0.26                 # gravity tuning constant
//!   min_distance: 1.0       # separation floor in the force law
//!   collision_radius: 20.0
//!   draw_radius: 20.0
//!
//! bodies:
//!   - name: sun
//!     x: [450.0, 300.0]
//!     m: 5000.0
//!     color: yellow
//!   - name: planet
//!     x: [300.0, 300.0]
//!     v: [1.0, 2.25]
//!     m: 10.0
//!     color: green
//!     can_collide: false
//!
//! player:
//!   name: player
//!   x: [100.0, 100.0]
//!   m: 5.0
//!   color: white
//!   sprite: "sprites/astronaut.png"
//!   sprite_size: [32.0, 32.0]
//! ```

use serde::Deserialize;

use crate::simulation::states::Palette;

/// Window and run-loop settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub fps: u32, // physics steps per second
    pub camera_zoom: f32,
    pub trace: bool, // log every force and move through the `log` facade
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            title: "Solar System Simulation".to_string(),
            fps: 60,
            camera_zoom: 0.5,
            trace: false,
        }
    }
}

/// Physical tuning values
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub g: f64,
    pub min_distance: f64,
    pub collision_radius: f64,
    pub draw_radius: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: 0.26,
            min_distance: 1.0,
            collision_radius: 20.0,
            draw_radius: 20.0,
        }
    }
}

fn yes() -> bool {
    true
}

/// Initial state of one circular body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, units per frame
    pub m: f64, // mass, must be > 0
    pub color: Palette,
    #[serde(default = "yes")]
    pub can_collide: bool,
}

fn default_sprite() -> String {
    "sprites/astronaut.png".to_string()
}

fn default_sprite_size() -> [f64; 2] {
    [32.0, 32.0]
}

/// The player: a body plus the sprite drawn for it
#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
    #[serde(flatten)]
    pub body: BodyConfig,
    #[serde(default = "default_sprite")]
    pub sprite: String, // asset path, relative to the assets folder
    #[serde(default = "default_sprite_size")]
    pub sprite_size: [f64; 2], // collision box width, height
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>, // everything but the player, in gravity order
    pub player: PlayerConfig, // appended after `bodies`
}

impl Default for ScenarioConfig {
    /// Sun, one orbiting planet and the player
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                BodyConfig {
                    name: "sun".to_string(),
                    x: [450.0, 300.0],
                    v: [0.0, 0.0],
                    m: 5000.0,
                    color: Palette::Yellow,
                    can_collide: true,
                },
                BodyConfig {
                    name: "planet".to_string(),
                    x: [300.0, 300.0],
                    v: [1.0, 2.25],
                    m: 10.0,
                    color: Palette::Green,
                    can_collide: true,
                },
            ],
            player: PlayerConfig {
                body: BodyConfig {
                    name: "player".to_string(),
                    x: [100.0, 100.0],
                    v: [0.0, 0.0],
                    m: 5.0,
                    color: Palette::White,
                    can_collide: true,
                },
                sprite: default_sprite(),
                sprite_size: default_sprite_size(),
            },
        }
    }
}
