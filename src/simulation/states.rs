//! Core state types for the solar-system demo.
//!
//! - `Body`   a circular point mass (star, planet or the player's body)
//! - `System` the ordered body registry plus the frame counter
//!
//! Simulation space uses screen-style axes: x grows to the right, y grows
//! downward. Only positions and velocities change after startup.

use nalgebra::Vector2;
use serde::Deserialize;

use crate::simulation::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Display colour of a body. Irrelevant to physics
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    Yellow,
    Green,
    White,
    Red,
    Blue,
    Orange,
    Gray,
    Purple,
    Brown,
}

impl Palette {
    /// sRGB bytes, same shades as the classic raylib palette
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Palette::Yellow => [253, 249, 0],
            Palette::Green => [0, 228, 48],
            Palette::White => [255, 255, 255],
            Palette::Red => [230, 41, 55],
            Palette::Blue => [0, 121, 241],
            Palette::Orange => [255, 161, 0],
            Palette::Gray => [130, 130, 130],
            Palette::Purple => [200, 122, 255],
            Palette::Brown => [127, 106, 79],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // label used in diagnostics
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, must be > 0
    pub color: Palette,
    pub can_collide: bool, // false = never blocks the player
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec2, m: f64, color: Palette) -> Self {
        Self {
            name: name.into(),
            x,
            v: NVec2::zeros(),
            m,
            color,
            can_collide: true,
        }
    }

    pub fn with_velocity(mut self, v: NVec2) -> Self {
        self.v = v;
        self
    }

    pub fn non_colliding(mut self) -> Self {
        self.can_collide = false;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered registry, order fixes pair iteration
    pub frame: u64, // frames stepped so far
}

/// One thing the rendering layer should draw this frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    Circle { index: usize, center: NVec2, radius: f64, color: Palette },
    Sprite { index: usize, top_left: NVec2, size: NVec2 },
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, frame: 0 }
    }

    /// Circles for every body except `player` in registry order, then the
    /// player's sprite last
    pub fn draw_requests(&self, params: &Parameters, player: usize, sprite_size: NVec2) -> Vec<DrawRequest> {
        let mut out: Vec<DrawRequest> = self
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != player)
            .map(|(index, b)| DrawRequest::Circle {
                index,
                center: b.x,
                radius: params.draw_radius,
                color: b.color,
            })
            .collect();

        if let Some(p) = self.bodies.get(player) {
            out.push(DrawRequest::Sprite {
                index: player,
                top_left: p.x,
                size: sprite_size,
            });
        }
        out
    }
}
