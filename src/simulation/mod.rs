pub mod states;
pub mod params;
pub mod engine;
pub mod observer;
pub mod forces;
pub mod collision;
pub mod input;
pub mod player;
pub mod integrator;
pub mod scenario;
