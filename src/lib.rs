pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, Palette, DrawRequest};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::observer::{StepObserver, LogObserver};
pub use simulation::forces::{FlooredGravity, simulate_gravity};
pub use simulation::collision::{Rect, circle_rect_overlap};
pub use simulation::input::{InputLatch, KeyEdges};
pub use simulation::player::{PlayerController, MoveOutcome};
pub use simulation::integrator::{euler_frame, euler_drift, FrameReport};
pub use simulation::scenario::{Scenario, ScenarioError};

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, PlayerConfig, ScenarioConfig};

pub use visualization::solsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_gravity, bench_frame_curve};
