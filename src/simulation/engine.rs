//! High-level runtime engine settings
//!
//! Window geometry, title, frame pacing, camera zoom and whether the
//! physics step reports through the logging observer

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub width: u32, // window width in pixels
    pub height: u32, // window height in pixels
    pub title: String,
    pub fps: u32, // physics steps per second
    pub camera_zoom: f32, // 0.5 = world shown at half size
    pub trace: bool, // true = step through LogObserver
}

impl Default for Engine {
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
