//! Platform-neutral claw machine logic shared by the web and native frontends.

pub mod camera;
pub mod constants;
pub mod controls;
pub mod display;
pub mod grab;
pub mod input;
pub mod motion;
pub mod params;
pub mod prize;
pub mod scene;
pub mod session;
pub mod state;
pub mod timer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use display::*;
pub use grab::*;
pub use input::*;
pub use motion::*;
pub use params::*;
pub use prize::*;
pub use scene::*;
pub use session::*;
pub use state::*;
pub use timer::*;
