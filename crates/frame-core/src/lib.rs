pub mod asset;
pub mod camera;
pub mod configurator;
pub mod constants;
pub mod corner;
pub mod cut;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod panel;
pub mod params;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use configurator::*;
pub use error::*;
pub use panel::*;
pub use params::*;
pub use scene::*;
