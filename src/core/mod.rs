pub mod assets;
pub mod camera;
pub mod constants;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod playback;
pub mod pose;
pub mod scene;

pub use assets::*;
pub use camera::*;
pub use constants::*;
pub use drag::*;
pub use error::*;
pub use geometry::*;
pub use playback::*;
pub use pose::*;
pub use scene::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
