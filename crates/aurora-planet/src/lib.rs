//! The planet: a seeded, procedurally textured sphere with hover growth,
//! click-toggle scale, atmosphere and cloud shells, and a background star
//! scatter.

pub mod interaction;
pub mod motion;
pub mod scene;
pub mod shells;
pub mod texture;

pub use interaction::{pointer_hits_sphere, PlanetInteraction};
pub use motion::PlanetMotion;
pub use scene::PlanetScene;
pub use texture::SurfaceBaker;
