//! The orb: a layered translucent sphere with an additive energy field,
//! circular palette cycling, orbiting lights, and a background particle
//! cloud, viewed through a drag-to-rotate orbit camera.

pub mod cloud;
pub mod color_cycle;
pub mod hint;
pub mod lights;
pub mod scene;
pub mod shells;

pub use color_cycle::{ColorCycle, COLOR_STEP, ORB_PALETTE};
pub use hint::{HintTimer, HINT_DURATION};
pub use scene::OrbScene;
pub use shells::ShellSpin;
