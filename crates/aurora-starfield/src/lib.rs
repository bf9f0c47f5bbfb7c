//! Animated starfield: a 2D particle field with downward drift, twinkle,
//! and pointer-driven attraction, drawn as instanced gradient discs.

pub mod field;
pub mod palette;
pub mod renderer;

pub use field::{PointerInfluence, Star, StarField, AREA_PER_STAR};
pub use renderer::{build_instances, StarfieldScene};
