//! Window management and the per-frame scene loop.

pub mod frame_clock;
pub mod window;

pub use frame_clock::{FrameClock, FrameScheduler, MAX_FRAME_TIME};
pub use window::{AppState, run_with_config, window_attributes_from_config};
