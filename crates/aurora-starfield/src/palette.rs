//! Color ramps for the starfield discs.

/// Distance inside which the attraction displacement applies.
pub const ATTRACTION_RADIUS: f32 = 150.0;
/// Distance inside which stars switch to the cosmic color ramp.
pub const NEAR_COLOR_RADIUS: f32 = 100.0;
/// Distance inside which a star gets a sparkle dot.
pub const SPARKLE_RADIUS: f32 = 80.0;

/// Violet, blue, cyan ramp for stars near the pointer.
pub const NEAR_RAMP: [[f32; 3]; 3] = [
    rgb(0x8b, 0x5c, 0xf6),
    rgb(0x3b, 0x82, 0xf6),
    rgb(0x06, 0xb6, 0xd4),
];

/// White to pale indigo ramp for everything else.
pub const FAR_RAMP: [[f32; 3]; 3] = [
    rgb(0xff, 0xff, 0xff),
    rgb(0xe0, 0xe7, 0xff),
    rgb(0xc7, 0xd2, 0xfe),
];

/// Violet core for near stars.
pub const NEAR_CORE: [f32; 3] = NEAR_RAMP[0];
/// White core for far stars.
pub const FAR_CORE: [f32; 3] = FAR_RAMP[0];
/// Sparkle dots are always white.
pub const SPARKLE_COLOR: [f32; 3] = FAR_RAMP[0];

/// Pointer trail: violet through blue, fading out at 80 pixels.
pub const TRAIL_RAMP: [[f32; 3]; 3] = [
    rgb(0x8b, 0x5c, 0xf6),
    rgb(0x3b, 0x82, 0xf6),
    rgb(0x3b, 0x82, 0xf6),
];
pub const TRAIL_RADIUS: f32 = 80.0;
pub const TRAIL_ALPHA: f32 = 0.08;

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramps_are_normalized() {
        for ramp in [NEAR_RAMP, FAR_RAMP, TRAIL_RAMP] {
            for stop in ramp {
                for channel in stop {
                    assert!((0.0..=1.0).contains(&channel), "channel out of range");
                }
            }
        }
    }

    #[test]
    fn test_radius_ordering() {
        assert!(SPARKLE_RADIUS < NEAR_COLOR_RADIUS);
        assert!(NEAR_COLOR_RADIUS < ATTRACTION_RADIUS);
    }
}
