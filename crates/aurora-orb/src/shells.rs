//! Orb shell parameters and per-layer spin state.

/// Sphere radius shared by the energy field and wireframe.
pub const OUTER_RADIUS: f32 = 3.0;
/// Solid core radius.
pub const CORE_RADIUS: f32 = 2.8;
/// Inner glow radius.
pub const GLOW_RADIUS: f32 = 2.5;
/// Uniform scale applied to the energy shell on top of its radius.
pub const ENERGY_SCALE: f32 = 1.2;

/// Core base color, deep indigo.
pub const CORE_COLOR: [f32; 3] = [
    0x1e as f32 / 255.0,
    0x1b as f32 / 255.0,
    0x4b as f32 / 255.0,
];
/// Inner glow color.
pub const GLOW_COLOR: [f32; 3] = [
    0x3b as f32 / 255.0,
    0x82 as f32 / 255.0,
    0xf6 as f32 / 255.0,
];

pub const WIREFRAME_OPACITY: f32 = 0.6;
pub const CORE_OPACITY: f32 = 0.8;
pub const GLOW_OPACITY: f32 = 0.3;

pub const CORE_SHININESS: f32 = 100.0;

/// Per-frame y-axis rotation rates, outer layers slower than inner.
pub const ENERGY_SPIN_RATE: f32 = 0.0005;
pub const WIREFRAME_SPIN_RATE: f32 = 0.002;
pub const CORE_SPIN_RATE: f32 = 0.001;
pub const GLOW_SPIN_RATE: f32 = 0.001;
pub const CLOUD_SPIN_RATE: f32 = 0.0002;

/// Accumulated y rotation per layer, advanced once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellSpin {
    pub energy: f32,
    pub wireframe: f32,
    pub core: f32,
    pub glow: f32,
    pub cloud: f32,
}

impl ShellSpin {
    /// Advance every layer by one frame.
    pub fn advance(&mut self) {
        self.energy += ENERGY_SPIN_RATE;
        self.wireframe += WIREFRAME_SPIN_RATE;
        self.core += CORE_SPIN_RATE;
        self.glow += GLOW_SPIN_RATE;
        self.cloud += CLOUD_SPIN_RATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_rates_accumulate_independently() {
        let mut spin = ShellSpin::default();
        for _ in 0..10 {
            spin.advance();
        }
        assert!((spin.wireframe - 0.02).abs() < 1e-6);
        assert!((spin.energy - 0.005).abs() < 1e-6);
        assert!((spin.cloud - 0.002).abs() < 1e-6);
    }

    #[test]
    fn test_outer_layers_spin_slower_than_wireframe() {
        assert!(ENERGY_SPIN_RATE < WIREFRAME_SPIN_RATE);
        assert!(CLOUD_SPIN_RATE < CORE_SPIN_RATE);
    }

    #[test]
    fn test_shell_radii_nest() {
        assert!(GLOW_RADIUS < CORE_RADIUS);
        assert!(CORE_RADIUS < OUTER_RADIUS);
        assert!(OUTER_RADIUS < OUTER_RADIUS * ENERGY_SCALE);
    }
}
