//! Circular color interpolation through the orb palette.

/// The ordered cycle palette: violet, blue, cyan, emerald, amber.
pub const ORB_PALETTE: [[f32; 3]; 5] = [
    rgb(0x8b, 0x5c, 0xf6),
    rgb(0x3b, 0x82, 0xf6),
    rgb(0x06, 0xb6, 0xd4),
    rgb(0x10, 0xb9, 0x81),
    rgb(0xf5, 0x9e, 0x0b),
];

/// Interpolation advance per frame.
pub const COLOR_STEP: f32 = 0.003;

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 3] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// Walks the palette circularly, blending between the current and next
/// entry. The blend fraction resets to zero the moment it would reach 1,
/// and both indices advance.
#[derive(Clone, Debug)]
pub struct ColorCycle {
    current: usize,
    next: usize,
    t: f32,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self {
            current: 0,
            next: 1,
            t: 0.0,
        }
    }

    /// Advance one frame.
    pub fn advance(&mut self) {
        self.t += COLOR_STEP;
        if self.t >= 1.0 {
            self.t = 0.0;
            self.current = self.next;
            self.next = (self.next + 1) % ORB_PALETTE.len();
        }
    }

    /// The blended color for this frame.
    pub fn color(&self) -> [f32; 3] {
        let a = ORB_PALETTE[self.current];
        let b = ORB_PALETTE[self.next];
        [
            a[0] + (b[0] - a[0]) * self.t,
            a[1] + (b[1] - a[1]) * self.t,
            a[2] + (b[2] - a[2]) * self.t,
        ]
    }

    pub fn indices(&self) -> (usize, usize) {
        (self.current, self.next)
    }

    pub fn fraction(&self) -> f32 {
        self.t
    }
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_pair() {
        let cycle = ColorCycle::new();
        assert_eq!(cycle.indices(), (0, 1));
        assert_eq!(cycle.color(), ORB_PALETTE[0]);
    }

    #[test]
    fn test_fraction_resets_and_indices_advance() {
        let mut cycle = ColorCycle::new();
        // 334 steps of 0.003 crosses 1.0 exactly once.
        for _ in 0..334 {
            cycle.advance();
        }
        assert_eq!(cycle.indices(), (1, 2));
        assert!(cycle.fraction() < 1.0);
        assert!(cycle.fraction() >= 0.0);
    }

    #[test]
    fn test_index_wraps_modulo_palette_length() {
        let mut cycle = ColorCycle::new();
        let steps_per_transition = (1.0 / COLOR_STEP).ceil() as usize + 1;
        for _ in 0..(steps_per_transition * ORB_PALETTE.len()) {
            cycle.advance();
        }
        let (current, next) = cycle.indices();
        assert!(current < ORB_PALETTE.len());
        assert_eq!(next, (current + 1) % ORB_PALETTE.len());
    }

    #[test]
    fn test_color_blends_between_entries() {
        let mut cycle = ColorCycle::new();
        cycle.advance();
        let color = cycle.color();
        for channel in 0..3 {
            let lo = ORB_PALETTE[0][channel].min(ORB_PALETTE[1][channel]);
            let hi = ORB_PALETTE[0][channel].max(ORB_PALETTE[1][channel]);
            assert!(color[channel] >= lo - 1e-6 && color[channel] <= hi + 1e-6);
        }
    }
}
