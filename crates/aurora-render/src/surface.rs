//! Cross-platform surface handling that normalizes platform-specific behavior.
//!
//! Handles Wayland zero-size windows and DPI changes by providing a
//! consistent API for surface dimensions. The effective scale factor can be
//! capped (the orb scene caps device pixel ratio at 2) so very dense
//! displays don't quadruple the fill cost of a purely decorative effect.

/// Minimum surface dimension (prevents zero-size panics).
pub const MIN_SURFACE_DIMENSION: u32 = 1;

/// Event produced when the surface dimensions or scale factor change.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceResizeEvent {
    /// New physical pixel width.
    pub physical_width: u32,
    /// New physical pixel height.
    pub physical_height: u32,
    /// New logical width (physical / scale_factor).
    pub logical_width: f64,
    /// New logical height (physical / scale_factor).
    pub logical_height: f64,
    /// Current effective (possibly capped) scale factor.
    pub scale_factor: f64,
}

/// Normalizes platform-specific surface behavior.
///
/// Always reports physical pixel dimensions for GPU surface configuration.
/// Zero-size surfaces (common on Wayland) are clamped to 1×1 to prevent
/// panics. Resizing never reseeds renderer content; it only changes the
/// backing resolution and view transforms.
pub struct SurfaceWrapper {
    physical_width: u32,
    physical_height: u32,
    logical_width: f64,
    logical_height: f64,
    scale_factor: f64,
    max_scale_factor: f64,
}

impl SurfaceWrapper {
    /// Creates a new `SurfaceWrapper` from initial physical dimensions and
    /// scale factor, with no cap on the scale factor.
    pub fn new(physical_width: u32, physical_height: u32, scale_factor: f64) -> Self {
        Self::with_max_scale_factor(physical_width, physical_height, scale_factor, f64::INFINITY)
    }

    /// Creates a wrapper whose effective scale factor is capped at
    /// `max_scale_factor`.
    pub fn with_max_scale_factor(
        physical_width: u32,
        physical_height: u32,
        scale_factor: f64,
        max_scale_factor: f64,
    ) -> Self {
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);
        let effective = scale_factor.min(max_scale_factor);

        Self {
            physical_width: width,
            physical_height: height,
            logical_width: width as f64 / effective,
            logical_height: height as f64 / effective,
            scale_factor: effective,
            max_scale_factor,
        }
    }

    /// Handle a window resize event. Returns a resize event if the surface
    /// dimensions actually changed.
    ///
    /// Dimensions are clamped to a minimum of 1×1 to prevent wgpu panics.
    pub fn handle_resize(
        &mut self,
        physical_width: u32,
        physical_height: u32,
    ) -> Option<SurfaceResizeEvent> {
        let width = physical_width.max(MIN_SURFACE_DIMENSION);
        let height = physical_height.max(MIN_SURFACE_DIMENSION);

        if width == self.physical_width && height == self.physical_height {
            return None;
        }

        self.physical_width = width;
        self.physical_height = height;
        self.logical_width = width as f64 / self.scale_factor;
        self.logical_height = height as f64 / self.scale_factor;

        Some(self.resize_event())
    }

    /// Handle a scale factor change (monitor switch, DPI change).
    pub fn handle_scale_factor_change(&mut self, scale_factor: f64) -> SurfaceResizeEvent {
        self.scale_factor = scale_factor.min(self.max_scale_factor);
        self.logical_width = self.physical_width as f64 / self.scale_factor;
        self.logical_height = self.physical_height as f64 / self.scale_factor;
        self.resize_event()
    }

    fn resize_event(&self) -> SurfaceResizeEvent {
        SurfaceResizeEvent {
            physical_width: self.physical_width,
            physical_height: self.physical_height,
            logical_width: self.logical_width,
            logical_height: self.logical_height,
            scale_factor: self.scale_factor,
        }
    }

    /// Physical pixel width (>= 1).
    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    /// Physical pixel height (>= 1).
    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Logical width for layout and pointer coordinates.
    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    /// Logical height for layout and pointer coordinates.
    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    /// Effective (capped) scale factor.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Width / height of the physical surface.
    pub fn aspect_ratio(&self) -> f32 {
        self.physical_width as f32 / self.physical_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_clamped() {
        let wrapper = SurfaceWrapper::new(0, 0, 1.0);
        assert_eq!(wrapper.physical_width(), 1);
        assert_eq!(wrapper.physical_height(), 1);
    }

    #[test]
    fn test_resize_reports_change() {
        let mut wrapper = SurfaceWrapper::new(800, 600, 1.0);
        let event = wrapper.handle_resize(1024, 768).unwrap();
        assert_eq!(event.physical_width, 1024);
        assert_eq!(event.physical_height, 768);
        assert!(wrapper.handle_resize(1024, 768).is_none());
    }

    #[test]
    fn test_scale_factor_cap() {
        let wrapper = SurfaceWrapper::with_max_scale_factor(800, 600, 3.0, 2.0);
        assert_eq!(wrapper.scale_factor(), 2.0);
        assert_eq!(wrapper.logical_width(), 400.0);
        assert_eq!(wrapper.logical_height(), 300.0);
    }

    #[test]
    fn test_scale_factor_below_cap_untouched() {
        let mut wrapper = SurfaceWrapper::with_max_scale_factor(800, 600, 1.0, 2.0);
        assert_eq!(wrapper.scale_factor(), 1.0);
        let event = wrapper.handle_scale_factor_change(1.5);
        assert_eq!(event.scale_factor, 1.5);
    }

    #[test]
    fn test_aspect_ratio() {
        let wrapper = SurfaceWrapper::new(1600, 900, 1.0);
        assert!((wrapper.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
    }
}
