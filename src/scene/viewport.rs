//! Viewport sizing for the camera and the drawing buffer

use log::debug;

/// Logical window size plus the pixel ratio used to render it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
    pub pixel_ratio_cap: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32, pixel_ratio_cap: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
            pixel_ratio_cap,
        }
    }

    /// Camera aspect ratio
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Device pixel ratio clamped to the cap
    pub fn pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(self.pixel_ratio_cap)
    }

    /// Physical size of the drawing buffer, rounded to whole pixels
    pub fn drawing_buffer_size(&self) -> (u32, u32) {
        let ratio = self.pixel_ratio();
        (
            (self.width * ratio).round() as u32,
            (self.height * ratio).round() as u32,
        )
    }

    /// Apply a window resize.
    ///
    /// Zero-area or non-finite sizes (a minimised window) are ignored and
    /// leave the viewport untouched. Returns whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32, device_pixel_ratio: f32) -> bool {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) || !valid(device_pixel_ratio) {
            debug!("Ignoring resize to {width}x{height} @ {device_pixel_ratio}");
            return false;
        }
        if self.width == width
            && self.height == height
            && self.device_pixel_ratio == device_pixel_ratio
        {
            return false;
        }
        self.width = width;
        self.height = height;
        self.device_pixel_ratio = device_pixel_ratio;
        debug!(
            "Viewport resized to {}x{} (aspect {:.3}, pixel ratio {})",
            width,
            height,
            self.aspect(),
            self.pixel_ratio()
        );
        true
    }
}
