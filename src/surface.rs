use serde::{Deserialize, Serialize};

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Handle to the canvas-like primitive the chart is rendered into.
///
/// All drawing happens inside the external engine; this crate only tracks
/// the surface's pixel size and density so lifecycle calls can reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSurface {
    size: SurfaceSize,
    device_pixel_ratio: f64,
}

impl DrawingSurface {
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            device_pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[must_use]
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub(crate) fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }
}
