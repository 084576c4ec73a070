//! Minimal view of the external charting engine.
//!
//! The engine is a trust boundary: it owns its render loop, animation
//! state, and error handling. Only the operations this crate actually
//! invokes are declared here — deliberately not a restatement of the
//! engine's full API surface.

mod recording;

pub use recording::{EngineCall, EngineJournal, RecordingBackend, RecordingEngine};

use serde_json::Value;

use crate::surface::{DrawingSurface, SurfaceSize};

/// Options for an animated render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Animation length override in milliseconds; engine default when unset.
    pub duration_ms: Option<u32>,
    /// When set, the pass may be interrupted by another animation.
    pub lazy: bool,
}

impl RenderOptions {
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn interruptible(mut self) -> Self {
        self.lazy = true;
        self
    }
}

/// One live chart owned by the external engine.
///
/// Instances are created against a drawing surface and a native
/// configuration object, and release their resources on `destroy`. None
/// of these operations report failure; the engine handles its own error
/// cases internally.
pub trait EngineInstance {
    /// Applies a replacement native configuration without changing
    /// instance identity.
    fn update(&mut self, config: Value);

    /// Reads back the native configuration the instance currently holds.
    fn native_config(&self) -> Value;

    /// Resets the chart to its initial state.
    fn reset(&mut self);

    /// Starts an animated render pass.
    fn render(&mut self, options: RenderOptions);

    /// Stops any running animation.
    fn stop(&mut self);

    /// Adapts the chart to a new surface size.
    fn resize(&mut self, size: SurfaceSize);

    /// Clears drawn content.
    fn clear(&mut self);

    /// Exports the current visual state as a base64-encoded image.
    fn to_base64_image(&self) -> String;

    /// Releases the instance's native resources.
    fn destroy(&mut self);
}

/// Charting engine entry point: constructs instances against a surface.
pub trait EngineBackend {
    type Instance: EngineInstance;

    fn create_instance(&self, surface: &DrawingSurface, config: Value) -> Self::Instance;
}
