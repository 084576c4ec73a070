//! Chart widget: configuration ownership and engine lifecycle.
//!
//! The widget holds exactly one configuration and, while mounted, exactly
//! one engine instance. Every public operation is a presence-checked
//! delegate: before mount or after destroy it is a no-op (or returns
//! `None`), never an error. All entry points are synchronous and run on
//! the UI thread.

mod adapter;

pub use adapter::CanvasAdapter;

use indexmap::IndexSet;
use serde_json::Value;
use tracing::warn;

use crate::config::ChartConfig;
use crate::engine::{EngineBackend, EngineInstance, RenderOptions};
use crate::locale::{IdentityTranslator, LabelTranslator};
use crate::surface::{DrawingSurface, SurfaceSize};

/// Linear lifecycle of a widget.
///
/// `Updating` is only held while a retranslation is being applied to a
/// live instance; the widget returns to `Mounted` in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Unmounted,
    Mounted,
    Updating,
    Destroyed,
}

/// A chart widget bound to one drawing surface and one engine backend.
pub struct ChartWidget<B: EngineBackend> {
    config: ChartConfig,
    adapter: CanvasAdapter<B>,
    translator: Box<dyn LabelTranslator>,
    css_classes: IndexSet<String>,
    fixed_size: Option<SurfaceSize>,
    phase: LifecyclePhase,
}

impl<B: EngineBackend> ChartWidget<B> {
    /// Creates an unmounted widget holding `config`.
    #[must_use]
    pub fn new(config: ChartConfig, backend: B, surface: DrawingSurface) -> Self {
        Self {
            config,
            adapter: CanvasAdapter::new(backend, surface),
            translator: Box::new(IdentityTranslator),
            css_classes: IndexSet::new(),
            fixed_size: None,
            phase: LifecyclePhase::Unmounted,
        }
    }

    /// Pins the widget to fixed pixel dimensions.
    #[must_use]
    pub fn with_fixed_size(mut self, width: u32, height: u32) -> Self {
        let size = SurfaceSize::new(width, height);
        self.fixed_size = Some(size);
        self.adapter.resize(size);
        self
    }

    #[must_use]
    pub fn with_css_class(mut self, class: impl Into<String>) -> Self {
        self.css_classes.insert(class.into());
        self
    }

    #[must_use]
    pub fn with_css_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css_classes.extend(classes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_translator(mut self, translator: impl LabelTranslator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Attaches the surface: translates the configuration and constructs
    /// the engine instance. Happens exactly once per mount; a repeated
    /// mount without an intervening unmount is a warned no-op.
    pub fn mount(&mut self) {
        match self.phase {
            LifecyclePhase::Unmounted | LifecyclePhase::Destroyed => {
                self.adapter.attach(&self.config, self.translator.as_ref());
                if self.adapter.is_attached() {
                    self.phase = LifecyclePhase::Mounted;
                }
            }
            LifecyclePhase::Mounted | LifecyclePhase::Updating => {
                warn!("mount ignored: widget is already mounted");
            }
        }
    }

    /// Detaches and destroys the engine instance. After this the widget
    /// holds no native resource; a fresh mount starts a new cycle.
    pub fn unmount(&mut self) {
        if self.adapter.is_attached() {
            self.adapter.detach();
            self.phase = LifecyclePhase::Destroyed;
        }
    }

    /// Replaces the configuration wholesale.
    ///
    /// While mounted this retranslates and updates the live instance
    /// without changing its identity; unmounted widgets just keep the new
    /// configuration for the next mount.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
        if self.adapter.is_attached() {
            self.phase = LifecyclePhase::Updating;
            self.adapter.refresh(&self.config, self.translator.as_ref());
            self.phase = LifecyclePhase::Mounted;
        }
    }

    /// Swaps the active locale source.
    ///
    /// Retranslation is deferred to the next render pass, which is where
    /// locale changes are detected.
    pub fn set_translator(&mut self, translator: impl LabelTranslator + 'static) {
        self.translator = Box::new(translator);
    }

    /// Starts an animated render pass with an optional duration override
    /// and an "interruptible by other animations" flag.
    ///
    /// A locale change since the last translation is applied first.
    pub fn render_animated(&mut self, duration_ms: Option<u32>, lazy: bool) {
        if self.adapter.locale_changed(self.translator.as_ref()) {
            self.phase = LifecyclePhase::Updating;
            self.adapter.refresh(&self.config, self.translator.as_ref());
            self.phase = LifecyclePhase::Mounted;
        }
        if let Some(instance) = self.adapter.instance_mut() {
            instance.render(RenderOptions { duration_ms, lazy });
        }
    }

    /// Renders with the engine's default animation settings.
    pub fn render(&mut self) {
        self.render_animated(None, false);
    }

    /// Reads back the native configuration the engine currently holds.
    #[must_use]
    pub fn native_config(&self) -> Option<Value> {
        self.adapter.instance().map(EngineInstance::native_config)
    }

    /// Resets the chart to its initial state.
    pub fn reset(&mut self) {
        if let Some(instance) = self.adapter.instance_mut() {
            instance.reset();
        }
    }

    /// Stops any running animation.
    pub fn stop(&mut self) {
        if let Some(instance) = self.adapter.instance_mut() {
            instance.stop();
        }
    }

    /// Clears drawn content.
    pub fn clear(&mut self) {
        if let Some(instance) = self.adapter.instance_mut() {
            instance.clear();
        }
    }

    /// Resizes the surface to fit its container.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.adapter.resize(size);
    }

    /// Exports the current visual state as a base64-encoded image.
    #[must_use]
    pub fn to_base64_image(&self) -> Option<String> {
        self.adapter
            .instance()
            .map(EngineInstance::to_base64_image)
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.adapter.is_attached()
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> &DrawingSurface {
        self.adapter.surface()
    }

    #[must_use]
    pub fn css_classes(&self) -> impl Iterator<Item = &str> {
        self.css_classes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn fixed_size(&self) -> Option<SurfaceSize> {
        self.fixed_size
    }
}
