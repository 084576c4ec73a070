use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ChartConfig;
use crate::engine::{EngineBackend, EngineInstance};
use crate::locale::LabelTranslator;
use crate::surface::{DrawingSurface, SurfaceSize};
use crate::translate::translate;

/// Bridges widget lifecycle events to engine lifecycle calls.
///
/// The adapter owns the drawing surface and at most one engine instance.
/// Instance construction happens on attach, destruction on detach, and
/// the two are always paired; a second attach without an intervening
/// detach is a warned no-op.
pub struct CanvasAdapter<B: EngineBackend> {
    backend: B,
    surface: DrawingSurface,
    instance: Option<B::Instance>,
    translated_locale: Option<String>,
}

impl<B: EngineBackend> CanvasAdapter<B> {
    #[must_use]
    pub fn new(backend: B, surface: DrawingSurface) -> Self {
        Self {
            backend,
            surface,
            instance: None,
            translated_locale: None,
        }
    }

    #[must_use]
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.instance.is_some()
    }

    pub(crate) fn instance(&self) -> Option<&B::Instance> {
        self.instance.as_ref()
    }

    pub(crate) fn instance_mut(&mut self) -> Option<&mut B::Instance> {
        self.instance.as_mut()
    }

    /// Translates `config` and constructs the engine instance against it.
    pub(crate) fn attach(&mut self, config: &ChartConfig, labels: &dyn LabelTranslator) {
        if self.instance.is_some() {
            warn!("attach ignored: an engine instance already exists");
            return;
        }
        let Some(native) = native_value(config, labels) else {
            return;
        };
        debug!(locale = labels.locale_tag(), "creating engine instance");
        self.instance = Some(self.backend.create_instance(&self.surface, native));
        self.translated_locale = Some(labels.locale_tag().to_owned());
    }

    /// Retranslates `config` and updates the existing instance in place.
    ///
    /// Instance identity is preserved; without an instance this is a no-op.
    pub(crate) fn refresh(&mut self, config: &ChartConfig, labels: &dyn LabelTranslator) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        let Some(native) = native_value(config, labels) else {
            return;
        };
        debug!(locale = labels.locale_tag(), "updating engine instance");
        instance.update(native);
        self.translated_locale = Some(labels.locale_tag().to_owned());
    }

    /// True when the active locale differs from the last translated one.
    pub(crate) fn locale_changed(&self, labels: &dyn LabelTranslator) -> bool {
        match &self.translated_locale {
            Some(tag) => tag != labels.locale_tag(),
            None => false,
        }
    }

    /// Destroys and releases the engine instance, if any.
    pub(crate) fn detach(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            debug!("destroying engine instance");
            instance.destroy();
            self.translated_locale = None;
        }
    }

    /// Applies a new surface size, notifying the instance when attached.
    pub(crate) fn resize(&mut self, size: SurfaceSize) {
        self.surface.set_size(size);
        if let Some(instance) = self.instance.as_mut() {
            instance.resize(size);
        }
    }
}

/// Serializes the translated config into the engine's loosely-typed form.
///
/// Serialization of our own typed records cannot realistically fail; if it
/// ever does, the engine call is dropped and logged rather than surfaced,
/// since widget operations report no errors.
fn native_value(config: &ChartConfig, labels: &dyn LabelTranslator) -> Option<Value> {
    match translate(config, labels).to_value() {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(%error, "dropping engine call: native config did not serialize");
            None
        }
    }
}
