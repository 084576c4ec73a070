//! Locale seam used to localize user-visible chart text.
//!
//! Localization happens when a configuration is translated into native
//! form, not when the configuration is built, so the same configuration
//! can be retranslated after the active locale changes.

/// Supplies localized text and identifies the active locale.
pub trait LabelTranslator {
    /// Stable tag identifying the active locale (e.g. `"en-US"`).
    ///
    /// The widget compares tags across render passes to detect locale
    /// changes that require retranslation.
    fn locale_tag(&self) -> &str;

    /// Localizes one user-visible text fragment.
    fn translate(&self, text: &str) -> String;
}

/// Pass-through translator used when no localization is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityTranslator;

impl LabelTranslator for IdentityTranslator {
    fn locale_tag(&self) -> &str {
        ""
    }

    fn translate(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Translator backed by a lookup closure and an explicit locale tag.
pub struct FnTranslator<F: Fn(&str) -> String> {
    locale_tag: String,
    lookup: F,
}

impl<F: Fn(&str) -> String> FnTranslator<F> {
    #[must_use]
    pub fn new(locale_tag: impl Into<String>, lookup: F) -> Self {
        Self {
            locale_tag: locale_tag.into(),
            lookup,
        }
    }
}

impl<F: Fn(&str) -> String> LabelTranslator for FnTranslator<F> {
    fn locale_tag(&self) -> &str {
        &self.locale_tag
    }

    fn translate(&self, text: &str) -> String {
        (self.lookup)(text)
    }
}
