//! Pure translation from typed configuration records into the engine's
//! native object shape.
//!
//! Three rules apply uniformly, with no ordering dependency between
//! fields and no hidden state:
//!
//! 1. Unset optional fields produce no key in the output.
//! 2. Enumerated options become their documented wire strings.
//! 3. Per-dataset styling sequences of length exactly one collapse to the
//!    bare element (see [`collapse`]).
//!
//! User-visible text (category labels, series labels, titles, axis
//! titles) is localized here through the supplied [`LabelTranslator`], so
//! the same configuration retranslates cleanly under another locale.
//! Translating the same configuration twice with the same translator
//! yields structurally equal output.

mod dataset;
mod options;

use crate::config::{ChartConfig, Color, StyleSeq};
use crate::locale::LabelTranslator;
use crate::native::{NativeChartConfig, NativeChartData, ScalarOrSeq};

/// Translates a configuration into the engine's native form.
///
/// No validation happens on the way: contradictory inputs (a dataset
/// naming an axis id absent from the scales section, say) are the
/// engine's to reject or ignore.
#[must_use]
pub fn translate(config: &ChartConfig, labels: &dyn LabelTranslator) -> NativeChartConfig {
    NativeChartConfig {
        kind: config.kind,
        data: NativeChartData {
            labels: config
                .labels
                .as_ref()
                .map(|items| items.iter().map(|text| labels.translate(text)).collect()),
            datasets: config
                .datasets
                .iter()
                .map(|record| dataset::translate_dataset(record, labels))
                .collect(),
        },
        options: config
            .options
            .as_ref()
            .map(|record| options::translate_options(record, labels)),
    }
}

/// Collapses a single-element styling sequence to its bare element.
///
/// The engine reads a bare scalar as "apply to every point", so a
/// one-element sequence must cross the wire as the scalar itself. Every
/// other length passes through unchanged, order preserved. All per-dataset
/// styling sequences go through this one helper, dash patterns included.
pub(crate) fn collapse<T: Clone>(seq: &StyleSeq<T>) -> ScalarOrSeq<T> {
    match seq {
        StyleSeq::Single(value) => ScalarOrSeq::Scalar(value.clone()),
        StyleSeq::Each(values) if values.len() == 1 => ScalarOrSeq::Scalar(values[0].clone()),
        StyleSeq::Each(values) => ScalarOrSeq::Seq(values.clone()),
    }
}

/// Color sequences collapse the same way, after rendering to CSS strings.
pub(crate) fn collapse_colors(seq: &StyleSeq<Color>) -> ScalarOrSeq<String> {
    let rendered = match seq {
        StyleSeq::Single(color) => StyleSeq::Single(color.to_css_string()),
        StyleSeq::Each(colors) => {
            StyleSeq::Each(colors.iter().map(|color| color.to_css_string()).collect())
        }
    };
    collapse(&rendered)
}
