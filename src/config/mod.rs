//! Strongly-typed chart configuration records.
//!
//! A configuration is an immutable value object: callers build it once
//! (optionally via the `with_*` builders), hand it to a widget, and replace
//! it wholesale to trigger a redraw. Translation into the engine's native
//! form happens elsewhere (`crate::translate`) and only at lifecycle
//! events, so configurations carry no locale-dependent state.

pub mod data;
pub mod dataset;
pub mod options;
pub mod scales;
pub mod style;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub use data::{BubblePoint, DataPoint, DataSeries, TimePoint};
pub use dataset::{Dataset, StyleSeq};
pub use options::{
    AnimationOptions, ChartOptions, HoverOptions, LayoutOptions, LegendLabelOptions,
    LegendOptions, Padding, TitleOptions, TooltipOptions,
};
pub use scales::{AxisOptions, GridLineOptions, ScaleTitleOptions, ScalesOptions, TickOptions};
pub use style::{
    AxisKind, BorderCapStyle, BorderJoinStyle, ChartKind, Color, Easing, FillMode, FontStyle,
    HoverMode, LegendAlign, PointStyle, Position, SteppedMode, TooltipPosition,
};

/// Complete description of one chart.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format; the serde form is the
/// crate's own and is distinct from the engine's native object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    /// Ordered category labels; localized at translation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartOptions>,
}

impl ChartConfig {
    /// Creates an empty configuration of the given kind.
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            datasets: Vec::new(),
            labels: None,
            options: None,
        }
    }

    #[must_use]
    pub fn push_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_datasets(mut self, datasets: impl IntoIterator<Item = Dataset>) -> Self {
        self.datasets = datasets.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Serializes the configuration to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("chart config: {e}")))
    }

    /// Deserializes a configuration from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfigJson(format!("chart config: {e}")))
    }
}
