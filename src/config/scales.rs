use serde::{Deserialize, Serialize};

use super::style::{AxisKind, Color, FontStyle, Position};

/// Axis configuration for both cartesian directions.
///
/// No validation happens here or in translation: a dataset may reference
/// an axis id that does not exist in these lists, and the combination is
/// handed to the engine untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalesOptions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub x_axes: Vec<AxisOptions>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y_axes: Vec<AxisOptions>,
}

impl ScalesOptions {
    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisOptions) -> Self {
        self.x_axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisOptions) -> Self {
        self.y_axes.push(axis);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisOptions {
    /// Identifier datasets reference via their axis-id fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    /// Add half-category padding on both edges (bar charts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_label: Option<ScaleTitleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<GridLineOptions>,
}

impl AxisOptions {
    /// Creates an axis carrying only an id.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleTitleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// Axis title; localized at translation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

impl ScaleTitleOptions {
    /// Creates a displayed axis title with the given text.
    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip_padding: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridLineOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_ticks: Option<bool>,
    /// Stacking order relative to the datasets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
}
