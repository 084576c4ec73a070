use serde::{Deserialize, Serialize};

use super::data::DataSeries;
use super::style::{
    BorderCapStyle, BorderJoinStyle, Color, FillMode, PointStyle, SteppedMode,
};

/// Styling input that either applies uniformly or per data point.
///
/// The engine reads a bare scalar as "apply to every point", so the
/// translation layer collapses an `Each` sequence of length one back to a
/// scalar. Sequences of any other length cross the wire unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSeq<T> {
    /// One value applied to every point in the series.
    Single(T),
    /// One value per data point, aligned by index.
    Each(Vec<T>),
}

impl<T> From<T> for StyleSeq<T> {
    fn from(value: T) -> Self {
        Self::Single(value)
    }
}

impl<T> From<Vec<T>> for StyleSeq<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Each(values)
    }
}

/// One series of chart data with its styling and behavior flags.
///
/// Every field except `data` is optional; unset fields never reach the
/// engine, which then applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub data: DataSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_cap_style: Option<BorderCapStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_join_style: Option<BorderJoinStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hit_radius: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_style: Option<StyleSeq<PointStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<StyleSeq<Color>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<StyleSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepped_line: Option<SteppedMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl Dataset {
    /// Creates a dataset holding `data` with every styling field unset.
    #[must_use]
    pub fn new(data: impl Into<DataSeries>) -> Self {
        Self {
            data: data.into(),
            label: None,
            background_color: None,
            border_color: None,
            border_width: None,
            border_dash: None,
            border_dash_offset: None,
            border_cap_style: None,
            border_join_style: None,
            point_background_color: None,
            point_border_color: None,
            point_border_width: None,
            point_radius: None,
            point_hover_radius: None,
            point_hit_radius: None,
            point_style: None,
            hover_background_color: None,
            hover_border_color: None,
            hover_border_width: None,
            fill: None,
            line_tension: None,
            stepped_line: None,
            show_line: None,
            span_gaps: None,
            stack: None,
            hidden: None,
            x_axis_id: None,
            y_axis_id: None,
        }
    }

    /// Sets the series label shown in legends and tooltips.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_border_width(mut self, width: impl Into<StyleSeq<f64>>) -> Self {
        self.border_width = Some(width.into());
        self
    }

    /// Sets the dash pattern as alternating on/off lengths.
    #[must_use]
    pub fn with_border_dash(mut self, dash: Vec<f64>) -> Self {
        self.border_dash = Some(dash);
        self
    }

    #[must_use]
    pub fn with_border_dash_offset(mut self, offset: f64) -> Self {
        self.border_dash_offset = Some(offset);
        self
    }

    #[must_use]
    pub fn with_border_cap_style(mut self, style: BorderCapStyle) -> Self {
        self.border_cap_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_border_join_style(mut self, style: BorderJoinStyle) -> Self {
        self.border_join_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_point_background_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.point_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_point_border_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.point_border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_point_border_width(mut self, width: impl Into<StyleSeq<f64>>) -> Self {
        self.point_border_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: impl Into<StyleSeq<f64>>) -> Self {
        self.point_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_point_hover_radius(mut self, radius: impl Into<StyleSeq<f64>>) -> Self {
        self.point_hover_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_point_hit_radius(mut self, radius: impl Into<StyleSeq<f64>>) -> Self {
        self.point_hit_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: impl Into<StyleSeq<PointStyle>>) -> Self {
        self.point_style = Some(style.into());
        self
    }

    #[must_use]
    pub fn with_hover_background_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.hover_background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_hover_border_color(mut self, color: impl Into<StyleSeq<Color>>) -> Self {
        self.hover_border_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_hover_border_width(mut self, width: impl Into<StyleSeq<f64>>) -> Self {
        self.hover_border_width = Some(width.into());
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: FillMode) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets Bezier interpolation tension; `0.0` draws straight segments.
    #[must_use]
    pub fn with_line_tension(mut self, tension: f64) -> Self {
        self.line_tension = Some(tension);
        self
    }

    #[must_use]
    pub fn with_stepped_line(mut self, mode: SteppedMode) -> Self {
        self.stepped_line = Some(mode);
        self
    }

    #[must_use]
    pub fn with_show_line(mut self, show: bool) -> Self {
        self.show_line = Some(show);
        self
    }

    #[must_use]
    pub fn with_span_gaps(mut self, span: bool) -> Self {
        self.span_gaps = Some(span);
        self
    }

    /// Assigns the series to a named stacking group.
    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    #[must_use]
    pub fn with_x_axis_id(mut self, id: impl Into<String>) -> Self {
        self.x_axis_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_id(mut self, id: impl Into<String>) -> Self {
        self.y_axis_id = Some(id.into());
        self
    }
}
