//! Typed mirror of the engine's native configuration object.
//!
//! The external engine consumes a loosely-typed object; these records are
//! its fully-typed shape on our side of the boundary. Optional fields use
//! `Option` plus `skip_serializing_if`, so an unset field produces no key
//! at all — the engine distinguishes "unset" (use its default) from an
//! explicit null, and only the former may ever be emitted. Field names
//! serialize in the engine's camelCase convention.

use serde::{Deserialize, Serialize};

use crate::config::{
    AxisKind, BorderCapStyle, BorderJoinStyle, BubblePoint, ChartKind, DataPoint, Easing,
    FillMode, FontStyle, HoverMode, LegendAlign, Padding, PointStyle, Position, SteppedMode,
    TooltipPosition,
};
use crate::error::{ChartError, ChartResult};

/// Wire-side styling value: a bare scalar or a per-point array.
///
/// Produced by the translation layer's collapse rule; a `Scalar` means
/// "apply to every point".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrSeq<T> {
    Scalar(T),
    Seq(Vec<T>),
}

/// Top-level native configuration handed to the engine constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: NativeChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<NativeOptions>,
}

impl NativeChartConfig {
    /// Converts to the loosely-typed object shape the engine consumes.
    pub fn to_value(&self) -> ChartResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::Serialization(format!("native chart config: {e}")))
    }

    /// Serializes to pretty JSON for debugging and snapshots.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("native chart config: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeChartData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<NativeDataset>,
}

/// Series values in wire form; timestamped source points arrive here as
/// cartesian points with epoch-millisecond x values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NativeDataSeries {
    Numbers(Vec<f64>),
    Bubbles(Vec<BubblePoint>),
    Points(Vec<DataPoint>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeDataset {
    pub data: NativeDataSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_cap_style: Option<BorderCapStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_join_style: Option<BorderJoinStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hit_radius: Option<ScalarOrSeq<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_style: Option<ScalarOrSeq<PointStyle>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<ScalarOrSeq<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_width: Option<ScalarOrSeq<f64>>,
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
    #[serde(rename = "xAxisID", skip_serializing_if = "Option::is_none")]
    pub x_axis_id: Option<String>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_animation_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_pixel_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circumference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<NativeTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<NativeLegend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<NativeTooltips>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<NativeHover>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<NativeAnimation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<NativeLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<NativeScales>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLegend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<LegendAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<NativeLegendLabels>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLegendLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_point_style: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTooltips {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TooltipPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeHover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeAnimation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeScales {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub x_axes: Vec<NativeAxis>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub y_axes: Vec<NativeAxis>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_label: Option<NativeScaleTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<NativeTicks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_lines: Option<NativeGridLines>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeScaleTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTicks {
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
    pub font_color: Option<String>,
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
#[serde(rename_all = "camelCase")]
pub struct NativeGridLines {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
}
