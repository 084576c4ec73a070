//! Declarative style and behavior toggles.
//!
//! Every field is independently optional. An unset field is omitted from
//! the translated native object entirely, which the engine reads as "use
//! my own default" — a different thing from an explicit null.

use serde::{Deserialize, Serialize};

use super::scales::ScalesOptions;
use super::style::{Color, Easing, FontStyle, HoverMode, LegendAlign, Position, TooltipPosition};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsive_animation_duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_pixel_ratio: Option<f64>,
    /// Doughnut hole size as a percentage of chart radius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout_percentage: Option<f64>,
    /// Starting angle in radians for pie/doughnut sweeps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    /// Total sweep angle in radians for pie/doughnut charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circumference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltips: Option<TooltipOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<ScalesOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    /// Title text; localized at translation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
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
    pub line_height: Option<f64>,
}

impl TitleOptions {
    /// Creates a displayed title with the given text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendOptions {
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
    pub labels: Option<LegendLabelOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegendLabelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_width: Option<f64>,
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
    /// Draw legend markers in the series point style instead of boxes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_point_style: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<TooltipPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_font_color: Option<Color>,
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
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<HoverMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intersect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

/// Chart-area padding: one value for all edges, or per-edge values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(f64),
    Edges {
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        right: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        top: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        bottom: Option<f64>,
    },
}
