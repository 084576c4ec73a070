//! Styling vocabulary shared by datasets and option records.
//!
//! Every enumerated option carries a documented wire-string constant; the
//! serde representation and `wire_name` always agree, and the translation
//! layer relies on that equivalence.

use serde::{Deserialize, Serialize};

/// RGBA color carried in the CSS functional form the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Wire form, e.g. `rgba(255, 99, 132, 0.2)`.
    #[must_use]
    pub fn to_css_string(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css_string()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let inner = value
            .trim()
            .strip_prefix("rgba(")
            .or_else(|| value.trim().strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| format!("unsupported color literal: {value}"))?;

        let mut channels = inner.split(',').map(str::trim);
        let mut next_u8 = |name: &str| {
            channels
                .next()
                .ok_or_else(|| format!("missing {name} channel in color literal: {value}"))?
                .parse::<u8>()
                .map_err(|e| format!("invalid {name} channel in color literal: {e}"))
        };
        let r = next_u8("red")?;
        let g = next_u8("green")?;
        let b = next_u8("blue")?;
        let a = match channels.next() {
            Some(raw) => raw
                .parse::<f64>()
                .map_err(|e| format!("invalid alpha channel in color literal: {e}"))?,
            None => 1.0,
        };
        if channels.next().is_some() {
            return Err(format!("too many channels in color literal: {value}"));
        }
        Ok(Self { r, g, b, a })
    }
}

/// Chart kind selecting the engine's rendering controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
    HorizontalBar,
    Radar,
    Pie,
    Doughnut,
    PolarArea,
    Bubble,
    Scatter,
}

impl ChartKind {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontalBar",
            Self::Radar => "radar",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
        }
    }
}

/// Easing curve applied to engine animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Easing {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInOutExpo => "easeInOutExpo",
            Self::EaseInCirc => "easeInCirc",
            Self::EaseOutCirc => "easeOutCirc",
            Self::EaseInOutCirc => "easeInOutCirc",
            Self::EaseInElastic => "easeInElastic",
            Self::EaseOutElastic => "easeOutElastic",
            Self::EaseInOutElastic => "easeInOutElastic",
            Self::EaseInBack => "easeInBack",
            Self::EaseOutBack => "easeOutBack",
            Self::EaseInOutBack => "easeInOutBack",
            Self::EaseInBounce => "easeInBounce",
            Self::EaseOutBounce => "easeOutBounce",
            Self::EaseInOutBounce => "easeInOutBounce",
        }
    }
}

/// Interaction mode used by tooltips and hover resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoverMode {
    Point,
    Nearest,
    Index,
    Dataset,
    X,
    Y,
}

impl HoverMode {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Nearest => "nearest",
            Self::Index => "index",
            Self::Dataset => "dataset",
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Marker shape drawn at data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointStyle {
    Circle,
    Cross,
    CrossRot,
    Dash,
    Line,
    Rect,
    RectRounded,
    RectRot,
    Star,
    Triangle,
}

impl PointStyle {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::CrossRot => "crossRot",
            Self::Dash => "dash",
            Self::Line => "line",
            Self::Rect => "rect",
            Self::RectRounded => "rectRounded",
            Self::RectRot => "rectRot",
            Self::Star => "star",
            Self::Triangle => "triangle",
        }
    }
}

/// Stroke cap applied to line series borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderCapStyle {
    Butt,
    Round,
    Square,
}

impl BorderCapStyle {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Stroke join applied to line series borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderJoinStyle {
    Bevel,
    Round,
    Miter,
}

impl BorderJoinStyle {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Bevel => "bevel",
            Self::Round => "round",
            Self::Miter => "miter",
        }
    }
}

/// Step interpolation anchor for stepped line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SteppedMode {
    Before,
    Middle,
    After,
}

impl SteppedMode {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::Middle => "middle",
            Self::After => "after",
        }
    }
}

/// Area fill target for line/radar series.
///
/// The wire form is the engine's own mixed convention: `false` disables
/// filling, boundary anchors are strings, and a dataset index is a bare
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Disabled,
    Origin,
    Start,
    End,
    /// Fill toward the dataset at this index.
    ToDataset(u32),
}

impl Serialize for FillMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Origin => serializer.serialize_str("origin"),
            Self::Start => serializer.serialize_str("start"),
            Self::End => serializer.serialize_str("end"),
            Self::ToDataset(index) => serializer.serialize_u32(*index),
        }
    }
}

impl<'de> Deserialize<'de> for FillMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FillVisitor;

        impl serde::de::Visitor<'_> for FillVisitor {
            type Value = FillMode;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("false, a boundary anchor string, or a dataset index")
            }

            fn visit_bool<E: serde::de::Error>(self, value: bool) -> Result<FillMode, E> {
                if value {
                    Err(E::custom("fill: true is not a supported wire form"))
                } else {
                    Ok(FillMode::Disabled)
                }
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<FillMode, E> {
                match value {
                    "origin" => Ok(FillMode::Origin),
                    "start" => Ok(FillMode::Start),
                    "end" => Ok(FillMode::End),
                    other => Err(E::custom(format!("unknown fill anchor: {other}"))),
                }
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<FillMode, E> {
                u32::try_from(value)
                    .map(FillMode::ToDataset)
                    .map_err(|_| E::custom("fill dataset index out of range"))
            }
        }

        deserializer.deserialize_any(FillVisitor)
    }
}

/// Placement edge for titles, legends, and axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Top,
    Left,
    Bottom,
    Right,
}

impl Position {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }
}

/// Horizontal alignment of legend entries along their edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendAlign {
    Start,
    Center,
    End,
}

impl LegendAlign {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// Anchor used to position the tooltip relative to hovered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipPosition {
    Average,
    Nearest,
}

impl TooltipPosition {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Nearest => "nearest",
        }
    }
}

/// Scale implementation backing an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Linear,
    Logarithmic,
    Category,
    Time,
    RadialLinear,
}

impl AxisKind {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
            Self::Category => "category",
            Self::Time => "time",
            Self::RadialLinear => "radialLinear",
        }
    }
}

/// Font weight/slant toggle used by text-bearing option records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    #[serde(rename = "bold italic")]
    BoldItalic,
}

impl FontStyle {
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bold italic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_css_round_trip() {
        let color = Color::rgba(255, 99, 132, 0.2);
        assert_eq!(color.to_css_string(), "rgba(255, 99, 132, 0.2)");
        let parsed = Color::try_from(color.to_css_string()).expect("parse rgba");
        assert_eq!(parsed, color);
    }

    #[test]
    fn color_rgb_literal_defaults_alpha() {
        let parsed = Color::try_from("rgb(10, 20, 30)".to_owned()).expect("parse rgb");
        assert_eq!(parsed, Color::rgb(10, 20, 30));
    }

    #[test]
    fn color_rejects_malformed_literals() {
        assert!(Color::try_from("#ff6384".to_owned()).is_err());
        assert!(Color::try_from("rgba(1, 2)".to_owned()).is_err());
        assert!(Color::try_from("rgba(1, 2, 3, 4, 5)".to_owned()).is_err());
    }

    #[test]
    fn fill_mode_wire_forms() {
        assert_eq!(serde_json::to_value(FillMode::Disabled).unwrap(), false);
        assert_eq!(serde_json::to_value(FillMode::Origin).unwrap(), "origin");
        assert_eq!(serde_json::to_value(FillMode::ToDataset(2)).unwrap(), 2);
    }
}
