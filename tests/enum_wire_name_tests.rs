use chartkit::config::{
    AxisKind, BorderCapStyle, BorderJoinStyle, ChartKind, Easing, FillMode, FontStyle, HoverMode,
    LegendAlign, PointStyle, Position, SteppedMode, TooltipPosition,
};
use serde_json::json;

fn assert_wire<T: serde::Serialize>(value: T, wire: &str) {
    assert_eq!(serde_json::to_value(value).expect("serialize"), json!(wire));
}

#[test]
fn chart_kind_wire_names() {
    let kinds = [
        (ChartKind::Line, "line"),
        (ChartKind::Bar, "bar"),
        (ChartKind::HorizontalBar, "horizontalBar"),
        (ChartKind::Radar, "radar"),
        (ChartKind::Pie, "pie"),
        (ChartKind::Doughnut, "doughnut"),
        (ChartKind::PolarArea, "polarArea"),
        (ChartKind::Bubble, "bubble"),
        (ChartKind::Scatter, "scatter"),
    ];
    for (kind, wire) in kinds {
        assert_eq!(kind.wire_name(), wire);
        assert_wire(kind, wire);
    }
}

#[test]
fn easing_wire_names() {
    assert_eq!(Easing::Linear.wire_name(), "linear");
    assert_eq!(Easing::EaseOutQuart.wire_name(), "easeOutQuart");
    assert_eq!(Easing::EaseInOutElastic.wire_name(), "easeInOutElastic");
    assert_eq!(Easing::EaseInOutBounce.wire_name(), "easeInOutBounce");

    for easing in [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
        Easing::EaseInSine,
        Easing::EaseOutSine,
        Easing::EaseInOutSine,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInCirc,
        Easing::EaseOutCirc,
        Easing::EaseInOutCirc,
        Easing::EaseInElastic,
        Easing::EaseOutElastic,
        Easing::EaseInOutElastic,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
        Easing::EaseInBounce,
        Easing::EaseOutBounce,
        Easing::EaseInOutBounce,
    ] {
        assert_wire(easing, easing.wire_name());
    }
}

#[test]
fn hover_mode_wire_names() {
    for (mode, wire) in [
        (HoverMode::Point, "point"),
        (HoverMode::Nearest, "nearest"),
        (HoverMode::Index, "index"),
        (HoverMode::Dataset, "dataset"),
        (HoverMode::X, "x"),
        (HoverMode::Y, "y"),
    ] {
        assert_eq!(mode.wire_name(), wire);
        assert_wire(mode, wire);
    }
}

#[test]
fn point_style_wire_names() {
    for (style, wire) in [
        (PointStyle::Circle, "circle"),
        (PointStyle::Cross, "cross"),
        (PointStyle::CrossRot, "crossRot"),
        (PointStyle::Dash, "dash"),
        (PointStyle::Line, "line"),
        (PointStyle::Rect, "rect"),
        (PointStyle::RectRounded, "rectRounded"),
        (PointStyle::RectRot, "rectRot"),
        (PointStyle::Star, "star"),
        (PointStyle::Triangle, "triangle"),
    ] {
        assert_eq!(style.wire_name(), wire);
        assert_wire(style, wire);
    }
}

#[test]
fn stroke_style_wire_names() {
    for (style, wire) in [
        (BorderCapStyle::Butt, "butt"),
        (BorderCapStyle::Round, "round"),
        (BorderCapStyle::Square, "square"),
    ] {
        assert_eq!(style.wire_name(), wire);
        assert_wire(style, wire);
    }
    for (style, wire) in [
        (BorderJoinStyle::Bevel, "bevel"),
        (BorderJoinStyle::Round, "round"),
        (BorderJoinStyle::Miter, "miter"),
    ] {
        assert_eq!(style.wire_name(), wire);
        assert_wire(style, wire);
    }
}

#[test]
fn placement_wire_names() {
    for (position, wire) in [
        (Position::Top, "top"),
        (Position::Left, "left"),
        (Position::Bottom, "bottom"),
        (Position::Right, "right"),
    ] {
        assert_eq!(position.wire_name(), wire);
        assert_wire(position, wire);
    }
    for (align, wire) in [
        (LegendAlign::Start, "start"),
        (LegendAlign::Center, "center"),
        (LegendAlign::End, "end"),
    ] {
        assert_eq!(align.wire_name(), wire);
        assert_wire(align, wire);
    }
    for (position, wire) in [
        (TooltipPosition::Average, "average"),
        (TooltipPosition::Nearest, "nearest"),
    ] {
        assert_eq!(position.wire_name(), wire);
        assert_wire(position, wire);
    }
}

#[test]
fn axis_kind_wire_names() {
    for (kind, wire) in [
        (AxisKind::Linear, "linear"),
        (AxisKind::Logarithmic, "logarithmic"),
        (AxisKind::Category, "category"),
        (AxisKind::Time, "time"),
        (AxisKind::RadialLinear, "radialLinear"),
    ] {
        assert_eq!(kind.wire_name(), wire);
        assert_wire(kind, wire);
    }
}

#[test]
fn stepped_mode_wire_names() {
    for (mode, wire) in [
        (SteppedMode::Before, "before"),
        (SteppedMode::Middle, "middle"),
        (SteppedMode::After, "after"),
    ] {
        assert_eq!(mode.wire_name(), wire);
        assert_wire(mode, wire);
    }
}

#[test]
fn font_style_wire_names() {
    for (style, wire) in [
        (FontStyle::Normal, "normal"),
        (FontStyle::Bold, "bold"),
        (FontStyle::Italic, "italic"),
        (FontStyle::BoldItalic, "bold italic"),
    ] {
        assert_eq!(style.wire_name(), wire);
        assert_wire(style, wire);
    }
}

#[test]
fn fill_mode_uses_the_engine_mixed_convention() {
    assert_eq!(
        serde_json::to_value(FillMode::Disabled).expect("serialize"),
        json!(false)
    );
    assert_eq!(
        serde_json::to_value(FillMode::Origin).expect("serialize"),
        json!("origin")
    );
    assert_eq!(
        serde_json::to_value(FillMode::Start).expect("serialize"),
        json!("start")
    );
    assert_eq!(
        serde_json::to_value(FillMode::End).expect("serialize"),
        json!("end")
    );
    assert_eq!(
        serde_json::to_value(FillMode::ToDataset(2)).expect("serialize"),
        json!(2)
    );
}
