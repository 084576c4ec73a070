use crate::config::{
    AxisOptions, ChartOptions, Color, GridLineOptions, LegendLabelOptions, LegendOptions,
    ScaleTitleOptions, ScalesOptions, TickOptions, TitleOptions, TooltipOptions,
};
use crate::locale::LabelTranslator;
use crate::native::{
    NativeAnimation, NativeAxis, NativeGridLines, NativeHover, NativeLayout, NativeLegend,
    NativeLegendLabels, NativeOptions, NativeScaleTitle, NativeScales, NativeTicks, NativeTitle,
    NativeTooltips,
};

fn css(color: Option<Color>) -> Option<String> {
    color.map(Color::to_css_string)
}

pub(super) fn translate_options(
    record: &ChartOptions,
    labels: &dyn LabelTranslator,
) -> NativeOptions {
    NativeOptions {
        responsive: record.responsive,
        responsive_animation_duration: record.responsive_animation_duration_ms,
        maintain_aspect_ratio: record.maintain_aspect_ratio,
        aspect_ratio: record.aspect_ratio,
        device_pixel_ratio: record.device_pixel_ratio,
        cutout_percentage: record.cutout_percentage,
        rotation: record.rotation,
        circumference: record.circumference,
        title: record
            .title
            .as_ref()
            .map(|title| translate_title(title, labels)),
        legend: record.legend.as_ref().map(translate_legend),
        tooltips: record.tooltips.as_ref().map(translate_tooltips),
        hover: record.hover.as_ref().map(|hover| NativeHover {
            mode: hover.mode,
            intersect: hover.intersect,
            animation_duration: hover.animation_duration_ms,
        }),
        animation: record.animation.as_ref().map(|animation| NativeAnimation {
            duration: animation.duration_ms,
            easing: animation.easing,
        }),
        layout: record.layout.as_ref().map(|layout| NativeLayout {
            padding: layout.padding,
        }),
        scales: record
            .scales
            .as_ref()
            .map(|scales| translate_scales(scales, labels)),
    }
}

fn translate_title(record: &TitleOptions, labels: &dyn LabelTranslator) -> NativeTitle {
    NativeTitle {
        display: record.display,
        text: record.text.as_deref().map(|text| labels.translate(text)),
        position: record.position,
        font_size: record.font_size,
        font_family: record.font_family.clone(),
        font_color: css(record.font_color),
        font_style: record.font_style,
        padding: record.padding,
        line_height: record.line_height,
    }
}

fn translate_legend(record: &LegendOptions) -> NativeLegend {
    NativeLegend {
        display: record.display,
        position: record.position,
        align: record.align,
        full_width: record.full_width,
        reverse: record.reverse,
        labels: record.labels.as_ref().map(translate_legend_labels),
    }
}

fn translate_legend_labels(record: &LegendLabelOptions) -> NativeLegendLabels {
    NativeLegendLabels {
        box_width: record.box_width,
        font_size: record.font_size,
        font_family: record.font_family.clone(),
        font_color: css(record.font_color),
        font_style: record.font_style,
        padding: record.padding,
        use_point_style: record.use_point_style,
    }
}

fn translate_tooltips(record: &TooltipOptions) -> NativeTooltips {
    NativeTooltips {
        enabled: record.enabled,
        mode: record.mode,
        intersect: record.intersect,
        position: record.position,
        background_color: css(record.background_color),
        title_font_size: record.title_font_size,
        title_font_family: record.title_font_family.clone(),
        title_font_color: css(record.title_font_color),
        title_font_style: record.title_font_style,
        body_font_size: record.body_font_size,
        body_font_family: record.body_font_family.clone(),
        body_font_color: css(record.body_font_color),
        body_font_style: record.body_font_style,
        footer_font_size: record.footer_font_size,
        footer_font_family: record.footer_font_family.clone(),
        footer_font_color: css(record.footer_font_color),
        footer_font_style: record.footer_font_style,
        x_padding: record.x_padding,
        y_padding: record.y_padding,
        caret_size: record.caret_size,
        corner_radius: record.corner_radius,
        display_colors: record.display_colors,
        border_color: css(record.border_color),
        border_width: record.border_width,
    }
}

fn translate_scales(record: &ScalesOptions, labels: &dyn LabelTranslator) -> NativeScales {
    NativeScales {
        x_axes: record
            .x_axes
            .iter()
            .map(|axis| translate_axis(axis, labels))
            .collect(),
        y_axes: record
            .y_axes
            .iter()
            .map(|axis| translate_axis(axis, labels))
            .collect(),
    }
}

fn translate_axis(record: &AxisOptions, labels: &dyn LabelTranslator) -> NativeAxis {
    NativeAxis {
        id: record.id.clone(),
        kind: record.kind,
        position: record.position,
        display: record.display,
        stacked: record.stacked,
        offset: record.offset,
        weight: record.weight,
        scale_label: record
            .scale_label
            .as_ref()
            .map(|title| translate_scale_title(title, labels)),
        ticks: record.ticks.as_ref().map(translate_ticks),
        grid_lines: record.grid_lines.as_ref().map(translate_grid_lines),
    }
}

fn translate_scale_title(
    record: &ScaleTitleOptions,
    labels: &dyn LabelTranslator,
) -> NativeScaleTitle {
    NativeScaleTitle {
        display: record.display,
        label_string: record.label.as_deref().map(|text| labels.translate(text)),
        font_size: record.font_size,
        font_family: record.font_family.clone(),
        font_color: css(record.font_color),
        font_style: record.font_style,
    }
}

fn translate_ticks(record: &TickOptions) -> NativeTicks {
    NativeTicks {
        display: record.display,
        min: record.min,
        max: record.max,
        step_size: record.step_size,
        begin_at_zero: record.begin_at_zero,
        reverse: record.reverse,
        font_size: record.font_size,
        font_family: record.font_family.clone(),
        font_color: css(record.font_color),
        font_style: record.font_style,
        padding: record.padding,
        max_rotation: record.max_rotation,
        min_rotation: record.min_rotation,
        auto_skip: record.auto_skip,
        auto_skip_padding: record.auto_skip_padding,
    }
}

fn translate_grid_lines(record: &GridLineOptions) -> NativeGridLines {
    NativeGridLines {
        display: record.display,
        color: css(record.color),
        line_width: record.line_width,
        border_dash: record.border_dash.clone(),
        draw_border: record.draw_border,
        draw_on_chart_area: record.draw_on_chart_area,
        draw_ticks: record.draw_ticks,
        z: record.z,
    }
}
