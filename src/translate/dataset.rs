use crate::config::{DataPoint, DataSeries, Dataset, StyleSeq};
use crate::locale::LabelTranslator;
use crate::native::{NativeDataSeries, NativeDataset};

use super::{collapse, collapse_colors};

pub(super) fn translate_dataset(record: &Dataset, labels: &dyn LabelTranslator) -> NativeDataset {
    NativeDataset {
        data: translate_series(&record.data),
        label: record.label.as_deref().map(|text| labels.translate(text)),
        background_color: record.background_color.as_ref().map(collapse_colors),
        border_color: record.border_color.as_ref().map(collapse_colors),
        border_width: record.border_width.as_ref().map(collapse),
        // The dash pattern is a sequence by nature, but it rides the same
        // collapse helper as every other styling sequence; a one-element
        // pattern reaches the engine as a bare number.
        border_dash: record
            .border_dash
            .as_ref()
            .map(|dash| collapse(&StyleSeq::Each(dash.clone()))),
        border_dash_offset: record.border_dash_offset,
        border_cap_style: record.border_cap_style,
        border_join_style: record.border_join_style,
        point_background_color: record.point_background_color.as_ref().map(collapse_colors),
        point_border_color: record.point_border_color.as_ref().map(collapse_colors),
        point_border_width: record.point_border_width.as_ref().map(collapse),
        point_radius: record.point_radius.as_ref().map(collapse),
        point_hover_radius: record.point_hover_radius.as_ref().map(collapse),
        point_hit_radius: record.point_hit_radius.as_ref().map(collapse),
        point_style: record.point_style.as_ref().map(collapse),
        hover_background_color: record.hover_background_color.as_ref().map(collapse_colors),
        hover_border_color: record.hover_border_color.as_ref().map(collapse_colors),
        hover_border_width: record.hover_border_width.as_ref().map(collapse),
        fill: record.fill,
        line_tension: record.line_tension,
        stepped_line: record.stepped_line,
        show_line: record.show_line,
        span_gaps: record.span_gaps,
        stack: record.stack.clone(),
        hidden: record.hidden,
        x_axis_id: record.x_axis_id.clone(),
        y_axis_id: record.y_axis_id.clone(),
    }
}

fn translate_series(series: &DataSeries) -> NativeDataSeries {
    match series {
        DataSeries::Numbers(values) => NativeDataSeries::Numbers(values.clone()),
        DataSeries::Bubbles(points) => NativeDataSeries::Bubbles(points.clone()),
        DataSeries::Points(points) => NativeDataSeries::Points(points.clone()),
        DataSeries::TimePoints(points) => NativeDataSeries::Points(
            points
                .iter()
                .map(|point| DataPoint::new(point.epoch_millis(), point.value))
                .collect(),
        ),
    }
}
