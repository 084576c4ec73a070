use gtk4 as gtk;
use gtk::prelude::*;

use crate::engine::EngineBackend;
use crate::widget::ChartWidget;

/// Hosts a chart widget inside a `gtk::DrawingArea`.
///
/// The engine draws into the area; this host only applies the widget's
/// CSS class set and fixed pixel size to the GTK side.
pub struct GtkChartHost<B: EngineBackend> {
    widget: ChartWidget<B>,
    area: gtk::DrawingArea,
}

impl<B: EngineBackend> GtkChartHost<B> {
    #[must_use]
    pub fn new(widget: ChartWidget<B>) -> Self {
        let area = gtk::DrawingArea::new();
        for class in widget.css_classes() {
            area.add_css_class(class);
        }
        if let Some(size) = widget.fixed_size() {
            area.set_content_width(size.width as i32);
            area.set_content_height(size.height as i32);
        }
        Self { widget, area }
    }

    #[must_use]
    pub fn widget(&self) -> &ChartWidget<B> {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut ChartWidget<B> {
        &mut self.widget
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }
}
