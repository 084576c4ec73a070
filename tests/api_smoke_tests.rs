use chartkit::config::{ChartConfig, ChartKind, Color, Dataset};
use chartkit::engine::{EngineCall, RecordingBackend};
use chartkit::surface::{DrawingSurface, SurfaceSize};
use chartkit::widget::{ChartWidget, LifecyclePhase};

#[test]
fn widget_smoke_flow() {
    let backend = RecordingBackend::default();
    let journal = backend.journal();

    let config = ChartConfig::new(ChartKind::Bar)
        .with_labels(["Q1", "Q2", "Q3"])
        .push_dataset(
            Dataset::new(vec![3.0, 1.0, 2.0])
                .with_label("Revenue")
                .with_background_color(Color::rgb(54, 162, 235))
                .with_border_width(vec![2.0]),
        );

    let surface = DrawingSurface::new(SurfaceSize::new(800, 600));
    let mut widget = ChartWidget::new(config, backend, surface).with_css_class("dashboard-chart");

    assert_eq!(widget.phase(), LifecyclePhase::Unmounted);
    assert!(widget.native_config().is_none());

    widget.mount();
    assert_eq!(widget.phase(), LifecyclePhase::Mounted);
    assert!(widget.is_mounted());

    let native = widget.native_config().expect("native config after mount");
    assert_eq!(native["type"], "bar");
    assert_eq!(native["data"]["labels"][1], "Q2");
    assert_eq!(native["data"]["datasets"][0]["label"], "Revenue");
    assert_eq!(native["data"]["datasets"][0]["borderWidth"], 2.0);
    assert_eq!(
        native["data"]["datasets"][0]["backgroundColor"],
        "rgba(54, 162, 235, 1)"
    );

    widget.render_animated(Some(250), true);
    widget.stop();
    widget.resize(SurfaceSize::new(1024, 768));
    assert_eq!(widget.surface().size(), SurfaceSize::new(1024, 768));
    widget.clear();

    let image = widget.to_base64_image().expect("image export while mounted");
    assert!(image.starts_with("data:image/png;base64,"));

    widget.unmount();
    assert_eq!(widget.phase(), LifecyclePhase::Destroyed);
    assert!(widget.to_base64_image().is_none());

    let journal = journal.borrow();
    assert_eq!(journal.created, 1);
    assert_eq!(journal.destroyed, 1);
    assert_eq!(journal.outstanding(), 0);
    assert_eq!(journal.calls.first(), Some(&EngineCall::Create));
    assert_eq!(journal.calls.last(), Some(&EngineCall::Destroy));
    let render = journal.last_render.expect("render options recorded");
    assert_eq!(render.duration_ms, Some(250));
    assert!(render.lazy);
}
