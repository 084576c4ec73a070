use chartkit::config::{
    AxisOptions, ChartConfig, ChartKind, ChartOptions, Dataset, ScaleTitleOptions, ScalesOptions,
    TitleOptions,
};
use chartkit::engine::{EngineCall, RecordingBackend};
use chartkit::locale::FnTranslator;
use chartkit::surface::{DrawingSurface, SurfaceSize};
use chartkit::widget::ChartWidget;

fn german() -> FnTranslator<fn(&str) -> String> {
    FnTranslator::new("de-DE", |text: &str| {
        match text {
            "Revenue" => "Umsatz",
            "January" => "Januar",
            "Overview" => "Überblick",
            "Amount" => "Betrag",
            other => other,
        }
        .to_owned()
    })
}

fn localized_config() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .with_labels(["January"])
        .push_dataset(Dataset::new(vec![10.0]).with_label("Revenue"))
        .with_options(ChartOptions {
            title: Some(TitleOptions::text("Overview")),
            scales: Some(ScalesOptions::default().with_y_axis(AxisOptions {
                scale_label: Some(ScaleTitleOptions::text("Amount")),
                ..AxisOptions::default()
            })),
            ..ChartOptions::default()
        })
}

#[test]
fn locale_change_is_detected_on_render() {
    let backend = RecordingBackend::default();
    let journal = backend.journal();
    let surface = DrawingSurface::new(SurfaceSize::new(640, 480));
    let mut widget = ChartWidget::new(localized_config(), backend, surface);

    widget.mount();
    let native = widget.native_config().expect("native config after mount");
    assert_eq!(native["data"]["datasets"][0]["label"], "Revenue");

    // Swapping the translator alone must not touch the engine; the change
    // is picked up on the next render pass.
    widget.set_translator(german());
    assert_eq!(journal.borrow().calls, vec![EngineCall::Create]);
    let stale = widget.native_config().expect("native config before render");
    assert_eq!(stale["data"]["datasets"][0]["label"], "Revenue");

    widget.render();
    assert_eq!(
        journal.borrow().calls,
        vec![EngineCall::Create, EngineCall::Update, EngineCall::Render]
    );

    let native = widget.native_config().expect("native config after render");
    assert_eq!(native["data"]["labels"][0], "Januar");
    assert_eq!(native["data"]["datasets"][0]["label"], "Umsatz");
    assert_eq!(native["options"]["title"]["text"], "Überblick");
    assert_eq!(
        native["options"]["scales"]["yAxes"][0]["scaleLabel"]["labelString"],
        "Betrag"
    );
}

#[test]
fn unchanged_locale_renders_without_retranslation() {
    let backend = RecordingBackend::default();
    let journal = backend.journal();
    let surface = DrawingSurface::new(SurfaceSize::new(640, 480));
    let mut widget = ChartWidget::new(localized_config(), backend, surface);

    widget.mount();
    widget.render();
    widget.render();

    assert_eq!(
        journal.borrow().calls,
        vec![EngineCall::Create, EngineCall::Render, EngineCall::Render]
    );
}

#[test]
fn mount_translates_under_the_active_locale() {
    let backend = RecordingBackend::default();
    let surface = DrawingSurface::new(SurfaceSize::new(640, 480));
    let mut widget =
        ChartWidget::new(localized_config(), backend, surface).with_translator(german());

    widget.mount();

    let native = widget.native_config().expect("native config after mount");
    assert_eq!(native["data"]["datasets"][0]["label"], "Umsatz");
    assert_eq!(native["options"]["title"]["text"], "Überblick");
}

#[test]
fn same_config_retranslates_without_rebuilding() {
    let config = localized_config();
    let identity = chartkit::locale::IdentityTranslator;

    let english = chartkit::translate(&config, &identity);
    let localized = chartkit::translate(&config, &german());

    assert_ne!(english, localized);
    assert_eq!(
        localized.data.datasets[0].label.as_deref(),
        Some("Umsatz")
    );
    // The source configuration is untouched by translation.
    assert_eq!(config.datasets[0].label.as_deref(), Some("Revenue"));
}
