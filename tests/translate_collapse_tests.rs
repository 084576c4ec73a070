use chartkit::config::{ChartConfig, ChartKind, Color, Dataset, PointStyle};
use chartkit::locale::IdentityTranslator;
use chartkit::translate;
use serde_json::json;

fn bar_with(dataset: Dataset) -> ChartConfig {
    ChartConfig::new(ChartKind::Bar)
        .with_labels(["A", "B"])
        .push_dataset(dataset)
}

#[test]
fn singleton_border_width_collapses_to_scalar() {
    let config = bar_with(Dataset::new(vec![1.0, 2.0]).with_border_width(vec![2.0]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");

    assert_eq!(native["type"], "bar");
    assert_eq!(native["data"]["labels"], json!(["A", "B"]));
    assert_eq!(native["data"]["datasets"][0]["borderWidth"], 2.0);
}

#[test]
fn two_element_border_width_passes_through_in_order() {
    let config = bar_with(Dataset::new(vec![1.0, 2.0]).with_border_width(vec![2.0, 3.0]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");

    assert_eq!(native["data"]["datasets"][0]["borderWidth"], json!([2.0, 3.0]));
}

#[test]
fn uniform_value_crosses_as_scalar() {
    let config = bar_with(Dataset::new(vec![1.0, 2.0]).with_border_width(4.0));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");

    assert_eq!(native["data"]["datasets"][0]["borderWidth"], 4.0);
}

#[test]
fn empty_sequence_stays_a_sequence() {
    let config = bar_with(Dataset::new(vec![1.0, 2.0]).with_border_width(Vec::new()));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");

    assert_eq!(native["data"]["datasets"][0]["borderWidth"], json!([]));
}

#[test]
fn color_sequences_collapse_to_css_strings() {
    let config = bar_with(
        Dataset::new(vec![1.0, 2.0])
            .with_background_color(vec![Color::rgba(255, 99, 132, 0.2)])
            .with_border_color(vec![Color::rgb(255, 99, 132), Color::rgb(54, 162, 235)]),
    );
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");

    let dataset = &native["data"]["datasets"][0];
    assert_eq!(dataset["backgroundColor"], "rgba(255, 99, 132, 0.2)");
    assert_eq!(
        dataset["borderColor"],
        json!(["rgba(255, 99, 132, 1)", "rgba(54, 162, 235, 1)"])
    );
}

#[test]
fn border_dash_rides_the_shared_collapse_helper() {
    let single = bar_with(Dataset::new(vec![1.0]).with_border_dash(vec![5.0]));
    let native = translate(&single, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(native["data"]["datasets"][0]["borderDash"], 5.0);

    let pattern = bar_with(Dataset::new(vec![1.0]).with_border_dash(vec![5.0, 3.0]));
    let native = translate(&pattern, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(native["data"]["datasets"][0]["borderDash"], json!([5.0, 3.0]));
}

#[test]
fn point_style_sequences_collapse_to_wire_strings() {
    let config = bar_with(Dataset::new(vec![1.0]).with_point_style(vec![PointStyle::Star]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(native["data"]["datasets"][0]["pointStyle"], "star");

    let config = bar_with(
        Dataset::new(vec![1.0, 2.0])
            .with_point_style(vec![PointStyle::Circle, PointStyle::CrossRot]),
    );
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(
        native["data"]["datasets"][0]["pointStyle"],
        json!(["circle", "crossRot"])
    );
}
