use chartkit::config::{BubblePoint, ChartConfig, ChartKind, DataPoint, Dataset, TimePoint};
use chartkit::locale::IdentityTranslator;
use chartkit::translate;
use chrono::{TimeZone, Utc};
use serde_json::json;

#[test]
fn number_series_cross_unchanged() {
    let config =
        ChartConfig::new(ChartKind::Bar).push_dataset(Dataset::new(vec![3.0, 1.0, 2.0]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(
        native["data"]["datasets"][0]["data"],
        json!([3.0, 1.0, 2.0])
    );
}

#[test]
fn point_series_keep_their_coordinates() {
    let config = ChartConfig::new(ChartKind::Scatter).push_dataset(Dataset::new(vec![
        DataPoint::new(1.0, 10.0),
        DataPoint::new(2.0, 20.0),
    ]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(
        native["data"]["datasets"][0]["data"],
        json!([{"x": 1.0, "y": 10.0}, {"x": 2.0, "y": 20.0}])
    );
}

#[test]
fn bubble_series_keep_their_radius() {
    let config = ChartConfig::new(ChartKind::Bubble)
        .push_dataset(Dataset::new(vec![BubblePoint::new(1.0, 2.0, 8.0)]));
    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    assert_eq!(
        native["data"]["datasets"][0]["data"],
        json!([{"x": 1.0, "y": 2.0, "r": 8.0}])
    );
}

#[test]
fn time_series_become_epoch_millisecond_points() {
    let first = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
    let config = ChartConfig::new(ChartKind::Line).push_dataset(Dataset::new(vec![
        TimePoint::new(first, 4.5),
        TimePoint::new(second, 5.0),
    ]));

    let native = translate(&config, &IdentityTranslator)
        .to_value()
        .expect("to value");
    let data = &native["data"]["datasets"][0]["data"];
    assert_eq!(data[0]["x"], first.timestamp_millis() as f64);
    assert_eq!(data[0]["y"], 4.5);
    assert_eq!(data[1]["x"], second.timestamp_millis() as f64);
}
