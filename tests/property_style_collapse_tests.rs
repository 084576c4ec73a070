use chartkit::config::{ChartConfig, ChartKind, Dataset};
use chartkit::locale::IdentityTranslator;
use chartkit::translate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn collapse_matches_sequence_length(
        widths in proptest::collection::vec(0.0f64..50.0, 0..8)
    ) {
        let config = ChartConfig::new(ChartKind::Bar).push_dataset(
            Dataset::new(vec![1.0, 2.0, 3.0]).with_border_width(widths.clone()),
        );
        let native = translate(&config, &IdentityTranslator)
            .to_value()
            .expect("to value");
        let wire = &native["data"]["datasets"][0]["borderWidth"];

        if widths.len() == 1 {
            prop_assert_eq!(wire.as_f64(), Some(widths[0]));
        } else {
            let items = wire.as_array().expect("sequence stays a sequence");
            prop_assert_eq!(items.len(), widths.len());
            for (item, width) in items.iter().zip(&widths) {
                prop_assert_eq!(item.as_f64(), Some(*width));
            }
        }
    }

    #[test]
    fn hover_radius_collapse_agrees_with_border_width_collapse(
        values in proptest::collection::vec(0.0f64..50.0, 0..6)
    ) {
        // The open question around uniform collapsing is settled by one
        // shared helper; any two styling sequences must collapse alike.
        let config = ChartConfig::new(ChartKind::Line).push_dataset(
            Dataset::new(vec![1.0])
                .with_border_width(values.clone())
                .with_point_hover_radius(values.clone()),
        );
        let native = translate(&config, &IdentityTranslator)
            .to_value()
            .expect("to value");
        let dataset = &native["data"]["datasets"][0];
        prop_assert_eq!(&dataset["borderWidth"], &dataset["pointHoverRadius"]);
    }

    #[test]
    fn translation_is_idempotent_for_generated_series(
        values in proptest::collection::vec(-1.0e6f64..1.0e6, 0..32)
    ) {
        let config = ChartConfig::new(ChartKind::Line)
            .push_dataset(Dataset::new(values).with_label("generated"));
        let first = translate(&config, &IdentityTranslator);
        let second = translate(&config, &IdentityTranslator);
        prop_assert_eq!(first, second);
    }
}
