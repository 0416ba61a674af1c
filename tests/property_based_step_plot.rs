//! Property-based tests for log parsing, layout and step expansion

use floppyplot::step_series::{steps_post, tick_samples, value_at};
use floppyplot::{ChartLayout, LogTable, Signal};
use proptest::prelude::*;

fn bus_rows() -> impl Strategy<Value = Vec<(u8, u8, u8)>> {
    prop::collection::vec((0u8..2, 0u8..2, 0u8..2), 1..200)
}

fn render_log(rows: &[(u8, u8, u8)]) -> String {
    rows.iter()
        .map(|(d, c, a)| format!("{},{},{}\n", d, c, a))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_every_panel_has_one_point_per_row(rows in bus_rows()) {
        let table = LogTable::from_reader(render_log(&rows).as_bytes()).unwrap();
        let layout = ChartLayout::from_table(&table, (800, 600));

        prop_assert_eq!(layout.panels.len(), 3);
        for panel in &layout.panels {
            prop_assert_eq!(panel.point_count(), rows.len());
        }
        let order: Vec<Signal> = layout.panels.iter().map(|p| p.signal).collect();
        prop_assert_eq!(order, Signal::ALL.to_vec());
    }

    #[test]
    fn prop_columns_preserve_row_order(rows in bus_rows()) {
        let table = LogTable::from_reader(render_log(&rows).as_bytes()).unwrap();

        let data: Vec<f64> = rows.iter().map(|r| r.0 as f64).collect();
        let clock: Vec<f64> = rows.iter().map(|r| r.1 as f64).collect();
        let attention: Vec<f64> = rows.iter().map(|r| r.2 as f64).collect();
        prop_assert_eq!(table.column(Signal::Data), data);
        prop_assert_eq!(table.column(Signal::Clock), clock);
        prop_assert_eq!(table.column(Signal::Attention), attention);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_steps_post_holds_value_between_ticks(
        values in prop::collection::vec(-1000.0f64..1000.0, 1..100),
        frac in 0.0f64..1.0,
    ) {
        let samples = tick_samples(&values);
        let path = steps_post(&samples);

        prop_assert_eq!(path.len(), 2 * values.len() - 1);

        // every horizontal segment sits at the value of its left sample
        for pair in path.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            if x0 != x1 {
                prop_assert_eq!(y0, y1);
                prop_assert_eq!(y0, values[x0 as usize]);
            }
        }

        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(value_at(&samples, i as f64 + frac * 0.999), Some(v));
        }
    }

    #[test]
    fn prop_parser_never_panics(text in "[0-9,. \\-a-z\\n]{0,200}") {
        let _ = LogTable::from_reader(text.as_bytes());
    }
}
