// Library-level tests for the load -> layout -> render pipeline

use floppyplot::step_series::{steps_post, value_at};
use floppyplot::{plot_log, ChartLayout, LogTable, PlotConfig, PlotError, Signal};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_in(dir: &Path, log: &str) -> PlotConfig {
    let input = dir.join("floppy.log");
    fs::write(&input, log).unwrap();
    PlotConfig {
        input,
        output: dir.join("line_plots.png"),
        ..PlotConfig::default()
    }
}

#[test]
fn test_three_row_scenario() {
    let table = LogTable::from_reader("1,0,0\n1,1,0\n0,1,1\n".as_bytes()).unwrap();
    let layout = ChartLayout::from_table(&table, (800, 600));

    assert_eq!(layout.panels.len(), 3);
    let values = |signal: Signal| -> Vec<f64> {
        layout
            .panel(signal)
            .unwrap()
            .samples
            .iter()
            .map(|&(_, v)| v)
            .collect()
    };
    assert_eq!(values(Signal::Data), vec![1.0, 1.0, 0.0]);
    assert_eq!(values(Signal::Clock), vec![0.0, 1.0, 1.0]);
    assert_eq!(values(Signal::Attention), vec![0.0, 0.0, 1.0]);

    // Data holds 1 across the whole first two ticks, drops only at tick 2
    let data = &layout.panel(Signal::Data).unwrap().samples;
    assert_eq!(value_at(data, 1.5), Some(1.0));
    assert_eq!(value_at(data, 2.0), Some(0.0));
    assert_eq!(steps_post(data).len(), 5);
}

#[test]
fn test_plot_log_writes_image_and_reports_rows() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "1,0,0\n1,1,0\n0,1,1\n");

    let summary = plot_log(&config).unwrap();

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.output, config.output);
    assert_eq!(image::image_dimensions(&config.output).unwrap(), (800, 600));
}

#[test]
fn test_rendering_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let log: String = (0..500)
        .map(|i| format!("{},{},{}\n", (i / 3) % 2, i % 2, (i / 50) % 2))
        .collect();
    let config = config_in(dir.path(), &log);

    plot_log(&config).unwrap();
    let first = fs::read(&config.output).unwrap();
    plot_log(&config).unwrap();
    let second = fs::read(&config.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = PlotConfig {
        input: dir.path().join("absent.log"),
        output: dir.path().join("line_plots.png"),
        ..PlotConfig::default()
    };

    let err = plot_log(&config).unwrap_err();

    assert!(matches!(err, PlotError::InputNotFound { .. }));
    assert!(!config.output.exists());
}

#[test]
fn test_empty_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "");

    let err = plot_log(&config).unwrap_err();

    assert!(matches!(err, PlotError::EmptyInput { .. }));
    assert!(!config.output.exists());
}

#[test]
fn test_blank_lines_only_is_empty_input() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "\n\n\n");

    assert!(matches!(
        plot_log(&config),
        Err(PlotError::EmptyInput { .. })
    ));
}

#[test]
fn test_parse_error_leaves_existing_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "1,0,0\n0,1,?\n");
    fs::write(&config.output, b"old chart").unwrap();

    let err = plot_log(&config).unwrap_err();

    assert!(matches!(err, PlotError::InputParse { line: 2, .. }));
    assert_eq!(fs::read(&config.output).unwrap(), b"old chart");
}

#[test]
fn test_single_row_log_renders() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "1,1,1\n");

    let summary = plot_log(&config).unwrap();

    assert_eq!(summary.rows, 1);
    assert!(config.output.exists());
}

#[test]
fn test_extreme_spread_is_rejected_before_rendering() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "-1e308,0,0\n1e308,0,0\n");

    let err = plot_log(&config).unwrap_err();

    assert!(matches!(err, PlotError::InputParse { line: 2, .. }));
    assert!(!config.output.exists());
}

#[test]
fn test_wide_but_finite_spread_renders() {
    let dir = TempDir::new().unwrap();
    let config = config_in(dir.path(), "-1e200,0,0\n1e200,1,1\n");

    plot_log(&config).unwrap();

    let table = LogTable::from_path(&config.input).unwrap();
    let layout = ChartLayout::from_table(&table, (800, 600));
    let data = layout.panel(Signal::Data).unwrap();
    assert!(data.y_range.start < -1e200 && data.y_range.end > 1e200);
}
