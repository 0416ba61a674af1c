//! Chart rendering with plotters
//!
//! Drawing is generic over the plotters backend; [`render_png`] wires it to
//! the bitmap backend and replaces the destination file atomically.

use crate::chart::{ChartLayout, Panel, TICK_AXIS_LABEL};
use crate::error::{PlotError, Result};
use crate::log_table::MAX_AXIS_SPAN;
use crate::step_series::steps_post;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::FontStyle;
use std::path::Path;

/// Font family used for every label on the chart
const FONT_FAMILY: &str = "sans-serif";

/// DejaVu Sans, bundled so the chart renders identically on every host
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const CAPTION_FONT_SIZE: u32 = 16;
const LINE_WIDTH: u32 = 2;

fn render_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Render(err.to_string())
}

/// Make the bundled font available to plotters under `sans-serif`
pub fn register_fonts() -> Result<()> {
    plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
        .map_err(|_| PlotError::Font("bundled DejaVu Sans is not a valid font".to_string()))
}

/// Draw all panels of `layout` onto `root`, top to bottom
pub fn draw_layout<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let areas = root.split_evenly((layout.panels.len(), 1));
    for (area, panel) in areas.iter().zip(&layout.panels) {
        draw_panel(area, panel, layout.x_range.clone())?;
    }

    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    x_range: std::ops::Range<f64>,
) -> Result<()> {
    let y_range = panel.y_range.clone();
    let span = y_range.end - y_range.start;
    if span.is_nan() || span > MAX_AXIS_SPAN {
        return Err(PlotError::Render(format!(
            "{} axis range {:e}..{:e} is too wide",
            panel.title, y_range.start, y_range.end
        )));
    }

    let x_label_area = if panel.shows_x_axis { 40 } else { 12 };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, (FONT_FAMILY, CAPTION_FONT_SIZE))
        .margin(8)
        .x_label_area_size(x_label_area)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_err)?;

    // upper panels share the bottom axis: keep the grid, drop tick text
    let no_tick_text = |_: &f64| String::new();
    let mut mesh = chart.configure_mesh();
    mesh.y_desc(panel.y_label.as_str());
    if panel.shows_x_axis {
        mesh.x_desc(TICK_AXIS_LABEL);
    } else {
        mesh.x_label_formatter(&no_tick_text);
    }
    mesh.draw().map_err(render_err)?;

    let color = panel.color;
    chart
        .draw_series(LineSeries::new(
            steps_post(&panel.samples),
            color.stroke_width(LINE_WIDTH),
        ))
        .map_err(render_err)?
        .label(panel.legend.as_str())
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    Ok(())
}

/// Render `layout` to a PNG at `output`
///
/// The image is first written to a temporary file next to `output` and then
/// renamed over it, so a failed render never leaves a truncated image. The
/// encoder follows the staging name, so the content is PNG whatever
/// extension `output` carries.
pub fn render_png(layout: &ChartLayout, output: &Path) -> Result<()> {
    register_fonts()?;

    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let write_err = |message: String| PlotError::OutputWrite {
        path: output.to_path_buf(),
        message,
    };

    let staging = tempfile::Builder::new()
        .prefix(".floppyplot-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(|e| write_err(e.to_string()))?;

    {
        let root = BitMapBackend::new(staging.path(), layout.size).into_drawing_area();
        draw_layout(&root, layout)?;
        root.present().map_err(|e| write_err(e.to_string()))?;
    }

    staging
        .persist(output)
        .map_err(|e| write_err(e.error.to_string()))?;

    tracing::debug!(
        output = %output.display(),
        width = layout.size.0,
        height = layout.size.1,
        "chart written"
    );
    Ok(())
}
