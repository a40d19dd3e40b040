//! Single-run trajectory plotting
//!
//! Renders one run's S, I, R curves and their population total against a
//! shared spatial/temporal axis, with an optional dashed W curve.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sir_plot::output::visualization::plot_single_run;
//!
//! let run = SirRun::new(&s, &i, &r)?;
//! plot_single_run(&run, &x, nt, dt, "epidemic", Some(&w), None)?;
//! // -> plots/epidemic.png
//! ```

use std::error::Error;
use std::path::PathBuf;

use log::debug;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::style::{palette, ImageFormat, PlotStyle};
use crate::compartments::SirRun;

/// Plot one run's S/I/R curves, their total, and an optional W curve.
///
/// The chart shows four solid lines — Susceptible (green), Infected (red),
/// Recovered (purple) and their elementwise sum "Total population" (black) —
/// against `x`. If `w` is given it is drawn as a fifth, dashed blue curve
/// labeled "W"; it is never added to the total.
///
/// The file is written to `<output_dir>/<title>.<ext>` (default
/// `plots/<title>.png`), creating the directory on demand. `nt` and `dt`
/// only annotate the title.
///
/// # Arguments
///
/// * `run`   — Compartment bundle (equal-length S, I, R)
/// * `x`     — Axis coordinates, same length as the bundle
/// * `nt`    — Step count, rendered into the title
/// * `dt`    — Step size, rendered into the title
/// * `title` — Chart title and output file stem
/// * `w`     — Optional W compartment series, same length as the bundle
/// * `style` — Optional style; `None` uses [`PlotStyle::single_run`]
///
/// # Errors
///
/// Returns `Err` before any file is touched if `x` (or `w`) does not match
/// the bundle length or the run is empty, and propagates filesystem or
/// rendering failures from the backend.
///
/// # Example
///
/// ```rust,ignore
/// plot_single_run(&run, &x, 3, 1.0, "demo", None, None)?;
/// ```
pub fn plot_single_run(
    run: &SirRun,
    x: &[f64],
    nt: usize,
    dt: f64,
    title: &str,
    w: Option<&[f64]>,
    style: Option<&PlotStyle>,
) -> Result<PathBuf, Box<dyn Error>> {
    if run.is_empty() {
        return Err("empty run: nothing to plot".into());
    }
    if x.len() != run.len() {
        return Err(format!(
            "axis length mismatch: axis={}, run={}",
            x.len(),
            run.len()
        )
        .into());
    }
    if let Some(w) = w {
        if w.len() != run.len() {
            return Err(format!(
                "W length mismatch: W={}, run={}",
                w.len(),
                run.len()
            )
            .into());
        }
    }

    let default_style = PlotStyle::single_run();
    let style = style.unwrap_or(&default_style);

    let caption = format!("{} @ nt: {} dt {}", title, nt, dt);
    let x_range = axis_range(x);

    style.ensure_output_dir()?;
    let path = style.output_path(title);

    match style.format {
        ImageFormat::Svg => {
            let backend = SVGBackend::new(&path, (style.width, style.height));
            render_single_run(backend, x, run, w, &caption, style, x_range)?;
        }
        ImageFormat::Png => {
            let backend = BitMapBackend::new(&path, (style.width, style.height));
            render_single_run(backend, x, run, w, &caption, style, x_range)?;
        }
    }

    debug!("wrote single-run chart to {}", path.display());
    Ok(path)
}

/// Min/max of the axis, widened when degenerate so the chart always has a
/// non-empty x extent.
pub(crate) fn axis_range(x: &[f64]) -> (f64, f64) {
    let min = x.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = x.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max > min {
        (min, max)
    } else {
        (min, min + 1.0)
    }
}

/// Implementation for single-run plotting with a concrete backend
fn render_single_run<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    run: &SirRun,
    w: Option<&[f64]>,
    caption: &str,
    style: &PlotStyle,
    x_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&style.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", style.title_font_size as i32))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.0..x_range.1, style.y_limits.0..style.y_limits.1)?;

    if style.show_grid {
        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("No of people")
            .axis_desc_style(("sans-serif", style.label_font_size as i32))
            .label_style(("sans-serif", style.tick_font_size as i32))
            .draw()?;
    }

    let line_width = style.line_width;
    let curves: [(&[f64], RGBColor, &str); 3] = [
        (run.s, palette::SUSCEPTIBLE, "Susceptible"),
        (run.i, palette::INFECTED, "Infected"),
        (run.r, palette::RECOVERED, "Recovered"),
    ];

    for (series, color, label) in curves {
        chart
            .draw_series(LineSeries::new(
                x.iter().zip(series).map(|(x, y)| (*x, *y)),
                ShapeStyle::from(&color).stroke_width(line_width),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    let total = run.total();
    chart
        .draw_series(LineSeries::new(
            x.iter().zip(&total).map(|(x, y)| (*x, *y)),
            ShapeStyle::from(&palette::TOTAL).stroke_width(line_width),
        ))?
        .label("Total population")
        .legend(move |(x, y)| {
            PathElement::new(
                vec![(x, y), (x + 20, y)],
                palette::TOTAL.stroke_width(line_width),
            )
        });

    if let Some(w) = w {
        chart
            .draw_series(DashedLineSeries::new(
                x.iter().zip(w).map(|(x, y)| (*x, *y)),
                4,
                6,
                ShapeStyle::from(&palette::W).stroke_width(line_width),
            ))?
            .label("W")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], palette::W.stroke_width(line_width))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&style.background.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", style.legend_font_size as i32))
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
