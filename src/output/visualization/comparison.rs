//! SIR vs. WSIR comparison plotting
//!
//! Overlays a baseline SIR run and an extended WSIR run on one chart.
//! Line style distinguishes the runs: the baseline is drawn as solid lines,
//! the extended run markers-only, with both sharing the fixed compartment
//! color map so matching curves are easy to pair visually.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sir_plot::output::visualization::plot_sir_vs_wsir;
//!
//! let baseline = SirRun::new(&s, &i, &r)?;
//! let extended = WsirRun::new(&sw, &iw, &rw, &ww)?;
//! plot_sir_vs_wsir(&baseline, &extended, 5e-4, &x, 1000, "SIR vs WSIR", 0.01, None)?;
//! // -> plots/SIRvsWSIR_betaW5.00e-4.png
//! ```

use std::error::Error;
use std::path::PathBuf;

use log::debug;
use plotters::prelude::*;

use super::single_run::axis_range;
use super::style::{palette, ImageFormat, PlotStyle};
use crate::compartments::{SirRun, WsirRun};

/// File stem of a comparison chart for the given `beta_w`.
///
/// The stem depends on `beta_w` alone; the chart title plays no part.
/// Repeated plots with the same `beta_w` therefore overwrite each other —
/// long-standing behavior of the workflow this crate reproduces, kept
/// as-is.
///
/// # Example
///
/// ```rust
/// use sir_plot::output::visualization::comparison_file_stem;
///
/// assert_eq!(comparison_file_stem(5e-4), "SIRvsWSIR_betaW5.00e-4");
/// ```
pub fn comparison_file_stem(beta_w: f64) -> String {
    format!("SIRvsWSIR_betaW{:.2e}", beta_w)
}

/// Plot a baseline SIR run against an extended WSIR run on shared axes.
///
/// The baseline is drawn as solid lines labeled `S`, `I`, `R`, `N`
/// (N = S+I+R); the extended run as circle markers labeled `S*`, `I*`,
/// `R*`, `N*`, `W*`, one marker every [`PlotStyle::marker_every`] samples.
/// Both totals exclude W.
///
/// The file is written to `<output_dir>/SIRvsWSIR_betaW<beta_w>.<ext>` —
/// see [`comparison_file_stem`] — creating the directory on demand.
/// `beta_w`, `n_timesteps` and `dt` annotate the title in scientific
/// notation.
///
/// # Arguments
///
/// * `baseline`    — Three-compartment SIR bundle, drawn as lines
/// * `extended`    — Four-compartment WSIR bundle, drawn as markers
/// * `beta_w`      — W-compartment rate coefficient; determines the filename
/// * `x`           — Axis coordinates shared by both runs
/// * `n_timesteps` — Step count, rendered into the title
/// * `title`       — Title prefix (not part of the filename)
/// * `dt`          — Step size, rendered into the title
/// * `style`       — Optional style; `None` uses [`PlotStyle::comparison`]
///
/// # Errors
///
/// Returns `Err` before any file is touched if the runs are empty, disagree
/// in length, or do not match `x`; filesystem and rendering failures
/// propagate from the backend.
pub fn plot_sir_vs_wsir(
    baseline: &SirRun,
    extended: &WsirRun,
    beta_w: f64,
    x: &[f64],
    n_timesteps: usize,
    title: &str,
    dt: f64,
    style: Option<&PlotStyle>,
) -> Result<PathBuf, Box<dyn Error>> {
    if baseline.is_empty() || extended.is_empty() {
        return Err("empty run: nothing to plot".into());
    }
    if baseline.len() != x.len() || extended.len() != x.len() {
        return Err(format!(
            "axis length mismatch: axis={}, baseline={}, extended={}",
            x.len(),
            baseline.len(),
            extended.len()
        )
        .into());
    }

    let default_style = PlotStyle::comparison();
    let style = style.unwrap_or(&default_style);

    let caption = format!(
        "{} @ ntimesteps={:.2e} dt={:.2e} beta_W={:.2e}",
        title, n_timesteps as f64, dt, beta_w
    );
    let x_range = axis_range(x);

    style.ensure_output_dir()?;
    let path = style.output_path(&comparison_file_stem(beta_w));

    match style.format {
        ImageFormat::Svg => {
            let backend = SVGBackend::new(&path, (style.width, style.height));
            render_comparison(backend, x, baseline, extended, &caption, style, x_range)?;
        }
        ImageFormat::Png => {
            let backend = BitMapBackend::new(&path, (style.width, style.height));
            render_comparison(backend, x, baseline, extended, &caption, style, x_range)?;
        }
    }

    debug!("wrote comparison chart to {}", path.display());
    Ok(path)
}

/// Implementation for comparison plotting with a concrete backend
fn render_comparison<DB: DrawingBackend>(
    backend: DB,
    x: &[f64],
    baseline: &SirRun,
    extended: &WsirRun,
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
    let baseline_total = baseline.total();

    // Baseline: solid lines
    let lines: [(&[f64], RGBColor, &str); 4] = [
        (baseline.s, palette::SUSCEPTIBLE, "S"),
        (baseline.i, palette::INFECTED, "I"),
        (baseline.r, palette::RECOVERED, "R"),
        (&baseline_total, palette::TOTAL, "N"),
    ];

    for (series, color, label) in lines {
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

    // Extended: markers only, no connecting line
    let marker_size = style.marker_size as i32;
    let marker_every = style.marker_every.max(1);
    let extended_total = extended.total();

    let markers: [(&[f64], RGBColor, &str); 5] = [
        (extended.s, palette::SUSCEPTIBLE, "S*"),
        (extended.i, palette::INFECTED, "I*"),
        (extended.r, palette::RECOVERED, "R*"),
        (&extended_total, palette::TOTAL, "N*"),
        (extended.w, palette::W, "W*"),
    ];

    for (series, color, label) in markers {
        chart
            .draw_series(
                x.iter()
                    .zip(series)
                    .step_by(marker_every)
                    .map(|(x, y)| Circle::new((*x, *y), marker_size, color.filled())),
            )?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, color.filled()));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn style_in(dir: &std::path::Path) -> PlotStyle {
        let mut style = PlotStyle::comparison();
        style.output_dir = dir.join("plots");
        style
    }

    #[test]
    fn test_file_stem_deterministic_in_beta_w() {
        assert_eq!(comparison_file_stem(5e-4), comparison_file_stem(5e-4));
        assert_ne!(comparison_file_stem(5e-4), comparison_file_stem(6e-4));
        assert!(comparison_file_stem(5e-4).starts_with("SIRvsWSIR_betaW"));
    }

    #[test]
    fn test_plot_writes_beta_w_named_file() {
        let tmp = tempfile::tempdir().unwrap();
        let style = style_in(tmp.path());

        let s = [1.0, 0.9, 0.8];
        let i = [0.0, 0.1, 0.15];
        let r = [0.0, 0.0, 0.05];
        let w = [0.0, 0.01, 0.02];
        let x = [0.0, 1.0, 2.0];

        let baseline = SirRun::new(&s, &i, &r).unwrap();
        let extended = WsirRun::new(&s, &i, &r, &w).unwrap();

        let path = plot_sir_vs_wsir(
            &baseline, &extended, 5e-4, &x, 3, "SIR vs WSIR", 1.0, Some(&style),
        )
        .unwrap();

        assert_eq!(path, style.output_path("SIRvsWSIR_betaW5.00e-4"));
        assert!(path.exists());
    }

    #[test]
    fn test_filename_ignores_title() {
        let tmp = tempfile::tempdir().unwrap();
        let style = style_in(tmp.path());

        let s = [1.0, 0.9];
        let i = [0.0, 0.1];
        let r = [0.0, 0.0];
        let w = [0.0, 0.01];
        let x = [0.0, 1.0];

        let baseline = SirRun::new(&s, &i, &r).unwrap();
        let extended = WsirRun::new(&s, &i, &r, &w).unwrap();

        let first =
            plot_sir_vs_wsir(&baseline, &extended, 1e-3, &x, 2, "first", 1.0, Some(&style))
                .unwrap();
        let second =
            plot_sir_vs_wsir(&baseline, &extended, 1e-3, &x, 2, "second", 1.0, Some(&style))
                .unwrap();

        // Same beta_w, different titles: same file, silently overwritten
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_mismatch_errors_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let style = style_in(tmp.path());

        let s = [1.0, 0.9];
        let i = [0.0, 0.1];
        let r = [0.0, 0.0];
        let w = [0.0, 0.01];
        let x = [0.0, 1.0, 2.0]; // longer than the runs

        let baseline = SirRun::new(&s, &i, &r).unwrap();
        let extended = WsirRun::new(&s, &i, &r, &w).unwrap();

        let result =
            plot_sir_vs_wsir(&baseline, &extended, 2e-3, &x, 2, "bad", 1.0, Some(&style));
        assert!(result.is_err());
        assert!(!style.output_path(&comparison_file_stem(2e-3)).exists());
    }
}
