//! Plot style shared across visualization functions
//!
//! The original workflow these plots come from configured its renderer
//! through process-wide parameters re-applied before every draw. Here the
//! same knobs live in an explicit [`PlotStyle`] value passed per call, so
//! sequential plots cannot interfere with each other.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

/// Fixed compartment color map used by every chart in this crate.
///
/// Susceptible = green, Infected = red, Recovered = purple, Total = black,
/// W = blue. Keeping one mapping across single-run and comparison charts is
/// what makes the overlays readable.
pub(crate) mod palette {
    use plotters::style::RGBColor;

    pub const SUSCEPTIBLE: RGBColor = RGBColor(0, 128, 0);
    pub const INFECTED: RGBColor = RGBColor(255, 0, 0);
    pub const RECOVERED: RGBColor = RGBColor(128, 0, 128);
    pub const TOTAL: RGBColor = RGBColor(0, 0, 0);
    pub const W: RGBColor = RGBColor(0, 0, 255);
}

/// Output image format, selecting the plotters backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Bitmap output via `BitMapBackend`
    Png,
    /// Vector output via `SVGBackend`
    Svg,
}

impl ImageFormat {
    /// File extension for this format (no leading dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Configuration for customizing SIR/WSIR plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title_font_size`, `label_font_size`, `tick_font_size`,
///   `legend_font_size`: Font sizes for the corresponding chart parts
/// - `line_width`: Line thickness in pixels
/// - `marker_size`, `marker_every`: Marker radius and stride for
///   markers-only series (comparison charts)
/// - `y_limits`: Fixed y-axis bounds; defaults to `(-0.05, 1.05)` for
///   normalized population fractions
/// - `background`: Background color
/// - `show_grid`: Whether to draw grid lines
/// - `output_dir`: Directory charts are written into (created on demand)
/// - `format`: PNG (default) or SVG output
///
/// # Example
///
/// ```rust
/// use sir_plot::output::visualization::PlotStyle;
///
/// let mut style = PlotStyle::single_run();
/// style.output_dir = "charts".into();
/// style.y_limits = (0.0, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Title font size (default: 40)
    pub title_font_size: u32,

    /// Axis description font size (default: 28)
    pub label_font_size: u32,

    /// Tick label font size (default: 22)
    pub tick_font_size: u32,

    /// Legend font size (default: 24)
    pub legend_font_size: u32,

    /// Line thickness in pixels (default: 2)
    pub line_width: u32,

    /// Marker radius in pixels for markers-only series (default: 4)
    pub marker_size: u32,

    /// Draw a marker every n-th sample point (default: 3)
    pub marker_every: usize,

    /// Fixed y-axis bounds (default: (-0.05, 1.05))
    pub y_limits: (f64, f64),

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Output directory, created idempotently before any write
    /// (default: "plots")
    pub output_dir: PathBuf,

    /// Output image format (default: PNG)
    pub format: ImageFormat,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::single_run()
    }
}

impl PlotStyle {
    /// Style for single-run charts: 1400x800 canvas (the original 14x8 in
    /// figure at 100 dpi).
    pub fn single_run() -> Self {
        Self {
            width: 1400,
            height: 800,
            title_font_size: 40,
            label_font_size: 28,
            tick_font_size: 22,
            legend_font_size: 24,
            line_width: 2,
            marker_size: 4,
            marker_every: 3,
            y_limits: (-0.05, 1.05),
            background: WHITE,
            show_grid: true,
            output_dir: PathBuf::from("plots"),
            format: ImageFormat::Png,
        }
    }

    /// Style for SIR-vs-WSIR comparison charts: larger 1600x1000 canvas to
    /// fit two overlaid runs and a ten-entry legend.
    pub fn comparison() -> Self {
        Self {
            width: 1600,
            height: 1000,
            ..Self::single_run()
        }
    }

    /// Full output path for a chart with the given file stem.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", stem, self.format.extension()))
    }

    /// Create the output directory if it does not exist yet.
    ///
    /// Idempotent: an already-existing directory is not an error.
    pub fn ensure_output_dir(&self) -> io::Result<()> {
        ensure_dir(&self.output_dir)
    }
}

/// Idempotent create-or-reuse of an output directory.
pub(crate) fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_style_defaults() {
        let style = PlotStyle::single_run();
        assert_eq!(style.width, 1400);
        assert_eq!(style.height, 800);
        assert_eq!(style.y_limits, (-0.05, 1.05));
        assert_eq!(style.output_dir, PathBuf::from("plots"));
        assert_eq!(style.format, ImageFormat::Png);
        assert!(style.show_grid);
    }

    #[test]
    fn test_comparison_style_is_larger() {
        let style = PlotStyle::comparison();
        assert_eq!(style.width, 1600);
        assert_eq!(style.height, 1000);
        // Everything else follows the single-run defaults
        assert_eq!(style.y_limits, (-0.05, 1.05));
        assert_eq!(style.marker_every, 3);
    }

    #[test]
    fn test_default_is_single_run() {
        let style = PlotStyle::default();
        assert_eq!(style.width, PlotStyle::single_run().width);
        assert_eq!(style.height, PlotStyle::single_run().height);
    }

    #[test]
    fn test_output_path_follows_format() {
        let mut style = PlotStyle::single_run();
        assert_eq!(style.output_path("demo"), PathBuf::from("plots/demo.png"));

        style.format = ImageFormat::Svg;
        style.output_dir = "charts".into();
        assert_eq!(style.output_path("demo"), PathBuf::from("charts/demo.svg"));
    }

    #[test]
    fn test_ensure_output_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut style = PlotStyle::single_run();
        style.output_dir = tmp.path().join("plots");

        style.ensure_output_dir().unwrap();
        assert!(style.output_dir.is_dir());

        // Second acquisition of the same directory must not fail
        style.ensure_output_dir().unwrap();
    }
}
