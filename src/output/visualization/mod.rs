//! Visualization module for SIR/WSIR run bundles
//!
//! Renders compartment trajectories with the `plotters` library.
//!
//! # Organization
//!
//! - **style**: Shared plot configuration ([`PlotStyle`]) and output-file
//!   handling
//! - **single_run**: One run's S/I/R (+ optional W) curves and their total
//! - **comparison**: Baseline SIR vs. extended WSIR overlaid on one chart
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sir_plot::output::visualization::{plot_single_run, PlotStyle};
//!
//! // Default style: 1400x800 PNG under plots/
//! plot_single_run(&run, &x, nt, dt, "epidemic", None, None)?;
//!
//! // Or with a custom style
//! let mut style = PlotStyle::single_run();
//! style.output_dir = "out".into();
//! plot_single_run(&run, &x, nt, dt, "epidemic", Some(&w), Some(&style))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | One run, S/I/R (+ W) over an axis | [`plot_single_run`] |
//! | Baseline SIR vs. WSIR variant overlay | [`plot_sir_vs_wsir`] |

pub mod comparison;
pub mod single_run;
pub mod style;

pub use style::{ImageFormat, PlotStyle};

pub use single_run::plot_single_run;

pub use comparison::{comparison_file_stem, plot_sir_vs_wsir};
