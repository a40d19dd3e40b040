//! Output module for SIR/WSIR run data
//!
//! This module turns run bundles into artifacts on disk:
//! - **Visualization**: PNG/SVG charts using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Charts
//! │   ├── style.rs
//! │   ├── single_run.rs
//! │   └── comparison.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sir_plot::output::{plot_single_run, export_run_csv};
//!
//! plot_single_run(&run, &x, nt, dt, "demo", None, None)?;
//! export_run_csv(&x, &run, None, "demo.csv", None)?;
//! ```
//!
//! Both sub-modules accept the same borrowed bundles and `&[f64]` axes; the
//! visualization side is for human interpretation, the export side for
//! programmatic analysis.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{
    comparison_file_stem, plot_single_run, plot_sir_vs_wsir, ImageFormat, PlotStyle,
};

pub use export::{export_run_csv, CsvConfig, CsvMetadata};
