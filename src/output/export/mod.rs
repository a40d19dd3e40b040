//! Data export for SIR/WSIR run bundles
//!
//! Currently CSV only: one row per sample point, one column per
//! compartment plus the population total, ready for pandas, Excel, or
//! gnuplot.
//!
//! ```rust,ignore
//! use sir_plot::output::export::export_run_csv;
//!
//! export_run_csv(&x, &run, Some(&w), "run.csv", None)?;
//! ```

pub mod csv;

pub use csv::{export_run_csv, CsvConfig, CsvMetadata};
