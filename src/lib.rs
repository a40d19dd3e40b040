//! sir-plot: visualization utilities for SIR/WSIR epidemic simulations
//!
//! A small presentation layer over the `plotters` library for rendering
//! precomputed SIR (Susceptible/Infected/Recovered) trajectories, optionally
//! extended with a "W" compartment (waning immunity or an environmental
//! signal). There is no simulation here: callers bring equal-length numeric
//! series, this crate validates, styles, draws, and saves.
//!
//! # Architecture
//!
//! - **Separation of data and presentation**
//!   - [`compartments`] holds the run bundles (what to draw)
//!   - [`output`] holds the rendering and export paths (how to draw it)
//! - **Explicit style, no global state**
//!   - every render call takes a [`PlotStyle`](output::visualization::PlotStyle);
//!     nothing mutates process-wide rendering parameters
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sir_plot::prelude::*;
//!
//! let run = SirRun::new(&s, &i, &r)?;
//! plot_single_run(&run, &x, nt, dt, "demo", None, None)?;
//! // -> plots/demo.png
//! ```
//!
//! Comparing a baseline SIR run against a WSIR variant:
//!
//! ```rust,ignore
//! let baseline = SirRun::new(&s, &i, &r)?;
//! let extended = WsirRun::new(&sw, &iw, &rw, &ww)?;
//! plot_sir_vs_wsir(&baseline, &extended, beta_w, &x, nt, "SIR vs WSIR", dt, None)?;
//! // -> plots/SIRvsWSIR_betaW<beta_w>.png
//! ```
//!
//! # Modules
//!
//! - [`compartments`]: run bundles (`SirRun`, `WsirRun`)
//! - [`output`]: visualization (PNG/SVG via plotters) and CSV export

pub mod compartments;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use sir_plot::prelude::*;
    //! ```
    pub use crate::compartments::{SirRun, WsirRun};
    pub use crate::output::visualization::{
        comparison_file_stem, plot_single_run, plot_sir_vs_wsir, ImageFormat, PlotStyle,
    };
    pub use crate::output::export::{export_run_csv, CsvConfig, CsvMetadata};
}
