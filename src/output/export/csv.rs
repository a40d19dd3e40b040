//! CSV export for SIR/WSIR run data
//!
//! Writes run bundles as plain CSV, one row per sample point, with an
//! optional commented metadata header carrying the run parameters.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use sir_plot::output::export::export_run_csv;
//!
//! export_run_csv(&x, &run, None, "run.csv", None)?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! x,Susceptible,Infected,Recovered,Total
//! 0.000000,1.000000,0.000000,0.000000,1.000000
//! 1.000000,0.900000,0.100000,0.000000,1.000000
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use sir_plot::output::export::{export_run_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_run("WSIR 1D", 2000, 0.01).beta_w(5e-4));
//!
//! export_run_csv(&x, &run, Some(&w), "run.csv", Some(&config))?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! # SIR/WSIR Run Data
//! # Generated: 2026-08-23T12:00:00+00:00
//! # Scenario: WSIR 1D
//! # Steps: 2000
//! # dt: 0.01
//! # beta_W: 0.0005
//! #
//! x,Susceptible,Infected,Recovered,Total,W
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::compartments::SirRun;

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with run parameters
/// - `metadata`: Run metadata to include
/// - `axis_header`: Header for the axis column (default: "x")
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in the header
    pub metadata: Option<CsvMetadata>,

    /// Header for the axis column (default: "x")
    pub axis_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
            axis_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable the metadata header
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional; only the set ones are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Scenario or run name (e.g. "WSIR 1D")
    pub scenario: Option<String>,

    /// Number of simulation steps
    pub n_steps: Option<usize>,

    /// Step size
    pub dt: Option<f64>,

    /// W-compartment rate coefficient
    pub beta_w: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata from the basic run parameters.
    pub fn from_run(scenario: &str, n_steps: usize, dt: f64) -> Self {
        Self {
            scenario: Some(scenario.to_string()),
            n_steps: Some(n_steps),
            dt: Some(dt),
            ..Default::default()
        }
    }

    /// Builder pattern: record the `beta_w` coefficient
    pub fn beta_w(mut self, beta_w: f64) -> Self {
        self.beta_w = Some(beta_w);
        self
    }

    /// Add a custom `key: value` header line
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

/// Write metadata header comments to the file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# SIR/WSIR Run Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(scenario) = &metadata.scenario {
        writeln!(file, "# Scenario: {}", scenario)?;
    }
    if let Some(n_steps) = metadata.n_steps {
        writeln!(file, "# Steps: {}", n_steps)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(file, "# dt: {}", dt)?;
    }
    if let Some(beta_w) = metadata.beta_w {
        writeln!(file, "# beta_W: {}", beta_w)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }
    writeln!(file, "#")?;

    Ok(())
}

/// Export one run as CSV: axis, compartments, total, optional W.
///
/// Columns are `x, Susceptible, Infected, Recovered, Total[, W]`, where
/// `Total` is the elementwise S+I+R sum (W excluded, as everywhere in this
/// crate).
///
/// # Arguments
///
/// * `x`      — Axis coordinates, same length as the bundle
/// * `run`    — Compartment bundle
/// * `w`      — Optional W series, same length as the bundle
/// * `path`   — Output file path (parent directory must exist)
/// * `config` — Optional CSV configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` on empty input, length mismatches, or I/O failure.
pub fn export_run_csv(
    x: &[f64],
    run: &SirRun,
    w: Option<&[f64]>,
    path: impl AsRef<Path>,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if run.is_empty() {
        return Err("empty run: nothing to export".into());
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

    let default_config = CsvConfig::default();
    let config = config.unwrap_or(&default_config);

    let path = path.as_ref();
    let mut file = File::create(path)?;

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // Header row
    let d = config.delimiter;
    let mut header = format!(
        "{}{}Susceptible{}Infected{}Recovered{}Total",
        config.axis_header, d, d, d, d
    );
    if w.is_some() {
        header.push(d);
        header.push('W');
    }
    writeln!(file, "{}", header)?;

    // Data rows
    let p = config.precision;
    let total = run.total();
    for idx in 0..run.len() {
        let mut row = format!(
            "{x:.p$}{d}{s:.p$}{d}{i:.p$}{d}{r:.p$}{d}{n:.p$}",
            x = x[idx],
            s = run.s[idx],
            i = run.i[idx],
            r = run.r[idx],
            n = total[idx],
        );
        if let Some(w) = w {
            row.push(d);
            row.push_str(&format!("{:.p$}", w[idx]));
        }
        writeln!(file, "{}", row)?;
    }

    debug!("exported {} rows to {}", run.len(), path.display());
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.9, 0.8],
            vec![0.0, 0.1, 0.15],
            vec![0.0, 0.0, 0.05],
        )
    }

    #[test]
    fn test_export_minimal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.csv");

        let (x, s, i, r) = sample_data();
        let run = SirRun::new(&s, &i, &r).unwrap();
        export_run_csv(&x, &run, None, &path, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "x,Susceptible,Infected,Recovered,Total"
        );
        assert_eq!(
            lines.next().unwrap(),
            "0.000000,1.000000,0.000000,0.000000,1.000000"
        );
        assert_eq!(content.lines().count(), 4); // header + 3 rows
    }

    #[test]
    fn test_export_with_w_column() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.csv");

        let (x, s, i, r) = sample_data();
        let w = vec![0.0, 0.01, 0.02];
        let run = SirRun::new(&s, &i, &r).unwrap();
        export_run_csv(&x, &run, Some(&w), &path, None).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("x,Susceptible,Infected,Recovered,Total,W"));
        // Total column stays S+I+R even with W present
        assert!(content.lines().nth(1).unwrap().contains(",1.000000,"));
    }

    #[test]
    fn test_export_with_metadata_header() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.csv");

        let (x, s, i, r) = sample_data();
        let run = SirRun::new(&s, &i, &r).unwrap();
        let config = CsvConfig::default()
            .with_metadata(CsvMetadata::from_run("WSIR 1D", 3, 1.0).beta_w(5e-4));
        export_run_csv(&x, &run, None, &path, Some(&config)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# SIR/WSIR Run Data"));
        assert!(content.contains("# Scenario: WSIR 1D"));
        assert!(content.contains("# beta_W: 0.0005"));
    }

    #[test]
    fn test_export_custom_delimiter_and_precision() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.csv");

        let (x, s, i, r) = sample_data();
        let run = SirRun::new(&s, &i, &r).unwrap();
        let config = CsvConfig::default().delimiter(';').precision(2);
        export_run_csv(&x, &run, None, &path, Some(&config)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().nth(1).unwrap(),
            "0.00;1.00;0.00;0.00;1.00"
        );
    }

    #[test]
    fn test_export_length_mismatch_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("run.csv");

        let (_, s, i, r) = sample_data();
        let x = vec![0.0, 1.0]; // too short
        let run = SirRun::new(&s, &i, &r).unwrap();
        assert!(export_run_csv(&x, &run, None, &path, None).is_err());
        assert!(!path.exists());
    }
}
