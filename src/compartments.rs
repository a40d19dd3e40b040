//! Compartment run bundles for SIR/WSIR trajectories
//!
//! A "run" is one simulation's output: one series per compartment, all the
//! same length, sampled over a shared spatial or temporal axis that the
//! caller keeps separately.
//!
//! Two bundle shapes exist:
//!
//! - [`SirRun`]  — the classic three-compartment model (S, I, R)
//! - [`WsirRun`] — SIR extended with a "W" compartment (waning immunity or
//!                 an environmental/wastewater signal)
//!
//! Both validate series lengths at construction, so a bundle that exists is
//! always internally consistent. The axis length is checked later by the
//! plotting functions, which is the first place the two meet.

/// One SIR simulation run: borrowed S, I, R series of equal length.
///
/// # Example
///
/// ```rust
/// use sir_plot::compartments::SirRun;
///
/// let s = vec![1.0, 0.9, 0.8];
/// let i = vec![0.0, 0.1, 0.15];
/// let r = vec![0.0, 0.0, 0.05];
///
/// let run = SirRun::new(&s, &i, &r).unwrap();
/// assert_eq!(run.total(), vec![1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SirRun<'a> {
    /// Susceptible counts, one per sample point
    pub s: &'a [f64],
    /// Infected counts
    pub i: &'a [f64],
    /// Recovered counts
    pub r: &'a [f64],
}

impl<'a> SirRun<'a> {
    /// Bundle three equal-length compartment series.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the series lengths disagree.
    pub fn new(s: &'a [f64], i: &'a [f64], r: &'a [f64]) -> Result<Self, String> {
        if s.len() != i.len() || s.len() != r.len() {
            return Err(format!(
                "compartment length mismatch: S={}, I={}, R={}",
                s.len(),
                i.len(),
                r.len()
            ));
        }
        Ok(Self { s, i, r })
    }

    /// Number of sample points in each series.
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// True if the run holds no samples.
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Elementwise total population `S + I + R`.
    pub fn total(&self) -> Vec<f64> {
        self.s
            .iter()
            .zip(self.i)
            .zip(self.r)
            .map(|((s, i), r)| s + i + r)
            .collect()
    }
}

/// One WSIR simulation run: S, I, R plus the extra W compartment.
///
/// `W` rides along as a fourth series but is *not* part of the population
/// total; [`WsirRun::total`] sums S + I + R only.
#[derive(Debug, Clone, Copy)]
pub struct WsirRun<'a> {
    /// Susceptible counts
    pub s: &'a [f64],
    /// Infected counts
    pub i: &'a [f64],
    /// Recovered counts
    pub r: &'a [f64],
    /// W compartment (waning immunity / environmental signal)
    pub w: &'a [f64],
}

impl<'a> WsirRun<'a> {
    /// Bundle four equal-length compartment series.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the series lengths disagree.
    pub fn new(
        s: &'a [f64],
        i: &'a [f64],
        r: &'a [f64],
        w: &'a [f64],
    ) -> Result<Self, String> {
        if s.len() != i.len() || s.len() != r.len() || s.len() != w.len() {
            return Err(format!(
                "compartment length mismatch: S={}, I={}, R={}, W={}",
                s.len(),
                i.len(),
                r.len(),
                w.len()
            ));
        }
        Ok(Self { s, i, r, w })
    }

    /// Number of sample points in each series.
    pub fn len(&self) -> usize {
        self.s.len()
    }

    /// True if the run holds no samples.
    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// The SIR part of this run, without the W series.
    pub fn sir(&self) -> SirRun<'a> {
        SirRun {
            s: self.s,
            i: self.i,
            r: self.r,
        }
    }

    /// Elementwise total population `S + I + R`.
    ///
    /// `W` is tracked separately and never folded into the total.
    pub fn total(&self) -> Vec<f64> {
        self.s
            .iter()
            .zip(self.i)
            .zip(self.r)
            .map(|((s, i), r)| s + i + r)
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sir_run_new_valid() {
        let s = [1.0, 0.9];
        let i = [0.0, 0.1];
        let r = [0.0, 0.0];
        let run = SirRun::new(&s, &i, &r).unwrap();
        assert_eq!(run.len(), 2);
        assert!(!run.is_empty());
    }

    #[test]
    fn test_sir_run_length_mismatch() {
        let s = [1.0, 0.9, 0.8];
        let i = [0.0, 0.1];
        let r = [0.0, 0.0, 0.05];
        assert!(SirRun::new(&s, &i, &r).is_err());
    }

    #[test]
    fn test_sir_run_total() {
        let s = [1.0, 0.9, 0.8];
        let i = [0.0, 0.1, 0.15];
        let r = [0.0, 0.0, 0.05];
        let run = SirRun::new(&s, &i, &r).unwrap();
        let total = run.total();
        for t in total {
            assert_relative_eq!(t, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_wsir_run_total_excludes_w() {
        let s = [0.5, 0.4];
        let i = [0.3, 0.35];
        let r = [0.2, 0.25];
        let w = [10.0, 20.0]; // deliberately large: must not leak into the total
        let run = WsirRun::new(&s, &i, &r, &w).unwrap();
        let total = run.total();
        assert_relative_eq!(total[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(total[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wsir_run_w_length_mismatch() {
        let s = [0.5, 0.4];
        let i = [0.3, 0.35];
        let r = [0.2, 0.25];
        let w = [0.0];
        assert!(WsirRun::new(&s, &i, &r, &w).is_err());
    }

    #[test]
    fn test_wsir_sir_view() {
        let s = [0.5, 0.4];
        let i = [0.3, 0.35];
        let r = [0.2, 0.25];
        let w = [0.1, 0.2];
        let run = WsirRun::new(&s, &i, &r, &w).unwrap();
        let sir = run.sir();
        assert_eq!(sir.len(), 2);
        assert_eq!(sir.total(), run.total());
    }

    #[test]
    fn test_empty_run_is_valid_bundle() {
        // Emptiness is rejected at plot time, not at bundle time
        let run = SirRun::new(&[], &[], &[]).unwrap();
        assert!(run.is_empty());
        assert!(run.total().is_empty());
    }
}
