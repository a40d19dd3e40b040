//! Common utilities for integration tests

/// A synthetic normalized epidemic: logistic S-to-R transfer with a bump of
/// infections in the middle. S + I + R = 1 at every sample point.
pub fn synthetic_epidemic(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|k| k as f64).collect();
    let mut s = Vec::with_capacity(n);
    let mut i = Vec::with_capacity(n);
    let mut r = Vec::with_capacity(n);

    let mid = n as f64 / 2.0;
    for k in 0..n {
        let t = k as f64;
        let infected = 0.4 * (-(t - mid).powi(2) / (2.0 * (n as f64 / 6.0).powi(2))).exp();
        let recovered = 0.6 / (1.0 + (-(t - mid) / (n as f64 / 10.0)).exp());
        let susceptible = 1.0 - infected - recovered;
        s.push(susceptible);
        i.push(infected);
        r.push(recovered);
    }

    (x, s, i, r)
}

/// A slowly rising W signal of length `n`.
pub fn synthetic_w(n: usize) -> Vec<f64> {
    (0..n).map(|k| 0.2 * k as f64 / n.max(1) as f64).collect()
}
