//! Demo: SIR vs. WSIR visualization on synthetic trajectories
//!
//! Builds a normalized synthetic epidemic (logistic recovery, Gaussian
//! infection bump), derives a WSIR variant with a rising W signal, and
//! renders:
//!
//! - a single-run chart of the baseline (`plots/sir_demo.png`)
//! - a single-run chart with the W curve (`plots/wsir_demo.png`)
//! - the SIR-vs-WSIR comparison (`plots/SIRvsWSIR_betaW5.00e-4.png`)
//! - a CSV export of the extended run (`plots/wsir_demo.csv`)
//!
//! Run with:
//!
//! ```sh
//! cargo run --example wsir_demo
//! ```

use sir_plot::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // ====== Synthetic trajectories ======

    let n = 200;
    let dt = 0.05;
    let beta_w = 5e-4;

    let x: Vec<f64> = (0..n).map(|k| k as f64 * dt).collect();

    let mid = n as f64 / 2.0;
    let width = n as f64 / 6.0;
    let mut s = Vec::with_capacity(n);
    let mut i = Vec::with_capacity(n);
    let mut r = Vec::with_capacity(n);
    for k in 0..n {
        let t = k as f64;
        let infected = 0.35 * (-(t - mid).powi(2) / (2.0 * width * width)).exp();
        let recovered = 0.6 / (1.0 + (-(t - mid) / (n as f64 / 12.0)).exp());
        s.push(1.0 - infected - recovered);
        i.push(infected);
        r.push(recovered);
    }

    // WSIR variant: slightly faster recovery plus a W signal fed by infections
    let mut sw = Vec::with_capacity(n);
    let mut iw = Vec::with_capacity(n);
    let mut rw = Vec::with_capacity(n);
    let mut ww = Vec::with_capacity(n);
    let mut w_level = 0.0;
    for k in 0..n {
        let infected = 0.9 * i[k];
        let recovered = (r[k] * 1.05).min(1.0 - infected);
        sw.push(1.0 - infected - recovered);
        iw.push(infected);
        rw.push(recovered);
        w_level += beta_w * infected * 40.0;
        ww.push(w_level);
    }

    println!("Synthetic WSIR demo");
    println!("  samples : {}", n);
    println!("  dt      : {}", dt);
    println!("  beta_W  : {:e}\n", beta_w);

    // ====== Render ======

    let baseline = SirRun::new(&s, &i, &r)?;
    let extended = WsirRun::new(&sw, &iw, &rw, &ww)?;

    let p1 = plot_single_run(&baseline, &x, n, dt, "sir_demo", None, None)?;
    println!("wrote {}", p1.display());

    let p2 = plot_single_run(&extended.sir(), &x, n, dt, "wsir_demo", Some(&ww), None)?;
    println!("wrote {}", p2.display());

    let p3 = plot_sir_vs_wsir(&baseline, &extended, beta_w, &x, n, "SIR vs WSIR", dt, None)?;
    println!("wrote {}", p3.display());

    // ====== Export ======

    let config = CsvConfig::default()
        .with_metadata(CsvMetadata::from_run("synthetic WSIR demo", n, dt).beta_w(beta_w));
    export_run_csv(&x, &extended.sir(), Some(&ww), "plots/wsir_demo.csv", Some(&config))?;
    println!("wrote plots/wsir_demo.csv");

    Ok(())
}
