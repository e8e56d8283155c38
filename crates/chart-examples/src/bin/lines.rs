// File: crates/chart-examples/src/bin/lines.rs
// Summary: Compress a long optimisation trace to 1000 points and write the plotting script.

use anyhow::Result;
use chart_core::Chart;

const ITERATIONS: usize = 100_000;

fn main() -> Result<()> {
    env_logger::init();

    // Tour length of a cooling annealer: fast early drop, shrinking jitter.
    let trace = (0..ITERATIONS)
        .map(|i| {
            let t = i as f64 / ITERATIONS as f64;
            let temperature = (0.1 * (1.0 - t)).powi(5) * 1e5;
            4_000.0 + 6_000.0 * (-8.0 * t).exp() + temperature * (i as f64 * 0.37).sin()
        })
        .collect::<Vec<_>>();

    let mut chart = Chart::new();
    chart.line_plot(trace, "Distance Evolution", 1000);

    let out = chart.write_to("target/out")?;
    println!("Wrote {}", out.display());
    Ok(())
}
