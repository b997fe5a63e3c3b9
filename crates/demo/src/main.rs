// File: crates/demo/src/main.rs
// Summary: Demo renders a dataset (CLI values or the sample six) to an SVG file.

use anyhow::{Context, Result};
use barchart_core::Dataset;
use barchart_svg::{BarChart, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept numeric values from the CLI or fall back to the sample dataset.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let dataset = if args.is_empty() {
        Dataset::sample()
    } else {
        let values = args
            .iter()
            .map(|a| {
                a.parse::<f64>()
                    .with_context(|| format!("not a number: '{a}'"))
            })
            .collect::<Result<Vec<f64>>>()?;
        Dataset::new(values).context("invalid dataset")?
    };
    println!("Rendering {} bars (max {})", dataset.len(), dataset.max());

    let chart = BarChart::new(dataset);
    let opts = RenderOptions::default();

    let out = PathBuf::from("target/out/bars.svg");
    chart
        .render_to_svg(&opts, &out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}
