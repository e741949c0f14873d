//! Pick watermark font sizes for an image, single-line and wrapped.
//!
//! Usage: `cargo run --example watermark_fit -- <input> <font.ttf> [text] [padding]`
//!
//! Prints the chosen sizes as JSON; drawing the glyphs is left to a text renderer.

use anyhow::Context;
use shapefx::{
    FitOptions, ParleyMeasurer, TextMeasure, fit_font_size, load_image, padded_target,
};

fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let input = args.next().context("missing <input> image path")?;
    let font = args.next().context("missing <font.ttf> path")?;
    let text = args
        .next()
        .unwrap_or_else(|| "Copyright shapefx, all rights reserved".to_string());
    let padding: f64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid padding '{s}'"))?,
        None => 10.0,
    };

    let img = load_image(&input)?;
    let mut measurer = ParleyMeasurer::from_font_file(&font)?;
    let target = padded_target(f64::from(img.width()), f64::from(img.height()), padding)?;

    let single = fit_font_size(&text, target, &FitOptions::default(), &mut measurer)?;
    let wrapped = fit_font_size(&text, target, &FitOptions::wrapped(), &mut measurer)?;
    let wrapped_extent = measurer.measure(&text, wrapped, Some(target.width))?;

    let report = serde_json::json!({
        "family": measurer.family_name(),
        "target": target,
        "single_line_size": single,
        "wrapped_size": wrapped,
        "wrapped_extent": wrapped_extent,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
