//! Resize an image into a square avatar with rounded corners.
//!
//! Usage: `cargo run --example avatar -- <input> [output.png] [size] [radius]`

use anyhow::Context;
use image::DynamicImage;
use shapefx::{CompositeOpts, load_image, save_image, to_avatar};

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
    let output = args.next().unwrap_or_else(|| "target/avatar.png".to_string());
    let size: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid size '{s}'"))?,
        None => 200,
    };
    let radius: f64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid radius '{s}'"))?,
        None => f64::from(size) / 2.0,
    };

    let src = load_image(&input)?.to_rgba8();
    let out = to_avatar(&src, size, size, radius, &CompositeOpts::default())?;
    save_image(&DynamicImage::ImageRgba8(out), &output)?;
    println!("wrote {output}");
    Ok(())
}
