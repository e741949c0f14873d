//! Pixelate the inside of a star, leaving the rest of the image sharp.
//!
//! Usage: `cargo run --example pixelate_inside_star -- <input> [output.png] [cell_size]`

use anyhow::Context;
use image::DynamicImage;
use shapefx::{
    CompositeOpts, Point, Primitive, Region, apply_inside_with, load_image, pixelate, save_image,
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
    let output = args
        .next()
        .unwrap_or_else(|| "target/pixelate_inside_star.png".to_string());
    let cell: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid cell size '{s}'"))?,
        None => 15,
    };

    let src = load_image(&input)?.to_rgba8();
    let (w, h) = src.dimensions();
    let outer = f64::from(w.min(h)) / 2.0;
    let center = Point::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    let star = Region::from_primitive(&Primitive::star(center, 5, outer / 2.0, outer))?;

    let opts = CompositeOpts::default().with_parallel(None);
    let out = apply_inside_with(&src, &star, &opts, |img| pixelate(img, cell))?;
    save_image(&DynamicImage::ImageRgba8(out), &output)?;
    println!("wrote {output}");
    Ok(())
}
