//! Blur only the inside of a five-pointed star.
//!
//! Usage: `cargo run --example clip_star_blur -- <input> [output.png] [sigma]`

use anyhow::Context;
use image::DynamicImage;
use shapefx::{Point, Primitive, Region, apply_inside, blur, load_image, save_image};

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
    let output = args.next().unwrap_or_else(|| "target/clip_star_blur.png".to_string());
    let sigma: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid sigma '{s}'"))?,
        None => 15.0,
    };

    let src = load_image(&input)?.to_rgba8();
    let (w, h) = src.dimensions();
    let outer = f64::from(w.min(h)) / 2.0;
    let center = Point::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    let star = Region::from_primitive(&Primitive::star(center, 5, outer / 2.0, outer))?;

    let out = apply_inside(&src, &star, |img| blur(img, sigma))?;
    save_image(&DynamicImage::ImageRgba8(out), &output)?;
    println!("wrote {output}");
    Ok(())
}
