//! Blur several rectangles with keep-out holes, once per mask mode.
//!
//! Usage: `cargo run --example blur_regions -- <input> [out_dir]`
//!
//! Writes `combined.png` and `layered.png`. The two differ where an exclude is followed by an
//! overlapping include.

use std::path::PathBuf;

use anyhow::Context;
use image::DynamicImage;
use shapefx::{
    EffectRegion, MaskMode, Primitive, apply_inside, blur, build_mask, load_image, save_image,
};

fn descriptors() -> Vec<EffectRegion> {
    vec![
        EffectRegion::include(Primitive::rectangle(70.0, 20.0, 150.0, 150.0)),
        EffectRegion::exclude(Primitive::rectangle(120.0, 120.0, 20.0, 20.0)),
        EffectRegion::include(Primitive::rectangle(20.0, 100.0, 300.0, 50.0)).with_rotation(10.0),
        EffectRegion::exclude(Primitive::rectangle(170.0, 115.0, 20.0, 20.0)),
    ]
}

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
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/blur_regions".to_string()));

    let src = load_image(&input)?.to_rgba8();
    let parts = descriptors();
    for (mode, name) in [(MaskMode::Combined, "combined"), (MaskMode::Layered, "layered")] {
        let mask = build_mask(mode, &parts)?;
        let out = apply_inside(&src, &mask, |img| blur(img, 8.0))?;
        let path = out_dir.join(format!("{name}.png"));
        save_image(&DynamicImage::ImageRgba8(out), &path)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
