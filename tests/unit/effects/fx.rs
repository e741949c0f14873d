use super::*;
use image::Rgba;

fn inst(kind: &str, params: serde_json::Value) -> EffectInstance {
    EffectInstance {
        kind: kind.to_string(),
        params,
    }
}

#[test]
fn parse_effect_accepts_aliases_and_case() {
    let e = parse_effect(&inst(" Gaussian-Blur ", serde_json::json!({ "sigma": 3.0 }))).unwrap();
    assert_eq!(e, Effect::Blur { sigma: 3.0 });
    let e = parse_effect(&inst("GREYSCALE", serde_json::Value::Null)).unwrap();
    assert_eq!(e, Effect::Grayscale);
    let e = parse_effect(&inst("pixelate", serde_json::json!({ "cell_size": 15 }))).unwrap();
    assert_eq!(e, Effect::Pixelate { cell_size: 15 });
}

#[test]
fn blur_sigma_falls_back_to_half_radius() {
    let e = parse_effect(&inst("blur", serde_json::json!({ "radius_px": 10 }))).unwrap();
    assert_eq!(e, Effect::Blur { sigma: 5.0 });
}

#[test]
fn parse_effect_rejects_bad_input() {
    assert!(parse_effect(&inst("", serde_json::Value::Null)).is_err());
    assert!(parse_effect(&inst("sharpen", serde_json::Value::Null)).is_err());
    assert!(parse_effect(&inst("blur", serde_json::json!({ "sigma": -1.0 }))).is_err());
    assert!(parse_effect(&inst("blur", serde_json::json!({ "sigma": "big" }))).is_err());
    assert!(parse_effect(&inst("pixelate", serde_json::json!({}))).is_err());
    assert!(parse_effect(&inst("pixelate", serde_json::json!({ "cell_size": 0 }))).is_err());
    assert!(parse_effect(&inst("pixelate", serde_json::json!({ "cell_size": 1.5 }))).is_err());
}

#[test]
fn normalize_drops_noops_and_repeated_grayscale() {
    let effects = [
        Effect::Blur { sigma: 0.0 },
        Effect::Grayscale,
        Effect::Grayscale,
        Effect::Pixelate { cell_size: 1 },
        Effect::Blur { sigma: 2.0 },
        Effect::Grayscale,
    ];
    assert_eq!(
        normalize_effects(&effects),
        vec![
            Effect::Grayscale,
            Effect::Blur { sigma: 2.0 },
            Effect::Grayscale
        ]
    );
}

#[test]
fn chain_serde_is_a_plain_list() {
    let chain = EffectChain::new().pixelate(4).grayscale();
    let v = serde_json::to_value(&chain).unwrap();
    assert_eq!(
        v,
        serde_json::json!([
            { "kind": "pixelate", "cell_size": 4 },
            { "kind": "grayscale" }
        ])
    );
    let back: EffectChain = serde_json::from_value(v).unwrap();
    assert_eq!(back, chain);
}

#[test]
fn chain_parse_keeps_order() {
    let chain = EffectChain::parse(&[
        inst("grayscale", serde_json::Value::Null),
        inst("blur", serde_json::json!({ "sigma": 1.0 })),
    ])
    .unwrap();
    assert_eq!(
        chain.effects(),
        &[Effect::Grayscale, Effect::Blur { sigma: 1.0 }]
    );
}

#[test]
fn chain_applies_in_order_and_stops_on_error() {
    let mut img = Image::<Rgba<u8>>::from_pixel(4, 4, Rgba([200, 10, 10, 255]));
    EffectChain::new().grayscale().apply(&mut img).unwrap();
    let p = img.get_pixel(0, 0).0;
    assert_eq!(p[0], p[1]);

    let mut img = Image::<Rgba<u8>>::from_pixel(4, 4, Rgba([200, 10, 10, 255]));
    let before = img.clone();
    let bad = EffectChain::new().blur(-2.0).grayscale();
    assert!(bad.apply(&mut img).is_err());
    assert_eq!(img, before);
}
