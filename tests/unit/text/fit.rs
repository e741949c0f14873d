use super::*;

/// Fake layout: every glyph is `0.6 * size` wide and lines are `1.2 * size` tall.
fn monospace(text: &str, size: f64, wrap: Option<f64>) -> ShapeFxResult<TextExtent> {
    let glyph = 0.6 * size;
    let chars = text.chars().count() as f64;
    let line_width = chars * glyph;
    match wrap {
        None => Ok(TextExtent::new(line_width, 1.2 * size)),
        Some(w) => {
            let per_line = (w / glyph).floor().max(1.0);
            let lines = (chars / per_line).ceil().max(1.0);
            Ok(TextExtent::new(line_width.min(w), lines * 1.2 * size))
        }
    }
}

#[test]
fn single_line_uses_the_tighter_axis() {
    let mut m = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Ok(TextExtent::new(400.0, 40.0))
    };
    let opts = FitOptions::default()
        .with_reference_size(1.0)
        .with_size_range(0.01, 100.0);
    let size = fit_font_size("hello", TextExtent::new(200.0, 50.0), &opts, &mut m).unwrap();
    assert_eq!(size, 0.5);
}

#[test]
fn single_line_result_is_clamped() {
    let mut m = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Ok(TextExtent::new(1.0, 1.0))
    };
    let opts = FitOptions::default();
    let size = fit_font_size("x", TextExtent::new(1e6, 1e6), &opts, &mut m).unwrap();
    assert_eq!(size, opts.max_size);
    let size = fit_font_size("x", TextExtent::new(1e-6, 1e-6), &opts, &mut m).unwrap();
    assert_eq!(size, opts.min_size);
}

#[test]
fn zero_measurement_is_unavailable() {
    let mut m = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Ok(TextExtent::new(0.0, 12.0))
    };
    let err = fit_font_size("", TextExtent::new(10.0, 10.0), &FitOptions::default(), &mut m)
        .unwrap_err();
    assert!(matches!(err, ShapeFxError::MeasurementUnavailable(_)));
}

#[test]
fn measurement_errors_become_unavailable() {
    let mut m = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Err(ShapeFxError::validation("no font"))
    };
    let err = fit_font_size("a", TextExtent::new(10.0, 10.0), &FitOptions::wrapped(), &mut m)
        .unwrap_err();
    assert!(matches!(err, ShapeFxError::MeasurementUnavailable(msg) if msg.contains("no font")));
}

#[test]
fn wrapped_returns_largest_fitting_size_within_tolerance() {
    let text = "the quick brown fox jumps over the lazy dog";
    let target = TextExtent::new(300.0, 120.0);
    let opts = FitOptions::wrapped();
    let mut m = monospace;
    let size = fit_font_size(text, target, &opts, &mut m).unwrap();

    assert!(monospace(text, size, Some(target.width)).unwrap().height <= target.height);
    let bigger = size + opts.tolerance;
    assert!(monospace(text, bigger, Some(target.width)).unwrap().height > target.height);
}

#[test]
fn wrapped_terminates_under_the_iteration_cap() {
    let mut calls = 0u32;
    let mut m = |_: &str, size: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        calls += 1;
        Ok(TextExtent::new(1.0, size))
    };
    let opts = FitOptions {
        tolerance: 1e-300,
        max_iterations: 10,
        ..FitOptions::wrapped()
    };
    let size = fit_font_size("a", TextExtent::new(50.0, 100.0), &opts, &mut m).unwrap();
    assert!(size <= 100.0);
    assert_eq!(calls, 2 + 10);
}

#[test]
fn wrapped_bounds_short_circuit() {
    let opts = FitOptions::wrapped().with_size_range(4.0, 64.0);
    let mut huge = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Ok(TextExtent::new(1.0, 1e9))
    };
    let size = fit_font_size("a", TextExtent::new(10.0, 10.0), &opts, &mut huge).unwrap();
    assert_eq!(size, 4.0);
    let mut tiny = |_: &str, _: f64, _: Option<f64>| -> ShapeFxResult<TextExtent> {
        Ok(TextExtent::new(1.0, 1e-3))
    };
    let size = fit_font_size("a", TextExtent::new(10.0, 10.0), &opts, &mut tiny).unwrap();
    assert_eq!(size, 64.0);
}

#[test]
fn invalid_options_and_targets_are_rejected() {
    let mut m = monospace;
    let t = TextExtent::new(10.0, 10.0);
    let bad = FitOptions::default().with_size_range(5.0, 1.0);
    assert!(matches!(
        fit_font_size("a", t, &bad, &mut m),
        Err(ShapeFxError::Validation(_))
    ));
    let empty = TextExtent::new(0.0, 10.0);
    assert!(fit_font_size("a", empty, &FitOptions::default(), &mut m).is_err());
}

#[test]
fn padded_target_removes_padding_on_both_sides() {
    assert_eq!(
        padded_target(200.0, 100.0, 10.0).unwrap(),
        TextExtent::new(180.0, 80.0)
    );
    assert!(padded_target(20.0, 100.0, 10.0).is_err());
}

#[test]
fn fit_options_deserialize_with_defaults() {
    let o: FitOptions = serde_json::from_value(serde_json::json!({ "wrap": true })).unwrap();
    assert_eq!(o, FitOptions::wrapped());
}
