use crate::effects::filters;
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::pipeline::pixel::{Image, MaskPixel};

/// Loosely typed effect description, as found in JSON documents.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EffectInstance {
    /// Effect name, matched case-insensitively.
    pub kind: String,
    /// Effect parameters.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

/// A validated image effect.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Gaussian blur.
    Blur {
        /// Standard deviation in pixels.
        sigma: f32,
    },
    /// Mosaic of square cells filled with their mean color.
    Pixelate {
        /// Cell edge in pixels.
        cell_size: u32,
    },
    /// Luma into every color channel.
    Grayscale,
}

impl Effect {
    /// Run the effect on `img` in place.
    pub fn apply<P: MaskPixel>(&self, img: &mut Image<P>) -> ShapeFxResult<()> {
        match *self {
            Self::Blur { sigma } => filters::blur(img, sigma),
            Self::Pixelate { cell_size } => filters::pixelate(img, cell_size),
            Self::Grayscale => filters::grayscale(img),
        }
    }

    fn is_noop(&self) -> bool {
        match *self {
            Self::Blur { sigma } => sigma == 0.0,
            Self::Pixelate { cell_size } => cell_size <= 1,
            Self::Grayscale => false,
        }
    }
}

/// Validate a loosely typed effect description.
///
/// Kinds are matched case-insensitively and accept `_`/`-` separated spellings.
pub fn parse_effect(inst: &EffectInstance) -> ShapeFxResult<Effect> {
    let kind = inst.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(ShapeFxError::validation("effect kind must be non-empty"));
    }

    match kind.as_str() {
        "blur" | "gaussian_blur" | "gaussian-blur" | "gaussianblur" => {
            let sigma = match inst.params.get("sigma") {
                Some(_) => get_f32(&inst.params, "sigma")?,
                None => get_u32(&inst.params, "radius_px")? as f32 / 2.0,
            };
            if sigma < 0.0 {
                return Err(ShapeFxError::validation("Blur.sigma must be >= 0"));
            }
            Ok(Effect::Blur { sigma })
        }
        "pixelate" => {
            let cell_size = get_u32(&inst.params, "cell_size")?;
            if cell_size == 0 {
                return Err(ShapeFxError::validation("Pixelate.cell_size must be >= 1"));
            }
            Ok(Effect::Pixelate { cell_size })
        }
        "grayscale" | "greyscale" | "gray_scale" | "gray-scale" => Ok(Effect::Grayscale),
        _ => Err(ShapeFxError::validation(format!(
            "unknown effect kind '{kind}'"
        ))),
    }
}

/// Drop effects that cannot change an image and collapse repeated grayscale passes.
pub fn normalize_effects(effects: &[Effect]) -> Vec<Effect> {
    let mut out = Vec::<Effect>::with_capacity(effects.len());
    for e in effects {
        if e.is_noop() {
            continue;
        }
        if *e == Effect::Grayscale && out.last() == Some(&Effect::Grayscale) {
            continue;
        }
        out.push(*e);
    }
    out
}

/// Ordered list of effects applied one after another.
///
/// ```
/// use shapefx::EffectChain;
///
/// let chain = EffectChain::new().grayscale().blur(2.0);
/// assert_eq!(chain.effects().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EffectChain {
    effects: Vec<Effect>,
}

impl EffectChain {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every instance in order.
    pub fn parse(instances: &[EffectInstance]) -> ShapeFxResult<Self> {
        let effects = instances
            .iter()
            .map(parse_effect)
            .collect::<ShapeFxResult<Vec<_>>>()?;
        Ok(Self { effects })
    }

    /// Append an effect.
    pub fn push(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Append [`Effect::Blur`].
    pub fn blur(self, sigma: f32) -> Self {
        self.push(Effect::Blur { sigma })
    }

    /// Append [`Effect::Pixelate`].
    pub fn pixelate(self, cell_size: u32) -> Self {
        self.push(Effect::Pixelate { cell_size })
    }

    /// Append [`Effect::Grayscale`].
    pub fn grayscale(self) -> Self {
        self.push(Effect::Grayscale)
    }

    /// Effects in application order.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Same chain without no-op effects.
    pub fn normalized(&self) -> Self {
        Self {
            effects: normalize_effects(&self.effects),
        }
    }

    /// Apply every effect in order, stopping at the first error.
    pub fn apply<P: MaskPixel>(&self, img: &mut Image<P>) -> ShapeFxResult<()> {
        for e in &self.effects {
            e.apply(img)?;
        }
        Ok(())
    }
}

fn get_u32(obj: &serde_json::Value, key: &str) -> ShapeFxResult<u32> {
    let Some(v) = obj.get(key) else {
        return Err(ShapeFxError::validation(format!(
            "missing effect param '{key}'"
        )));
    };
    let Some(n) = v.as_u64() else {
        return Err(ShapeFxError::validation(format!(
            "effect param '{key}' must be an integer"
        )));
    };
    u32::try_from(n)
        .map_err(|_| ShapeFxError::validation(format!("effect param '{key}' is out of range")))
}

fn get_f32(obj: &serde_json::Value, key: &str) -> ShapeFxResult<f32> {
    let Some(v) = obj.get(key) else {
        return Err(ShapeFxError::validation(format!(
            "missing effect param '{key}'"
        )));
    };
    let Some(n) = v.as_f64() else {
        return Err(ShapeFxError::validation(format!(
            "effect param '{key}' must be a number"
        )));
    };
    let n = n as f32;
    if !n.is_finite() {
        return Err(ShapeFxError::validation(format!(
            "effect param '{key}' must be finite"
        )));
    }
    Ok(n)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fx.rs"]
mod tests;
