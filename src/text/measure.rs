use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::text::fit::{TextExtent, TextMeasure};

/// [`TextMeasure`] backed by Parley layout with a single registered font.
pub struct ParleyMeasurer {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
}

impl std::fmt::Debug for ParleyMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasurer")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl ParleyMeasurer {
    /// Register the first family found in `font_bytes` and measure with it.
    pub fn from_font_bytes(font_bytes: &[u8]) -> ShapeFxResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ShapeFxError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ShapeFxError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Read a font file and register it.
    pub fn from_font_file(path: impl AsRef<Path>) -> ShapeFxResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read font file '{}'", path.display()))?;
        Self::from_font_bytes(&bytes)
    }

    /// Family name resolved from the font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

impl TextMeasure for ParleyMeasurer {
    fn measure(
        &mut self,
        text: &str,
        font_size: f64,
        wrap_width: Option<f64>,
    ) -> ShapeFxResult<TextExtent> {
        if !font_size.is_finite() || font_size <= 0.0 {
            return Err(ShapeFxError::measurement(format!(
                "font size must be finite and > 0, got {font_size}"
            )));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font_size as f32));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(wrap_width.map(|w| w as f32));
        Ok(TextExtent::new(
            f64::from(layout.width()),
            f64::from(layout.height()),
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
