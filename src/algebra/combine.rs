use crate::algebra::region::Region;
use crate::foundation::error::{ShapeFxError, ShapeFxResult};
use crate::geometry::path::Path;
use crate::geometry::primitives::Primitive;

/// Boolean operation applied by [`combine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipOp {
    /// Interior of the base or any other path.
    Union,
    /// Interior of the base minus the union of the other paths.
    Difference,
}

/// Combine `base` with `others`.
///
/// Union is commutative. Difference treats `base` as authoritative and subtracts the union of
/// `others` from it.
#[tracing::instrument(skip(base, others), fields(operands = others.len()))]
pub fn combine(op: ClipOp, base: &Region, others: &[Path]) -> ShapeFxResult<Region> {
    let others = others
        .iter()
        .map(Region::from_path)
        .collect::<ShapeFxResult<Vec<_>>>()?;
    Ok(match op {
        ClipOp::Union => base.union(others),
        ClipOp::Difference => base.difference(others),
    })
}

/// Policy used by [`build_mask`] to fold include/exclude descriptors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskMode {
    /// Union every include, then subtract the union of every exclude once.
    /// Order within each set does not matter.
    #[default]
    Combined,
    /// Fold descriptors in the given order: later includes re-add area removed by earlier
    /// excludes, and excludes seen before any include do nothing.
    Layered,
}

/// One shape taking part in a mask: either an area to apply an effect to or an area to keep.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectRegion {
    /// Outline of the area.
    pub shape: Primitive,
    /// `true` to apply the effect inside `shape`, `false` to exclude it.
    pub apply: bool,
    /// Optional rotation about the shape's own center.
    #[serde(default)]
    pub rotation_degrees: Option<f64>,
}

impl EffectRegion {
    /// Area to apply the effect to.
    pub fn include(shape: Primitive) -> Self {
        Self {
            shape,
            apply: true,
            rotation_degrees: None,
        }
    }

    /// Area to leave untouched.
    pub fn exclude(shape: Primitive) -> Self {
        Self {
            shape,
            apply: false,
            rotation_degrees: None,
        }
    }

    /// Return a copy rotated by `degrees` about the shape center.
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_degrees = Some(degrees);
        self
    }

    /// Resolve the (possibly rotated) outline.
    pub fn to_path(&self) -> ShapeFxResult<Path> {
        let path = self.shape.build_path()?;
        Ok(match self.rotation_degrees {
            Some(deg) if deg != 0.0 => path.rotate_degrees(deg),
            _ => path,
        })
    }
}

/// Build a mask region from descriptors.
///
/// Fails with [`ShapeFxError::EmptyRegion`] when no descriptor is an include.
#[tracing::instrument(skip(descriptors), fields(count = descriptors.len()))]
pub fn build_mask(mode: MaskMode, descriptors: &[EffectRegion]) -> ShapeFxResult<Region> {
    match mode {
        MaskMode::Combined => build_combined(descriptors),
        MaskMode::Layered => build_layered(descriptors),
    }
}

fn build_combined(descriptors: &[EffectRegion]) -> ShapeFxResult<Region> {
    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for d in descriptors {
        if d.apply {
            includes.push(d.to_path()?);
        } else {
            excludes.push(d.to_path()?);
        }
    }

    let Some((first, rest)) = includes.split_first() else {
        return Err(ShapeFxError::EmptyRegion);
    };
    let mut region = Region::from_path(first)?;
    if !rest.is_empty() {
        region = combine(ClipOp::Union, &region, rest)?;
    }
    if !excludes.is_empty() {
        region = combine(ClipOp::Difference, &region, &excludes)?;
    }
    Ok(region)
}

fn build_layered(descriptors: &[EffectRegion]) -> ShapeFxResult<Region> {
    let mut acc: Option<Region> = None;
    for (i, d) in descriptors.iter().enumerate() {
        let path = d.to_path()?;
        acc = match (acc, d.apply) {
            (None, true) => Some(Region::from_path(&path)?),
            (Some(r), true) => Some(combine(ClipOp::Union, &r, std::slice::from_ref(&path))?),
            (Some(r), false) => Some(combine(
                ClipOp::Difference,
                &r,
                std::slice::from_ref(&path),
            )?),
            (None, false) => {
                tracing::debug!(index = i, "exclude before any include is a no-op");
                None
            }
        };
    }
    acc.ok_or(ShapeFxError::EmptyRegion)
}

#[cfg(test)]
#[path = "../../tests/unit/algebra/combine.rs"]
mod tests;
