pub use kurbo::{Affine, Vec2};

/// Translation/rotation/uniform-scale transform for a glyph placement.
///
/// This is the transform shape the reconstructor can actually drive: the
/// interchange format only ever carries position and scale curves, so
/// rotation stays at its default in reconstructed output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphTransform {
    /// Translation in canvas units.
    pub translate: Vec2,
    /// Rotation in radians.
    pub rotation_rad: f64,
    /// Uniform scale factor; default 1.
    pub scale: f64,
}

impl Default for GlyphTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: 1.0,
        }
    }
}

impl GlyphTransform {
    /// Build a transform from translation, rotation and uniform scale.
    pub fn from_trs(translate: Vec2, rotation_rad: f64, scale: f64) -> Self {
        Self {
            translate,
            rotation_rad,
            scale,
        }
    }

    /// Compose into an affine matrix.
    ///
    /// Canonical order: T(translate) * R(rot) * S(scale).
    pub fn to_affine(self) -> kurbo::Affine {
        kurbo::Affine::translate(self.translate)
            * kurbo::Affine::rotate(self.rotation_rad)
            * kurbo::Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
