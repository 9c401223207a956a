use std::collections::BTreeMap;

use crate::foundation::error::GlyphseqResult;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Glyph metadata returned by a content lookup.
///
/// This is the wire shape of the glyph database: enough to build a
/// placement payload (renderable path descriptor, identity codes, display
/// name, source font collection).
pub struct GlyphInfo {
    /// Unicode code points forming the glyph; may be empty for unencoded glyphs.
    pub code: Vec<u32>,
    /// Human-readable code string (e.g. `"U+6F22"`).
    pub code_str: String,
    /// Source font collection name.
    pub font: String,
    /// Unicode name of the glyph.
    pub name: String,
    /// Stable index of the glyph within its collection.
    pub index: i64,
    /// Renderable path descriptor (SVG path data).
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One glyph placed in a sequence, with its transform and hold duration.
pub struct Glyph {
    /// Renderable path descriptor (SVG path data).
    pub path: String,
    /// Placement transform on the canvas.
    pub transform: kurbo::Affine,
    /// Whether the glyph has been edited away from its source.
    pub modified: bool,
    /// Unicode code points forming the glyph.
    pub code: Vec<u32>,
    /// Stable index of the glyph within its collection.
    pub index: i64,
    /// Unicode name of the glyph.
    pub name: String,
    /// Source font collection name.
    pub font: String,
    /// Hold duration in frames; at least 1.
    pub duration: u32,
    /// Extra attributes (e.g. radical positions), free-form.
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Glyph {
    /// Merge lookup metadata with a computed transform and duration.
    pub fn from_info(info: GlyphInfo, transform: kurbo::Affine, duration: u32) -> Self {
        Self {
            path: info.path,
            transform,
            modified: false,
            code: info.code,
            index: info.index,
            name: info.name,
            font: info.font,
            duration: duration.max(1),
            meta: BTreeMap::new(),
        }
    }
}

/// Content lookup collaborator: resolves a numeric content index to glyph
/// metadata.
///
/// The reconstructor calls this once per emitted run, sequentially in frame
/// order. A failed lookup aborts the whole reconstruction.
pub trait GlyphLookup {
    /// Resolve one content index to its glyph metadata.
    fn lookup(&self, index: i64) -> GlyphseqResult<GlyphInfo>;
}
