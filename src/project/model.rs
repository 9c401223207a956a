use crate::{
    foundation::core::Vec2,
    foundation::error::{GlyphseqError, GlyphseqResult},
    sequence::glyph::Glyph,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A project document: the persisted state of the sequence editor.
///
/// A pure data model, serialized via Serde (JSON). Item order is insertion
/// order.
pub struct Project {
    /// Project format version.
    pub version: String,
    /// Timeline frame rate.
    #[serde(rename = "frameRate")]
    pub frame_rate: u32,
    /// Items on the canvas.
    pub items: Vec<Item>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            version: "0.0.1".to_string(),
            frame_rate: 24,
            items: Vec::new(),
        }
    }
}

impl Project {
    /// Check project invariants: a positive frame rate and glyph hold
    /// durations of at least one frame.
    pub fn validate(&self) -> GlyphseqResult<()> {
        if self.frame_rate == 0 {
            return Err(GlyphseqError::validation("frame rate must be > 0"));
        }
        for item in &self.items {
            let Item::GlyphSequence(seq) = item else {
                continue;
            };
            if seq.glyphs.iter().any(|g| g.duration == 0) {
                return Err(GlyphseqError::validation(format!(
                    "item '{}' has a glyph with zero duration",
                    seq.id
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
/// Anything placed on the item canvas.
pub enum Item {
    /// A free-floating text note.
    #[serde(rename = "comment")]
    Comment(CommentItem),
    /// An ordered run of glyphs forming an animation sequence.
    #[serde(rename = "glyphSequence")]
    GlyphSequence(SequenceItem),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A text note on the canvas.
pub struct CommentItem {
    /// Stable item identifier.
    pub id: String,
    /// Display color.
    pub color: String,
    /// Canvas position.
    pub position: Vec2,
    /// Note text.
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A glyph sequence on the canvas.
pub struct SequenceItem {
    /// Stable item identifier.
    pub id: String,
    /// Display color.
    pub color: String,
    /// Canvas position.
    pub position: Vec2,
    /// Glyphs in playback order.
    pub glyphs: Vec<Glyph>,
}
