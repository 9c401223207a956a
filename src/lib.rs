//! Glyphseq is the engineering core of a glyph animation sequence editor.
//!
//! It converts between a third-party animation tool's plain-text keyframe
//! interchange format and an editable glyph sequence timeline:
//!
//! 1. **Decode**: keyframe text -> [`KeyframeDocument`] (layers, properties,
//!    keyframe tracks)
//! 2. **Reconstruct**: [`KeyframeDocument`] -> [`PlacementRecord`]s
//!    (forward-fill the sparse curves, then run-length merge)
//! 3. **Resolve**: [`PlacementRecord`]s -> [`Glyph`]s via a [`GlyphLookup`]
//!    collaborator (e.g. a [`GlyphCatalog`])
//! 4. **Insert**: glyphs land in a [`Project`] through
//!    [`Project::insert_glyphs`]
//!
//! The reverse direction ([`encode_keyframes`], [`glyphs_to_keyframe_text`])
//! exports sequences back to the interchange format.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: decode/encode/reconstruct are pure functions of their
//!   input; no state is retained across calls.
//! - **No IO in the core**: clipboard transport and the glyph database are
//!   collaborators injected by the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod keyframes;
mod project;
mod sequence;

pub use foundation::core::{Affine, GlyphTransform, Vec2};
pub use foundation::error::{GlyphseqError, GlyphseqResult};
pub use keyframes::decode::decode_keyframes;
pub use keyframes::encode::encode_keyframes;
pub use keyframes::model::{
    END_MARKER, KEYFRAME_PREAMBLE, Keyframe, KeyframeDocument, KeyframeLayer, KeyframeProperty,
    LAYER_MARKER, POSITION_KIND, SCALE_KIND, TIME_REMAP_KIND, UNITS_PER_INDEX,
};
pub use project::model::{CommentItem, Item, Project, SequenceItem};
pub use project::ops::InsertTarget;
pub use sequence::catalog::GlyphCatalog;
pub use sequence::clipboard::{
    glyphs_to_keyframe_text, is_keyframe_clipboard, keyframe_text_to_glyphs,
};
pub use sequence::glyph::{Glyph, GlyphInfo, GlyphLookup};
pub use sequence::reconstruct::{
    PlacementRecord, reconstruct_glyphs, reconstruct_placements, resolve_placements,
};
