//! Clipboard bridge between glyph sequences and keyframe interchange text.
//!
//! Copying a sequence exports one `Time Remap` keyframe per glyph (frame
//! `i`, value `index / 24`); pasting decodes, reconstructs and resolves the
//! text back into glyphs. Transport of the text itself (system clipboard,
//! file, network) is the caller's concern.

use crate::{
    foundation::error::GlyphseqResult,
    keyframes::decode::decode_keyframes,
    keyframes::encode::encode_keyframes,
    keyframes::model::{
        Keyframe, KeyframeDocument, KeyframeLayer, KeyframeProperty, LAYER_MARKER, TIME_REMAP_KIND,
        UNITS_PER_INDEX,
    },
    sequence::glyph::{Glyph, GlyphLookup},
    sequence::reconstruct::reconstruct_glyphs,
};

/// Whether clipboard text looks like a keyframe interchange document.
pub fn is_keyframe_clipboard(text: &str) -> bool {
    text.starts_with("Adobe After Effects")
}

/// Export glyphs as keyframe interchange text (the copy action).
///
/// Each glyph becomes one time-remap keyframe at consecutive frames; hold
/// durations are not exported, matching the producer's clipboard format.
pub fn glyphs_to_keyframe_text(glyphs: &[Glyph], frame_rate: u32) -> String {
    let keyframes = glyphs
        .iter()
        .enumerate()
        .map(|(frame, glyph)| Keyframe {
            frame: frame as i64,
            values: vec![glyph.index as f64 / UNITS_PER_INDEX],
        })
        .collect();

    let doc = KeyframeDocument {
        frame_rate,
        comp_width: 1000,
        comp_height: 1000,
        source_pixel_aspect_ratio: 1.0,
        comp_pixel_aspect_ratio: 1.0,
        layers: vec![KeyframeLayer {
            name: LAYER_MARKER.to_string(),
            properties: vec![KeyframeProperty {
                kind: TIME_REMAP_KIND.to_string(),
                name: String::new(),
                keyframes,
            }],
        }],
    };

    encode_keyframes(&doc)
}

/// Import keyframe interchange text as glyphs (the paste action).
///
/// Decodes the text, reconstructs placements and resolves each run via the
/// lookup; any failure leaves the caller with no glyphs to insert.
pub fn keyframe_text_to_glyphs(
    text: &str,
    lookup: &dyn GlyphLookup,
) -> GlyphseqResult<Vec<Glyph>> {
    let doc = decode_keyframes(text)?;
    reconstruct_glyphs(&doc, lookup)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/clipboard.rs"]
mod tests;
