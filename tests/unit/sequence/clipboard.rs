use super::*;
use crate::{
    foundation::error::GlyphseqError,
    sequence::{catalog::GlyphCatalog, glyph::GlyphInfo},
};

fn info(index: i64) -> GlyphInfo {
    GlyphInfo {
        code: vec![0x6f22],
        code_str: "U+6F22".to_string(),
        font: "mincho".to_string(),
        name: format!("glyph-{index}"),
        index,
        path: "M0 0 L1 1".to_string(),
    }
}

fn glyph(index: i64) -> Glyph {
    Glyph::from_info(info(index), kurbo::Affine::IDENTITY, 1)
}

#[test]
fn detects_keyframe_clipboard_text() {
    assert!(is_keyframe_clipboard(
        "Adobe After Effects 9.0 Keyframe Data\n"
    ));
    assert!(!is_keyframe_clipboard("just some text"));
    assert!(!is_keyframe_clipboard(""));
}

#[test]
fn copy_emits_one_time_remap_key_per_glyph() {
    let text = glyphs_to_keyframe_text(&[glyph(24), glyph(48)], 24);

    assert!(is_keyframe_clipboard(&text));
    assert!(text.contains("\tUnits Per Second\t24"));
    // index / 24: glyph 24 at frame 0, glyph 48 at frame 1.
    assert!(text.contains("\t0\t1\t\n"));
    assert!(text.contains("\t1\t2\t\n"));

    let doc = decode_keyframes(&text).unwrap();
    let remap = doc.first_layer_property(TIME_REMAP_KIND).unwrap();
    assert_eq!(remap.keyframes.len(), 2);
}

#[test]
fn copy_of_no_glyphs_is_still_a_valid_document() {
    let text = glyphs_to_keyframe_text(&[], 24);
    let doc = decode_keyframes(&text).unwrap();
    let remap = doc.first_layer_property(TIME_REMAP_KIND).unwrap();
    assert!(remap.keyframes.is_empty());
}

#[test]
fn paste_round_trips_copied_sequence_order() {
    let catalog = GlyphCatalog::from_infos([info(5), info(9), info(12)]);
    let copied = [glyph(9), glyph(5), glyph(12)];

    let text = glyphs_to_keyframe_text(&copied, 24);
    let pasted = keyframe_text_to_glyphs(&text, &catalog).unwrap();

    let indices: Vec<i64> = pasted.iter().map(|g| g.index).collect();
    assert_eq!(indices, vec![9, 5, 12]);
    assert!(pasted.iter().all(|g| g.duration == 1));
}

#[test]
fn paste_of_malformed_text_fails_before_any_lookup() {
    let catalog = GlyphCatalog::from_infos([info(5)]);
    let err = keyframe_text_to_glyphs("Adobe After Effects truncated", &catalog).unwrap_err();
    assert!(matches!(err, GlyphseqError::MalformedDocument(_)));
}

#[test]
fn paste_with_missing_catalog_entry_yields_no_glyphs() {
    let catalog = GlyphCatalog::from_infos([info(5)]);
    let text = glyphs_to_keyframe_text(&[glyph(5), glyph(6)], 24);
    assert!(matches!(
        keyframe_text_to_glyphs(&text, &catalog),
        Err(GlyphseqError::LookupFailed(_))
    ));
}
