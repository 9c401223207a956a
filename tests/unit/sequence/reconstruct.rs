use std::cell::RefCell;

use super::*;
use crate::{
    keyframes::model::{Keyframe, KeyframeLayer, KeyframeProperty, LAYER_MARKER},
    sequence::glyph::GlyphInfo,
};

fn doc_with_properties(properties: Vec<KeyframeProperty>) -> KeyframeDocument {
    KeyframeDocument {
        frame_rate: 24,
        layers: vec![KeyframeLayer {
            name: LAYER_MARKER.to_string(),
            properties,
        }],
        ..KeyframeDocument::default()
    }
}

fn track(kind: &str, keys: &[(i64, &[f64])]) -> KeyframeProperty {
    KeyframeProperty {
        kind: kind.to_string(),
        name: String::new(),
        keyframes: keys
            .iter()
            .map(|(frame, values)| Keyframe {
                frame: *frame,
                values: values.to_vec(),
            })
            .collect(),
    }
}

/// Time remap track encoding the given content indices at the given frames.
fn remap_doc(keys: &[(i64, i64)]) -> KeyframeDocument {
    let keyframes: Vec<(i64, Vec<f64>)> = keys
        .iter()
        .map(|(frame, index)| (*frame, vec![*index as f64 / UNITS_PER_INDEX]))
        .collect();
    let borrowed: Vec<(i64, &[f64])> = keyframes
        .iter()
        .map(|(frame, values)| (*frame, values.as_slice()))
        .collect();
    doc_with_properties(vec![track(TIME_REMAP_KIND, &borrowed)])
}

/// Lookup double recording call order; fails for indices it does not know.
struct StubLookup {
    known: Vec<i64>,
    calls: RefCell<Vec<i64>>,
}

impl StubLookup {
    fn knowing(known: &[i64]) -> Self {
        Self {
            known: known.to_vec(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl GlyphLookup for StubLookup {
    fn lookup(&self, index: i64) -> GlyphseqResult<GlyphInfo> {
        self.calls.borrow_mut().push(index);
        if !self.known.contains(&index) {
            return Err(GlyphseqError::lookup_failed(format!(
                "no glyph with index {index}"
            )));
        }
        Ok(GlyphInfo {
            code: vec![0x6f22],
            code_str: "U+6F22".to_string(),
            font: "mincho".to_string(),
            name: format!("glyph-{index}"),
            index,
            path: format!("M0 0 L{index} 0"),
        })
    }
}

#[test]
fn forward_fill_carries_last_index() {
    // Keys at frames 0 and 5 only; frames 1-4 carry index 0 forward.
    let records = reconstruct_placements(&remap_doc(&[(0, 0), (5, 2)])).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].index, records[0].duration), (0, 5));
    assert_eq!((records[1].index, records[1].duration), (2, 1));
}

#[test]
fn consecutive_equal_slots_merge_into_runs() {
    let doc = remap_doc(&[(0, 0), (1, 0), (2, 0), (3, 1), (4, 1), (5, 2)]);
    let records = reconstruct_placements(&doc).unwrap();
    let summary: Vec<(i64, u32)> = records.iter().map(|r| (r.index, r.duration)).collect();
    assert_eq!(summary, vec![(0, 3), (1, 2), (2, 1)]);
}

#[test]
fn single_keyframe_yields_one_record_of_duration_one() {
    let records = reconstruct_placements(&remap_doc(&[(12, 7)])).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].index, 7);
    assert_eq!(records[0].duration, 1);
    assert_eq!(records[0].transform, GlyphTransform::default());
}

#[test]
fn min_frame_need_not_be_zero() {
    let records = reconstruct_placements(&remap_doc(&[(100, 3), (102, 4)])).unwrap();
    let summary: Vec<(i64, u32)> = records.iter().map(|r| (r.index, r.duration)).collect();
    assert_eq!(summary, vec![(3, 2), (4, 1)]);
}

#[test]
fn missing_time_remap_yields_no_records() {
    let doc = doc_with_properties(vec![track(POSITION_KIND, &[(0, &[1.0, 2.0])])]);
    assert!(reconstruct_placements(&doc).unwrap().is_empty());

    let no_layers = KeyframeDocument::default();
    assert!(reconstruct_placements(&no_layers).unwrap().is_empty());
}

#[test]
fn missing_time_remap_performs_no_lookups() {
    let doc = doc_with_properties(vec![]);
    let lookup = StubLookup::knowing(&[]);
    let glyphs = reconstruct_glyphs(&doc, &lookup).unwrap();
    assert!(glyphs.is_empty());
    assert!(lookup.calls.borrow().is_empty());
}

#[test]
fn position_change_starts_a_new_run() {
    let mut doc = remap_doc(&[(0, 5), (5, 5)]);
    doc.layers[0]
        .properties
        .push(track(POSITION_KIND, &[(3, &[10.0, 20.0])]));

    let records = reconstruct_placements(&doc).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].duration, 3);
    assert_eq!(records[0].transform.translate, Vec2::ZERO);
    assert_eq!(records[1].duration, 3);
    assert_eq!(records[1].transform.translate, Vec2::new(10.0, 20.0));
}

#[test]
fn scale_change_starts_a_new_run() {
    let mut doc = remap_doc(&[(0, 1), (3, 1)]);
    doc.layers[0]
        .properties
        .push(track(SCALE_KIND, &[(2, &[2.0])]));

    let records = reconstruct_placements(&doc).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!((records[0].duration, records[0].transform.scale), (2, 1.0));
    assert_eq!((records[1].duration, records[1].transform.scale), (2, 2.0));
}

#[test]
fn each_run_uses_its_own_resolved_values() {
    // Index and position both change at frame 3; the first emitted record
    // must carry the seed transform, not the later one.
    let mut doc = remap_doc(&[(0, 0), (3, 1)]);
    doc.layers[0]
        .properties
        .push(track(POSITION_KIND, &[(3, &[50.0, 60.0])]));

    let records = reconstruct_placements(&doc).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].index, 0);
    assert_eq!(records[0].transform.translate, Vec2::ZERO);
    assert_eq!(records[1].index, 1);
    assert_eq!(records[1].transform.translate, Vec2::new(50.0, 60.0));
}

#[test]
fn position_keys_outside_remap_span_are_ignored() {
    let mut doc = remap_doc(&[(10, 2), (12, 2)]);
    doc.layers[0]
        .properties
        .push(track(POSITION_KIND, &[(0, &[99.0, 99.0])]));

    let records = reconstruct_placements(&doc).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].transform.translate, Vec2::ZERO);
}

#[test]
fn oversized_remap_span_is_rejected() {
    let doc = remap_doc(&[(0, 0), (2_000_000, 1)]);
    assert!(matches!(
        reconstruct_placements(&doc),
        Err(GlyphseqError::Validation(_))
    ));
}

#[test]
fn resolve_merges_lookup_metadata_with_run_transform() {
    let records = reconstruct_placements(&remap_doc(&[(0, 0), (5, 2)])).unwrap();
    let lookup = StubLookup::knowing(&[0, 2]);
    let glyphs = resolve_placements(&records, &lookup).unwrap();

    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].index, 0);
    assert_eq!(glyphs[0].duration, 5);
    assert_eq!(glyphs[0].name, "glyph-0");
    assert_eq!(glyphs[1].index, 2);
    assert_eq!(glyphs[1].duration, 1);
    assert_eq!(*lookup.calls.borrow(), vec![0, 2]);
}

#[test]
fn lookup_failure_aborts_with_no_partial_result() {
    let records = reconstruct_placements(&remap_doc(&[(0, 0), (5, 2)])).unwrap();
    let lookup = StubLookup::knowing(&[0]);
    let err = resolve_placements(&records, &lookup).unwrap_err();

    assert!(matches!(err, GlyphseqError::LookupFailed(_)));
    // The failing call is the last one made; nothing after it runs.
    assert_eq!(*lookup.calls.borrow(), vec![0, 2]);
}
