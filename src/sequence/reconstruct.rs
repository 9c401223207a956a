use crate::{
    foundation::core::{GlyphTransform, Vec2},
    foundation::error::{GlyphseqError, GlyphseqResult},
    keyframes::model::{
        KeyframeDocument, POSITION_KIND, SCALE_KIND, TIME_REMAP_KIND, UNITS_PER_INDEX,
    },
    sequence::glyph::{Glyph, GlyphLookup},
};

/// Upper bound on the dense frame span a time-remap track may cover.
const MAX_FRAME_SPAN: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One reconstructed placement: a content index held for `duration` frames
/// under a fixed transform.
pub struct PlacementRecord {
    /// Content index decoded from the time-remap channel.
    pub index: i64,
    /// Composed transform for the run; rotation is always 0.
    pub transform: GlyphTransform,
    /// Number of frames the placement is held.
    pub duration: u32,
}

/// Per-frame slot before forward-filling; `None` means not explicitly keyed.
#[derive(Clone, Copy, Default)]
struct SparseSlot {
    index: Option<i64>,
    position: Option<(f64, f64)>,
    scale: Option<f64>,
}

/// Per-frame slot after forward-filling; run boundaries compare these for
/// exact equality.
#[derive(Clone, Copy, PartialEq)]
struct ResolvedSlot {
    index: i64,
    position: (f64, f64),
    scale: f64,
}

#[tracing::instrument(skip(doc))]
/// Reconstruct ordered placement records from a decoded document.
///
/// Consumes the first layer's `Time Remap` track (the index-per-frame
/// curve), optionally combined with `Position` and `Scale` tracks, into a
/// minimal run-length-merged list of [`PlacementRecord`]s in ascending frame
/// order. A document without a `Time Remap` track on its first layer yields
/// an empty list.
pub fn reconstruct_placements(doc: &KeyframeDocument) -> GlyphseqResult<Vec<PlacementRecord>> {
    let Some(remap) = doc.first_layer_property(TIME_REMAP_KIND) else {
        return Ok(Vec::new());
    };
    if remap.keyframes.is_empty() {
        return Ok(Vec::new());
    }

    let min_frame = remap.keyframes.iter().map(|k| k.frame).min().unwrap_or(0);
    let max_frame = remap.keyframes.iter().map(|k| k.frame).max().unwrap_or(0);
    let span = max_frame - min_frame + 1;
    if span > MAX_FRAME_SPAN {
        return Err(GlyphseqError::validation(format!(
            "time remap spans {span} frames (max {MAX_FRAME_SPAN})"
        )));
    }

    // One slot per integer frame in [min_frame, max_frame].
    let mut slots = vec![SparseSlot::default(); span as usize];

    let properties = doc
        .layers
        .first()
        .map(|layer| layer.properties.as_slice())
        .unwrap_or_default();

    for prop in properties {
        for keyframe in &prop.keyframes {
            let offset = keyframe.frame - min_frame;
            // Position/scale keys outside the time-remap span are ignored.
            if offset < 0 || offset >= span {
                continue;
            }
            let slot = &mut slots[offset as usize];

            match prop.kind.as_str() {
                TIME_REMAP_KIND => {
                    if let Some(&value) = keyframe.values.first() {
                        slot.index = Some((value * UNITS_PER_INDEX).round() as i64);
                    }
                }
                POSITION_KIND => {
                    if let [x, y, ..] = keyframe.values.as_slice() {
                        slot.position = Some((*x, *y));
                    }
                }
                SCALE_KIND => {
                    if let Some(&value) = keyframe.values.first() {
                        slot.scale = Some(value);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(merge_runs(&forward_fill(&slots)))
}

/// Resolve each slot by carrying the last-known value forward, seeded at
/// `index = 0`, `position = (0, 0)`, `scale = 1`.
fn forward_fill(slots: &[SparseSlot]) -> Vec<ResolvedSlot> {
    let mut carried = ResolvedSlot {
        index: 0,
        position: (0.0, 0.0),
        scale: 1.0,
    };

    slots
        .iter()
        .map(|slot| {
            carried = ResolvedSlot {
                index: slot.index.unwrap_or(carried.index),
                position: slot.position.unwrap_or(carried.position),
                scale: slot.scale.unwrap_or(carried.scale),
            };
            carried
        })
        .collect()
}

/// Merge maximal spans of identical resolved slots into placement records.
///
/// A virtual slot past the end flushes the final run; each emitted record
/// takes the just-closed run's (previous slot's) resolved values.
fn merge_runs(slots: &[ResolvedSlot]) -> Vec<PlacementRecord> {
    let mut records = Vec::new();
    let mut run_start = 0usize;

    for f in 1..=slots.len() {
        let boundary = f == slots.len() || slots[f] != slots[f - 1];
        if !boundary {
            continue;
        }

        let closed = &slots[f - 1];
        records.push(PlacementRecord {
            index: closed.index,
            transform: GlyphTransform::from_trs(
                Vec2::new(closed.position.0, closed.position.1),
                0.0,
                closed.scale,
            ),
            duration: (f - run_start) as u32,
        });
        run_start = f;
    }

    records
}

#[tracing::instrument(skip(placements, lookup))]
/// Resolve placement records into full glyphs via the content lookup.
///
/// Lookups run sequentially in frame order. The first failure aborts with
/// [`GlyphseqError::LookupFailed`]; no partial list is returned, so callers
/// hand glyphs to the insertion sink all-or-nothing.
pub fn resolve_placements(
    placements: &[PlacementRecord],
    lookup: &dyn GlyphLookup,
) -> GlyphseqResult<Vec<Glyph>> {
    let mut glyphs = Vec::with_capacity(placements.len());

    for record in placements {
        let info = lookup.lookup(record.index).map_err(|err| match err {
            err @ GlyphseqError::LookupFailed(_) => err,
            other => GlyphseqError::lookup_failed(other.to_string()),
        })?;
        glyphs.push(Glyph::from_info(
            info,
            record.transform.to_affine(),
            record.duration,
        ));
    }

    Ok(glyphs)
}

/// Reconstruct and resolve in one step: document in, ordered glyphs out.
pub fn reconstruct_glyphs(
    doc: &KeyframeDocument,
    lookup: &dyn GlyphLookup,
) -> GlyphseqResult<Vec<Glyph>> {
    let placements = reconstruct_placements(doc)?;
    resolve_placements(&placements, lookup)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/reconstruct.rs"]
mod tests;
