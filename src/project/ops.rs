//! Editing operations over [`Project`] items.
//!
//! These are the batch-insertion sink and the sequence edits (duration
//! offsetting, glyph swapping, removal) consumed by the editor's action
//! layer. All operations are synchronous and leave the project unchanged on
//! error.

use crate::{
    foundation::core::Vec2,
    foundation::error::{GlyphseqError, GlyphseqResult},
    project::model::{Item, Project, SequenceItem},
    sequence::glyph::Glyph,
};

#[derive(Clone, Debug, PartialEq)]
/// Where a batch of glyphs lands in the project.
pub enum InsertTarget {
    /// Append to the end of an existing glyph sequence.
    Append {
        /// Item index of the target sequence.
        item: usize,
    },
    /// Insert within an existing sequence, after the glyph at `char_index`
    /// (or before it when `gap` is set).
    AtChar {
        /// Item index of the target sequence.
        item: usize,
        /// Glyph position the insertion is anchored to.
        char_index: usize,
        /// Insert before the anchor instead of after it.
        gap: bool,
    },
    /// Create a new sequence item on the canvas.
    NewItem {
        /// Identifier for the new item.
        id: String,
        /// Display color for the new item.
        color: String,
        /// Canvas position for the new item.
        position: Vec2,
    },
}

impl Project {
    /// Insert a batch of glyphs at the target position.
    ///
    /// The whole batch is inserted contiguously, preserving order. Returns
    /// the index of the affected (or newly created) item.
    pub fn insert_glyphs(
        &mut self,
        glyphs: Vec<Glyph>,
        target: InsertTarget,
    ) -> GlyphseqResult<usize> {
        match target {
            InsertTarget::Append { item } => {
                let seq = self.sequence_mut(item)?;
                seq.glyphs.extend(glyphs);
                Ok(item)
            }
            InsertTarget::AtChar {
                item,
                char_index,
                gap,
            } => {
                let seq = self.sequence_mut(item)?;
                let at = char_index + usize::from(!gap);
                if at > seq.glyphs.len() {
                    return Err(GlyphseqError::validation(format!(
                        "insert position {at} out of bounds (sequence has {} glyphs)",
                        seq.glyphs.len()
                    )));
                }
                seq.glyphs.splice(at..at, glyphs);
                Ok(item)
            }
            InsertTarget::NewItem {
                id,
                color,
                position,
            } => {
                self.items.push(Item::GlyphSequence(SequenceItem {
                    id,
                    color,
                    position,
                    glyphs,
                }));
                Ok(self.items.len() - 1)
            }
        }
    }

    /// Offset glyph hold durations, clamped at 1 frame.
    ///
    /// With `char_index` set, only that glyph is adjusted; otherwise the
    /// whole sequence is.
    pub fn offset_glyph_durations(
        &mut self,
        item: usize,
        char_index: Option<usize>,
        offset: i32,
    ) -> GlyphseqResult<()> {
        let seq = self.sequence_mut(item)?;

        let adjust = |glyph: &mut Glyph| {
            glyph.duration = (i64::from(glyph.duration) + i64::from(offset)).max(1) as u32;
        };

        match char_index {
            Some(i) => adjust(glyph_at_mut(seq, i)?),
            None => seq.glyphs.iter_mut().for_each(adjust),
        }
        Ok(())
    }

    /// Swap a glyph with its neighbor `offset` steps away, wrapping around
    /// the sequence. Returns the glyph's new position.
    pub fn swap_glyph(
        &mut self,
        item: usize,
        char_index: usize,
        offset: isize,
    ) -> GlyphseqResult<usize> {
        let seq = self.sequence_mut(item)?;
        glyph_at_mut(seq, char_index)?;

        let len = seq.glyphs.len() as isize;
        let next = (char_index as isize + offset).rem_euclid(len) as usize;
        seq.glyphs.swap(char_index, next);
        Ok(next)
    }

    /// Remove one glyph; an emptied sequence item is removed from the
    /// project.
    pub fn remove_glyph(&mut self, item: usize, char_index: usize) -> GlyphseqResult<()> {
        let seq = self.sequence_mut(item)?;
        glyph_at_mut(seq, char_index)?;
        seq.glyphs.remove(char_index);

        if seq.glyphs.is_empty() {
            self.items.remove(item);
        }
        Ok(())
    }

    fn sequence_mut(&mut self, item: usize) -> GlyphseqResult<&mut SequenceItem> {
        let count = self.items.len();
        match self.items.get_mut(item) {
            Some(Item::GlyphSequence(seq)) => Ok(seq),
            Some(Item::Comment(_)) => Err(GlyphseqError::validation(format!(
                "item {item} is not a glyph sequence"
            ))),
            None => Err(GlyphseqError::validation(format!(
                "item index {item} out of bounds (project has {count} items)"
            ))),
        }
    }
}

fn glyph_at_mut(seq: &mut SequenceItem, char_index: usize) -> GlyphseqResult<&mut Glyph> {
    let count = seq.glyphs.len();
    seq.glyphs.get_mut(char_index).ok_or_else(|| {
        GlyphseqError::validation(format!(
            "glyph index {char_index} out of bounds (sequence has {count} glyphs)"
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/project/ops.rs"]
mod tests;
