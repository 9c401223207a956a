use std::collections::BTreeMap;

use crate::{
    foundation::error::{GlyphseqError, GlyphseqResult},
    sequence::glyph::{GlyphInfo, GlyphLookup},
};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// In-memory glyph catalog keyed by content index.
///
/// External IO is front-loaded: the catalog is built up front (e.g. from a
/// JSON export of the glyph database) and then serves lookups without
/// touching the outside world.
pub struct GlyphCatalog {
    entries: BTreeMap<i64, GlyphInfo>,
}

impl GlyphCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from glyph metadata, keyed by each entry's index.
    pub fn from_infos(infos: impl IntoIterator<Item = GlyphInfo>) -> Self {
        Self {
            entries: infos.into_iter().map(|info| (info.index, info)).collect(),
        }
    }

    /// Load a catalog from a JSON array of glyph metadata entries.
    pub fn from_json_reader(reader: impl std::io::Read) -> GlyphseqResult<Self> {
        let infos: Vec<GlyphInfo> = serde_json::from_reader(reader)
            .map_err(|err| GlyphseqError::serde(format!("parse glyph catalog JSON: {err}")))?;
        Ok(Self::from_infos(infos))
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, info: GlyphInfo) {
        self.entries.insert(info.index, info);
    }

    /// Look up an entry without the error path.
    pub fn get(&self, index: i64) -> Option<&GlyphInfo> {
        self.entries.get(&index)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl GlyphLookup for GlyphCatalog {
    fn lookup(&self, index: i64) -> GlyphseqResult<GlyphInfo> {
        self.entries
            .get(&index)
            .cloned()
            .ok_or_else(|| GlyphseqError::lookup_failed(format!("no glyph with index {index}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/catalog.rs"]
mod tests;
