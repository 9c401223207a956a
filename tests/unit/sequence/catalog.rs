use super::*;

fn info(index: i64) -> GlyphInfo {
    GlyphInfo {
        code: vec![0x3042 + index as u32],
        code_str: format!("U+{:04X}", 0x3042 + index),
        font: "mincho".to_string(),
        name: format!("glyph-{index}"),
        index,
        path: "M0 0 L1 1".to_string(),
    }
}

#[test]
fn lookup_returns_known_entries() {
    let catalog = GlyphCatalog::from_infos([info(1), info(7)]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.lookup(7).unwrap().name, "glyph-7");
    assert_eq!(catalog.get(1).unwrap().index, 1);
}

#[test]
fn lookup_of_unknown_index_fails() {
    let catalog = GlyphCatalog::from_infos([info(1)]);
    let err = catalog.lookup(2).unwrap_err();
    assert!(matches!(err, GlyphseqError::LookupFailed(_)));
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn insert_replaces_existing_entry() {
    let mut catalog = GlyphCatalog::new();
    assert!(catalog.is_empty());

    catalog.insert(info(3));
    let mut replacement = info(3);
    replacement.name = "replaced".to_string();
    catalog.insert(replacement);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.lookup(3).unwrap().name, "replaced");
}

#[test]
fn loads_from_json_array() {
    let json = serde_json::to_string(&[info(1), info(2)]).unwrap();
    let catalog = GlyphCatalog::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.lookup(2).unwrap().index, 2);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = GlyphCatalog::from_json_reader(&b"{not json"[..]).unwrap_err();
    assert!(matches!(err, GlyphseqError::Serde(_)));
}
