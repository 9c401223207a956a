use crate::{
    foundation::error::{GlyphseqError, GlyphseqResult},
    keyframes::model::{
        END_MARKER, Keyframe, KeyframeDocument, KeyframeLayer, KeyframeProperty, LAYER_MARKER,
    },
};

/// One significant input line: trimmed text plus the leading-tab depth of the
/// raw line. The depth distinguishes keyframe rows (indented) from top-level
/// markers and must be computed before trimming.
struct ScannedLine<'a> {
    text: &'a str,
    tab_depth: usize,
}

/// Forward-only stream over significant lines; blank lines are stripped.
fn scan_lines(text: &str) -> impl Iterator<Item = ScannedLine<'_>> {
    text.lines().filter_map(|raw| {
        let tab_depth = raw.bytes().take_while(|&b| b == b'\t').count();
        let text = raw.trim();
        (!text.is_empty()).then_some(ScannedLine { text, tab_depth })
    })
}

#[tracing::instrument(skip(text))]
/// Decode keyframe interchange text into a [`KeyframeDocument`].
///
/// Header keys that are not recognized (including the preamble line) are
/// ignored for forward compatibility. Fails with
/// [`GlyphseqError::MalformedDocument`] when the terminal marker is missing
/// or a structural line is misplaced.
pub fn decode_keyframes(text: &str) -> GlyphseqResult<KeyframeDocument> {
    let mut lines = scan_lines(text).peekable();
    let mut doc = KeyframeDocument::default();

    // Header block: the preamble line plus indented key<TAB>value lines
    // preceding the first layer (or the terminal marker, for documents
    // without layers). Any other unindented line ends the scan so that a
    // property block opening before a `Layer` line is rejected below
    // instead of being dropped as header junk.
    while let Some(line) = lines.next_if(|l| {
        l.text != LAYER_MARKER
            && l.text != END_MARKER
            && (l.tab_depth > 0 || l.text.starts_with("Adobe After Effects"))
    }) {
        let Some((key, value)) = line.text.split_once('\t') else {
            continue;
        };
        match key.trim() {
            "Units Per Second" => doc.frame_rate = parse_number(value)? as u32,
            "Source Width" => doc.comp_width = parse_number(value)? as u32,
            "Source Height" => doc.comp_height = parse_number(value)? as u32,
            "Source Pixel Aspect Ratio" => doc.source_pixel_aspect_ratio = parse_number(value)?,
            "Comp Pixel Aspect Ratio" => doc.comp_pixel_aspect_ratio = parse_number(value)?,
            _ => {}
        }
    }

    let mut current_layer: Option<KeyframeLayer> = None;

    while let Some(line) = lines.next() {
        if line.text == LAYER_MARKER {
            if let Some(layer) = current_layer.take() {
                doc.layers.push(layer);
            }
            current_layer = Some(KeyframeLayer {
                name: LAYER_MARKER.to_string(),
                properties: Vec::new(),
            });
        } else if line.text == END_MARKER {
            if let Some(layer) = current_layer.take() {
                doc.layers.push(layer);
            }
            return Ok(doc);
        } else {
            let Some(layer) = current_layer.as_mut() else {
                return Err(GlyphseqError::malformed(format!(
                    "property block '{}' before any layer",
                    line.text
                )));
            };

            let (kind, name) = match line.text.split_once('\t') {
                Some((kind, name)) => (kind.to_string(), name.trim().to_string()),
                None => (line.text.to_string(), String::new()),
            };

            // Column-header line (e.g. `Frame<TAB>seconds`): an indented line
            // whose first field is not numeric. The known producer emits one
            // for every property; the encoder omits it for kinds other than
            // Time Remap, so it is discarded only when present.
            let has_column_header = lines
                .peek()
                .is_some_and(|l| l.tab_depth > 0 && !first_field_is_numeric(l.text));
            if has_column_header {
                lines.next();
            }

            let mut keyframes = Vec::new();
            while let Some(row) = lines.next_if(|l| l.tab_depth > 0) {
                keyframes.push(parse_keyframe_row(row.text)?);
            }

            layer.properties.push(KeyframeProperty {
                kind,
                name,
                keyframes,
            });
        }
    }

    Err(GlyphseqError::malformed("unexpected end of input"))
}

/// Parse an indented keyframe row: `frame<TAB>value[<TAB>value...]`.
fn parse_keyframe_row(text: &str) -> GlyphseqResult<Keyframe> {
    let mut fields = text.split('\t');
    let frame_field = fields.next().unwrap_or_default();
    // The producer may emit a trailing ".0" on frame numbers.
    let frame = parse_number(frame_field)? as i64;

    let values = fields
        .filter(|f| !f.trim().is_empty())
        .map(parse_number)
        .collect::<GlyphseqResult<Vec<_>>>()?;
    if values.is_empty() {
        return Err(GlyphseqError::malformed(format!(
            "keyframe row '{text}' has no channel values"
        )));
    }

    Ok(Keyframe { frame, values })
}

fn first_field_is_numeric(text: &str) -> bool {
    text.split('\t')
        .next()
        .unwrap_or_default()
        .trim()
        .parse::<f64>()
        .is_ok()
}

fn parse_number(field: &str) -> GlyphseqResult<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| GlyphseqError::malformed(format!("invalid number '{}'", field.trim())))
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/decode.rs"]
mod tests;
