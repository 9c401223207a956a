use crate::keyframes::model::{
    END_MARKER, KEYFRAME_PREAMBLE, KeyframeDocument, LAYER_MARKER, TIME_REMAP_KIND,
};

#[tracing::instrument(skip(doc))]
/// Encode a [`KeyframeDocument`] as keyframe interchange text.
///
/// Total inverse of [`crate::decode_keyframes`] for the fields decode
/// understands. Composition size and aspect ratios that are zero/absent are
/// substituted with the producer defaults (1000, 1000, 1, 1).
pub fn encode_keyframes(doc: &KeyframeDocument) -> String {
    let mut lines: Vec<String> = vec![
        KEYFRAME_PREAMBLE.to_string(),
        String::new(),
        format!("\tUnits Per Second\t{}", doc.frame_rate),
        format!("\tSource Width\t{}", or_default_u32(doc.comp_width, 1000)),
        format!("\tSource Height\t{}", or_default_u32(doc.comp_height, 1000)),
        format!(
            "\tSource Pixel Aspect Ratio\t{}",
            or_default_f64(doc.source_pixel_aspect_ratio, 1.0)
        ),
        format!(
            "\tComp Pixel Aspect Ratio\t{}",
            or_default_f64(doc.comp_pixel_aspect_ratio, 1.0)
        ),
        String::new(),
    ];

    for layer in &doc.layers {
        lines.push(LAYER_MARKER.to_string());

        for prop in &layer.properties {
            let header: Vec<&str> = [prop.kind.as_str(), prop.name.as_str()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect();
            lines.push(header.join("\t"));

            if prop.kind == TIME_REMAP_KIND {
                lines.push("\tFrame\tseconds\t".to_string());
            }

            for keyframe in &prop.keyframes {
                let mut row = format!("\t{}", keyframe.frame);
                for value in &keyframe.values {
                    row.push('\t');
                    row.push_str(&value.to_string());
                }
                row.push('\t');
                lines.push(row);
            }

            lines.push(String::new());
        }
    }

    lines.push(END_MARKER.to_string());
    lines.push(String::new());

    lines.join("\n")
}

fn or_default_u32(value: u32, default: u32) -> u32 {
    if value == 0 { default } else { value }
}

fn or_default_f64(value: f64, default: f64) -> f64 {
    if value == 0.0 { default } else { value }
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/encode.rs"]
mod tests;
