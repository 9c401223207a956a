//! Structured representation of the keyframe interchange text format.
//!
//! The format is the plain-text clipboard export of a third-party animation
//! tool: a short tab-separated header, then per-layer / per-property keyframe
//! tables, closed by a terminal marker line. [`crate::decode_keyframes`] and
//! [`crate::encode_keyframes`] convert between the text and this model.

/// Fixed preamble line emitted at the top of every encoded document.
pub const KEYFRAME_PREAMBLE: &str = "Adobe After Effects 9.0 Keyframe Data";

/// Marker line opening a layer block.
pub const LAYER_MARKER: &str = "Layer";

/// Terminal marker line closing a document.
pub const END_MARKER: &str = "End of Keyframe Data";

/// Property kind carrying the index-per-frame curve.
pub const TIME_REMAP_KIND: &str = "Time Remap";

/// Property kind carrying a position curve (x, y channels).
pub const POSITION_KIND: &str = "Position";

/// Property kind carrying a uniform scale curve.
pub const SCALE_KIND: &str = "Scale";

/// Number of time-remap units per content index.
///
/// The producer encodes a content index as a fractional time value at 24
/// units per index, so `index = round(value * 24)`.
pub const UNITS_PER_INDEX: f64 = 24.0;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A decoded keyframe interchange document.
///
/// Immutable once decoded; layer order is document order and must round-trip
/// through [`crate::encode_keyframes`].
pub struct KeyframeDocument {
    /// Ticks/frames per second governing keyframe time units.
    pub frame_rate: u32,
    /// Nominal canvas width; 0 means absent (encoded as 1000).
    pub comp_width: u32,
    /// Nominal canvas height; 0 means absent (encoded as 1000).
    pub comp_height: u32,
    /// Source pixel aspect ratio; 0 means absent (encoded as 1).
    pub source_pixel_aspect_ratio: f64,
    /// Composition pixel aspect ratio; 0 means absent (encoded as 1).
    pub comp_pixel_aspect_ratio: f64,
    /// Layers in document order.
    pub layers: Vec<KeyframeLayer>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One layer block of a keyframe document.
pub struct KeyframeLayer {
    /// Layer name, preserved verbatim from the marker line.
    pub name: String,
    /// Properties in block order.
    pub properties: Vec<KeyframeProperty>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One property block (a keyframe track) within a layer.
pub struct KeyframeProperty {
    /// Property kind tag, e.g. `"Time Remap"`; opaque otherwise.
    pub kind: String,
    /// Property name; may be empty.
    pub name: String,
    /// Keyframes in ascending frame order (assumed, not enforced).
    pub keyframes: Vec<Keyframe>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One keyframe sample: an absolute frame plus one or more channel values.
pub struct Keyframe {
    /// Absolute frame index at which the sample occurs.
    pub frame: i64,
    /// Numeric channel samples; at least one.
    pub values: Vec<f64>,
}

impl KeyframeDocument {
    /// Find a property by kind on the first layer, if any.
    pub fn first_layer_property(&self, kind: &str) -> Option<&KeyframeProperty> {
        self.layers
            .first()
            .and_then(|layer| layer.properties.iter().find(|p| p.kind == kind))
    }
}
