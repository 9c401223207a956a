pub mod catalog;
pub mod clipboard;
pub mod glyph;
pub mod reconstruct;
