use crate::fonts::FontMetrics;

/// Width of `text` in points when set in `font` at `size`.
///
/// Pure and deterministic for a given font/size pair.
pub fn width_of(text: &str, font: &dyn FontMetrics, size: f32) -> f32 {
    font.text_width(text, size)
}
