use rustybuzz::{Feature, UnicodeBuffer};
use std::cell::RefCell;
use ttf_parser::Tag;

// Reuse buffer to avoid allocations when measuring many words
thread_local! {
    static SCRATCH_BUFFER: RefCell<Option<UnicodeBuffer>> = RefCell::new(Some(UnicodeBuffer::new()));
}

/// Shapes `text` with kerning and ligatures and returns its advance in points.
pub(crate) fn shaped_width(face: &rustybuzz::Face<'_>, text: &str, size: f32) -> f32 {
    if text.is_empty() {
        return 0.0;
    }

    static FEATURES: std::sync::OnceLock<Vec<Feature>> = std::sync::OnceLock::new();
    let features = FEATURES.get_or_init(|| {
        vec![
            Feature::new(Tag::from_bytes(b"liga"), 1, ..),
            Feature::new(Tag::from_bytes(b"kern"), 1, ..),
        ]
    });

    let scale = size / face.units_per_em() as f32;

    let mut buffer =
        SCRATCH_BUFFER.with(|b| b.borrow_mut().take().unwrap_or_else(UnicodeBuffer::new));
    buffer.push_str(text);
    buffer.guess_segment_properties();

    let glyph_buffer = rustybuzz::shape(face, features, buffer);
    let units: i32 = glyph_buffer
        .glyph_positions()
        .iter()
        .map(|pos| pos.x_advance)
        .sum();

    let recycled_buffer = glyph_buffer.clear();
    SCRATCH_BUFFER.with(|b| *b.borrow_mut() = Some(recycled_buffer));

    units as f32 * scale
}
