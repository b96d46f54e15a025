//! The write cursor and the page-break policy.
//!
//! A [`Cursor`] is threaded by value from one section renderer to the next.
//! Every vertical advance goes through [`ensure_space`] first; that check is
//! the only thing keeping content above the bottom margin.

use crate::document::{AnnotationRef, Document, PageId};
use crate::error::RenderError;

/// Current page, baseline of the next line, and the link annotations drawn
/// on the current page that are not sealed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    pub page: PageId,
    pub y: f32,
    pub annotations: Vec<AnnotationRef>,
}

impl Cursor {
    /// A cursor at the top margin of `page` with no pending annotations.
    pub fn top_of(doc: &Document, page: PageId) -> Self {
        Self {
            page,
            y: top_y(doc),
            annotations: Vec::new(),
        }
    }

    pub fn push_annotation(&mut self, annotation: AnnotationRef) {
        self.annotations.push(annotation);
    }
}

fn top_y(doc: &Document) -> f32 {
    doc.height() - doc.margin()
}

/// Returns `cursor` unchanged when `required` points still fit above the
/// bottom margin. Otherwise seals the pending annotations onto the current
/// page, allocates a new page and returns a cursor at its top margin.
///
/// `required` is a worst-case estimate supplied by the caller.
pub fn ensure_space(
    doc: &mut Document,
    cursor: Cursor,
    required: f32,
) -> Result<Cursor, RenderError> {
    if cursor.y - required >= doc.margin() {
        return Ok(cursor);
    }
    if cursor.y >= top_y(doc) {
        // Already at the top of a page: another page would not help.
        log::warn!(
            "Block of {:.1}pt does not fit on an empty page; drawing it anyway",
            required
        );
        return Ok(cursor);
    }
    log::debug!(
        "Page break: {:.1}pt needed at y={:.1} on page {}",
        required,
        cursor.y,
        cursor.page.index() + 1
    );
    start_new_page(doc, cursor)
}

/// Unconditionally retires the current page: seals its pending annotations
/// and returns a cursor at the top of a freshly allocated page.
pub fn start_new_page(doc: &mut Document, cursor: Cursor) -> Result<Cursor, RenderError> {
    doc.seal_annotations(cursor.page, cursor.annotations)?;
    let page = doc.add_page();
    Ok(Cursor::top_of(doc, page))
}

/// Moves the cursor down by `gap` without breaking the page. Gaps collapse at
/// the bottom margin, so the next [`ensure_space`] decides where content goes.
pub fn collapse_gap(doc: &Document, mut cursor: Cursor, gap: f32) -> Cursor {
    cursor.y = (cursor.y - gap).max(doc.margin());
    cursor
}

/// Seals the annotations still pending on the final page.
pub fn finalize(doc: &mut Document, cursor: Cursor) -> Result<(), RenderError> {
    doc.seal_annotations(cursor.page, cursor.annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_layout::config::{LINE_HEIGHT, MARGIN, TOP_Y};
    use vita_types::{LinkUri, Rect};

    fn fresh() -> (Document, Cursor) {
        let mut doc = Document::a4();
        let page = doc.add_page();
        let cursor = Cursor::top_of(&doc, page);
        (doc, cursor)
    }

    #[test]
    fn test_enough_space_returns_input_unchanged() {
        let (mut doc, cursor) = fresh();
        let after = ensure_space(&mut doc, cursor.clone(), 60.0).unwrap();
        assert_eq!(after, cursor);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        let (mut doc, mut cursor) = fresh();
        cursor.y = MARGIN + LINE_HEIGHT;
        let after = ensure_space(&mut doc, cursor, LINE_HEIGHT).unwrap();
        assert_eq!(after.page.index(), 0);
    }

    #[test]
    fn test_overflow_breaks_and_seals_pending_links() {
        let (mut doc, mut cursor) = fresh();
        let link = doc.register_link(Rect::new(60.0, 100.0, 90.0, 110.0), LinkUri::from("mailto:a@b.c"));
        cursor.push_annotation(link);
        cursor.y = MARGIN + 5.0;

        let after = ensure_space(&mut doc, cursor, LINE_HEIGHT).unwrap();
        assert_eq!(after.page.index(), 1);
        assert_eq!(after.y, TOP_Y);
        assert!(after.annotations.is_empty());

        let first = doc.page_ids().next().unwrap();
        assert_eq!(doc.page_links(first).unwrap().len(), 1);
        assert!(doc.page(first).unwrap().is_sealed());
        assert!(!doc.page(after.page).unwrap().is_sealed());
    }

    #[test]
    fn test_y_never_drops_below_margin() {
        let (mut doc, mut cursor) = fresh();
        let steps = [12.0, 60.0, 40.0, 12.0, 30.0, 16.0, 60.0, 12.0];
        for i in 0..400 {
            let h = steps[i % steps.len()];
            cursor = ensure_space(&mut doc, cursor, h).unwrap();
            cursor.y -= h;
            assert!(cursor.y >= MARGIN, "y={} after step {}", cursor.y, i);
        }
        assert!(doc.page_count() > 1);
    }

    #[test]
    fn test_oversized_block_on_fresh_page_does_not_loop() {
        let (mut doc, cursor) = fresh();
        let after = ensure_space(&mut doc, cursor, 10_000.0).unwrap();
        assert_eq!(after.page.index(), 0);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_collapse_gap_stops_at_margin() {
        let (doc, mut cursor) = fresh();
        cursor.y = MARGIN + 3.0;
        let after = collapse_gap(&doc, cursor, 10.0);
        assert_eq!(after.y, MARGIN);
    }

    #[test]
    fn test_finalize_seals_last_page() {
        let (mut doc, cursor) = fresh();
        let page = cursor.page;
        finalize(&mut doc, cursor).unwrap();
        assert!(doc.page(page).unwrap().is_sealed());
    }
}
