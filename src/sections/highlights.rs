use super::{Section, SectionContext, begin_section, page_mut};
use vita_layout::config::{
    ACCENT, BODY_SIZE, CONTENT_WIDTH, HIGHLIGHT_INDENT, LINE_HEIGHT, MARGIN, SECTION_GAP, TEXT,
};
use vita_render_core::primitives::{TextStyle, draw_bullet, draw_text};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, ensure_space};
use vita_types::CvData;

/// Bulleted highlights from the about block.
pub struct Highlights;

/// Lines that start with `•` or `-`, marker removed. Other lines are not
/// highlight items and are dropped.
pub(crate) fn highlight_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(str::trim_start)
        .filter_map(|line| {
            line.strip_prefix('\u{2022}')
                .or_else(|| line.strip_prefix('-'))
        })
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

impl Section for Highlights {
    fn name(&self) -> &'static str {
        "highlights"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        let items = cv
            .about
            .as_ref()
            .and_then(|about| about.highlights.as_deref())
            .map(highlight_items)
            .unwrap_or_default();
        if items.is_empty() {
            log::debug!("Skipping highlights: no bullet lines");
            return Ok(cursor);
        }

        let style = TextStyle::regular(BODY_SIZE, TEXT);
        let font = ctx.fonts.get(style.font);
        let text_x = MARGIN + HIGHLIGHT_INDENT;

        let mut cursor = begin_section(doc, cursor, &ctx.titles.highlights)?;
        for item in items {
            let lines = vita_layout::wrap(item, CONTENT_WIDTH - HIGHLIGHT_INDENT, font, style.size);
            for (i, line) in lines.iter().enumerate() {
                cursor = ensure_space(doc, cursor, LINE_HEIGHT)?;
                let page = page_mut(doc, &cursor)?;
                if i == 0 {
                    draw_bullet(page, MARGIN, cursor.y, style.size, ACCENT);
                }
                draw_text(page, line, text_x, cursor.y, &style);
                cursor.y -= LINE_HEIGHT;
            }
        }
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}
