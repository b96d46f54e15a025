use super::{Section, SectionContext, page_mut};
use vita_layout::config::{GRAY, HEADER_BUDGET, MARGIN, SUBTITLE_SIZE, TEXT, TITLE_SIZE};
use vita_render_core::primitives::{TextStyle, draw_text};
use vita_render_core::{Cursor, Document, RenderError, ensure_space};
use vita_types::CvData;

const NAME_ADVANCE: f32 = 24.0;
const TITLE_ADVANCE: f32 = 18.0;

/// Name and optional job title at the top of the first page.
pub struct Header;

impl Section for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        _ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        let Some(info) = cv.personal_info.as_ref().filter(|i| !i.name.trim().is_empty()) else {
            log::debug!("Skipping header: no name");
            return Ok(cursor);
        };

        let mut cursor = ensure_space(doc, cursor, HEADER_BUDGET)?;
        let page = page_mut(doc, &cursor)?;
        draw_text(page, info.name.trim(), MARGIN, cursor.y, &TextStyle::bold(TITLE_SIZE, TEXT));
        cursor.y -= NAME_ADVANCE;

        if let Some(title) = info.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            draw_text(page, title, MARGIN, cursor.y, &TextStyle::regular(SUBTITLE_SIZE, GRAY));
            cursor.y -= TITLE_ADVANCE;
        }
        Ok(cursor)
    }
}
