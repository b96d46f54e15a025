use super::{Section, SectionContext, begin_section, draw_entry_header, draw_paragraphs};
use vita_layout::config::{BODY_SIZE, CONTENT_WIDTH, ENTRY_GAP, MARGIN, SECTION_GAP, TEXT};
use vita_render_core::primitives::TextStyle;
use vita_render_core::{Cursor, Document, RenderError, collapse_gap};
use vita_types::{CvData, Tenure};

pub struct Experience;

fn period_label(period: &str, tenure: Tenure) -> String {
    match tenure {
        Tenure::Current => format!("{} (Current)", period),
        Tenure::Past => period.to_string(),
    }
}

impl Section for Experience {
    fn name(&self) -> &'static str {
        "experience"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        if cv.experience.is_empty() {
            log::debug!("Skipping experience: no entries");
            return Ok(cursor);
        }

        let body = TextStyle::regular(BODY_SIZE, TEXT);
        let mut cursor = begin_section(doc, cursor, &ctx.titles.experience)?;
        for entry in &cv.experience {
            cursor = draw_entry_header(
                doc,
                cursor,
                ctx,
                &entry.title,
                &entry.company,
                &period_label(&entry.period, entry.tenure),
            )?;
            if let Some(description) = entry.description.as_deref() {
                cursor = draw_paragraphs(doc, cursor, ctx, description, MARGIN, CONTENT_WIDTH, &body)?;
            }
            cursor = collapse_gap(doc, cursor, ENTRY_GAP);
        }
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}
