use super::columns::{Column, Columns};
use super::{Section, SectionContext, begin_section, page_mut};
use vita_layout::config::{BODY_SIZE, LANGUAGE_ROW_HEIGHT, SECTION_GAP, TEXT};
use vita_render_core::primitives::{TextStyle, draw_text};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, start_new_page};
use vita_types::{CvData, Language};

/// `"{language} - {level}"` rows, strictly alternating left and right.
pub struct Languages;

impl Section for Languages {
    fn name(&self) -> &'static str {
        "languages"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        if cv.languages.is_empty() {
            log::debug!("Skipping languages: no entries");
            return Ok(cursor);
        }

        let cursor = begin_section(doc, cursor, &ctx.titles.languages)?;
        let columns = Columns::new(cursor.y, doc.margin());
        let (mut cursor, columns) = draw_rows(doc, cursor, columns, &cv.languages)?;

        cursor.y = columns.lowest();
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}

/// Places one row per entry starting in the left column. A row goes to the
/// other column when its own is full, and to a new page when both are.
fn draw_rows(
    doc: &mut Document,
    mut cursor: Cursor,
    mut columns: Columns,
    entries: &[Language],
) -> Result<(Cursor, Columns), RenderError> {
    let style = TextStyle::regular(BODY_SIZE, TEXT);
    let mut next = Column::Left;

    for entry in entries {
        let column = match columns.choose(next, LANGUAGE_ROW_HEIGHT) {
            Some(column) => {
                if column != next {
                    log::debug!("Language column {:?} full, using {:?}", next, column);
                }
                column
            }
            None => {
                cursor = start_new_page(doc, cursor)?;
                columns.reset(cursor.y);
                Column::Left
            }
        };

        let text = format!("{} - {}", entry.language, entry.level);
        draw_text(page_mut(doc, &cursor)?, &text, column.x(), columns.y(column), &style);
        columns.advance(column, LANGUAGE_ROW_HEIGHT);
        next = column.other();
    }
    Ok((cursor, columns))
}
