use super::{
    Section, SectionContext, begin_section, draw_entry_header, draw_paragraphs, page_mut,
};
use regex::Regex;
use std::sync::LazyLock;
use vita_layout::config::{
    ACCENT, BODY_SIZE, CONTENT_WIDTH, ENTRY_GAP, LINE_HEIGHT, MARGIN, SECTION_GAP, TEXT,
};
use vita_render_core::primitives::{TextStyle, draw_text, register_link, text_link_rect};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, ensure_space};
use vita_types::{CvData, LinkUri};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("BUG: invalid URL_RE regex literal"));

pub struct Education;

/// A description split around its first URL.
#[derive(Debug, PartialEq)]
struct LinkedLine<'a> {
    prefix: &'a str,
    url: &'a str,
    trailing: &'a str,
}

fn split_first_url(description: &str) -> Option<LinkedLine<'_>> {
    URL_RE.find(description).map(|m| LinkedLine {
        prefix: description[..m.start()].trim(),
        url: m.as_str(),
        trailing: description[m.end()..].trim(),
    })
}

impl Section for Education {
    fn name(&self) -> &'static str {
        "education"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        if cv.education.is_empty() {
            log::debug!("Skipping education: no entries");
            return Ok(cursor);
        }

        let body = TextStyle::regular(BODY_SIZE, TEXT);
        let mut cursor = begin_section(doc, cursor, &ctx.titles.education)?;
        for entry in &cv.education {
            cursor =
                draw_entry_header(doc, cursor, ctx, &entry.degree, &entry.institution, &entry.period)?;

            if let Some(description) = entry.description.as_deref() {
                cursor = match split_first_url(description) {
                    Some(line) => draw_linked_line(doc, cursor, ctx, &line)?,
                    None => draw_paragraphs(doc, cursor, ctx, description, MARGIN, CONTENT_WIDTH, &body)?,
                };
            }
            cursor = collapse_gap(doc, cursor, ENTRY_GAP);
        }
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}

/// Prefix and URL on a single line, no wrapping. Text after the URL is not
/// drawn.
fn draw_linked_line(
    doc: &mut Document,
    cursor: Cursor,
    ctx: &SectionContext<'_>,
    line: &LinkedLine<'_>,
) -> Result<Cursor, RenderError> {
    if !line.trailing.is_empty() {
        log::debug!("Dropping text after education link: {:?}", line.trailing);
    }

    let prefix_style = TextStyle::regular(BODY_SIZE, TEXT);
    let url_style = TextStyle::regular(BODY_SIZE, ACCENT);

    let mut cursor = ensure_space(doc, cursor, LINE_HEIGHT)?;
    let page = page_mut(doc, &cursor)?;
    let mut x = MARGIN;
    if !line.prefix.is_empty() {
        draw_text(page, line.prefix, x, cursor.y, &prefix_style);
        x += prefix_style.width_of(ctx.fonts, line.prefix) + prefix_style.width_of(ctx.fonts, " ");
    }
    draw_text(page, line.url, x, cursor.y, &url_style);

    let width = url_style.width_of(ctx.fonts, line.url);
    let rect = text_link_rect(x, cursor.y, width, url_style.size);
    let link = register_link(doc, rect, LinkUri::from(line.url));
    cursor.push_annotation(link);
    cursor.y -= LINE_HEIGHT;
    Ok(cursor)
}
