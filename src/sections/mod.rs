//! Section renderers.
//!
//! Each section consumes the incoming [`Cursor`], draws its slice of the CV and
//! returns the cursor for the next section. A section whose data is absent or
//! empty returns the cursor it was given, untouched.
//!
//! Every vertical advance goes through [`ensure_space`] before anything is
//! drawn: budgets for headers and entries are deliberate overestimates from
//! [`vita_layout::config`], lines use [`LINE_HEIGHT`].

mod columns;
mod contact;
mod education;
mod experience;
mod header;
mod highlights;
mod languages;
mod projects;
mod skills;

pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use header::Header;
pub use highlights::Highlights;
pub use languages::Languages;
pub use projects::Projects;
pub use skills::Skills;

use crate::config::SectionTitles;
use vita_layout::FontSet;
use vita_layout::config::{
    ACCENT, BODY_SIZE, ENTRY_HEADER_BUDGET, GRAY, LIGHT_GRAY, LINE_HEIGHT, MARGIN,
    SECONDARY_SIZE, SECTION_HEADER_BUDGET, SUBTITLE_SIZE,
};
use vita_render_core::primitives::{
    TextStyle, draw_bulleted_text, draw_text, render_section_header,
};
use vita_render_core::{Cursor, Document, Page, RenderError, ensure_space};
use vita_types::CvData;

/// Shared, read-only inputs of a build.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub fonts: &'a FontSet,
    pub titles: &'a SectionTitles,
}

pub trait Section {
    fn name(&self) -> &'static str;

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError>;
}

/// All sections in document order.
pub const SECTION_ORDER: &[&dyn Section] = &[
    &Header,
    &Contact,
    &Highlights,
    &Experience,
    &Skills,
    &Education,
    &Languages,
    &Projects,
];

pub(crate) fn page_mut<'d>(doc: &'d mut Document, cursor: &Cursor) -> Result<&'d mut Page, RenderError> {
    doc.page_mut(cursor.page)
}

/// Reserves the header budget, draws the titled rule and returns the cursor
/// positioned at the first body line.
pub(crate) fn begin_section(
    doc: &mut Document,
    cursor: Cursor,
    title: &str,
) -> Result<Cursor, RenderError> {
    let mut cursor = ensure_space(doc, cursor, SECTION_HEADER_BUDGET)?;
    cursor.y = render_section_header(page_mut(doc, &cursor)?, title, cursor.y);
    Ok(cursor)
}

const ENTRY_TITLE_ADVANCE: f32 = 14.0;

/// Title, organisation and period of an experience or education entry.
///
/// The organisation line keeps `" - "` separators as accent bullets.
pub(crate) fn draw_entry_header(
    doc: &mut Document,
    cursor: Cursor,
    ctx: &SectionContext<'_>,
    title: &str,
    organisation: &str,
    period: &str,
) -> Result<Cursor, RenderError> {
    let mut cursor = ensure_space(doc, cursor, ENTRY_HEADER_BUDGET)?;
    let page = page_mut(doc, &cursor)?;

    draw_text(page, title, MARGIN, cursor.y, &TextStyle::bold(SUBTITLE_SIZE, ACCENT));
    cursor.y -= ENTRY_TITLE_ADVANCE;

    let organisation_style = TextStyle::regular(BODY_SIZE, GRAY);
    draw_bulleted_text(page, ctx.fonts, organisation, MARGIN, cursor.y, &organisation_style, ACCENT);
    cursor.y -= LINE_HEIGHT;

    draw_text(page, period, MARGIN, cursor.y, &TextStyle::regular(SECONDARY_SIZE, LIGHT_GRAY));
    cursor.y -= LINE_HEIGHT;
    Ok(cursor)
}

/// Draws pre-wrapped lines at `x`, one [`LINE_HEIGHT`] each, checking for
/// space before every line.
pub(crate) fn draw_lines<S: AsRef<str>>(
    doc: &mut Document,
    mut cursor: Cursor,
    lines: &[S],
    x: f32,
    style: &TextStyle,
) -> Result<Cursor, RenderError> {
    for line in lines {
        cursor = ensure_space(doc, cursor, LINE_HEIGHT)?;
        draw_text(page_mut(doc, &cursor)?, line.as_ref(), x, cursor.y, style);
        cursor.y -= LINE_HEIGHT;
    }
    Ok(cursor)
}

/// Wraps every non-blank paragraph of `text` to `width` and draws it with
/// [`draw_lines`].
pub(crate) fn draw_paragraphs(
    doc: &mut Document,
    cursor: Cursor,
    ctx: &SectionContext<'_>,
    text: &str,
    x: f32,
    width: f32,
    style: &TextStyle,
) -> Result<Cursor, RenderError> {
    let font = ctx.fonts.get(style.font);
    let lines: Vec<String> = text
        .lines()
        .flat_map(|paragraph| vita_layout::wrap(paragraph, width, font, style.size))
        .collect();
    draw_lines(doc, cursor, &lines, x, style)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_empty_cv_is_identity_for_every_section() {
        let cv = CvData::default();
        for section in SECTION_ORDER {
            let (mut doc, start) = fresh();
            let after = render_with(*section, &mut doc, start.clone(), &cv);
            assert_eq!(after, start, "{} moved the cursor", section.name());
            assert_eq!(doc.page_count(), 1, "{} added a page", section.name());
            assert!(doc.pages()[0].ops().is_empty(), "{} drew", section.name());
        }
    }

    #[test]
    fn test_paragraphs_wrap_and_step_by_line_height() {
        let (mut doc, cursor) = fresh();
        let fonts = FontSet::standard();
        let titles = SectionTitles::default();
        let ctx = SectionContext { fonts: &fonts, titles: &titles };
        let style = TextStyle::regular(10.0, vita_layout::config::TEXT);
        let text = "first paragraph\n\nsecond paragraph that is long enough to need wrapping at a narrow width";

        let start_y = cursor.y;
        let after = draw_paragraphs(&mut doc, cursor, &ctx, text, 60.0, 150.0, &style).unwrap();
        let lines = texts(&doc).len();
        assert!(lines >= 3);
        assert_eq!(after.y, start_y - LINE_HEIGHT * lines as f32);
    }
}
