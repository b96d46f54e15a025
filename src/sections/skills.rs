use super::{Section, SectionContext, begin_section, page_mut};
use vita_layout::config::{
    ACCENT, BODY_SIZE, BULLET_ADVANCE, CONTENT_WIDTH, ENTRY_GAP, LINE_HEIGHT, MARGIN,
    SECTION_GAP, SKILL_GROUP_BUDGET, TEXT,
};
use vita_render_core::primitives::{TextStyle, draw_bullet, draw_text};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, ensure_space, start_new_page};
use vita_types::CvData;

/// Technologies, tools and methodologies on a page of their own.
pub struct Skills;

impl Section for Skills {
    fn name(&self) -> &'static str {
        "skills"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        let Some(skills) = cv.skills.as_ref().filter(|s| has_tokens(s)) else {
            log::debug!("Skipping skills: no groups");
            return Ok(cursor);
        };

        let groups = [
            (ctx.titles.technologies.as_str(), &skills.frontend),
            (ctx.titles.tools.as_str(), &skills.tools),
            (ctx.titles.methodologies.as_str(), &skills.backend),
        ];

        let cursor = start_new_page(doc, cursor)?;
        let mut cursor = begin_section(doc, cursor, &ctx.titles.skills)?;
        for (title, tokens) in groups {
            if tokens.iter().all(|t| t.trim().is_empty()) {
                continue;
            }
            cursor = render_group(doc, cursor, ctx, title, tokens)?;
        }
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}

fn has_tokens(skills: &vita_types::Skills) -> bool {
    [&skills.frontend, &skills.tools, &skills.backend]
        .iter()
        .any(|group| group.iter().any(|t| !t.trim().is_empty()))
}

fn render_group(
    doc: &mut Document,
    cursor: Cursor,
    ctx: &SectionContext<'_>,
    title: &str,
    tokens: &[String],
) -> Result<Cursor, RenderError> {
    let title_style = TextStyle::bold(BODY_SIZE, TEXT);
    let token_style = TextStyle::regular(BODY_SIZE, TEXT);

    let mut cursor = ensure_space(doc, cursor, SKILL_GROUP_BUDGET)?;
    draw_text(page_mut(doc, &cursor)?, title, MARGIN, cursor.y, &title_style);
    cursor.y -= LINE_HEIGHT;

    let rows = vita_layout::pack_tokens(
        tokens,
        CONTENT_WIDTH,
        BULLET_ADVANCE,
        ctx.fonts.get(token_style.font),
        token_style.size,
    );
    log::debug!("Skill group '{}': {} token(s) in {} row(s)", title, tokens.len(), rows.len());

    for row in rows {
        cursor = ensure_space(doc, cursor, LINE_HEIGHT)?;
        let page = page_mut(doc, &cursor)?;
        let mut x = MARGIN;
        for (i, token) in row.into_iter().enumerate() {
            if i > 0 {
                draw_bullet(page, x, cursor.y, token_style.size, ACCENT);
                x += BULLET_ADVANCE;
            }
            draw_text(page, token, x, cursor.y, &token_style);
            x += token_style.width_of(ctx.fonts, token);
        }
        cursor.y -= LINE_HEIGHT;
    }
    Ok(collapse_gap(doc, cursor, ENTRY_GAP))
}
