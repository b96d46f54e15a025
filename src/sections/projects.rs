use super::columns::{Column, Columns};
use super::{Section, SectionContext, begin_section, page_mut};
use vita_layout::config::{
    ACCENT, BODY_SIZE, BULLET_ADVANCE, COLUMN_WIDTH, LIGHT_GRAY, LINE_HEIGHT, PROJECT_GAP,
    PROJECT_TITLE_HEIGHT, SECONDARY_SIZE, SECTION_GAP, TEXT,
};
use vita_layout::FontSet;
use vita_render_core::primitives::{
    TextStyle, draw_bullet, draw_text, register_link, text_link_rect,
};
use vita_render_core::{Cursor, Document, RenderError, collapse_gap, start_new_page};
use vita_types::{CvData, LinkUri, Project};

const TITLE_STYLE: TextStyle = TextStyle::bold(BODY_SIZE, ACCENT);
const SUMMARY_STYLE: TextStyle = TextStyle::regular(BODY_SIZE, TEXT);
const META_STYLE: TextStyle = TextStyle::regular(SECONDARY_SIZE, LIGHT_GRAY);
const LINK_STYLE: TextStyle = TextStyle::regular(BODY_SIZE, ACCENT);

/// Featured projects in two columns, each placed in whichever column has
/// more room left.
pub struct Projects;

/// A project measured before anything is drawn. Every line is already
/// fitted to [`COLUMN_WIDTH`], so `height` is exact for the drawing pass.
#[derive(Debug)]
struct ProjectBlock<'a> {
    title: &'a str,
    title_lines: Vec<String>,
    summary: Vec<String>,
    /// Status and technologies, packed into rows with bullets between tokens.
    meta: Vec<Vec<String>>,
    links: Vec<(&'static str, &'a str)>,
}

impl<'a> ProjectBlock<'a> {
    fn measure(project: &'a Project, fonts: &FontSet) -> Self {
        let title = project.title.trim();
        let title_lines = vita_layout::wrap(title, COLUMN_WIDTH, fonts.get(TITLE_STYLE.font), TITLE_STYLE.size);

        let summary = project
            .summary()
            .map(|text| {
                vita_layout::wrap(text, COLUMN_WIDTH, fonts.get(SUMMARY_STYLE.font), SUMMARY_STYLE.size)
            })
            .unwrap_or_default();

        let tokens: Vec<&str> = project
            .status
            .map(|status| status.label())
            .into_iter()
            .chain(project.technologies.iter().map(|t| t.trim()))
            .collect();
        let meta = vita_layout::pack_tokens(
            &tokens,
            COLUMN_WIDTH,
            BULLET_ADVANCE,
            fonts.get(META_STYLE.font),
            META_STYLE.size,
        )
        .into_iter()
        .map(|row| row.into_iter().map(str::to_string).collect())
        .collect();

        let present = |url: &'a Option<String>| url.as_deref().map(str::trim).filter(|u| !u.is_empty());
        let links = [("GitHub", present(&project.github_url)), ("Demo", present(&project.demo_url))]
            .into_iter()
            .filter_map(|(label, url)| url.map(|u| (label, u)))
            .collect();

        Self {
            title,
            title_lines,
            summary,
            meta,
            links,
        }
    }

    fn title_height(&self) -> f32 {
        PROJECT_TITLE_HEIGHT + self.title_lines.len().saturating_sub(1) as f32 * LINE_HEIGHT
    }

    fn fixed_height(&self) -> f32 {
        let mut height = self.title_height() + PROJECT_GAP;
        height += self.meta.len() as f32 * LINE_HEIGHT;
        if !self.links.is_empty() {
            height += LINE_HEIGHT;
        }
        height
    }

    fn height(&self) -> f32 {
        self.fixed_height() + self.summary.len() as f32 * LINE_HEIGHT
    }

    /// Drops summary lines until the block fits in `max_height`.
    fn truncate_to(&mut self, max_height: f32) {
        if self.height() <= max_height {
            return;
        }
        let keep = ((max_height - self.fixed_height()) / LINE_HEIGHT).floor().max(0.0) as usize;
        log::warn!(
            "Project '{}' is taller than a page; keeping {} of {} description lines",
            self.title,
            keep,
            self.summary.len()
        );
        self.summary.truncate(keep);
    }
}

impl Section for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn render(
        &self,
        doc: &mut Document,
        cursor: Cursor,
        cv: &CvData,
        ctx: &SectionContext<'_>,
    ) -> Result<Cursor, RenderError> {
        let featured: Vec<&Project> = cv.projects.iter().filter(|p| p.featured).collect();
        if featured.is_empty() {
            log::debug!("Skipping projects: none featured");
            return Ok(cursor);
        }

        let page_capacity = doc.height() - 2.0 * doc.margin();
        let mut cursor = begin_section(doc, cursor, &ctx.titles.projects)?;
        let mut columns = Columns::new(cursor.y, doc.margin());

        for project in featured {
            let mut block = ProjectBlock::measure(project, ctx.fonts);
            block.truncate_to(page_capacity);
            let height = block.height();

            let preferred = columns.higher();
            let column = match columns.choose(preferred, height) {
                Some(column) => column,
                None => {
                    log::debug!("Project '{}' ({:.0}pt) starts a new page", block.title, height);
                    cursor = start_new_page(doc, cursor)?;
                    columns.reset(cursor.y);
                    Column::Left
                }
            };

            draw_block(doc, &mut cursor, ctx, &block, column.x(), columns.y(column))?;
            columns.advance(column, height);
        }

        cursor.y = columns.lowest();
        Ok(collapse_gap(doc, cursor, SECTION_GAP))
    }
}

fn draw_block(
    doc: &mut Document,
    cursor: &mut Cursor,
    ctx: &SectionContext<'_>,
    block: &ProjectBlock<'_>,
    x: f32,
    top: f32,
) -> Result<(), RenderError> {
    let page = page_mut(doc, cursor)?;
    let mut y = top;

    for (i, line) in block.title_lines.iter().enumerate() {
        if i > 0 {
            y -= LINE_HEIGHT;
        }
        draw_text(page, line, x, y, &TITLE_STYLE);
    }
    y -= PROJECT_TITLE_HEIGHT;

    for line in &block.summary {
        draw_text(page, line, x, y, &SUMMARY_STYLE);
        y -= LINE_HEIGHT;
    }

    for row in &block.meta {
        let mut meta_x = x;
        for (i, token) in row.iter().enumerate() {
            if i > 0 {
                draw_bullet(page, meta_x, y, META_STYLE.size, ACCENT);
                meta_x += BULLET_ADVANCE;
            }
            draw_text(page, token, meta_x, y, &META_STYLE);
            meta_x += META_STYLE.width_of(ctx.fonts, token);
        }
        y -= LINE_HEIGHT;
    }

    let mut link_x = x;
    for (i, (label, url)) in block.links.iter().enumerate() {
        if i > 0 {
            draw_bullet(page_mut(doc, cursor)?, link_x, y, LINK_STYLE.size, ACCENT);
            link_x += BULLET_ADVANCE;
        }
        draw_text(page_mut(doc, cursor)?, label, link_x, y, &LINK_STYLE);
        let width = LINK_STYLE.width_of(ctx.fonts, label);
        let link = register_link(doc, text_link_rect(link_x, y, width, LINK_STYLE.size), LinkUri::from(*url));
        cursor.push_annotation(link);
        link_x += width;
    }
    Ok(())
}
