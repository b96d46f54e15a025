//! Runs the section renderers in document order over one fresh [`Document`].

use crate::config::SectionTitles;
use crate::sections::{SECTION_ORDER, SectionContext};
use vita_layout::FontSet;
use vita_render_core::{Cursor, Document, RenderError, finalize};
use vita_types::CvData;

/// A finished in-memory layout: every page sealed, nothing serialized yet.
#[derive(Debug, Clone)]
pub struct LaidOutCv {
    pub document: Document,
    /// Where the cursor stood after the last section. Its annotations have
    /// already been sealed onto the final page.
    pub final_cursor: Cursor,
}

/// Lays out `cv` on A4 pages.
///
/// The cursor returned by each section is handed unchanged to the next. A
/// section error aborts the build; no partial layout is returned.
pub fn assemble(cv: &CvData, fonts: &FontSet, titles: &SectionTitles) -> Result<LaidOutCv, RenderError> {
    let mut document = Document::a4();
    let first = document.add_page();
    let ctx = SectionContext { fonts, titles };

    let mut cursor = Cursor::top_of(&document, first);
    for section in SECTION_ORDER {
        let before = cursor.page;
        cursor = section.render(&mut document, cursor, cv, &ctx)?;
        log::debug!(
            "Section '{}' done: page {} -> {}, y={:.1}",
            section.name(),
            before.index() + 1,
            cursor.page.index() + 1,
            cursor.y
        );
    }

    let final_cursor = Cursor {
        page: cursor.page,
        y: cursor.y,
        annotations: Vec::new(),
    };
    finalize(&mut document, cursor)?;
    Ok(LaidOutCv {
        document,
        final_cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_layout::config::TOP_Y;
    use vita_types::{Education, PersonalInfo, Skills};

    fn layout(cv: &CvData) -> LaidOutCv {
        assemble(cv, &FontSet::standard(), &SectionTitles::default()).unwrap()
    }

    #[test]
    fn test_empty_cv_is_one_blank_page() {
        let laid_out = layout(&CvData::default());
        assert_eq!(laid_out.document.page_count(), 1);
        assert_eq!(laid_out.final_cursor.y, TOP_Y);
        assert!(laid_out.document.pages()[0].is_sealed());
    }

    #[test]
    fn test_every_page_is_sealed() {
        let cv = CvData {
            personal_info: Some(PersonalInfo {
                name: "Jane Doe".into(),
                email: Some("jane@example.com".into()),
                ..Default::default()
            }),
            skills: Some(Skills {
                frontend: vec!["Rust".into()],
                ..Default::default()
            }),
            education: vec![Education {
                degree: "BSc".into(),
                institution: "X Univ".into(),
                period: "2015-2019".into(),
                description: Some("See https://example.com/verify".into()),
            }],
            ..Default::default()
        };
        let laid_out = layout(&cv);
        let doc = &laid_out.document;
        assert_eq!(doc.page_count(), 2, "skills force a second page");
        assert!(doc.pages().iter().all(|p| p.is_sealed()));

        let pages: Vec<_> = doc.page_ids().collect();
        assert_eq!(doc.page_links(pages[0]).unwrap()[0].uri.as_str(), "mailto:jane@example.com");
        assert_eq!(doc.page_links(pages[1]).unwrap()[0].uri.as_str(), "https://example.com/verify");
        assert!(laid_out.final_cursor.annotations.is_empty());
    }
}
