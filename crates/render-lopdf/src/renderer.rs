use crate::helpers;
use crate::writer::StreamingPdfWriter;
use lopdf::{Dictionary, Object, ObjectId, StringFormat, dictionary};
use std::io::{Seek, Write};
use vita_layout::{FontId, FontSet};
use vita_render_core::{DocumentRenderer, LinkAnnotation, Page, RenderError};

/// Values for the PDF `/Info` dictionary. Empty fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub producer: Option<String>,
}

impl PdfMetadata {
    fn to_dictionary(&self) -> Option<Dictionary> {
        let mut info = Dictionary::new();
        let entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Producer", &self.producer),
        ];
        for (key, value) in entries {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                info.set(
                    key,
                    Object::String(helpers::to_win_ansi(value), StringFormat::Literal),
                );
            }
        }
        (!info.is_empty()).then_some(info)
    }
}

/// A PDF renderer using the `lopdf` object model and a buffering writer.
///
/// Fonts are referenced, not embedded: each face of the [`FontSet`] becomes a
/// Type1 font resource named after its PostScript name.
pub struct LopdfRenderer<W: Write + Seek + Send> {
    writer: Option<StreamingPdfWriter<W>>,
    regular_font: String,
    bold_font: String,
    metadata: PdfMetadata,
}

impl<W: Write + Seek + Send> LopdfRenderer<W> {
    pub fn new(fonts: &FontSet, metadata: PdfMetadata) -> Self {
        Self {
            writer: None,
            regular_font: fonts.get(FontId::Regular).postscript_name().to_string(),
            bold_font: fonts.get(FontId::Bold).postscript_name().to_string(),
            metadata,
        }
    }

    fn writer_mut(&mut self) -> Result<&mut StreamingPdfWriter<W>, RenderError> {
        self.writer
            .as_mut()
            .ok_or_else(|| RenderError::Other("Document not started".into()))
    }

    fn font_dictionary(&self) -> Dictionary {
        let mut font_dict = Dictionary::new();
        for (font, base_font) in [
            (FontId::Regular, &self.regular_font),
            (FontId::Bold, &self.bold_font),
        ] {
            let single_font_dict = dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => Object::Name(base_font.as_bytes().to_vec()),
                "Encoding" => "WinAnsiEncoding",
            };
            font_dict.set(
                helpers::font_resource_name(font).as_bytes(),
                Object::Dictionary(single_font_dict),
            );
        }
        font_dict
    }
}

impl<W: Write + Seek + Send> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError> {
        let mut pdf_writer = StreamingPdfWriter::new(writer, "1.7", self.font_dictionary())?;
        if let Some(info) = self.metadata.to_dictionary() {
            pdf_writer.set_info(info);
        }
        self.writer = Some(pdf_writer);
        log::debug!(
            "Started PDF document (fonts: {}, {})",
            self.regular_font,
            self.bold_font
        );
        Ok(())
    }

    fn render_page_content(&mut self, page: &Page) -> Result<ObjectId, RenderError> {
        let content = helpers::render_page_to_content(page);
        let writer = self.writer_mut()?;
        Ok(writer.buffer_content_stream(content)?)
    }

    fn write_link_annotations(
        &mut self,
        links: &[&LinkAnnotation],
    ) -> Result<Vec<ObjectId>, RenderError> {
        let writer = self.writer_mut()?;
        Ok(links
            .iter()
            .map(|link| writer.buffer_object(helpers::link_annotation_dict(link).into()))
            .collect())
    }

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        annotations: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError> {
        let writer = self.writer_mut()?;

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => writer.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => Object::Array(content_stream_ids.into_iter().map(Object::Reference).collect()),
            "Resources" => writer.resources_id,
        };
        if !annotations.is_empty() {
            page_dict.set(
                "Annots",
                Object::Array(annotations.into_iter().map(Object::Reference).collect()),
            );
        }

        Ok(writer.buffer_object(page_dict.into()))
    }

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut internal_writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document not started or already finished".into()))?;
        log::debug!("Finishing PDF with {} page(s)", page_ids.len());
        internal_writer.set_page_ids(page_ids);
        Ok(internal_writer.finish()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vita_layout::config::BODY_SIZE;
    use vita_render_core::primitives::{TextStyle, draw_text, register_link, text_link_rect};
    use vita_render_core::{Document, write_document};
    use vita_types::{Color, LinkUri};

    fn render(doc: &Document, metadata: PdfMetadata) -> Vec<u8> {
        let renderer = Box::new(LopdfRenderer::new(&FontSet::standard(), metadata));
        write_document(renderer, doc, Cursor::new(Vec::new()))
            .unwrap()
            .into_inner()
    }

    fn two_page_document() -> Document {
        let mut doc = Document::a4();
        let first = doc.add_page();
        draw_text(
            doc.page_mut(first).unwrap(),
            "Jane Doe",
            60.0,
            782.0,
            &TextStyle::bold(20.0, Color::BLACK),
        );
        let link = register_link(
            &mut doc,
            text_link_rect(60.0, 760.0, 80.0, BODY_SIZE),
            LinkUri::mailto("jane@example.com"),
        );
        doc.seal_annotations(first, vec![link]).unwrap();
        let second = doc.add_page();
        doc.seal_annotations(second, vec![]).unwrap();
        doc
    }

    #[test]
    fn test_pages_and_annotations_are_written() {
        let bytes = render(&two_page_document(), PdfMetadata::default());
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let pages = pdf.get_pages();
        assert_eq!(pages.len(), 2);

        let first = pdf.get_dictionary(pages[&1]).unwrap();
        let annots = first.get(b"Annots").unwrap().as_array().unwrap();
        assert_eq!(annots.len(), 1);
        let second = pdf.get_dictionary(pages[&2]).unwrap();
        assert!(second.get(b"Annots").is_err());
    }

    #[test]
    fn test_font_resources_reference_postscript_names() {
        let bytes = render(&two_page_document(), PdfMetadata::default());
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let resources = pdf.get_dictionary((1, 0)).unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        let bold = fonts.get(b"F2").unwrap().as_dict().unwrap();
        assert_eq!(bold.get(b"BaseFont").unwrap().as_name().unwrap(), b"Helvetica-Bold");
        assert_eq!(bold.get(b"Encoding").unwrap().as_name().unwrap(), b"WinAnsiEncoding");
    }

    #[test]
    fn test_metadata_skips_blank_fields() {
        let metadata = PdfMetadata {
            title: Some("Jane Doe - CV".into()),
            author: Some("  ".into()),
            subject: None,
            producer: Some("vita".into()),
        };
        let bytes = render(&two_page_document(), metadata);
        let pdf = lopdf::Document::load_mem(&bytes).unwrap();
        let info_id = pdf.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = pdf.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Jane Doe - CV");
        assert!(info.get(b"Author").is_err());
        assert_eq!(info.get(b"Producer").unwrap().as_str().unwrap(), b"vita");
    }

    #[test]
    fn test_output_is_deterministic() {
        let doc = two_page_document();
        assert_eq!(render(&doc, PdfMetadata::default()), render(&doc, PdfMetadata::default()));
    }

    #[test]
    fn test_unsealed_page_is_rejected() {
        let mut doc = Document::a4();
        doc.add_page();
        let renderer = Box::new(LopdfRenderer::new(&FontSet::standard(), PdfMetadata::default()));
        assert!(write_document(renderer, &doc, Cursor::new(Vec::new())).is_err());
    }
}
