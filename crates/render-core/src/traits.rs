use crate::document::{Document, LinkAnnotation, Page};
use crate::error::RenderError;
use lopdf::ObjectId;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    fn render_page_content(&mut self, page: &Page) -> Result<ObjectId, RenderError>;

    fn write_link_annotations(
        &mut self,
        links: &[&LinkAnnotation],
    ) -> Result<Vec<ObjectId>, RenderError>;

    fn write_page_object(
        &mut self,
        content_stream_ids: Vec<ObjectId>,
        annotations: Vec<ObjectId>,
        page_width: f32,
        page_height: f32,
    ) -> Result<ObjectId, RenderError>;

    fn finish(self: Box<Self>, page_ids: Vec<ObjectId>) -> Result<W, RenderError>;
}

/// Drives `renderer` over every page of a finished document.
///
/// Every page must already be sealed; an unsealed page means the layout pass
/// never completed and is reported instead of written.
pub fn write_document<W, R>(
    mut renderer: Box<R>,
    doc: &Document,
    writer: W,
) -> Result<W, RenderError>
where
    W: Write + Seek + Send,
    R: DocumentRenderer<W> + ?Sized,
{
    renderer.begin_document(writer)?;

    let mut page_ids = Vec::with_capacity(doc.page_count());
    for id in doc.page_ids() {
        let page = doc.page(id)?;
        if !page.is_sealed() {
            return Err(RenderError::Other(format!(
                "page {} was never sealed",
                id.index() + 1
            )));
        }
        let content_id = renderer.render_page_content(page)?;
        let annots = renderer.write_link_annotations(&doc.page_links(id)?)?;
        let page_id =
            renderer.write_page_object(vec![content_id], annots, doc.width(), doc.height())?;
        page_ids.push(page_id);
    }

    renderer.finish(page_ids)
}
