//! The in-memory page model.
//!
//! A [`Document`] is an ordered list of [`Page`]s plus an arena of pending
//! [`LinkAnnotation`]s. Pages only collect draw operations; turning them into
//! bytes is the job of a [`crate::DocumentRenderer`].

use crate::error::RenderError;
use vita_layout::FontId;
use vita_layout::config::{MARGIN, PAGE_HEIGHT, PAGE_WIDTH};
use vita_types::{Color, LinkUri, Point, Rect};

/// Position of a page in its document's page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

impl PageId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Handle to a link annotation registered with a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotationRef(usize);

impl AnnotationRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Left edge of the run.
    pub x: f32,
    /// Baseline.
    pub y: f32,
    pub size: f32,
    pub font: FontId,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Line(LineSegment),
    Circle(Circle),
}

impl DrawOp {
    /// The lowest y coordinate the operation touches.
    pub fn min_y(&self) -> f32 {
        match self {
            DrawOp::Text(t) => t.y,
            DrawOp::Line(l) => l.from.y.min(l.to.y),
            DrawOp::Circle(c) => c.center.y - c.radius,
        }
    }
}

/// A clickable rectangle bound to a URI.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    pub rect: Rect,
    pub uri: LinkUri,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    ops: Vec<DrawOp>,
    sealed: Option<Vec<AnnotationRef>>,
}

impl Page {
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed.is_some()
    }

    /// Annotations attached to this page once sealed; empty before.
    pub fn annotations(&self) -> &[AnnotationRef] {
        self.sealed.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    width: f32,
    height: f32,
    margin: f32,
    pages: Vec<Page>,
    links: Vec<LinkAnnotation>,
}

impl Default for Document {
    fn default() -> Self {
        Self::a4()
    }
}

impl Document {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
            pages: Vec::new(),
            links: Vec::new(),
        }
    }

    /// A4 portrait with the standard margin.
    pub fn a4() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT, MARGIN)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn add_page(&mut self) -> PageId {
        self.pages.push(Page::default());
        let id = PageId(self.pages.len() - 1);
        log::debug!("Allocated page {}", id.0 + 1);
        id
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, id: PageId) -> Result<&Page, RenderError> {
        self.pages.get(id.0).ok_or(RenderError::PageOutOfRange(id.0))
    }

    pub fn page_mut(&mut self, id: PageId) -> Result<&mut Page, RenderError> {
        self.pages.get_mut(id.0).ok_or(RenderError::PageOutOfRange(id.0))
    }

    /// Creates a pending link annotation. It belongs to no page until the
    /// reference is sealed onto one with [`Document::seal_annotations`].
    pub fn register_link(&mut self, rect: Rect, uri: LinkUri) -> AnnotationRef {
        self.links.push(LinkAnnotation { rect, uri });
        AnnotationRef(self.links.len() - 1)
    }

    pub fn link(&self, annotation: AnnotationRef) -> Option<&LinkAnnotation> {
        self.links.get(annotation.0)
    }

    /// Writes the annotation list of `page`. A page is sealed exactly once.
    pub fn seal_annotations(
        &mut self,
        page: PageId,
        annotations: Vec<AnnotationRef>,
    ) -> Result<(), RenderError> {
        if let Some(bad) = annotations.iter().find(|a| a.0 >= self.links.len()) {
            return Err(RenderError::UnknownAnnotation(bad.0));
        }
        let target = self.page_mut(page)?;
        if target.sealed.is_some() {
            return Err(RenderError::AnnotationsSealed(page.0));
        }
        log::debug!("Sealing {} annotation(s) onto page {}", annotations.len(), page.0 + 1);
        target.sealed = Some(annotations);
        Ok(())
    }

    /// Link annotations sealed onto `page`, in registration order.
    pub fn page_links(&self, page: PageId) -> Result<Vec<&LinkAnnotation>, RenderError> {
        self.page(page)?
            .annotations()
            .iter()
            .map(|a| self.link(*a).ok_or(RenderError::UnknownAnnotation(a.0)))
            .collect()
    }

    pub fn page_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        (0..self.pages.len()).map(PageId)
    }
}
