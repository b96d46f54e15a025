//! Core rendering abstractions for the CV engine.
//!
//! This crate provides:
//! - The page model (`Document`, `Page`, draw operations, link annotations)
//! - The write `Cursor` and the page-break policy (`ensure_space`)
//! - Drawing primitives shared by all section renderers
//! - The `DocumentRenderer` trait implemented by PDF backends

mod cursor;
mod document;
mod error;
pub mod primitives;
mod traits;

pub use cursor::{Cursor, collapse_gap, ensure_space, finalize, start_new_page};
pub use document::{
    AnnotationRef, Circle, Document, DrawOp, LineSegment, LinkAnnotation, Page, PageId, TextRun,
};
pub use error::RenderError;
pub use primitives::TextStyle;
pub use traits::{DocumentRenderer, write_document};
