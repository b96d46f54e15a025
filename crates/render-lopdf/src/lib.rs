//! PDF backend for vita documents built on lopdf.
//!
//! Pages are translated into content streams, link annotations into `/URI`
//! actions, and everything is buffered and written with a single
//! cross-reference table.

mod helpers;
mod renderer;
mod writer;

pub use helpers::{font_resource_name, link_annotation_dict, render_page_to_content, to_win_ansi};
pub use renderer::{LopdfRenderer, PdfMetadata};
pub use writer::StreamingPdfWriter;
