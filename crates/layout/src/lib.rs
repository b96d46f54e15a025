use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid font data: {0}")]
    InvalidFont(String),
    #[error("Failed to load font '{path}': {message}")]
    FontLoad { path: String, message: String },
}

pub mod config;
pub mod fonts;
pub mod text;

pub use self::fonts::{FontId, FontMetrics, FontSet, ShapedFont, StandardFont};
pub use self::text::{pack_tokens, width_of, wrap};

// Re-export foundation types used alongside layout values
pub use vita_types::{Color, Point, Rect};
