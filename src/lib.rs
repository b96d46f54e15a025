//! vita: paginated, two-column, hyperlinked PDF CVs from structured CV data.
//!
//! ```no_run
//! use vita::{CvPipelineBuilder, load_cv_file};
//!
//! # fn main() -> Result<(), vita::PipelineError> {
//! let cv = load_cv_file("data/cv_data.json")?;
//! let pipeline = CvPipelineBuilder::new().build()?;
//! let rendered = pipeline.generate_to_file(&cv, "cv.pdf")?;
//! println!("{} pages", rendered.page_count);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sections;

pub use assembler::{LaidOutCv, assemble};
pub use config::{DocumentMetadata, FontPaths, RenderConfig, SectionTitles};
pub use error::PipelineError;
pub use pipeline::{CvPipeline, CvPipelineBuilder, RenderedCv, load_cv_file, parse_cv_json};

pub use vita_layout::{FontSet, ShapedFont, StandardFont};
pub use vita_types::CvData;
