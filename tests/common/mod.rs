pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use serde_json::Value;
use std::path::PathBuf;
use vita::{CvData, CvPipelineBuilder, PipelineError, RenderConfig, parse_cv_json};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based)
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Path of the sample snapshot shipped with the crate
pub fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/cv_data.json")
}

pub fn load_sample() -> Result<CvData, PipelineError> {
    vita::load_cv_file(sample_path())
}

/// Generate a PDF with the default configuration
pub fn generate_pdf(cv: &CvData) -> Result<GeneratedPdf, PipelineError> {
    generate_pdf_with_config(cv, RenderConfig::default())
}

pub fn generate_pdf_with_config(
    cv: &CvData,
    config: RenderConfig,
) -> Result<GeneratedPdf, PipelineError> {
    let pipeline = CvPipelineBuilder::new().with_config(config).build()?;
    let rendered = pipeline.generate(cv)?;
    GeneratedPdf::from_bytes(rendered.bytes).map_err(|e| PipelineError::Config(e.to_string()))
}

/// Generate a PDF from a JSON snapshot
pub fn generate_pdf_from_json(data: Value) -> Result<GeneratedPdf, PipelineError> {
    let cv = parse_cv_json(&serde_json::to_string(&data)?)?;
    generate_pdf(&cv)
}
