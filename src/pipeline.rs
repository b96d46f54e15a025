//! The end-to-end CV pipeline: layout followed by PDF serialization.

use crate::assembler::{LaidOutCv, assemble};
use crate::config::{DocumentMetadata, RenderConfig, SectionTitles};
use crate::error::PipelineError;
use std::fs;
use std::io::{self, BufWriter, Cursor, Seek, Write};
use std::path::Path;
use vita_layout::FontSet;
use vita_render_core::write_document;
use vita_render_lopdf::LopdfRenderer;
use vita_types::CvData;

/// Bytes of a finished CV plus the layout facts golden-file tests check.
#[derive(Debug, Clone)]
pub struct RenderedCv {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Baseline the cursor ended on, on the last page.
    pub final_y: f32,
}

/// A builder for creating a [`CvPipeline`].
#[derive(Default)]
pub struct CvPipelineBuilder {
    config: RenderConfig,
    fonts: Option<FontSet>,
}

impl CvPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads a JSON [`RenderConfig`] from disk.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = RenderConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_section_titles(mut self, titles: SectionTitles) -> Self {
        self.config.section_titles = titles;
        self
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.config.metadata = metadata;
        self
    }

    /// Uses an already loaded font pair. Takes precedence over font paths in
    /// the configuration.
    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Resolves fonts and freezes the configuration.
    pub fn build(self) -> Result<CvPipeline, PipelineError> {
        let fonts = match self.fonts {
            Some(fonts) => fonts,
            None => self.config.fonts.load()?,
        };
        log::debug!(
            "Pipeline fonts: {} / {}",
            fonts.regular.postscript_name(),
            fonts.bold.postscript_name()
        );
        Ok(CvPipeline {
            fonts,
            titles: self.config.section_titles,
            metadata: self.config.metadata,
        })
    }
}

/// Turns [`CvData`] snapshots into PDF documents. One pipeline can render any
/// number of CVs; every build gets its own document.
#[derive(Debug, Clone)]
pub struct CvPipeline {
    fonts: FontSet,
    titles: SectionTitles,
    metadata: DocumentMetadata,
}

impl CvPipeline {
    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Runs the layout pass only.
    pub fn layout(&self, cv: &CvData) -> Result<LaidOutCv, PipelineError> {
        Ok(assemble(cv, &self.fonts, &self.titles)?)
    }

    /// Lays out `cv` and writes the PDF into `writer`.
    pub fn generate_to_writer<W: Write + Seek + Send>(
        &self,
        cv: &CvData,
        writer: W,
    ) -> Result<(W, LaidOutCv), PipelineError> {
        let laid_out = self.layout(cv)?;
        let renderer = Box::new(LopdfRenderer::new(&self.fonts, self.metadata.resolve(cv)));
        let writer = write_document(renderer, &laid_out.document, writer)?;
        log::info!(
            "Rendered CV: {} page(s), final y={:.1}",
            laid_out.document.page_count(),
            laid_out.final_cursor.y
        );
        Ok((writer, laid_out))
    }

    pub fn generate(&self, cv: &CvData) -> Result<RenderedCv, PipelineError> {
        let (buffer, laid_out) = self.generate_to_writer(cv, Cursor::new(Vec::new()))?;
        Ok(RenderedCv {
            bytes: buffer.into_inner(),
            page_count: laid_out.document.page_count(),
            final_y: laid_out.final_cursor.y,
        })
    }

    /// Renders straight into a file. The file is only created once layout has
    /// succeeded, so a failed build leaves nothing behind.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        cv: &CvData,
        path: P,
    ) -> Result<RenderedCv, PipelineError> {
        let path = path.as_ref();
        let rendered = self.generate(cv)?;
        let file = fs::File::create(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create '{}': {}", path.display(), e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&rendered.bytes)?;
        writer.flush()?;
        log::info!("Wrote {} bytes to {}", rendered.bytes.len(), path.display());
        Ok(rendered)
    }
}

/// Parses a CV snapshot. Missing required fields are reported here, before
/// any layout happens.
pub fn parse_cv_json(source: &str) -> Result<CvData, PipelineError> {
    Ok(serde_json::from_str(source)?)
}

pub fn load_cv_file<P: AsRef<Path>>(path: P) -> Result<CvData, PipelineError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        PipelineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read CV data from '{}': {}", path.display(), e),
        ))
    })?;
    parse_cv_json(&source)
}
