//! Render configuration: section titles, document metadata and font files.
//!
//! Layout constants are not configurable and live in
//! [`vita_layout::config`]. Everything here has a default, so an empty JSON
//! object is a valid configuration.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use vita_layout::FontSet;
use vita_render_lopdf::PdfMetadata;
use vita_types::CvData;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    pub section_titles: SectionTitles,
    pub metadata: DocumentMetadata,
    pub fonts: FontPaths,
}

impl RenderConfig {
    pub fn from_json_str(source: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&source)
    }
}

/// Headings drawn above each section and each skill group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionTitles {
    pub highlights: String,
    pub experience: String,
    pub skills: String,
    pub technologies: String,
    pub tools: String,
    pub methodologies: String,
    pub education: String,
    pub languages: String,
    pub projects: String,
}

impl Default for SectionTitles {
    fn default() -> Self {
        Self {
            highlights: "Highlights".into(),
            experience: "Work Experience".into(),
            skills: "Technical Skills".into(),
            technologies: "Technologies".into(),
            tools: "Tools".into(),
            methodologies: "Methodologies".into(),
            education: "Education".into(),
            languages: "Languages".into(),
            projects: "Featured Projects".into(),
        }
    }
}

/// Values written to the PDF Info dictionary.
///
/// When `title` or `author` are unset they are derived from the CV owner's
/// name. No timestamps are ever written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub producer: String,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            producer: "vita".into(),
        }
    }
}

impl DocumentMetadata {
    pub fn resolve(&self, cv: &CvData) -> PdfMetadata {
        let name = cv
            .personal_info
            .as_ref()
            .map(|info| info.name.trim())
            .filter(|name| !name.is_empty());

        PdfMetadata {
            title: self
                .title
                .clone()
                .or_else(|| name.map(|n| format!("{} - CV", n))),
            author: self.author.clone().or_else(|| name.map(str::to_string)),
            subject: self.subject.clone(),
            producer: Some(self.producer.clone()),
        }
    }
}

/// Optional TrueType files for the regular and bold faces. Either both are
/// set or neither is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPaths {
    pub regular: Option<PathBuf>,
    pub bold: Option<PathBuf>,
}

impl FontPaths {
    pub fn load(&self) -> Result<FontSet, PipelineError> {
        match (&self.regular, &self.bold) {
            (None, None) => Ok(FontSet::standard()),
            (Some(regular), Some(bold)) => {
                log::info!(
                    "Loading fonts from '{}' and '{}'",
                    regular.display(),
                    bold.display()
                );
                Ok(FontSet::from_files(regular, bold)?)
            }
            _ => Err(PipelineError::Config(
                "both `fonts.regular` and `fonts.bold` must be set to use custom fonts".into(),
            )),
        }
    }
}
