//! Font metrics for measurement.
//!
//! The engine never embeds fonts; it only needs advance widths to place text
//! and the PostScript name the PDF writer references. Two sources exist:
//!
//! - [`StandardFont`]: the built-in Helvetica metrics. Deterministic and file-free,
//!   which is what golden-file tests rely on.
//! - [`ShapedFont`]: a caller-supplied TrueType face, measured by shaping with
//!   rustybuzz so kerning is taken into account.

use crate::LayoutError;
use crate::text::shaper;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Advance widths in 1/1000 em for a font face.
pub trait FontMetrics: Send + Sync + Debug {
    /// Name written as `/BaseFont` in the PDF font resource.
    fn postscript_name(&self) -> &str;

    /// Advance width of a single character in 1/1000 em.
    fn advance(&self, ch: char) -> f32;

    /// Width of `text` in points at `size`.
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: f32 = text.chars().map(|c| self.advance(c)).sum();
        units * size / 1000.0
    }
}

/// Which face of a [`FontSet`] a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    Regular,
    Bold,
}

/// The regular/bold pair every section renderer draws with.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub regular: Arc<dyn FontMetrics>,
    pub bold: Arc<dyn FontMetrics>,
}

impl FontSet {
    pub fn new(regular: Arc<dyn FontMetrics>, bold: Arc<dyn FontMetrics>) -> Self {
        Self { regular, bold }
    }

    /// Helvetica and Helvetica-Bold.
    pub fn standard() -> Self {
        Self::new(Arc::new(StandardFont::Helvetica), Arc::new(StandardFont::HelveticaBold))
    }

    /// Loads both faces from TrueType files on disk.
    pub fn from_files<P: AsRef<Path>>(regular: P, bold: P) -> Result<Self, LayoutError> {
        Ok(Self::new(
            Arc::new(ShapedFont::from_file(regular)?),
            Arc::new(ShapedFont::from_file(bold)?),
        ))
    }

    pub fn get(&self, id: FontId) -> &dyn FontMetrics {
        match id {
            FontId::Regular => self.regular.as_ref(),
            FontId::Bold => self.bold.as_ref(),
        }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Standard Type1 faces with their AFM advance widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

/// Width used for characters outside the tables.
const DEFAULT_ADVANCE: f32 = 556.0;

static HELVETICA_WIDTHS: Lazy<HashMap<char, f32>> = Lazy::new(|| {
    build_widths(
        " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        &[
            278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 278,
            278, 584, 584, 584, 556, 1015, 278, 278, 278, 469, 556, 333, 334, 260, 334, 584,
        ],
        &[
            667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778,
            722, 667, 611, 722, 667, 944, 667, 667, 611,
        ],
        &[
            556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556,
            333, 500, 278, 556, 500, 722, 500, 500, 500,
        ],
    )
});

static HELVETICA_BOLD_WIDTHS: Lazy<HashMap<char, f32>> = Lazy::new(|| {
    build_widths(
        " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        &[
            278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, 333,
            333, 584, 584, 584, 611, 975, 333, 278, 333, 584, 556, 333, 389, 280, 389, 584,
        ],
        &[
            722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778,
            722, 667, 611, 722, 667, 944, 667, 667, 611,
        ],
        &[
            556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611,
            389, 556, 333, 611, 556, 778, 556, 556, 500,
        ],
    )
});

fn build_widths(punct: &str, punct_w: &[u16], upper_w: &[u16], lower_w: &[u16]) -> HashMap<char, f32> {
    let mut widths = HashMap::with_capacity(128);
    for (ch, w) in punct.chars().zip(punct_w) {
        widths.insert(ch, *w as f32);
    }
    for (ch, w) in ('A'..='Z').zip(upper_w) {
        widths.insert(ch, *w as f32);
    }
    for (ch, w) in ('a'..='z').zip(lower_w) {
        widths.insert(ch, *w as f32);
    }
    for digit in '0'..='9' {
        widths.insert(digit, 556.0);
    }
    widths.insert('\u{2022}', 350.0);
    widths.insert('\u{2013}', 556.0);
    widths.insert('\u{2014}', 1000.0);
    widths
}

impl FontMetrics for StandardFont {
    fn postscript_name(&self) -> &str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn advance(&self, ch: char) -> f32 {
        let table = match self {
            StandardFont::Helvetica => &*HELVETICA_WIDTHS,
            StandardFont::HelveticaBold => &*HELVETICA_BOLD_WIDTHS,
        };
        table.get(&ch).copied().unwrap_or(DEFAULT_ADVANCE)
    }
}

/// A TrueType face supplied by the caller.
///
/// Advances and measured widths are memoized per face.
pub struct ShapedFont {
    data: Arc<Vec<u8>>,
    postscript_name: String,
    units_per_em: f32,
    advances: RwLock<HashMap<char, f32>>,
    measurements: RwLock<HashMap<(String, u32), f32>>,
}

impl Debug for ShapedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedFont")
            .field("postscript_name", &self.postscript_name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl ShapedFont {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, LayoutError> {
        let face = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| LayoutError::InvalidFont(e.to_string()))?;
        let units_per_em = face.units_per_em() as f32;
        let postscript_name = extract_postscript_name(&face)
            .ok_or_else(|| LayoutError::InvalidFont("font has no usable name record".into()))?;
        log::debug!("Loaded font '{}' ({} bytes)", postscript_name, data.len());
        Ok(Self {
            data: Arc::new(data),
            postscript_name,
            units_per_em,
            advances: RwLock::new(HashMap::new()),
            measurements: RwLock::new(HashMap::new()),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| LayoutError::FontLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(data)
    }

    fn as_face(&self) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(&self.data, 0)
    }

    fn face_advance(&self, face: Option<&rustybuzz::Face<'_>>, ch: char) -> f32 {
        face.and_then(|face| face.glyph_index(ch).and_then(|gid| face.glyph_hor_advance(gid)))
            .map(|adv| adv as f32 * 1000.0 / self.units_per_em)
            .unwrap_or(DEFAULT_ADVANCE)
    }

    #[cfg(test)]
    fn cached_measurements(&self) -> usize {
        self.measurements.read().map(|m| m.len()).unwrap_or(0)
    }
}

impl FontMetrics for ShapedFont {
    fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    fn advance(&self, ch: char) -> f32 {
        if let Some(adv) = self.advances.read().ok().and_then(|a| a.get(&ch).copied()) {
            return adv;
        }
        let adv = self.face_advance(self.as_face().as_ref(), ch);
        if let Ok(mut advances) = self.advances.write() {
            advances.insert(ch, adv);
        }
        adv
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        let key = (text.to_string(), size.to_bits());
        if let Some(width) = self.measurements.read().ok().and_then(|m| m.get(&key).copied()) {
            return width;
        }
        let face = self.as_face();
        let width = match &face {
            Some(face) => shaper::shaped_width(face, text, size),
            None => text.chars().map(|c| self.face_advance(None, c)).sum::<f32>() * size / 1000.0,
        };
        if let Ok(mut measurements) = self.measurements.write() {
            measurements.insert(key, width);
        }
        width
    }
}

/// PostScript name (ID 6), then full name (ID 4), then family (ID 1), with
/// spaces removed from the fallbacks.
fn extract_postscript_name(face: &ttf_parser::Face<'_>) -> Option<String> {
    let find = |id: u16| {
        face.names()
            .into_iter()
            .find(|n| n.name_id == id)
            .and_then(|n| n.to_string())
    };

    if let Some(ps_name) = find(ttf_parser::name_id::POST_SCRIPT_NAME) {
        return Some(ps_name);
    }
    if let Some(full_name) = find(ttf_parser::name_id::FULL_NAME) {
        log::debug!("Using full name as PostScript name: {}", full_name);
        return Some(full_name.replace(' ', ""));
    }
    find(ttf_parser::name_id::FAMILY).map(|family| family.replace(' ', ""))
}
