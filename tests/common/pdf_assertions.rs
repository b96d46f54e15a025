#![allow(dead_code)]

use lopdf::{Dictionary, Document as LopdfDocument, Object};
use std::collections::BTreeSet;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

fn resolve_dict<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        other => other.as_dict().ok(),
    }
}

fn resolve_array<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Option<&'a Vec<Object>> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_array().ok(),
        other => other.as_array().ok(),
    }
}

/// Base font names referenced from any page's resources
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Some(resources) = page.get(b"Resources").ok().and_then(|r| resolve_dict(doc, r)) else {
            continue;
        };
        let Some(font_dict) = resources.get(b"Font").ok().and_then(|f| resolve_dict(doc, f)) else {
            continue;
        };
        for (_, font) in font_dict.iter() {
            if let Some(name) = resolve_dict(doc, font)
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|n| n.as_name().ok())
            {
                fonts.insert(String::from_utf8_lossy(name).to_string());
            }
        }
    }
    fonts.into_iter().collect()
}

/// Information about a link annotation
#[derive(Debug)]
pub struct LinkAnnotation {
    pub page: u32,
    pub rect: Option<[f32; 4]>,
    pub uri: String,
}

/// Extract URI link annotations from every page, in page then annotation order
pub fn extract_link_annotations(doc: &LopdfDocument) -> Vec<LinkAnnotation> {
    let mut annotations = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let Ok(page) = doc.get_dictionary(page_id) else {
            continue;
        };
        let Some(annots) = page.get(b"Annots").ok().and_then(|a| resolve_array(doc, a)) else {
            continue;
        };
        for annot in annots {
            let Some(annot) = resolve_dict(doc, annot) else {
                continue;
            };
            let is_link = annot
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .is_ok_and(|s| s == b"Link");
            if !is_link {
                continue;
            }
            let uri = annot
                .get(b"A")
                .ok()
                .and_then(|a| resolve_dict(doc, a))
                .and_then(|a| a.get(b"URI").ok())
                .and_then(|u| u.as_str().ok())
                .map(|u| String::from_utf8_lossy(u).to_string())
                .unwrap_or_default();
            let rect = annot.get(b"Rect").ok().and_then(|r| r.as_array().ok()).and_then(|arr| {
                if arr.len() < 4 {
                    return None;
                }
                Some([
                    arr[0].as_float().unwrap_or(0.0),
                    arr[1].as_float().unwrap_or(0.0),
                    arr[2].as_float().unwrap_or(0.0),
                    arr[3].as_float().unwrap_or(0.0),
                ])
            });
            annotations.push(LinkAnnotation {
                page: page_num,
                rect,
                uri,
            });
        }
    }
    annotations
}

pub fn extract_link_uris(doc: &LopdfDocument) -> Vec<String> {
    extract_link_annotations(doc).into_iter().map(|a| a.uri).collect()
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Assertion macros
// ============================================================================

/// Fails unless the extracted text of any page contains `$text`
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let text = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(text.contains($text), "missing {:?} in extracted text:\n{}", $text, text);
    };
}

/// Fails if the extracted text of any page contains `$text`
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let text = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(!text.contains($text), "unexpected {:?} in extracted text:\n{}", $text, text);
    };
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        let pages = $pdf.page_count();
        assert_eq!(pages, $count, "page count");
    };
}

#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        let pages = $pdf.page_count();
        assert!(pages >= $min, "expected {} or more pages, found {}", $min, pages);
    };
}

/// Fails unless some page resource names a base font containing `$pattern`
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(fonts.iter().any(|f| f.contains($pattern)), "no font like {:?} in {:?}", $pattern, fonts);
    };
}

/// Fails unless a link annotation on any page targets exactly `$uri`
#[macro_export]
macro_rules! assert_pdf_links_to {
    ($pdf:expr, $uri:expr) => {
        let uris = $crate::common::pdf_assertions::extract_link_uris(&$pdf.doc);
        assert!(uris.iter().any(|u| u == $uri), "no link to {:?} in {:?}", $uri, uris);
    };
}
