//! Drawing primitives at absolute page coordinates.
//!
//! Primitives only append to a page's draw list. None of them moves a
//! [`crate::Cursor`]; callers account for the space they consume.

use crate::document::{AnnotationRef, Circle, Document, DrawOp, LineSegment, Page, TextRun};
use vita_layout::config::{
    ACCENT, BODY_SIZE, BULLET_ADVANCE, BULLET_RADIUS, CONTENT_WIDTH, LIGHT_GRAY, MARGIN, RULE_GAP,
    RULE_WIDTH, SECTION_HEADER_HEIGHT, SUBTITLE_SIZE,
};
use vita_layout::{FontId, FontSet};
use vita_types::{Color, LinkUri, Point, Rect};

/// Size, face and fill color of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub font: FontId,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32, font: FontId, color: Color) -> Self {
        Self { size, font, color }
    }

    pub const fn regular(size: f32, color: Color) -> Self {
        Self::new(size, FontId::Regular, color)
    }

    pub const fn bold(size: f32, color: Color) -> Self {
        Self::new(size, FontId::Bold, color)
    }

    pub fn width_of(&self, fonts: &FontSet, text: &str) -> f32 {
        vita_layout::width_of(text, fonts.get(self.font), self.size)
    }
}

pub fn draw_text(page: &mut Page, text: &str, x: f32, y: f32, style: &TextStyle) {
    page.push(DrawOp::Text(TextRun {
        text: text.to_string(),
        x,
        y,
        size: style.size,
        font: style.font,
        color: style.color,
    }));
}

pub fn draw_line(page: &mut Page, from: Point, to: Point, width: f32, color: Color) {
    page.push(DrawOp::Line(LineSegment { from, to, width, color }));
}

pub fn draw_circle(page: &mut Page, center: Point, radius: f32, color: Color) {
    page.push(DrawOp::Circle(Circle { center, radius, color }));
}

/// Draws a filled bullet in a slot of [`BULLET_ADVANCE`] starting at `x`,
/// vertically centred on the x-height of `size` text set at baseline `y`.
///
/// The bullet is a shape rather than a glyph so it can carry its own color
/// inside a run of differently colored text.
pub fn draw_bullet(page: &mut Page, x: f32, y: f32, size: f32, color: Color) {
    let radius = BULLET_RADIUS * size / BODY_SIZE;
    let center = Point::new(x + BULLET_ADVANCE / 2.0, y + size * 0.3);
    draw_circle(page, center, radius, color);
}

/// Splits on literal `" - "` and `"•"` separators, dropping blank segments.
pub fn bullet_segments(text: &str) -> Vec<&str> {
    text.split(" - ")
        .flat_map(|part| part.split('\u{2022}'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Draws `text` with every `" - "` / `"•"` separator replaced by a bullet
/// in `bullet_color`.
pub fn draw_bulleted_text(
    page: &mut Page,
    fonts: &FontSet,
    text: &str,
    x: f32,
    y: f32,
    style: &TextStyle,
    bullet_color: Color,
) {
    let mut pen_x = x;
    for (i, segment) in bullet_segments(text).into_iter().enumerate() {
        if i > 0 {
            draw_bullet(page, pen_x, y, style.size, bullet_color);
            pen_x += BULLET_ADVANCE;
        }
        draw_text(page, segment, pen_x, y, style);
        pen_x += style.width_of(fonts, segment);
    }
}

/// Rectangle covering a text run of `width` set at baseline `y`.
pub fn text_link_rect(x: f32, y: f32, width: f32, size: f32) -> Rect {
    Rect::new(x, y - size * 0.25, x + width, y + size * 0.9)
}

/// Registers a pending link annotation. The caller must push the returned
/// reference onto its cursor so it is sealed onto the right page.
pub fn register_link(doc: &mut Document, rect: Rect, uri: impl Into<LinkUri>) -> AnnotationRef {
    doc.register_link(rect, uri.into())
}

/// Draws a section title with an underline rule and returns the baseline
/// for the section body. The advance is the fixed
/// [`SECTION_HEADER_HEIGHT`], not a measured height.
pub fn render_section_header(page: &mut Page, title: &str, y: f32) -> f32 {
    draw_text(page, title, MARGIN, y, &TextStyle::bold(SUBTITLE_SIZE, ACCENT));
    let rule_y = y - RULE_GAP;
    draw_line(
        page,
        Point::new(MARGIN, rule_y),
        Point::new(MARGIN + CONTENT_WIDTH, rule_y),
        RULE_WIDTH,
        LIGHT_GRAY,
    );
    y - SECTION_HEADER_HEIGHT
}
