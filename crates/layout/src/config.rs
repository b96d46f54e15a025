//! Fixed layout constants.
//!
//! Every value here feeds pagination directly, so changing one shifts page
//! breaks and breaks golden-file comparisons. The `*_BUDGET` heights are
//! deliberate overestimates of the block they guard, not measured heights.

use vita_types::Color;

/// A4 width in points.
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 height in points.
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 60.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// First writable baseline on a fresh page.
pub const TOP_Y: f32 = PAGE_HEIGHT - MARGIN;

pub const LINE_HEIGHT: f32 = 12.0;

pub const TITLE_SIZE: f32 = 20.0;
pub const SUBTITLE_SIZE: f32 = 12.0;
pub const BODY_SIZE: f32 = 10.0;
pub const SECONDARY_SIZE: f32 = 8.0;

pub const ACCENT: Color = Color::rgb(0.18, 0.55, 0.34);
pub const GRAY: Color = Color::rgb(0.35, 0.35, 0.35);
pub const LIGHT_GRAY: Color = Color::rgb(0.6, 0.6, 0.6);
pub const TEXT: Color = Color::BLACK;

/// Space reserved before a section header is drawn.
pub const SECTION_HEADER_BUDGET: f32 = 40.0;
/// Space reserved before an experience/education entry header.
pub const ENTRY_HEADER_BUDGET: f32 = 60.0;
/// Space reserved before a skill group title.
pub const SKILL_GROUP_BUDGET: f32 = 30.0;
/// Space reserved for the page header block (name + job title).
pub const HEADER_BUDGET: f32 = 60.0;

/// Title line + rule gap + line height + padding.
pub const SECTION_HEADER_HEIGHT: f32 = SUBTITLE_SIZE + RULE_GAP + LINE_HEIGHT + 2.0;
/// Distance from the section title baseline down to its underline rule.
pub const RULE_GAP: f32 = 4.0;
pub const RULE_WIDTH: f32 = 0.75;

pub const SECTION_GAP: f32 = 10.0;
pub const ENTRY_GAP: f32 = 8.0;

/// Horizontal distance consumed by an inline bullet, including its padding.
pub const BULLET_ADVANCE: f32 = 11.0;
pub const BULLET_RADIUS: f32 = 1.5;
pub const HIGHLIGHT_INDENT: f32 = 12.0;

/// Vertical slot of one entry in the languages grid.
pub const LANGUAGE_ROW_HEIGHT: f32 = 16.0;

pub const COLUMN_GAP: f32 = 15.0;
pub const COLUMN_WIDTH: f32 = (CONTENT_WIDTH - COLUMN_GAP) / 2.0;
pub const PROJECT_TITLE_HEIGHT: f32 = 14.0;
pub const PROJECT_GAP: f32 = 10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_area() {
        assert_eq!(CONTENT_WIDTH, 475.0);
        assert_eq!(TOP_Y, 782.0);
        assert_eq!(COLUMN_WIDTH, 230.0);
    }

    #[test]
    fn test_budgets_cover_their_blocks() {
        assert!(SECTION_HEADER_BUDGET >= SECTION_HEADER_HEIGHT);
        assert!(ENTRY_HEADER_BUDGET >= SUBTITLE_SIZE + 2.0 + 2.0 * LINE_HEIGHT);
    }
}
