//! Two-column placement shared by the languages and projects sections.

use vita_layout::config::{COLUMN_GAP, COLUMN_WIDTH, MARGIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    Left,
    Right,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Column::Left => Column::Right,
            Column::Right => Column::Left,
        }
    }

    pub fn x(self) -> f32 {
        match self {
            Column::Left => MARGIN,
            Column::Right => MARGIN + COLUMN_WIDTH + COLUMN_GAP,
        }
    }
}

/// Baselines of the next slot in each column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Columns {
    left_y: f32,
    right_y: f32,
    bottom: f32,
}

impl Columns {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self {
            left_y: top,
            right_y: top,
            bottom,
        }
    }

    pub fn y(&self, column: Column) -> f32 {
        match column {
            Column::Left => self.left_y,
            Column::Right => self.right_y,
        }
    }

    pub fn fits(&self, column: Column, height: f32) -> bool {
        self.y(column) - height >= self.bottom
    }

    /// `preferred` if a block of `height` fits there, otherwise the other
    /// column if it fits there. `None` means a page break is needed.
    pub fn choose(&self, preferred: Column, height: f32) -> Option<Column> {
        [preferred, preferred.other()]
            .into_iter()
            .find(|column| self.fits(*column, height))
    }

    /// The column whose next slot is higher on the page, left on ties.
    pub fn higher(&self) -> Column {
        if self.left_y >= self.right_y {
            Column::Left
        } else {
            Column::Right
        }
    }

    pub fn advance(&mut self, column: Column, height: f32) {
        match column {
            Column::Left => self.left_y -= height,
            Column::Right => self.right_y -= height,
        }
    }

    /// Both columns back to `top`, after a page break.
    pub fn reset(&mut self, top: f32) {
        self.left_y = top;
        self.right_y = top;
    }

    /// Where content below the columns may start.
    pub fn lowest(&self) -> f32 {
        self.left_y.min(self.right_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_falls_back_to_other_column() {
        let mut columns = Columns::new(700.0, 60.0);
        columns.advance(Column::Left, 630.0);
        assert_eq!(columns.choose(Column::Left, 16.0), Some(Column::Right));
        assert_eq!(columns.choose(Column::Right, 16.0), Some(Column::Right));

        columns.advance(Column::Right, 630.0);
        assert_eq!(columns.choose(Column::Left, 16.0), None);
    }

    #[test]
    fn test_higher_prefers_left_on_ties() {
        let mut columns = Columns::new(700.0, 60.0);
        assert_eq!(columns.higher(), Column::Left);
        columns.advance(Column::Left, 40.0);
        assert_eq!(columns.higher(), Column::Right);
        columns.advance(Column::Right, 40.0);
        assert_eq!(columns.higher(), Column::Left);
        assert_eq!(columns.lowest(), 660.0);
    }

    #[test]
    fn test_right_column_starts_after_gap() {
        assert_eq!(Column::Right.x() - Column::Left.x(), COLUMN_WIDTH + COLUMN_GAP);
    }
}
