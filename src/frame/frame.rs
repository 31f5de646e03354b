//! Frame: an immutable rectangular raster of glyph cells.
//!
//! Frames are the atomic animation asset. They are validated once at
//! construction and never mutated afterwards; animations hold shared
//! [`Arc<Frame>`] handles and swap which frame an entity points at.

use super::cell::{Cell, Color};
use crate::error::ConfigError;
use std::sync::Arc;
use unicode_width::UnicodeWidthChar;

/// An immutable 2-D raster of colored glyph cells.
///
/// Cells are stored in row-major order. All rows have equal length; width is
/// the length of row 0 and height is the number of rows. Both are at least 1.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: usize,
    /// Height in rows.
    height: usize,
}

impl Frame {
    /// Build a frame from rows of cells.
    ///
    /// # Errors
    ///
    /// Fails if the rows are ragged, the raster is empty, or any glyph is
    /// not a single-column printable character.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyFrame);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ConfigError::RaggedFrame {
                    row: row_idx,
                    len: row.len(),
                    expected: width,
                });
            }
            for cell in row {
                validate_glyph(cell.ch)?;
                cells.push(cell);
            }
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a frame from string art with uniform colors.
    ///
    /// Each line becomes one row; short lines are padded with blank cells to
    /// the width of the longest line, so hand-written art does not need
    /// trailing spaces. Space characters stay transparent when composited.
    ///
    /// # Errors
    ///
    /// Fails if there are no lines, all lines are empty, or a character is
    /// not a single-column printable glyph.
    pub fn from_lines<'a, I>(lines: I, fg: Color, bg: Color) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let lines: Vec<&str> = lines.into_iter().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if lines.is_empty() || width == 0 {
            return Err(ConfigError::EmptyFrame);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        for line in &lines {
            let mut count = 0;
            for ch in line.chars() {
                validate_glyph(ch)?;
                cells.push(Cell { ch, fg, bg });
                count += 1;
            }
            for _ in count..width {
                cells.push(Cell::BLANK);
            }
        }

        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    /// Build a frame filled with one repeated cell.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero or the glyph is invalid.
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyFrame);
        }
        validate_glyph(cell.ch)?;
        Ok(Self {
            cells: vec![cell; width * height],
            width,
            height,
        })
    }

    /// Wrap this frame for sharing between animations and entities.
    #[inline]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Width in columns (length of row 0).
    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at (x, y).
    ///
    /// Returns `None` if the coordinates fall outside the raster.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// A glyph must occupy exactly one column and be printable.
fn validate_glyph(ch: char) -> Result<(), ConfigError> {
    if UnicodeWidthChar::width(ch) == Some(1) {
        Ok(())
    } else {
        Err(ConfigError::BadGlyph(ch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_from_rows() {
        let frame = Frame::from_rows(vec![
            vec![Cell::new('A'), Cell::new('B')],
            vec![Cell::new('C'), Cell::new('D')],
        ])
        .unwrap();

        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.get(1, 0).unwrap().ch, 'B');
        assert_eq!(frame.get(0, 1).unwrap().ch, 'C');
        assert!(frame.get(2, 0).is_none());
    }

    #[test]
    fn test_frame_rejects_ragged_rows() {
        let result = Frame::from_rows(vec![
            vec![Cell::new('A'), Cell::new('B')],
            vec![Cell::new('C')],
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::RaggedFrame {
                row: 1,
                len: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_frame_rejects_empty() {
        assert!(matches!(
            Frame::from_rows(vec![]),
            Err(ConfigError::EmptyFrame)
        ));
        assert!(matches!(
            Frame::from_rows(vec![vec![]]),
            Err(ConfigError::EmptyFrame)
        ));
    }

    #[test]
    fn test_frame_rejects_bad_glyphs() {
        assert!(matches!(
            Frame::from_rows(vec![vec![Cell::new('\t')]]),
            Err(ConfigError::BadGlyph('\t'))
        ));
        // Wide CJK occupies two columns and cannot map to one cell.
        assert!(matches!(
            Frame::from_lines(["日"], Color::WHITE, Color::Transparent),
            Err(ConfigError::BadGlyph('日'))
        ));
    }

    #[test]
    fn test_frame_from_lines_pads_short_rows() {
        let frame = Frame::from_lines(["ab", "c"], Color::RED, Color::Transparent).unwrap();
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.get(0, 1).unwrap().ch, 'c');
        // Padding cell is blank, not red.
        let pad = frame.get(1, 1).unwrap();
        assert!(pad.is_blank());
        assert_eq!(pad.fg, Color::DEFAULT_FG);
    }

    #[test]
    fn test_frame_filled() {
        let frame = Frame::filled(3, 2, Cell::new('#').with_fg(Color::GREEN)).unwrap();
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.height(), 2);
        assert!(frame.rows().all(|row| row.iter().all(|c| c.ch == '#')));
    }

    #[test]
    fn test_frame_rows_iterator() {
        let frame = Frame::from_lines(["AB", "CD"], Color::WHITE, Color::Transparent).unwrap();
        let rows: Vec<String> = frame
            .rows()
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect();
        assert_eq!(rows, vec!["AB".to_string(), "CD".to_string()]);
    }
}
