//! Run encoder: collapse a composited raster into minimal styled text runs.
//!
//! Drawing one call per cell is far too slow; instead each row is merged
//! into maximal spans of cells sharing the same (fg, bg) pair, and rows are
//! separated by explicit single-newline runs so the output can be laid out
//! as one multi-line text block.

use super::grid::Grid;
use crate::frame::Color;

/// One styled text segment: a maximal horizontal span of cells sharing both
/// colors, or a row-separator newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    /// The characters of the span (`"\n"` for row separators).
    pub text: String,
    /// Foreground color of every cell in the span.
    pub fg: Color,
    /// Background color of every cell in the span.
    pub bg: Color,
}

impl Run {
    /// Build a run.
    pub fn new(text: impl Into<String>, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
        }
    }

    /// The row-separator run: one newline, default foreground, transparent
    /// background.
    fn newline() -> Self {
        Self::new("\n", Color::DEFAULT_FG, Color::Transparent)
    }
}

/// Encode a grid into an ordered run list.
///
/// Concatenating the run texts reproduces the raster's characters exactly,
/// row-major, with rows joined by `\n`. A zero-sized grid encodes to an
/// empty list.
pub fn encode(grid: &Grid) -> Vec<Run> {
    let columns = grid.columns();
    let rows = grid.rows_len();
    if columns == 0 || rows == 0 {
        return Vec::new();
    }

    let mut runs = Vec::new();
    for (row_idx, row) in grid.rows().enumerate() {
        if row_idx > 0 {
            runs.push(Run::newline());
        }

        let mut current_fg = row[0].fg;
        let mut current_bg = row[0].bg;
        let mut text = String::new();

        for cell in row {
            if (cell.fg != current_fg || cell.bg != current_bg) && !text.is_empty() {
                // Flush the span with the colors it was accumulated under.
                runs.push(Run::new(std::mem::take(&mut text), current_fg, current_bg));
                current_fg = cell.fg;
                current_bg = cell.bg;
            }
            text.push(cell.ch);
        }

        if !text.is_empty() {
            runs.push(Run::new(text, current_fg, current_bg));
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{Cell, Frame};
    use crate::scene::{Entity, EntityManager};

    fn grid_from_art(lines: &[&str], fg: Color, columns: usize, rows: usize) -> Grid {
        let frame = Frame::from_lines(lines.iter().copied(), fg, Color::Transparent)
            .unwrap()
            .into_shared();
        let mut manager = EntityManager::new();
        manager.add_entity(Entity::new("art", 0, 0, frame));
        Grid::composite(&manager, columns, rows)
    }

    fn concat(runs: &[Run]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn test_empty_grid_encodes_to_nothing() {
        assert!(encode(&Grid::new(0, 0)).is_empty());
        assert!(encode(&Grid::new(0, 5)).is_empty());
        assert!(encode(&Grid::new(5, 0)).is_empty());
    }

    #[test]
    fn test_uniform_row_is_one_run() {
        let grid = Grid::new(4, 1);
        let runs = encode(&grid);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], Run::new("    ", Color::DEFAULT_FG, Color::Transparent));
    }

    #[test]
    fn test_color_boundary_splits_runs() {
        let grid = grid_from_art(&["AB"], Color::RED, 3, 1);
        let runs = encode(&grid);
        // "AB" red, then the blank default cell.
        assert_eq!(
            runs,
            vec![
                Run::new("AB", Color::RED, Color::Transparent),
                Run::new(" ", Color::DEFAULT_FG, Color::Transparent),
            ]
        );
    }

    #[test]
    fn test_end_to_end_three_by_two_scene() {
        // Grid 3x2, one entity at (0,0) with a 2x1 red "AB" frame.
        let grid = grid_from_art(&["AB"], Color::RED, 3, 2);
        let runs = encode(&grid);
        assert_eq!(
            runs,
            vec![
                Run::new("AB", Color::RED, Color::Transparent),
                Run::new(" ", Color::DEFAULT_FG, Color::Transparent),
                Run::new("\n", Color::DEFAULT_FG, Color::Transparent),
                Run::new("   ", Color::DEFAULT_FG, Color::Transparent),
            ]
        );
    }

    #[test]
    fn test_background_change_also_splits() {
        let mut manager = EntityManager::new();
        let frame = Frame::from_rows(vec![vec![
            Cell::new('A').with_fg(Color::RED).with_bg(Color::BLACK),
            Cell::new('B').with_fg(Color::RED),
        ]])
        .unwrap()
        .into_shared();
        manager.add_entity(Entity::new("e", 0, 0, frame));

        let runs = encode(&Grid::composite(&manager, 2, 1));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].bg, Color::BLACK);
        assert_eq!(runs[1].bg, Color::Transparent);
    }

    #[test]
    fn test_round_trip_reproduces_characters() {
        let grid = grid_from_art(&["AB C", " DE", "FGHI"], Color::GREEN, 6, 4);
        let runs = encode(&grid);
        assert_eq!(concat(&runs), grid.to_text());
    }

    #[test]
    fn test_newline_runs_between_rows_only() {
        let grid = Grid::new(2, 3);
        let runs = encode(&grid);
        let newlines = runs.iter().filter(|r| r.text == "\n").count();
        assert_eq!(newlines, 2);
        assert_ne!(runs.last().unwrap().text, "\n");
    }

    #[test]
    fn test_single_cell_spans_merge_across_entities() {
        // Two adjacent entities with identical colors merge into one run.
        let mut manager = EntityManager::new();
        let red = |id: &str, x: i32, art: &[&str]| {
            let frame = Frame::from_lines(art.iter().copied(), Color::RED, Color::Transparent)
                .unwrap()
                .into_shared();
            Entity::new(id, x, 0, frame)
        };
        manager.add_entity(red("l", 0, &["AA"]));
        manager.add_entity(red("r", 2, &["BB"]));

        let runs = encode(&Grid::composite(&manager, 4, 1));
        assert_eq!(runs, vec![Run::new("AABB", Color::RED, Color::Transparent)]);
    }
}
