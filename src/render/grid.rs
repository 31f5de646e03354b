//! Grid compositor: paints every active entity's frame into one raster.
//!
//! The grid is transient: rebuilt from scratch every tick and thrown away
//! after encoding. Compositing honors three rules, in order: silent clipping
//! at the grid edge, space-as-transparent source cells, and
//! last-writer-wins for opaque overlap (manager insertion order is the sole
//! z-priority).

use crate::frame::Cell;
use crate::scene::{Entity, EntityManager};

/// The full-scene composite raster for one rendered instant.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    columns: usize,
    /// Height in rows.
    rows: usize,
}

impl Grid {
    /// Create a blank grid: every cell a space with default foreground and
    /// transparent background.
    ///
    /// Zero-sized grids are legal and encode to an empty run list.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![Cell::BLANK; columns * rows],
            columns,
            rows,
        }
    }

    /// Composite a scene into a fresh grid.
    ///
    /// Entities are painted in manager insertion order; inactive entities
    /// are skipped entirely.
    pub fn composite(manager: &EntityManager, columns: usize, rows: usize) -> Self {
        let mut grid = Self::new(columns, rows);
        for entity in manager.entities() {
            if entity.active {
                grid.paint(entity);
            }
        }
        grid
    }

    /// Paint one entity's current frame onto the grid.
    pub fn paint(&mut self, entity: &Entity) {
        let frame = entity.frame();
        for (dy, row) in frame.rows().enumerate() {
            let Some(grid_y) = offset(entity.y, dy, self.rows) else {
                continue;
            };
            for (dx, cell) in row.iter().enumerate() {
                let Some(grid_x) = offset(entity.x, dx, self.columns) else {
                    continue;
                };
                // Space means transparent: whatever is beneath stays visible.
                if cell.is_blank() {
                    continue;
                }
                self.cells[grid_y * self.columns + grid_x] = *cell;
            }
        }
    }

    /// Width in columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Height in rows.
    #[inline]
    pub const fn rows_len(&self) -> usize {
        self.rows
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.columns && y < self.rows {
            Some(&self.cells[y * self.columns + x])
        } else {
            None
        }
    }

    /// Iterate over rows as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Render the characters row-major with newline separators.
    ///
    /// Styling is dropped; useful for tests and debugging.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.columns * self.rows + self.rows);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.extend(row.iter().map(|c| c.ch));
        }
        text
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .finish()
    }
}

/// Translate a signed entity origin plus an unsigned frame offset into a
/// grid coordinate, or `None` when it falls outside `[0, extent)`.
#[inline]
fn offset(origin: i32, delta: usize, extent: usize) -> Option<usize> {
    let coord = i64::from(origin) + delta as i64;
    if coord >= 0 && (coord as usize) < extent {
        Some(coord as usize)
    } else {
        None
    }
}
