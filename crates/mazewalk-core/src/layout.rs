//! [`MazeLayout`] — the walkable/wall matrix a maze generator produces.

use std::fmt;

use crate::geom::{Point, Range};

/// A `width × height` boolean matrix, `true` = walkable.
///
/// Stored row-major. Out-of-range reads report a wall.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeLayout {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl MazeLayout {
    /// A layout made only of walls.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, false)
    }

    /// A layout where every cell is walkable.
    pub fn open(width: i32, height: i32) -> Self {
        Self::filled(width, height, true)
    }

    fn filled(width: i32, height: i32, walkable: bool) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![walkable; (width as usize) * (height as usize)],
        }
    }

    /// Parse rows of `#` (wall) and `.` (walkable).
    ///
    /// The first row is the top of the maze (highest `y`). Any other
    /// character counts as walkable. Rows shorter than the first are padded
    /// with walls.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut layout = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row as i32;
            for (x, ch) in line.chars().take(width as usize).enumerate() {
                layout.set(Point::new(x as i32, y), ch != '#');
            }
        }
        layout
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Whether `p` is walkable. Out-of-range points are walls.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i])
    }

    /// Set the walkability of `p`. Does nothing if out of range.
    #[inline]
    pub fn set(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            self.cells[i] = walkable;
        }
    }

    /// Number of walkable 4-neighbours of `p`.
    pub fn walkable_neighbors(&self, p: Point) -> usize {
        p.cardinal()
            .into_iter()
            .filter(|&n| self.is_walkable(n))
            .count()
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }
}

impl fmt::Display for MazeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_walls() {
        let l = MazeLayout::new(4, 3);
        assert_eq!(l.size(), Point::new(4, 3));
        assert_eq!(l.count_walkable(), 0);
        assert_eq!(MazeLayout::open(4, 3).count_walkable(), 12);
    }

    #[test]
    fn set_and_read() {
        let mut l = MazeLayout::new(3, 3);
        l.set(Point::new(1, 2), true);
        assert!(l.is_walkable(Point::new(1, 2)));
        assert!(!l.is_walkable(Point::new(2, 1)));
        // Out of range is ignored and reads as a wall.
        l.set(Point::new(5, 5), true);
        assert!(!l.is_walkable(Point::new(5, 5)));
        assert!(!l.is_walkable(Point::new(-1, 0)));
    }

    #[test]
    fn from_rows_puts_first_row_on_top() {
        let l = MazeLayout::from_rows(&["#..", "..#"]);
        assert_eq!(l.size(), Point::new(3, 2));
        assert!(!l.is_walkable(Point::new(0, 1)));
        assert!(l.is_walkable(Point::new(0, 0)));
        assert!(!l.is_walkable(Point::new(2, 0)));
        assert_eq!(l.to_string(), "#..\n..#\n");
    }

    #[test]
    fn counts_walkable_neighbors() {
        let l = MazeLayout::from_rows(&[".#.", "...", "#.#"]);
        assert_eq!(l.walkable_neighbors(Point::new(1, 1)), 3);
        assert_eq!(l.walkable_neighbors(Point::new(0, 0)), 2);
    }
}
