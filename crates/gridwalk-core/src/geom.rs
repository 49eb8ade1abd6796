//! Geometry primitives: [`Coord`] and the bounds rule every lookup routes
//! through.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A `(row, col)` cell coordinate. Rows grow down, columns grow right.
///
/// Signed so that neighbour offsets may step off the grid; such coordinates
/// are filtered by [`in_bounds`] before any lookup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in the fixed expansion order: up, right, down, left.
    pub const DIRECTIONS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(0, -1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned coordinates `stride` cells away, in the fixed
    /// up, right, down, left order. No bounds filtering.
    #[inline]
    pub fn neighbors_4(self, stride: i32) -> [Coord; 4] {
        Self::DIRECTIONS.map(|d| self + d * stride)
    }

    /// The coordinate halfway between `self` and `other`.
    ///
    /// Used by maze carving to find the wall cell between two passage cells
    /// two steps apart.
    #[inline]
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Row-major flat index into a grid with `cols` columns.
    ///
    /// The caller must have checked the coordinate with [`in_bounds`].
    #[inline]
    pub fn index(self, cols: i32) -> usize {
        (self.row * cols + self.col) as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(idx: usize, cols: i32) -> Coord {
        let cols = cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }
}

// --- trait impls for Coord ---

// Row first, then column. Equal coordinates compare Equal, which is what a
// sorted frontier needs for determinism.
impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.row * rhs, self.col * rhs)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Whether `(row, col)` lies inside a `rows x cols` grid.
///
/// This is the single range check of the engine: grid accessors, the
/// neighbour resolver and the pointer mapping all go through it.
#[inline]
pub fn in_bounds(row: i32, col: i32, rows: i32, cols: i32) -> bool {
    0 <= row && row < rows && 0 <= col && col < cols
}

/// Map a pointer position in pixels to the grid cell under it.
///
/// `origin_*` is the pixel position of the grid's top-left corner and
/// `cell_size` the pixel pitch of one cell, outline included. Returns `None`
/// when the pointer is outside the grid or `cell_size` is not positive.
pub fn coord_from_pointer(
    x: f64,
    y: f64,
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    rows: i32,
    cols: i32,
) -> Option<Coord> {
    if cell_size <= 0.0 {
        return None;
    }
    let row = ((y - origin_y) / cell_size).floor();
    let col = ((x - origin_x) / cell_size).floor();
    if !row.is_finite() || !col.is_finite() {
        return None;
    }
    let (row, col) = (row as i32, col as i32);
    in_bounds(row, col, rows, cols).then_some(Coord::new(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a * 2, Coord::new(2, 4));
        assert_eq!(a.midpoint(Coord::new(1, 4)), Coord::new(1, 3));
    }

    #[test]
    fn ordering_is_row_then_col() {
        assert_eq!(Coord::new(0, 5).cmp(&Coord::new(1, 0)), Ordering::Less);
        assert_eq!(Coord::new(2, 1).cmp(&Coord::new(2, 0)), Ordering::Greater);
        assert_eq!(Coord::new(3, 3).cmp(&Coord::new(3, 3)), Ordering::Equal);
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let n = Coord::new(5, 5).neighbors_4(1);
        assert_eq!(
            n,
            [
                Coord::new(4, 5),
                Coord::new(5, 6),
                Coord::new(6, 5),
                Coord::new(5, 4),
            ]
        );
        let n2 = Coord::new(2, 2).neighbors_4(2);
        assert_eq!(n2[0], Coord::new(0, 2));
        assert_eq!(n2[3], Coord::new(2, 0));
    }

    #[test]
    fn bounds_rule() {
        assert!(in_bounds(0, 0, 3, 4));
        assert!(in_bounds(2, 3, 3, 4));
        assert!(!in_bounds(3, 0, 3, 4));
        assert!(!in_bounds(0, 4, 3, 4));
        assert!(!in_bounds(-1, 0, 3, 4));
        assert!(!in_bounds(0, 0, 0, 0));
    }

    #[test]
    fn index_round_trip() {
        let c = Coord::new(2, 3);
        assert_eq!(c.index(5), 13);
        assert_eq!(Coord::from_index(13, 5), c);
    }

    #[test]
    fn pointer_mapping() {
        // 25px cells starting at (10, 100).
        let hit = coord_from_pointer(10.0 + 25.0 * 3.5, 100.0 + 25.0 * 1.2, 10.0, 100.0, 25.0, 4, 6);
        assert_eq!(hit, Some(Coord::new(1, 3)));
        // Left of the grid.
        assert_eq!(coord_from_pointer(5.0, 120.0, 10.0, 100.0, 25.0, 4, 6), None);
        // Below the last row.
        assert_eq!(coord_from_pointer(20.0, 200.0, 10.0, 100.0, 25.0, 4, 6), None);
        assert_eq!(coord_from_pointer(20.0, 120.0, 10.0, 100.0, 0.0, 4, 6), None);
    }
}
