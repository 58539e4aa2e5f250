//! Piece orientation generation.
//!
//! A piece has up to 8 potential orientations: 4 rotations, each mirrored
//! or not. Symmetric pieces produce fewer, since many of those orientations
//! coincide. An orientation is stored as a board-stride bitmask anchored at
//! the top-left origin together with its bounding box.

use rustc_hash::FxHashSet;

use crate::pieces::PieceDef;

/// One rotation/mirror variant of a piece.
///
/// `mask` uses the board's cell numbering: cell (x, y) maps to bit
/// `x + W*y`, with the shape anchored at (0, 0). Two orientations are equal
/// iff their (mask, width, height) triples are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Occupied cells, anchored at the board origin.
    pub mask: u32,
    /// Bounding-box width of this orientation.
    pub width: usize,
    /// Bounding-box height of this orientation.
    pub height: usize,
}

/// A shape as an explicit cell list, used only while transforming.
#[derive(Clone)]
struct Shape {
    cells: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl Shape {
    fn from_def(def: &PieceDef) -> Self {
        let mut cells = Vec::new();
        for (y, row) in def.rows.iter().enumerate() {
            for (x, byte) in row.bytes().enumerate() {
                if byte != b' ' {
                    cells.push((x, y));
                }
            }
        }
        Self {
            cells,
            width: def.width(),
            height: def.height(),
        }
    }

    /// Reflection across the horizontal axis: row r swaps with row h-1-r.
    fn mirrored(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|&(x, y)| (x, self.height - 1 - y))
            .collect();
        Self {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    /// 90-degree rotation; width and height swap.
    fn rotated(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|&(x, y)| (self.height - 1 - y, x))
            .collect();
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Board-stride bitmask anchored at the origin.
    ///
    /// Returns `None` when the bounding box exceeds the board: such a shape
    /// has no valid anchor, and its cells cannot be encoded with stride `W`
    /// without aliasing into the next row.
    fn to_mask<const W: usize, const H: usize>(&self) -> Option<Orientation> {
        if self.width > W || self.height > H {
            return None;
        }
        let mut mask = 0u32;
        for &(x, y) in &self.cells {
            mask |= 1 << (x + W * y);
        }
        Some(Orientation {
            mask,
            width: self.width,
            height: self.height,
        })
    }
}

/// Generates the distinct orientations of a piece on a W x H board.
///
/// Walks the 4 rotations, recording each along with its mirror image, and
/// keeps the first occurrence of every distinct (mask, width, height)
/// triple. The result has between 1 and 8 entries depending on the piece's
/// symmetry, in a deterministic order.
pub fn orientations<const W: usize, const H: usize>(def: &PieceDef) -> Vec<Orientation> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    let mut record = |shape: &Shape| {
        if let Some(orientation) = shape.to_mask::<W, H>() {
            if seen.insert(orientation) {
                out.push(orientation);
            }
        }
    };

    let mut shape = Shape::from_def(def);
    for _ in 0..4 {
        record(&shape);
        record(&shape.mirrored());
        shape = shape.rotated();
    }
    out
}
