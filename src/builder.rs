//! Exact-cover matrix construction.
//!
//! Every legal placement of a piece (orientation x translation) becomes one
//! matrix row: a 1 in each box cell the piece covers, plus a 1 in the
//! column owned by that piece occurrence. The solver then looks for row
//! subsets covering every column exactly once.

use log::debug;
use rustc_hash::FxHashSet;

use crate::geometry::{rotated_bounds, ROTATIONS};
use crate::grid::cell_index;
use crate::matrix::BitMatrix;
use crate::pieces::Piece;

/// Per-axis translation halving for one piece, used to break the mirror
/// symmetry of the solution set along that axis.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Constrain {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Constrain {
    pub const NONE: Constrain = Constrain { x: false, y: false, z: false };
    pub const ALL: Constrain = Constrain { x: true, y: true, z: true };
}

/// A bit matrix plus the column metadata the solver needs.
///
/// `names` and `counts` run parallel to the columns: `counts[j]` is always
/// the popcount of column j, and both vectors are spliced whenever a column
/// is removed. `origin` tags each live column with its index in the freshly
/// built matrix, so a solution row can be written back into the original
/// column space without parsing header strings.
#[derive(Clone)]
pub struct PuzzleMatrix {
    pub cells: BitMatrix,
    pub names: Vec<String>,
    pub counts: Vec<usize>,
    pub(crate) origin: Vec<usize>,
    width: usize,
    height: usize,
    depth: usize,
}

impl PuzzleMatrix {
    /// Creates the empty matrix for a box: one column per cell in Z-major
    /// order (x fastest), no rows, no piece columns yet.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        assert!(width >= 1 && height >= 1 && depth >= 1, "box dimensions must be positive");
        let cell_count = width * height * depth;
        let mut names = Vec::with_capacity(cell_count);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    names.push(format!("{x} {y} {z}"));
                }
            }
        }
        PuzzleMatrix {
            cells: BitMatrix::new(0, cell_count),
            names,
            counts: vec![0; cell_count],
            origin: (0..cell_count).collect(),
            width,
            height,
            depth,
        }
    }

    /// Removes column `at` together with its metadata entries.
    pub(crate) fn remove_col(&mut self, at: usize) {
        self.cells.remove_col(at);
        self.names.remove(at);
        self.counts.remove(at);
        self.origin.remove(at);
    }

    /// Appends the piece's column and one row per distinct placement.
    ///
    /// Walks the first `orientation_limit` entries of the rotation table
    /// (24 = all orientations, 1 = locked to the given orientation). For
    /// each orientation the rotated bounding box determines the number of
    /// translations per axis; a constrained axis keeps only the first half
    /// of them, rounded up. Placements whose rows duplicate an earlier row
    /// of the same piece are dropped. Returns the number of rows kept.
    pub fn add_piece(&mut self, piece: &Piece, constrain: Constrain, orientation_limit: usize) -> usize {
        assert!(orientation_limit >= 1, "orientation limit must be positive");
        let piece_col = self.cells.cols();
        self.cells.insert_col(piece_col);
        self.names.push(piece.name.to_string());
        self.counts.push(0);
        self.origin.push(piece_col);

        let (lo, hi) = piece.bounds();
        let mut seen: FxHashSet<Vec<u32>> = FxHashSet::default();
        let mut kept = 0;

        for rotate in ROTATIONS.iter().take(orientation_limit.min(ROTATIONS.len())) {
            let (rlo, rhi) = rotated_bounds(*rotate, lo, hi);
            let mut xs = self.width as i32 - (rhi.0 - rlo.0);
            let mut ys = self.height as i32 - (rhi.1 - rlo.1);
            let mut zs = self.depth as i32 - (rhi.2 - rlo.2);
            if constrain.x {
                xs = (xs + 1) / 2;
            }
            if constrain.y {
                ys = (ys + 1) / 2;
            }
            if constrain.z {
                zs = (zs + 1) / 2;
            }

            for tz in 0..zs.max(0) {
                for ty in 0..ys.max(0) {
                    for tx in 0..xs.max(0) {
                        // shift so the rotated bounding box starts at (tx, ty, tz)
                        let offset = (tx - rlo.0, ty - rlo.1, tz - rlo.2);
                        let mut cols = Vec::with_capacity(piece.cubes.len() + 1);
                        cols.push(piece_col);
                        for &cube in piece.cubes {
                            let (x, y, z) = rotate(cube);
                            let (x, y, z) = (x + offset.0, y + offset.1, z + offset.2);
                            assert!(
                                x >= 0
                                    && (x as usize) < self.width
                                    && y >= 0
                                    && (y as usize) < self.height
                                    && z >= 0
                                    && (z as usize) < self.depth,
                                "{}: cube lands outside the box at ({x}, {y}, {z})",
                                piece.name
                            );
                            cols.push(cell_index(self.width, self.height, x, y, z));
                        }

                        let row = self.cells.rows();
                        self.cells.insert_row(row);
                        for &j in &cols {
                            self.cells.set(row, j, true);
                        }
                        // symmetric orientations reproduce whole rows; by the
                        // tail invariant word equality is row equality
                        if seen.insert(self.cells.row_words(row).to_vec()) {
                            for &j in &cols {
                                self.counts[j] += 1;
                            }
                            kept += 1;
                        } else {
                            self.cells.remove_row(row);
                        }
                    }
                }
            }
        }

        debug!("{}: {} placements", piece.name, kept);
        kept
    }
}
