//! Exact-cover search: Knuth's Algorithm X over the dense bit matrix.
//!
//! Each recursion level picks the column with the fewest 1s, branches on
//! every row covering it, and reduces the matrix by dropping satisfied
//! columns and conflicting rows. Branch state is isolated by deep-cloning
//! the matrix, which makes the unwind a no-op. Solutions are emitted
//! depth-first in a deterministic order: columns by minimum count with ties
//! to the lowest index, rows in ascending order.

use std::ops::ControlFlow;

use crate::builder::PuzzleMatrix;
use crate::matrix::BitMatrix;

/// A complete cover, handed to the solution callback.
///
/// The snapshot uses the original column layout of the problem matrix: box
/// cells first, then one column per piece occurrence. Every column has
/// exactly one 1 across the rows; each row is one chosen placement.
pub struct Solution<'a> {
    pub cells: &'a BitMatrix,
    /// Column names of the original matrix (cell tags, then piece names).
    pub names: &'a [String],
}

/// Enumerates every exact cover of `puzzle`, invoking `visit` on each.
///
/// The callback may return [`ControlFlow::Break`] to stop the enumeration
/// early; otherwise all solutions are visited. The solution snapshot is
/// only valid for the duration of the call.
pub fn solve<F>(puzzle: &PuzzleMatrix, visit: &mut F)
where
    F: FnMut(&Solution<'_>) -> ControlFlow<()>,
{
    let chosen = BitMatrix::new(0, puzzle.cells.cols());
    let _ = search(puzzle, &chosen, &puzzle.names, visit);
}

fn search<F>(
    puzzle: &PuzzleMatrix,
    chosen: &BitMatrix,
    names: &[String],
    visit: &mut F,
) -> ControlFlow<()>
where
    F: FnMut(&Solution<'_>) -> ControlFlow<()>,
{
    let cols = puzzle.cells.cols();
    if cols == 0 {
        // no columns left to cover: the chosen rows are a complete cover
        return visit(&Solution { cells: chosen, names });
    }

    // Knuth's S heuristic: branch on the column with the fewest 1s
    let pivot = (0..cols).min_by_key(|&j| puzzle.counts[j]).unwrap();
    if puzzle.counts[pivot] == 0 {
        // some column can no longer be covered
        return ControlFlow::Continue(());
    }

    for row in 0..puzzle.cells.rows() {
        if !puzzle.cells.get(row, pivot) {
            continue;
        }

        // record the placement in the original column space
        let mut next_chosen = chosen.clone();
        let sr = next_chosen.rows();
        next_chosen.insert_row(sr);
        for j in 0..cols {
            if puzzle.cells.get(row, j) {
                next_chosen.set(sr, puzzle.origin[j], true);
            }
        }

        // reduce: drop every column this row covers, and with it every row
        // that also covers that column. Walking columns high to low keeps
        // the indices of the columns still to visit stable.
        let mut next = puzzle.clone();
        for j in (0..cols).rev() {
            if !puzzle.cells.get(row, j) {
                continue;
            }
            let mut i = 0;
            while i < next.cells.rows() {
                if next.cells.get(i, j) {
                    for jj in 0..next.cells.cols() {
                        if next.cells.get(i, jj) {
                            next.counts[jj] -= 1;
                        }
                    }
                    next.cells.remove_row(i);
                } else {
                    i += 1;
                }
            }
            next.remove_col(j);
        }

        search(&next, &next_chosen, names, visit)?;
    }

    ControlFlow::Continue(())
}
