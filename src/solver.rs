//! Exhaustive backtracking placement search.
//!
//! Search state is kept deliberately small:
//! - u32 bitmask for occupied cells
//! - u32 bitmask for the remaining pieces instead of a Vec
//! - pre-computed orientation masks for instant collision detection
//! - a fixed-size scratch array, so the hot loop never allocates
//!
//! The search is a full enumeration: it reports every distinct placement
//! sequence that tiles the board, including sequences that are rotations or
//! reflections of one another.

use crate::board::full_mask;
use crate::orientation::{orientations, Orientation};
use crate::pieces::{Placement, Puzzle};

/// A complete assignment of every piece, ordered by recursion depth.
pub type Solution<const N: usize> = [Placement; N];

impl<const W: usize, const H: usize, const N: usize> Puzzle<W, H, N> {
    /// Distinct orientations for each piece, indexed like `pieces`.
    pub fn orientation_table(&self) -> Vec<Vec<Orientation>> {
        self.pieces.iter().map(orientations::<W, H>).collect()
    }

    /// Finds every solution of the puzzle.
    ///
    /// At each depth the search tries every remaining piece, every distinct
    /// orientation and every in-bounds anchor, so for a fixed piece list the
    /// returned order is fully deterministic. The piece cells sum to the
    /// board area, so reaching full depth always coincides with a fully
    /// tiled board.
    pub fn solve(&self) -> Vec<Solution<N>> {
        let table = self.orientation_table();
        let all_pieces = if N == 32 { u32::MAX } else { (1u32 << N) - 1 };
        let mut scratch = [Placement::EMPTY; N];
        let mut solutions = Vec::new();
        place::<W, H, N>(&table, 0, 0, all_pieces, &mut scratch, &mut solutions);
        solutions
    }
}

/// One level of the backtracking recursion.
///
/// `occupied` and `remaining` are passed by value, so unwinding a branch
/// restores them for free; only `scratch[depth]` is overwritten, and every
/// deeper slot is rewritten before it can be read again.
fn place<const W: usize, const H: usize, const N: usize>(
    table: &[Vec<Orientation>],
    depth: usize,
    occupied: u32,
    remaining: u32,
    scratch: &mut [Placement; N],
    solutions: &mut Vec<Solution<N>>,
) {
    if depth == N {
        debug_assert_eq!(occupied, full_mask::<W, H>());
        solutions.push(*scratch);
        return;
    }

    // iterate over the remaining pieces (set bits, ascending)
    let mut pool = remaining;
    while pool != 0 {
        let piece = pool.trailing_zeros() as usize;
        pool &= pool - 1;

        for orientation in &table[piece] {
            // inclusive anchor bounds; empty when the piece cannot fit
            let Some(x_max) = W.checked_sub(orientation.width) else {
                continue;
            };
            let Some(y_max) = H.checked_sub(orientation.height) else {
                continue;
            };
            for y in 0..=y_max {
                for x in 0..=x_max {
                    let cells = orientation.mask << (x + W * y);
                    if cells & occupied != 0 {
                        continue; // does not fit here
                    }
                    scratch[depth] = Placement { piece, cells };
                    place::<W, H, N>(
                        table,
                        depth + 1,
                        occupied | cells,
                        remaining & !(1 << piece),
                        scratch,
                        solutions,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::pieces::{PieceDef, TIGHT_FIT};

    const SQUARE_SET: &[PieceDef] = &[PieceDef {
        rows: &["##",
                "##"],
    }];
    const SQUARE_ONLY: Puzzle<2, 2, 1> = Puzzle::new(SQUARE_SET);

    const STRAIGHT_SET: &[PieceDef] = &[
        PieceDef { rows: &["####"] },
        PieceDef { rows: &["####"] },
    ];
    const TWO_STRAIGHTS: Puzzle<4, 2, 2> = Puzzle::new(STRAIGHT_SET);

    const ELL_SET: &[PieceDef] = &[
        PieceDef {
            rows: &["###",
                    "#  "],
        },
        PieceDef {
            rows: &["###",
                    "  #"],
        },
    ];
    const ELL_PAIR: Puzzle<4, 2, 2> = Puzzle::new(ELL_SET);

    const ROW_SET: &[PieceDef] = &[
        PieceDef { rows: &["####"] },
        PieceDef {
            rows: &["##",
                    "##"],
        },
        PieceDef {
            rows: &["##",
                    "##"],
        },
    ];
    const ROW_MIX: Puzzle<4, 3, 3> = Puzzle::new(ROW_SET);

    /// Checks the invariants every reported solution must satisfy:
    /// pairwise-disjoint masks whose union is the whole board, no bit
    /// outside the board, and every piece used exactly once.
    fn assert_valid<const W: usize, const H: usize, const N: usize>(solution: &Solution<N>) {
        let board = full_mask::<W, H>();
        let all_pieces = if N == 32 { u32::MAX } else { (1u32 << N) - 1 };
        let mut covered = 0u32;
        let mut pieces_used = 0u32;
        for placement in solution {
            assert_eq!(covered & placement.cells, 0, "placements overlap");
            covered |= placement.cells;
            assert_eq!(placement.cells & !board, 0, "placement outside the board");
            assert_eq!(
                pieces_used & (1 << placement.piece),
                0,
                "piece {} placed twice",
                placement.piece
            );
            pieces_used |= 1 << placement.piece;
        }
        assert_eq!(covered, board, "board not fully covered");
        assert_eq!(pieces_used, all_pieces, "not every piece was placed");
    }

    #[test]
    fn square_fills_a_two_by_two_board_exactly_once() {
        let solutions = SQUARE_ONLY.solve();
        assert_eq!(
            solutions,
            vec![[Placement { piece: 0, cells: 0xF }]]
        );
        assert_valid::<2, 2, 1>(&solutions[0]);
    }

    #[test]
    fn two_straights_stack_in_every_order() {
        let solutions = TWO_STRAIGHTS.solve();
        assert_eq!(
            solutions,
            vec![
                [
                    Placement { piece: 0, cells: 0x0F },
                    Placement { piece: 1, cells: 0xF0 },
                ],
                [
                    Placement { piece: 0, cells: 0xF0 },
                    Placement { piece: 1, cells: 0x0F },
                ],
                [
                    Placement { piece: 1, cells: 0x0F },
                    Placement { piece: 0, cells: 0xF0 },
                ],
                [
                    Placement { piece: 1, cells: 0xF0 },
                    Placement { piece: 0, cells: 0x0F },
                ],
            ]
        );
        for solution in &solutions {
            assert_valid::<4, 2, 2>(solution);
        }
    }

    #[test]
    fn ell_pair_tilings_of_the_double_row() {
        // two interlocking partitions, either piece can take either half,
        // and either piece can go first
        let solutions = ELL_PAIR.solve();
        assert_eq!(solutions.len(), 8);
        for solution in &solutions {
            assert_valid::<4, 2, 2>(solution);
        }
    }

    #[test]
    fn straight_and_squares_tile_three_rows() {
        // the straight takes the top or bottom row, the squares pair up in
        // the two remaining rows; every depth order is enumerated
        let solutions = ROW_MIX.solve();
        assert_eq!(solutions.len(), 24);
        for solution in &solutions {
            assert_valid::<4, 3, 3>(solution);
        }
    }

    #[test]
    fn reported_solutions_are_distinct() {
        let solutions = ROW_MIX.solve();
        let distinct: FxHashSet<Solution<3>> = solutions.iter().copied().collect();
        assert_eq!(distinct.len(), solutions.len());
    }

    #[test]
    fn search_is_deterministic() {
        assert_eq!(ROW_MIX.solve(), ROW_MIX.solve());
        assert_eq!(ELL_PAIR.solve(), ELL_PAIR.solve());
    }

    #[test]
    fn canonical_board_has_no_tiling() {
        // Checkerboard parity: the tee covers three cells of one colour and
        // one of the other, while each remaining piece covers two of each
        // in every orientation, so the seven pieces colour 15/13 against
        // the board's 14/14. The exhaustive search must come up empty.
        let solutions = TIGHT_FIT.solve();
        for solution in &solutions {
            assert_valid::<4, 7, 7>(solution);
        }
        assert!(solutions.is_empty());
    }
}
