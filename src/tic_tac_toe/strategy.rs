//! The rule-of-thumb player used on the lower difficulties.
//!
//! In order: win now, block the opponent's win, fork, block the opponent's
//! fork, then take the center, a corner or an edge. Ties inside a cell class
//! are broken at random.

use rand::seq::SliceRandom;
use rand::Rng;

use super::board::Board;
use super::mark::Mark;
use super::rules::{fork_cell, fork_cells, winning_cell};

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];
const EDGES: [usize; 4] = [1, 3, 5, 7];

/// The strategic cell for `mark`, or `None` on a full board.
pub fn strategic_move<R>(board: &Board, mark: Mark, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    let opponent = mark.opposite();

    winning_cell(board, mark)
        .or_else(|| winning_cell(board, opponent))
        .or_else(|| fork_cell(board, mark))
        .or_else(|| fork_block_cell(board, mark))
        .or_else(|| positional_move(board, rng))
}

/// Stops the opponent's forks. A lone fork cell is simply taken. With more
/// than one, taking a single cell leaves another open, so `mark` makes a
/// threat whose forced reply falls on none of them.
fn fork_block_cell(board: &Board, mark: Mark) -> Option<usize> {
    let forks = fork_cells(board, mark.opposite());
    match forks.as_slice() {
        [] => None,
        [only] => Some(*only),
        [first, ..] => board
            .empty_cells()
            .find(|&index| {
                board
                    .placed(index, mark)
                    .ok()
                    .and_then(|next| winning_cell(&next, mark))
                    .map_or(false, |reply| !forks.contains(&reply))
            })
            .or(Some(*first)),
    }
}

fn positional_move<R>(board: &Board, rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    if board.is_empty_cell(CENTER) {
        return Some(CENTER);
    }

    for class in [&CORNERS, &EDGES] {
        let open: Vec<usize> = class
            .iter()
            .copied()
            .filter(|&index| board.is_empty_cell(index))
            .collect();
        if let Some(&index) = open.choose(rng) {
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::tic_tac_toe::ai::best_move;
    use crate::tic_tac_toe::state::TicTacToeState;

    fn pick(cells: &str, mark: Mark) -> Option<usize> {
        let board: Board = cells.parse().unwrap();
        strategic_move(&board, mark, &mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_wins_before_blocking() {
        // O can win on 5 and must otherwise block X on 2
        assert_eq!(Some(5), pick("XX. OO. X..", Mark::O));
        assert_eq!(Some(2), pick("XX. O.. O..", Mark::O));
    }

    #[test]
    fn test_forks() {
        assert_eq!(Some(2), pick("X.. .O. ..X", Mark::X));
    }

    #[test]
    fn test_blocks_single_opponent_fork() {
        // X forks only on 2
        assert_eq!(Some(2), pick("X.. .OX ...", Mark::O));
    }

    #[test]
    fn test_forces_reply_away_from_opponent_forks() {
        // X forks on both 2 and 6; O threatens 1-4-7 so X must answer on 7
        let index = pick("X.. .O. ..X", Mark::O).unwrap();
        assert_eq!(1, index);
        assert!(EDGES.contains(&index));
    }

    #[test]
    fn test_strategic_defense_holds_against_perfect_play() {
        let mut state = TicTacToeState::from_board("X.. .O. ..X".parse().unwrap(), Mark::O);
        let mut rng = StdRng::seed_from_u64(5);
        while !state.is_game_over() {
            let index = if state.current_player() == Mark::O {
                strategic_move(state.board(), Mark::O, &mut rng).unwrap()
            } else {
                best_move(&state).unwrap()
            };
            state = state.apply_move(index).unwrap();
        }
        assert_eq!(None, state.winner());
    }

    #[test]
    fn test_positional_preference() {
        assert_eq!(Some(4), pick("... ... ...", Mark::X));

        let corner = pick("... .X. ...", Mark::O).unwrap();
        assert!(CORNERS.contains(&corner));
    }

    #[test]
    fn test_full_board() {
        assert_eq!(None, pick("XOX XOO OXX", Mark::X));
    }
}
