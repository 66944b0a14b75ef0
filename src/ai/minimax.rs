use crate::error::SearchError;
use crate::game::{Board, GameState, Player, COLS, ROWS};

use super::agent::Agent;

/// Sentinel score for a forced win within the searched depth. Kept far outside
/// the reachable heuristic range (|evaluate| < 10_000) so it can never be
/// confused with an ordinary positional score.
pub const SCORE_WIN: i32 = 1_000_000;
/// Sentinel score for a forced loss within the searched depth.
pub const SCORE_LOSS: i32 = -SCORE_WIN;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic that scans all 4-cell windows and scores threats, plus a
/// bonus for occupying the center column.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one 4-cell window by its piece counts. The defensive penalty is
    /// deliberately smaller in magnitude than the offensive three-in-a-row
    /// bonus.
    fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else if opp == 3 && empty == 1 {
            -4
        } else {
            0
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut score = 0;

        // Center column bonus: own pieces only
        for row in 0..ROWS {
            if board.get(row, 3) == own_cell {
                score += 3;
            }
        }

        // Scan all 4-cell windows; overlapping windows each count

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row + i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for i in 0..4 {
                    match board.get(row - i, col + i) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}

/// Result of one search invocation. `column` is `None` at terminal nodes and
/// at the evaluation frontier, where no move is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

/// One root-to-leaf search over hypothetical boards, fixed to the player the
/// engine maximizes for.
struct SearchRun<'a> {
    max_player: Player,
    heuristic: &'a dyn Heuristic,
}

impl SearchRun<'_> {
    /// Depth-bounded minimax with alpha-beta pruning.
    ///
    /// Columns are explored in ascending order and ties keep the
    /// earliest-found column, so identical inputs always yield the same move.
    /// Each branch recurses on its own copy of the board.
    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        let max_cell = self.max_player.to_cell();
        let min_cell = self.max_player.other().to_cell();

        // Terminal and frontier checks come before any recursion
        if board.has_four(max_cell) {
            return SearchResult {
                column: None,
                score: SCORE_WIN,
            };
        }
        if board.has_four(min_cell) {
            return SearchResult {
                column: None,
                score: SCORE_LOSS,
            };
        }
        if board.is_full() {
            return SearchResult {
                column: None,
                score: 0,
            };
        }
        if depth == 0 {
            return SearchResult {
                column: None,
                score: self.heuristic.evaluate(board, self.max_player),
            };
        }

        let open = board.open_columns();
        let piece = if maximizing { max_cell } else { min_cell };
        let mut best_column = open[0];

        if maximizing {
            let mut best_score = i32::MIN;
            for &col in &open {
                let mut child = *board;
                child.drop_piece(col, piece).unwrap();
                let result = self.minimax(&child, depth - 1, alpha, beta, false);
                if result.score > best_score {
                    best_score = result.score;
                    best_column = col;
                }
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(best_column),
                score: best_score,
            }
        } else {
            let mut best_score = i32::MAX;
            for &col in &open {
                let mut child = *board;
                child.drop_piece(col, piece).unwrap();
                let result = self.minimax(&child, depth - 1, alpha, beta, true);
                if result.score < best_score {
                    best_score = result.score;
                    best_column = col;
                }
                beta = beta.min(best_score);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult {
                column: Some(best_column),
                score: best_score,
            }
        }
    }
}

/// Pick the best column for `player` with a depth-bounded search.
///
/// `depth` must be at least 1. Fails with [`SearchError::NoLegalMove`] when
/// every column is full, and with [`SearchError::GameOver`] when a side has
/// already connected four, rather than returning an arbitrary column.
pub fn choose_move(board: &Board, player: Player, depth: usize) -> Result<usize, SearchError> {
    debug_assert!(depth >= 1, "search depth must be at least 1");

    if board.open_columns().is_empty() {
        return Err(SearchError::NoLegalMove);
    }

    let run = SearchRun {
        max_player: player,
        heuristic: &WindowHeuristic,
    };
    let result = run.minimax(board, depth, i32::MIN, i32::MAX, true);
    result.column.ok_or(SearchError::GameOver)
}

/// Minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        let run = SearchRun {
            max_player: state.current_player(),
            heuristic: self.heuristic.as_ref(),
        };
        let result = run.minimax(state.board(), self.depth, i32::MIN, i32::MAX, true);
        // legal_actions is non-empty, so the position is not terminal and the
        // root always settles on a column
        result.column.unwrap()
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::new(self.depth))
    }
}
