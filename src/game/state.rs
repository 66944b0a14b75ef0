use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.open_columns()
    }

    fn outcome_after_move(board: &Board, mover: Player) -> Option<GameOutcome> {
        if board.has_four(mover.to_cell()) {
            Some(GameOutcome::Winner(mover))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        // Clone the board and apply move
        let mut new_board = self.board;
        new_board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        let outcome = Self::outcome_after_move(&new_board, self.current_player);

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            outcome,
        })
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        self.outcome = Self::outcome_after_move(&self.board, self.current_player);
        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow
            }
        }
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_column_full_is_rejected() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(2).unwrap();
            state = state.apply_move(2).unwrap();
        }
        assert_eq!(state.apply_move(2), Err(MoveError::ColumnFull));
    }

    #[test]
    fn test_apply_move_mut_matches_apply_move() {
        let state = GameState::initial();
        let immutable = state.apply_move(4).unwrap();

        let mut mutable = state;
        mutable.apply_move_mut(4).unwrap();

        assert_eq!(immutable, mutable);
    }
}
