use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// One-ply opponent: take a winning column, otherwise block the opponent's
/// winning column, otherwise prefer the center, otherwise play at random.
///
/// Kept separate from the search engine so the engine's deterministic
/// contract stays free of random fallbacks.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");

        let own = state.current_player().to_cell();
        let opp = state.current_player().other().to_cell();

        // Winning move first
        for &col in &legal {
            let mut board = *state.board();
            board.drop_piece(col, own).unwrap();
            if board.has_four(own) {
                return col;
            }
        }

        // Then block the opponent's win
        for &col in &legal {
            let mut board = *state.board();
            board.drop_piece(col, opp).unwrap();
            if board.has_four(opp) {
                return col;
            }
        }

        // Center if available
        if legal.contains(&3) {
            return 3;
        }

        legal[self.rng.random_range(0..legal.len())]
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_winning_move() {
        let mut state = GameState::initial();
        for col in 0..3 {
            state = state.apply_move(col).unwrap(); // Red
            state = state.apply_move(col).unwrap(); // Yellow
        }

        let mut agent = GreedyAgent::new();
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn blocks_opponent_win() {
        let mut state = GameState::initial();
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(0).unwrap(); // Yellow
        state = state.apply_move(6).unwrap(); // Red
        state = state.apply_move(1).unwrap(); // Yellow
        state = state.apply_move(5).unwrap(); // Red
        state = state.apply_move(2).unwrap(); // Yellow

        let mut agent = GreedyAgent::new();
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn prefers_center_without_threats() {
        let mut agent = GreedyAgent::new();
        let state = GameState::initial();
        assert_eq!(agent.select_action(&state), 3);
    }

    #[test]
    fn plays_full_game() {
        let mut agent1 = GreedyAgent::new();
        let mut agent2 = GreedyAgent::new();
        let mut state = GameState::initial();
        let mut turn = 0;

        while !state.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&state)
            } else {
                agent2.select_action(&state)
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }
}
