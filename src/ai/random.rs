use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent::new())
    }
}
