//! Computer opponents: the agent interface, the minimax search engine with
//! its window heuristic, and two simpler policies.

mod agent;
mod greedy;
mod minimax;
mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use minimax::{
    choose_move, Heuristic, MinimaxAgent, SearchResult, WindowHeuristic, SCORE_LOSS, SCORE_WIN,
};
pub use random::RandomAgent;
