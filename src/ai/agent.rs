use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select an action (column) given the current game state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
