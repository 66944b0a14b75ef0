use crate::ai::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use crate::config::{AppConfig, PlayerKind};
use crate::game::{GameOutcome, GameState, MoveError, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Who drives a side: the keyboard, or one of the computer opponents.
enum Controller {
    Human,
    Computer(Box<dyn Agent>),
}

impl Controller {
    fn from_kind(kind: PlayerKind, search_depth: usize) -> Self {
        match kind {
            PlayerKind::Human => Controller::Human,
            PlayerKind::Minimax => Controller::Computer(Box::new(MinimaxAgent::new(search_depth))),
            PlayerKind::Random => Controller::Computer(Box::new(RandomAgent::new())),
            PlayerKind::Greedy => Controller::Computer(Box::new(GreedyAgent::new())),
        }
    }

    fn label(&self) -> &str {
        match self {
            Controller::Human => "Human",
            Controller::Computer(agent) => agent.name(),
        }
    }
}

pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    search_depth: usize,
    red: Controller,
    yellow: Controller,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
            search_depth: config.ai.search_depth,
            red: Controller::from_kind(config.players.red, config.ai.search_depth),
            yellow: Controller::from_kind(config.players.yellow, config.ai.search_depth),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.step_computer();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // Reset game, keep controllers
                self.game_state = GameState::initial();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char(c) => {
                self.switch_controller(c);
            }
            _ => {}
        }
    }

    /// Switch a side's controller. Lowercase keys set Yellow, uppercase Red.
    fn switch_controller(&mut self, key: char) {
        let kind = match key.to_ascii_lowercase() {
            'h' => PlayerKind::Human,
            'm' => PlayerKind::Minimax,
            'a' => PlayerKind::Random,
            'g' => PlayerKind::Greedy,
            _ => return,
        };

        let controller = Controller::from_kind(kind, self.search_depth);
        let side = if key.is_ascii_uppercase() {
            self.red = controller;
            Player::Red
        } else {
            self.yellow = controller;
            Player::Yellow
        };
        self.message = Some(format!(
            "{} is now controlled by {}",
            side.name(),
            self.controller(side).label()
        ));
    }

    fn controller(&self, player: Player) -> &Controller {
        match player {
            Player::Red => &self.red,
            Player::Yellow => &self.yellow,
        }
    }

    /// Drop piece in selected column (human input path)
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if let Controller::Computer(_) = self.controller(self.game_state.current_player()) {
            self.message = Some("It's the computer's turn.".to_string());
            return;
        }

        let column = self.selected_column;
        self.apply_move(column);
    }

    /// Let a computer-controlled current player take its turn.
    fn step_computer(&mut self) {
        if self.game_state.is_terminal() {
            return;
        }

        let controller = match self.game_state.current_player() {
            Player::Red => &mut self.red,
            Player::Yellow => &mut self.yellow,
        };
        if let Controller::Computer(agent) = controller {
            let column = agent.select_action(&self.game_state);
            self.apply_move(column);
        }
    }

    fn apply_move(&mut self, column: usize) {
        match self.game_state.apply_move_mut(column) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins! Press 'r' for a new game.", player.name())
                        }
                        GameOutcome::Draw => "It's a draw! Press 'r' for a new game.".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn mode_label(&self) -> String {
        format!("Red: {}  Yellow: {}", self.red.label(), self.yellow.label())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label(),
        );
    }
}
