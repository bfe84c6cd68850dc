use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::{GameError, IllegalMove};
use super::game_state::TicTacToeGameState;
use super::settings::SessionSettings;
use super::types::{Difficulty, GameOutcome, GameSetup, Mark, SessionPhase, Turn};

/// One player's view of a game: the board, whose turn it is, and who plays
/// what. The presentation layer owns it and drives it through `play_move`
/// and, when `awaiting_computer` says so, `computer_move`.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: TicTacToeGameState,
    phase: SessionPhase,
    setup: Option<GameSetup>,
    computer_move_delay: Duration,
    rng: SessionRng,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionRng::from_random())
    }
}

impl GameSession {
    pub fn new(rng: SessionRng) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            phase: SessionPhase::Idle,
            setup: None,
            computer_move_delay: SessionSettings::default().computer_move_delay(),
            rng,
        }
    }

    /// Idle session primed with `settings`; `restart` starts it.
    pub fn from_settings(settings: &SessionSettings) -> Self {
        Self {
            setup: Some(settings.setup()),
            computer_move_delay: settings.computer_move_delay(),
            ..Self::new(SessionRng::from_seed(settings.seed))
        }
    }

    pub fn new_game(&mut self, human_mark: Mark, vs_computer: bool, difficulty: Difficulty) {
        self.start(GameSetup {
            human_mark,
            vs_computer,
            difficulty,
        });
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        let setup = self.setup.ok_or(GameError::NotStarted)?;
        self.start(setup);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = TicTacToeGameState::new();
        self.phase = SessionPhase::Idle;
    }

    fn start(&mut self, setup: GameSetup) {
        self.state = TicTacToeGameState::new();
        self.phase = SessionPhase::InProgress;
        self.setup = Some(setup);

        if setup.vs_computer {
            log!(
                "New game: human plays {} against {} computer (seed {})",
                setup.human_mark,
                setup.difficulty,
                self.rng.seed()
            );
        } else {
            log!("New game: human vs human");
        }
    }

    pub fn play_move(&mut self, index: usize) -> Result<GameOutcome, GameError> {
        let turn = self.turn().ok_or(IllegalMove::GameNotInProgress)?;
        match turn {
            Turn::Human(mark) => self.apply(index, mark),
            Turn::Computer(mark) => Err(IllegalMove::NotYourTurn { to_move: mark }.into()),
        }
    }

    pub fn computer_move(&mut self) -> Result<(usize, GameOutcome), GameError> {
        let turn = self.turn().ok_or(IllegalMove::GameNotInProgress)?;
        let Turn::Computer(mark) = turn else {
            return Err(IllegalMove::NotComputerTurn.into());
        };

        let difficulty = self.difficulty();
        let input = BotInput::from_game_state(&self.state);
        let index = calculate_move(difficulty, &input, &mut self.rng)?;
        log!("Computer ({}, {}) picks cell {}", mark, difficulty, index);

        let outcome = self.apply(index, mark)?;
        Ok((index, outcome))
    }

    fn apply(&mut self, index: usize, mark: Mark) -> Result<GameOutcome, GameError> {
        let outcome = self.state.place_mark(mark, index)?;
        log!("{} plays cell {}\n{}", mark, index, self.state.board());

        if outcome.is_over() {
            self.phase = SessionPhase::Finished;
            log!("Game over: {}", outcome);
        }
        Ok(outcome)
    }

    pub fn turn(&self) -> Option<Turn> {
        if self.phase != SessionPhase::InProgress {
            return None;
        }
        let mark = self.state.current_mark();
        if self.computer_mark() == Some(mark) {
            Some(Turn::Computer(mark))
        } else {
            Some(Turn::Human(mark))
        }
    }

    pub fn awaiting_computer(&self) -> bool {
        matches!(self.turn(), Some(Turn::Computer(_)))
    }

    pub fn current_outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    pub fn current_board(&self) -> Board {
        *self.state.board()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_mark(&self) -> Mark {
        self.state.current_mark()
    }

    pub fn last_move(&self) -> Option<(usize, Mark)> {
        self.state.last_move()
    }

    pub fn setup(&self) -> Option<GameSetup> {
        self.setup
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.setup.map(|setup| setup.human_mark)
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        self.setup
            .filter(|setup| setup.vs_computer)
            .map(|setup| setup.human_mark.opponent())
    }

    pub fn is_vs_computer(&self) -> bool {
        self.computer_mark().is_some()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.setup.map(|setup| setup.difficulty).unwrap_or_default()
    }

    pub fn computer_move_delay(&self) -> Duration {
        self.computer_move_delay
    }
}
