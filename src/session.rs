//! Game session - what the binary's loop drives.
//!
//! Wraps a [`GridEngine`] with the end-of-game bookkeeping the engine itself does
//! not keep: once a session is won or lost, only a restart is accepted.

use log::info;

use crate::core::{GridEngine, GridError, GridSnapshot};
use crate::types::{GameAction, Outcome};

#[derive(Debug, Clone)]
pub struct Session {
    engine: GridEngine,
    outcome: Outcome,
    width: usize,
    height: usize,
    seed: Option<u64>,
    /// Incremented on every restart; seeded sessions derive each game's seed from it.
    episode: u64,
}

impl Session {
    /// Start a session. With a seed, every game (including restarts) is reproducible.
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<Self, GridError> {
        let engine = Self::start_engine(width, height, seed, 0)?;
        Ok(Self {
            engine,
            outcome: Outcome::Continuing,
            width,
            height,
            seed,
            episode: 0,
        })
    }

    /// Resume from an existing engine (fixtures, replays).
    pub fn from_engine(engine: GridEngine) -> Self {
        let mut session = Self {
            width: engine.width(),
            height: engine.height(),
            engine,
            outcome: Outcome::Continuing,
            seed: None,
            episode: 0,
        };
        session.check_jammed();
        session
    }

    fn start_engine(
        width: usize,
        height: usize,
        seed: Option<u64>,
        episode: u64,
    ) -> Result<GridEngine, GridError> {
        match seed {
            Some(seed) => GridEngine::with_seed(width, height, seed.wrapping_add(episode)),
            None => GridEngine::new_game(width, height),
        }
    }

    /// Apply one action and return the session outcome afterwards.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Outcome, GridError> {
        match action {
            GameAction::Restart => self.restart()?,
            GameAction::Move(_) if self.outcome.is_terminal() => {}
            GameAction::Move(direction) => {
                self.outcome = self.engine.apply_move(direction);
                match self.outcome {
                    Outcome::Won => info!("won with max tile {:?}", self.engine.max_tile()),
                    Outcome::Lost => info!("lost: no room to spawn"),
                    Outcome::Continuing => self.check_jammed(),
                }
            }
        }
        Ok(self.outcome)
    }

    /// A grid where no direction changes anything can never move again.
    fn check_jammed(&mut self) {
        if !self.outcome.is_terminal() && !self.engine.has_legal_move() {
            info!("lost: no legal move, max tile {:?}", self.engine.max_tile());
            self.outcome = Outcome::Lost;
        }
    }

    pub fn restart(&mut self) -> Result<(), GridError> {
        self.episode += 1;
        self.engine = Self::start_engine(self.width, self.height, self.seed, self.episode)?;
        self.outcome = Outcome::Continuing;
        info!("restart (episode {})", self.episode);
        Ok(())
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn episode(&self) -> u64 {
        self.episode
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.engine.snapshot()
    }
}
