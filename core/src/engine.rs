use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    Flipped,
    Won,
    Lost,
}

impl FlipOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One round of the puzzle: the fixed destination, the player's source, and the move accounting.
///
/// `GameSession::default()` is the empty, not yet started session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameSession")]
pub struct GameSession {
    destination: BitMatrix,
    source: BitMatrix,
    flip_count: FlipCount,
    goal_count: MoveCount,
    status: GameStatus,
}

#[derive(Deserialize)]
struct RawGameSession {
    destination: BitMatrix,
    source: BitMatrix,
    flip_count: FlipCount,
    goal_count: MoveCount,
    status: GameStatus,
}

impl TryFrom<RawGameSession> for GameSession {
    type Error = GameError;

    fn try_from(raw: RawGameSession) -> Result<Self> {
        let RawGameSession {
            destination,
            source,
            flip_count,
            goal_count,
            status,
        } = raw;

        if destination.size() != source.size() {
            return Err(GameError::InvalidShape);
        }
        if status.is_started() && destination.is_empty() {
            return Err(InvalidSize::NotPositive.into());
        }

        let session = Self {
            destination,
            source,
            flip_count,
            goal_count,
            status,
        };
        let solved_in_progress = status == GameStatus::InProgress && session.is_solved();
        if session.evaluate_status() != status || solved_in_progress {
            return Err(GameError::InconsistentStatus);
        }
        Ok(session)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            destination: BitMatrix::default(),
            source: BitMatrix::default(),
            flip_count: 0,
            goal_count: GameConfig::DEFAULT_GOAL_COUNT,
            status: GameStatus::NotStarted,
        }
    }
}

impl GameSession {
    /// Starts a new random puzzle.
    pub fn initialize(config: GameConfig, seed: u64) -> Self {
        Self::initialize_with(config, RandomPuzzleGenerator::new(seed))
    }

    pub fn initialize_with(config: GameConfig, generator: impl PuzzleGenerator) -> Self {
        Self::from_puzzle(generator.generate(config), config.goal_count())
    }

    pub fn from_puzzle(puzzle: Puzzle, goal_count: MoveCount) -> Self {
        let (destination, source) = puzzle.into_parts();
        log::debug!(
            "new game: size {}, goal {}, {} cell(s) off",
            destination.size(),
            goal_count,
            source.distance(&destination)
        );
        Self {
            destination,
            source,
            flip_count: 0,
            goal_count,
            status: GameStatus::InProgress,
        }
    }

    /// Drops the current puzzle and goes back to the not started state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn size(&self) -> Coord {
        self.destination.size()
    }

    pub fn source(&self) -> &BitMatrix {
        &self.source
    }

    pub fn destination(&self) -> &BitMatrix {
        &self.destination
    }

    pub fn flip_count(&self) -> FlipCount {
        self.flip_count
    }

    pub fn goal_count(&self) -> MoveCount {
        self.goal_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn is_solved(&self) -> bool {
        self.status.is_started() && self.source == self.destination
    }

    /// Moves still available before the budget is exceeded.
    pub fn moves_left(&self) -> FlipCount {
        FlipCount::from(self.goal_count).saturating_sub(self.flip_count)
    }

    pub fn flip_row(&mut self, row: Coord) -> Result<FlipOutcome> {
        self.flip(Line::Row(row))
    }

    pub fn flip_column(&mut self, col: Coord) -> Result<FlipOutcome> {
        self.flip(Line::Column(col))
    }

    pub fn flip(&mut self, line: Line) -> Result<FlipOutcome> {
        self.check_in_progress()?;
        let line = self.source.validate_line(line)?;

        self.source.flip(line);
        // in progress implies flip_count <= goal_count, so this stays within `FlipCount`
        self.flip_count += 1;
        self.status = self.evaluate_status();

        log::debug!(
            "flip {:?}: {}/{} move(s), {:?}",
            line,
            self.flip_count,
            self.goal_count,
            self.status
        );

        Ok(match self.status {
            GameStatus::Won => FlipOutcome::Won,
            GameStatus::Lost => FlipOutcome::Lost,
            GameStatus::NotStarted | GameStatus::InProgress => FlipOutcome::Flipped,
        })
    }

    /// Derives the status from the matrices and counters.
    ///
    /// A match is checked before the budget, so solving the puzzle on the last allowed move still wins. The budget
    /// is only exceeded once `flip_count > goal_count`.
    pub fn evaluate_status(&self) -> GameStatus {
        if !self.status.is_started() {
            GameStatus::NotStarted
        } else if self.flip_count > 0 && self.source == self.destination {
            GameStatus::Won
        } else if self.flip_count > FlipCount::from(self.goal_count) {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        match self.status {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(GameError::NotStarted),
            GameStatus::Won | GameStatus::Lost => Err(GameError::AlreadyEnded),
        }
    }
}
