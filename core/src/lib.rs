#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use matrix::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod matrix;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord,
    goal_count: MoveCount,
}

impl GameConfig {
    pub const DEFAULT_GOAL_COUNT: MoveCount = 20;

    pub fn new(size: Coord, goal_count: MoveCount) -> Result<Self> {
        if size == 0 {
            return Err(InvalidSize::NotPositive.into());
        }
        Ok(Self { size, goal_count })
    }

    /// Validates a size typed by the player, as it comes out of a text or number input.
    pub fn from_input(size: Option<&str>, goal_count: MoveCount) -> Result<Self> {
        let size = size.map(str::trim).unwrap_or_default();
        if size.is_empty() {
            return Err(InvalidSize::Missing.into());
        }

        let size: i64 = size.parse().map_err(|_| InvalidSize::NotANumber)?;
        if size <= 0 {
            return Err(InvalidSize::NotPositive.into());
        }
        let size: Coord = size.try_into().map_err(|_| InvalidSize::TooLarge)?;

        Self::new(size, goal_count)
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn goal_count(&self) -> MoveCount {
        self.goal_count
    }

    pub const fn with_goal_count(self, goal_count: MoveCount) -> Self {
        Self { goal_count, ..self }
    }
}

/// A destination matrix together with the scrambled source the player starts from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    destination: BitMatrix,
    source: BitMatrix,
}

impl Puzzle {
    pub fn new(destination: BitMatrix, source: BitMatrix) -> Result<Self> {
        if destination.size() != source.size() {
            return Err(GameError::InvalidShape);
        }
        if destination.is_empty() {
            return Err(InvalidSize::NotPositive.into());
        }
        if destination == source {
            return Err(GameError::AlreadySolved);
        }
        Ok(Self {
            destination,
            source,
        })
    }

    pub fn size(&self) -> Coord {
        self.destination.size()
    }

    pub fn destination(&self) -> &BitMatrix {
        &self.destination
    }

    pub fn source(&self) -> &BitMatrix {
        &self.source
    }

    pub fn into_parts(self) -> (BitMatrix, BitMatrix) {
        (self.destination, self.source)
    }
}
