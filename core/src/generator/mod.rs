use crate::*;
pub use random::*;

mod random;

pub trait PuzzleGenerator {
    fn generate(self, config: GameConfig) -> Puzzle;
}

/// Hands out an already built puzzle, ignoring the requested size.
impl PuzzleGenerator for Puzzle {
    fn generate(self, config: GameConfig) -> Puzzle {
        if self.size() != config.size() {
            log::warn!(
                "Fixed puzzle size {} differs from requested size {}",
                self.size(),
                config.size()
            );
        }
        self
    }
}
