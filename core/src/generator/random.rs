use rand::prelude::*;

use super::*;

/// Upper bound on full scramble passes before falling back to a single extra flip.
pub const MAX_SCRAMBLE_ATTEMPTS: u32 = 64;

/// Generation strategy that draws a uniformly random destination and scrambles a copy of it with as many random
/// row/column flips as the move budget allows.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPuzzleGenerator {
    seed: u64,
}

impl RandomPuzzleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PuzzleGenerator for RandomPuzzleGenerator {
    fn generate(self, config: GameConfig) -> Puzzle {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let destination = BitMatrix::from_fn(config.size(), |_| rng.random());
        let (source, _) = scramble(&mut rng, &destination, config.goal_count());

        Puzzle {
            destination,
            source,
        }
    }
}

fn random_line<R: Rng>(rng: &mut R, size: Coord) -> Line {
    let index = rng.random_range(0..line_count(size));
    Line::from_line_index(index, size).unwrap_or(Line::Row(0))
}

/// Applies `flips` random line flips to a copy of `destination`, retrying while the flips cancel each other out.
///
/// Returns the scrambled copy and the number of full passes it took.
fn scramble<R: Rng>(rng: &mut R, destination: &BitMatrix, flips: MoveCount) -> (BitMatrix, u32) {
    let size = destination.size();
    let mut source = destination.clone();

    // with one cell only the parity of `flips` matters, and no flips can never change anything
    if size == 1 || flips == 0 {
        log::debug!("scramble reduced to a single flip (size {}, {} flips)", size, flips);
        source.flip(random_line(rng, size));
        return (source, 0);
    }

    for attempt in 1..=MAX_SCRAMBLE_ATTEMPTS {
        source.clone_from(destination);
        for _ in 0..flips {
            source.flip(random_line(rng, size));
        }

        if source != *destination {
            log::trace!("scrambled in {} attempt(s)", attempt);
            return (source, attempt);
        }
    }

    // every pass cancelled out; one more line flip always changes the matrix
    log::warn!(
        "Scramble still solved after {} attempts (size {}, {} flips), forcing an extra flip",
        MAX_SCRAMBLE_ATTEMPTS,
        size,
        flips
    );
    source.flip(random_line(rng, size));
    (source, MAX_SCRAMBLE_ATTEMPTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord, goal_count: MoveCount) -> GameConfig {
        GameConfig::new(size, goal_count).unwrap()
    }

    #[test]
    fn generates_square_matrices_that_differ() {
        for seed in 0..32 {
            for size in [1, 2, 3, 5, 8] {
                let puzzle = RandomPuzzleGenerator::new(seed).generate(config(size, 20));

                assert_eq!(puzzle.size(), size);
                assert_eq!(puzzle.source().size(), size);
                assert_ne!(puzzle.source(), puzzle.destination());
            }
        }
    }

    #[test]
    fn same_seed_gives_same_puzzle() {
        let a = RandomPuzzleGenerator::new(42).generate(config(6, 20));
        let b = RandomPuzzleGenerator::new(42).generate(config(6, 20));

        assert_eq!(a, b);
    }

    #[test]
    fn zero_budget_still_scrambles() {
        let puzzle = RandomPuzzleGenerator::new(7).generate(config(3, 0));

        assert_ne!(puzzle.source(), puzzle.destination());
        // the forced flip touches exactly one line
        assert_eq!(puzzle.source().distance(puzzle.destination()), 3);
    }

    #[test]
    fn single_cell_with_even_budget_terminates() {
        // every flip toggles the only cell, so an even number of flips always cancels out
        let puzzle = RandomPuzzleGenerator::new(1).generate(config(1, 20));

        assert_ne!(puzzle.source()[(0, 0)], puzzle.destination()[(0, 0)]);
    }

    #[test]
    fn degenerate_scrambles_skip_retry_passes() {
        let mut rng = SmallRng::seed_from_u64(4);
        let single = BitMatrix::from_rows(&[[1u8]]).unwrap();

        for flips in [0, 1, 20, 21] {
            let (source, passes) = scramble(&mut rng, &single, flips);
            assert_eq!(passes, 0);
            assert_ne!(source, single);
        }

        let destination = BitMatrix::new(3);
        let (source, passes) = scramble(&mut rng, &destination, 0);
        assert_eq!(passes, 0);
        assert_ne!(source, destination);

        let (source, passes) = scramble(&mut rng, &destination, 20);
        assert!((1..=MAX_SCRAMBLE_ATTEMPTS).contains(&passes));
        assert_ne!(source, destination);
    }

    #[test]
    fn scrambled_source_is_reachable_by_line_flips() {
        let puzzle = RandomPuzzleGenerator::new(3).generate(config(4, 20));
        let (destination, source) = puzzle.into_parts();

        // flipping columns to fix row 0, then each row that still differs, must land on the destination
        let mut solved = source.clone();
        for col in 0..4 {
            if solved[(0, col)] != destination[(0, col)] {
                solved.flip_column(col);
            }
        }
        for row in 1..4 {
            if solved[(row, 0)] != destination[(row, 0)] {
                solved.flip_row(row);
            }
        }

        assert_eq!(solved, destination);
    }
}
