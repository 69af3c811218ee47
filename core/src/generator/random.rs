use alloc::vec::Vec;

use super::*;

/// Seeds a starting position: cat in the center, a uniformly random set of
/// blockers everywhere else. The same seed always produces the same board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let mut board = Board::new(config.size);
        let cat = config.center();
        board[cat] = Cell::Cat;

        let (size_x, size_y) = config.size;
        let mut candidates: Vec<Coord2> = (0..size_x)
            .flat_map(|x| (0..size_y).map(move |y| (x, y)))
            .filter(|&coords| coords != cat)
            .collect();

        let requested = config.blockers as usize;
        if requested > candidates.len() {
            log::warn!(
                "Board cannot fit {} blockers, seeding {} instead",
                requested,
                candidates.len()
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        candidates.shuffle(&mut rng);

        for &coords in candidates.iter().take(requested) {
            board[coords] = Cell::Blocked;
        }

        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_exact_blocker_count_away_from_the_cat() {
        let config = GameConfig::default();

        let board = RandomBoardGenerator::new(42).generate(config);

        assert_eq!(board.size(), (11, 11));
        assert_eq!(board.cat(), Some((5, 5)));
        assert!(board[(5, 5)].has_cat());
        assert_eq!(board.blocked_count(), 10);
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let config = GameConfig::new((9, 9), 15);

        let first = RandomBoardGenerator::new(7).generate(config);
        let second = RandomBoardGenerator::new(7).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn overfull_request_blocks_everything_but_the_cat() {
        // Bypasses the config clamp to exercise the generator's own limit.
        let config = GameConfig::new_unchecked((3, 3), 200);

        let board = RandomBoardGenerator::new(1).generate(config);

        assert_eq!(board.blocked_count(), 8);
        assert_eq!(board.cat(), Some((1, 1)));
    }

    #[test]
    fn zero_blockers_leaves_the_board_open() {
        let config = GameConfig::new((7, 7), 0);

        let board = RandomBoardGenerator::new(3).generate(config);

        assert_eq!(board.blocked_count(), 0);
        assert_eq!(board.cat(), Some((3, 3)));
    }

    #[test]
    fn generated_board_starts_a_playable_game() {
        let board = RandomBoardGenerator::new(9).generate(GameConfig::default());
        assert!(!board.is_edge(board.cat().unwrap()));

        let game = CatGame::new(board).unwrap();

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.move_count(), 0);
    }
}
