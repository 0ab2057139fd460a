//! Random move source for offline play.
//!
//! Picks uniformly among the engine's legal moves. This is a stand-in for
//! the remote services when none are running, not a playing strategy.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{Result, engine::Engine, error::Error, ports::MoveSource, types::Strategy};

/// Uniform random choice among legal moves, seedable for reproducibility.
#[derive(Debug, Clone)]
pub struct RandomMoves {
    rng: StdRng,
}

impl RandomMoves {
    /// Seeded when `seed` is given, otherwise seeded from the OS
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl<E: Engine> MoveSource<E> for RandomMoves {
    fn request_move(&mut self, engine: &E, _strategy: Strategy) -> Result<E::Input> {
        engine
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| Error::AiTransport {
                endpoint: "random".to_string(),
                message: "no legal moves".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect4::ConnectFour;

    #[test]
    fn picks_only_legal_columns() {
        let mut game = ConnectFour::new();
        for _ in 0..6 {
            game.apply_move(0).unwrap();
        }
        let mut source = RandomMoves::new(Some(7));
        for _ in 0..50 {
            let column = source.request_move(&game, Strategy::RuleBased).unwrap();
            assert!((1..6).contains(&column));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let game = ConnectFour::new();
        let mut a = RandomMoves::new(Some(42));
        let mut b = RandomMoves::new(Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.request_move(&game, Strategy::QLearning).unwrap(),
                b.request_move(&game, Strategy::QLearning).unwrap()
            );
        }
    }
}
