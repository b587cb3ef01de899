use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random generation driven by a fixed seed, so a seed always reproduces its board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate(config, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn places_exact_mine_count_for_all_configs() {
        let mut rng = SmallRng::seed_from_u64(0xdead_beef);

        for size in 1..=12 {
            for mines in 0..area(size) {
                let layout = generate(GameConfig::new_unchecked(size, mines), &mut rng).unwrap();
                let unique: BTreeSet<_> = layout.mine_coords().collect();

                assert_eq!(layout.size(), size);
                assert_eq!(layout.mine_count(), mines);
                assert_eq!(unique.len(), usize::from(mines));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new_unchecked(16, 50);

        let a = RandomLayoutGenerator::new(42).generate(config).unwrap();
        let b = RandomLayoutGenerator::new(42).generate(config).unwrap();
        let c = RandomLayoutGenerator::new(43).generate(config).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rejects_invalid_configs() {
        let mut rng = SmallRng::seed_from_u64(1);

        assert_eq!(
            generate(GameConfig::new_unchecked(0, 0), &mut rng),
            Err(GameError::InvalidConfiguration { size: 0, mines: 0 })
        );
        assert_eq!(
            generate(GameConfig::new_unchecked(4, 16), &mut rng),
            Err(GameError::InvalidConfiguration { size: 4, mines: 16 })
        );
        assert_eq!(
            RandomLayoutGenerator::new(1).generate(GameConfig::new_unchecked(2, 9)),
            Err(GameError::InvalidConfiguration { size: 2, mines: 9 })
        );
    }

    #[test]
    fn every_cell_can_hold_a_mine() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut hits = BTreeSet::new();

        for _ in 0..200 {
            let layout = generate(GameConfig::new_unchecked(4, 3), &mut rng).unwrap();
            hits.extend(layout.mine_coords());
        }

        assert_eq!(hits.len(), 16);
    }
}
