use ndarray::Array2;
use rand::Rng;

use crate::*;
pub use random::*;

mod random;

pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// Places `config.mines` mines uniformly at random, never twice on the same cell.
///
/// Fails with [`GameError::InvalidConfiguration`] when the board is empty or has no safe cell left.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<MineLayout> {
    config.validate()?;

    let size = usize::from(config.size);
    let mut mine_mask: Array2<bool> = Array2::default([size, size]);
    // exact sampling of distinct cell indices, so dense boards cost the same as sparse ones
    for index in rand::seq::index::sample(rng, size * size, config.mines.into()) {
        mine_mask[[index / size, index % size]] = true;
    }

    log::debug!(
        "generated {}x{} layout with {} mines",
        config.size,
        config.size,
        config.mines
    );
    MineLayout::from_mine_mask(mine_mask)
}
