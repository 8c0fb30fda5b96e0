//! Seeded randomness for a single game.
//!
//! Gameplay and cosmetic draws come from separate ChaCha streams derived from
//! the configured seed, so particle effects never perturb spawn outcomes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

const GAMEPLAY_LABEL: &str = "gameplay";
const COSMETIC_LABEL: &str = "cosmetic";

#[derive(Clone, Debug)]
pub(crate) struct RngStreams {
    pub(crate) gameplay: ChaCha8Rng,
    pub(crate) cosmetic: ChaCha8Rng,
}

impl RngStreams {
    pub(crate) fn for_game(seed: u64, game_index: u64) -> Self {
        Self {
            gameplay: ChaCha8Rng::from_seed(derive_labeled_seed(seed, game_index, GAMEPLAY_LABEL)),
            cosmetic: ChaCha8Rng::from_seed(derive_labeled_seed(seed, game_index, COSMETIC_LABEL)),
        }
    }
}

fn derive_labeled_seed(seed: u64, game_index: u64, label: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.update(game_index.to_le_bytes());
    hasher.update(label.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0_u8; 32];
    bytes.copy_from_slice(&digest);
    bytes
}
