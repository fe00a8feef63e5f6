use phf::phf_map;

use crate::{REWARD_TOKENS_PER_SOL, TIER_COUNT};

/// Deployment-time parameters of a purchase tier.
///
/// The catalog is fixed at compile time; the mutable `available` counter
/// lives in the `TierInventory` account seeded from these entries.
pub struct TierParams {
    /// Price of one unit in lamports
    pub price_lamports: u64,
    /// Reward tokens minted per whole SOL of the price
    pub reward_rate: u64,
    /// Units minted into the tier at initialization
    pub supply: u16,
}

/// Tier ids in catalog order (ascending)
pub const TIER_IDS: [u8; TIER_COUNT] = [1, 2, 3, 4];

static TIER_CATALOG: phf::Map<u8, TierParams> = phf_map! {
    1u8 => TierParams { price_lamports: 1_000_000_000, reward_rate: REWARD_TOKENS_PER_SOL, supply: 20 },
    2u8 => TierParams { price_lamports: 2_000_000_000, reward_rate: REWARD_TOKENS_PER_SOL, supply: 15 },
    3u8 => TierParams { price_lamports: 3_500_000_000, reward_rate: REWARD_TOKENS_PER_SOL, supply: 10 },
    4u8 => TierParams { price_lamports: 5_000_000_000, reward_rate: REWARD_TOKENS_PER_SOL, supply: 5 },
};

/// Look up a tier's deployment parameters by id.
pub fn get_tier_params(tier_id: u8) -> Option<&'static TierParams> {
    TIER_CATALOG.get(&tier_id)
}
