use anchor_lang::prelude::*;
use solana_program::native_token::LAMPORTS_PER_SOL;

use crate::TIER_COUNT;

/// One purchase tier: a fixed price, a reward rate, and a bounded supply.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tier {
    /// Tier identifier (>= 1), unique within the inventory
    pub id: u8,

    /// Price of one unit in lamports
    pub price_lamports: u64,

    /// Reward tokens minted per whole SOL of the price
    pub reward_rate: u64,

    /// Units still for sale; decrements by one per settled purchase
    pub available: u16,

    /// Units minted into the tier at initialization
    pub total: u16,
}

impl Tier {
    pub fn is_sold_out(&self) -> bool {
        self.available == 0
    }

    /// Reward in base units for paying this tier's price.
    ///
    /// Whole-SOL units only: the fractional remainder of the price is
    /// discarded, so a 3.5 SOL tier rewards the same as a 3 SOL tier.
    pub fn reward_amount(&self, reward_decimals: u8) -> Option<u64> {
        let whole_sol = self.price_lamports / LAMPORTS_PER_SOL;
        whole_sol
            .checked_mul(self.reward_rate)?
            .checked_mul(10u64.checked_pow(reward_decimals as u32)?)
    }
}

/// The mutable tier inventory, seeded once from the static catalog
/// PDA seeds: ["tiers"]
#[account]
#[derive(InitSpace)]
pub struct TierInventory {
    /// All tiers, ordered by id ascending
    pub tiers: [Tier; TIER_COUNT],

    /// PDA bump seed
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 32],
}

impl TierInventory {
    pub const SEED_PREFIX: &'static [u8] = b"tiers";

    pub fn get(&self, tier_id: u8) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.id == tier_id)
    }

    pub fn get_mut(&mut self, tier_id: u8) -> Option<&mut Tier> {
        self.tiers.iter_mut().find(|tier| tier.id == tier_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_tier_params, TIER_IDS};

    fn seeded_inventory() -> TierInventory {
        let mut inventory = TierInventory {
            tiers: [Tier {
                id: 0,
                price_lamports: 0,
                reward_rate: 0,
                available: 0,
                total: 0,
            }; TIER_COUNT],
            bump: 255,
            _reserved: [0u8; 32],
        };
        for (slot, id) in inventory.tiers.iter_mut().zip(TIER_IDS) {
            let params = get_tier_params(id).unwrap();
            *slot = Tier {
                id,
                price_lamports: params.price_lamports,
                reward_rate: params.reward_rate,
                available: params.supply,
                total: params.supply,
            };
        }
        inventory
    }

    #[test]
    fn test_reward_amounts_floor_whole_sol() {
        // 10 tokens per whole SOL at 9 decimals; 3.5 SOL floors to 3 SOL
        let inventory = seeded_inventory();
        let expected: [u64; TIER_COUNT] = [
            10 * 10u64.pow(9),
            20 * 10u64.pow(9),
            30 * 10u64.pow(9),
            50 * 10u64.pow(9),
        ];
        for (tier, want) in inventory.tiers.iter().zip(expected) {
            assert_eq!(tier.reward_amount(9), Some(want), "tier {}", tier.id);
        }
    }

    #[test]
    fn test_reward_amount_with_zero_decimals() {
        let tier = Tier {
            id: 1,
            price_lamports: 2_000_000_000,
            reward_rate: 10,
            available: 1,
            total: 1,
        };
        assert_eq!(tier.reward_amount(0), Some(20));
    }

    #[test]
    fn test_reward_amount_overflow_is_detected() {
        let tier = Tier {
            id: 1,
            price_lamports: u64::MAX,
            reward_rate: 10,
            available: 1,
            total: 1,
        };
        assert_eq!(tier.reward_amount(9), None);
    }

    #[test]
    fn test_sub_sol_price_rewards_nothing() {
        let tier = Tier {
            id: 1,
            price_lamports: 999_999_999,
            reward_rate: 10,
            available: 1,
            total: 1,
        };
        assert_eq!(tier.reward_amount(9), Some(0));
    }

    #[test]
    fn test_inventory_lookup() {
        let mut inventory = seeded_inventory();
        assert!(inventory.get(0).is_none());
        assert!(inventory.get(5).is_none());
        assert_eq!(inventory.get(3).unwrap().price_lamports, 3_500_000_000);

        let tier = inventory.get_mut(4).unwrap();
        tier.available -= 1;
        assert_eq!(inventory.get(4).unwrap().available, 4);
        assert_eq!(inventory.get(4).unwrap().total, 5);
    }

    #[test]
    fn test_sold_out_after_supply_exhausted() {
        let mut inventory = seeded_inventory();
        let tier = inventory.get_mut(4).unwrap();
        for _ in 0..tier.total {
            assert!(!tier.is_sold_out());
            tier.available = tier.available.checked_sub(1).unwrap();
        }
        assert!(tier.is_sold_out());
        assert_eq!(tier.available.checked_sub(1), None);
    }

    #[test]
    fn test_inventory_size_matches_init_space() {
        let inventory = seeded_inventory();
        let mut bytes = Vec::new();
        inventory.serialize(&mut bytes).unwrap();

        assert_eq!(
            bytes.len(),
            TierInventory::INIT_SPACE,
            "TierInventory size mismatch: expected {}, got {}",
            TierInventory::INIT_SPACE,
            bytes.len()
        );
    }
}
