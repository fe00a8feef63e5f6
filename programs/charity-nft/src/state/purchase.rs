use anchor_lang::prelude::*;

/// Immutable receipt of a settled purchase; never closed
/// PDA seeds: ["purchase", purchase_index_le_bytes]
#[account]
#[derive(InitSpace)]
pub struct PurchaseRecord {
    /// The buyer who paid and received rewards
    pub buyer: Pubkey,

    /// Tier that was purchased
    pub tier_id: u8,

    /// Lamports transferred to the charity wallet
    pub amount_paid: u64,

    /// Reward tokens minted to the buyer, in base units
    pub reward_minted: u64,

    /// Unix timestamp of settlement
    pub purchased_at: i64,

    /// Sequence number of this purchase (0-based)
    pub index: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl PurchaseRecord {
    pub const SEED_PREFIX: &'static [u8] = b"purchase";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_record_size_matches_init_space() {
        let record = PurchaseRecord {
            buyer: Pubkey::new_unique(),
            tier_id: 3,
            amount_paid: 3_500_000_000,
            reward_minted: 30 * 10u64.pow(9),
            purchased_at: 1_700_000_000,
            index: 42,
            bump: 251,
        };

        let mut bytes = Vec::new();
        record.serialize(&mut bytes).unwrap();

        assert_eq!(
            bytes.len(),
            PurchaseRecord::INIT_SPACE,
            "PurchaseRecord size mismatch: expected {}, got {}",
            PurchaseRecord::INIT_SPACE,
            bytes.len()
        );
    }
}
