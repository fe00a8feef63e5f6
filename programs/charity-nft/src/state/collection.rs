use anchor_lang::prelude::*;

/// Metadata for an NFT collection, created once per collection mint
/// PDA seeds: ["collection", collection_mint]
#[account]
#[derive(InitSpace)]
pub struct CollectionInfo {
    /// Collection name
    #[max_len(32)]
    pub name: String,

    /// Collection symbol
    #[max_len(10)]
    pub symbol: String,

    /// Off-chain metadata URI
    #[max_len(200)]
    pub uri: String,

    /// Royalty in basis points (0-10000)
    pub seller_fee_basis_points: u16,

    /// The collection mint
    pub mint: Pubkey,

    /// Authority allowed to mint assets into the collection
    pub authority: Pubkey,

    /// Unix timestamp of creation
    pub created_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl CollectionInfo {
    pub const SEED_PREFIX: &'static [u8] = b"collection";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_info_size_matches_init_space_at_max_len() {
        let info = CollectionInfo {
            name: "A".repeat(32),
            symbol: "B".repeat(10),
            uri: "C".repeat(200),
            seller_fee_basis_points: 500,
            mint: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            created_at: 0,
            bump: 253,
        };

        let mut bytes = Vec::new();
        info.serialize(&mut bytes).unwrap();

        assert_eq!(
            bytes.len(),
            CollectionInfo::INIT_SPACE,
            "CollectionInfo size mismatch: expected {}, got {}",
            CollectionInfo::INIT_SPACE,
            bytes.len()
        );
    }
}
