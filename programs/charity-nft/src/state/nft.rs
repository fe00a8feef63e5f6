use anchor_lang::prelude::*;

/// Record of an NFT minted into a collection
/// PDA seeds: ["nft", asset_mint]
#[account]
#[derive(InitSpace)]
pub struct NftInfo {
    /// Asset name
    #[max_len(32)]
    pub name: String,

    /// Asset symbol
    #[max_len(10)]
    pub symbol: String,

    /// Off-chain metadata URI
    #[max_len(200)]
    pub uri: String,

    /// The asset mint
    pub mint: Pubkey,

    /// Back-reference to the collection mint the asset belongs to
    pub collection: Pubkey,

    /// Owner of the asset at mint time
    pub owner: Pubkey,

    /// Unix timestamp of minting
    pub minted_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl NftInfo {
    pub const SEED_PREFIX: &'static [u8] = b"nft";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nft_info_size_matches_init_space_at_max_len() {
        let info = NftInfo {
            name: "A".repeat(32),
            symbol: "B".repeat(10),
            uri: "C".repeat(200),
            mint: Pubkey::new_unique(),
            collection: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            minted_at: 0,
            bump: 252,
        };

        let mut bytes = Vec::new();
        info.serialize(&mut bytes).unwrap();

        assert_eq!(
            bytes.len(),
            NftInfo::INIT_SPACE,
            "NftInfo size mismatch: expected {}, got {}",
            NftInfo::INIT_SPACE,
            bytes.len()
        );
    }
}
