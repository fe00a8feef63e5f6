use anchor_lang::prelude::*;

/// Registered metadata for a token mint, created once per mint
/// PDA seeds: ["token_info", mint]
#[account]
#[derive(InitSpace)]
pub struct TokenInfo {
    /// Display name (e.g., "Charity Token")
    #[max_len(32)]
    pub name: String,

    /// Ticker symbol (e.g., "CHAR")
    #[max_len(10)]
    pub symbol: String,

    /// Decimals of the mint (0-9)
    pub decimals: u8,

    /// The mint this metadata describes
    pub mint: Pubkey,

    /// Who registered the metadata
    pub authority: Pubkey,

    /// Unix timestamp of registration
    pub registered_at: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl TokenInfo {
    pub const SEED_PREFIX: &'static [u8] = b"token_info";

    /// Whether the account has been populated by `initialize_token`.
    /// A freshly created PDA deserializes to all-default fields.
    pub fn is_initialized(&self) -> bool {
        self.mint != Pubkey::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_info_size_matches_init_space_at_max_len() {
        let info = TokenInfo {
            name: "A".repeat(32),
            symbol: "B".repeat(10),
            decimals: 9,
            mint: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            registered_at: 0,
            bump: 254,
        };

        let mut bytes = Vec::new();
        info.serialize(&mut bytes).unwrap();

        assert_eq!(
            bytes.len(),
            TokenInfo::INIT_SPACE,
            "TokenInfo size mismatch: expected {}, got {}",
            TokenInfo::INIT_SPACE,
            bytes.len()
        );
    }

    #[test]
    fn test_initialized_flag_tracks_mint() {
        let mut info = TokenInfo {
            name: String::new(),
            symbol: String::new(),
            decimals: 0,
            mint: Pubkey::default(),
            authority: Pubkey::default(),
            registered_at: 0,
            bump: 0,
        };
        assert!(!info.is_initialized());
        info.mint = Pubkey::new_unique();
        assert!(info.is_initialized());
    }
}
