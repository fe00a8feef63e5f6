/// Maximum length for a token or NFT name
pub const MAX_TOKEN_NAME_LENGTH: usize = 32;

/// Maximum length for a token or NFT symbol (e.g., "CHAR")
pub const MAX_TOKEN_SYMBOL_LENGTH: usize = 10;

/// Maximum length for an off-chain metadata URI
pub const MAX_METADATA_URI_LENGTH: usize = 200;

/// Maximum decimals accepted for the reward mint (SPL convention ceiling)
pub const MAX_REWARD_DECIMALS: u8 = 9;

/// Maximum seller fee in basis points (10000 = 100%)
pub const MAX_SELLER_FEE_BPS: u16 = 10_000;

/// Number of purchase tiers in the catalog
pub const TIER_COUNT: usize = 4;

/// Reward tokens minted per whole SOL donated
pub const REWARD_TOKENS_PER_SOL: u64 = 10;

/// Seed for the dataless PDA that co-signs every mint CPI
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";
