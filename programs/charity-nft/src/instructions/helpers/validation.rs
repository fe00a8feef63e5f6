use anchor_lang::prelude::*;

use crate::{
    CharityConfig, CharityError, MAX_METADATA_URI_LENGTH, MAX_REWARD_DECIMALS,
    MAX_SELLER_FEE_BPS, MAX_TOKEN_NAME_LENGTH, MAX_TOKEN_SYMBOL_LENGTH,
};

/// Validate that purchases are not paused
pub fn validate_not_paused(config: &CharityConfig) -> Result<()> {
    require!(!config.paused, CharityError::Paused);

    Ok(())
}

/// Validate name/symbol/decimals for token registration
pub fn validate_token_params(name: &str, symbol: &str, decimals: u8) -> Result<()> {
    require!(decimals <= MAX_REWARD_DECIMALS, CharityError::InvalidTokenParams);
    require!(
        !name.is_empty() && name.len() <= MAX_TOKEN_NAME_LENGTH,
        CharityError::InvalidTokenParams
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_TOKEN_SYMBOL_LENGTH,
        CharityError::InvalidTokenParams
    );

    Ok(())
}

/// Validate name/symbol/uri lengths for collection and asset records
pub fn validate_nft_metadata(name: &str, symbol: &str, uri: &str) -> Result<()> {
    require!(
        !name.is_empty() && name.len() <= MAX_TOKEN_NAME_LENGTH,
        CharityError::InvalidNftMetadata
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_TOKEN_SYMBOL_LENGTH,
        CharityError::InvalidNftMetadata
    );
    require!(uri.len() <= MAX_METADATA_URI_LENGTH, CharityError::InvalidNftMetadata);

    Ok(())
}

/// Validate a royalty value in basis points
pub fn validate_seller_fee_bps(seller_fee_basis_points: u16) -> Result<()> {
    require!(
        seller_fee_basis_points <= MAX_SELLER_FEE_BPS,
        CharityError::InvalidFeeBasisPoints
    );

    Ok(())
}

/// Validate the caller-declared amount against the tier price.
/// The declared amount is advisory only; the tier price is what settles.
pub fn validate_declared_price(declared_lamports: u64, price_lamports: u64) -> Result<()> {
    require!(declared_lamports == price_lamports, CharityError::PriceMismatch);

    Ok(())
}

/// Validate the buyer's on-ledger balance against the tier price
pub fn validate_buyer_funds(balance_lamports: u64, price_lamports: u64) -> Result<()> {
    require!(balance_lamports >= price_lamports, CharityError::InsufficientFunds);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(paused: bool) -> CharityConfig {
        CharityConfig {
            admin: Pubkey::new_unique(),
            charity_wallet: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_decimals: 9,
            paused,
            total_raised_lamports: 0,
            total_rewards_minted: 0,
            purchase_count: 0,
            bump: 255,
            _reserved: [0u8; 64],
        }
    }

    #[test]
    fn test_pause_gate() {
        assert!(validate_not_paused(&config(false)).is_ok());
        assert_eq!(
            validate_not_paused(&config(true)),
            Err(CharityError::Paused.into())
        );
    }

    #[test]
    fn test_token_params_decimals_ceiling() {
        assert!(validate_token_params("Charity Token", "CHAR", 9).is_ok());
        assert!(validate_token_params("Charity Token", "CHAR", 0).is_ok());
        assert_eq!(
            validate_token_params("Charity Token", "CHAR", 10),
            Err(CharityError::InvalidTokenParams.into())
        );
    }

    #[test]
    fn test_token_params_lengths() {
        assert_eq!(
            validate_token_params(&"A".repeat(33), "CHAR", 9),
            Err(CharityError::InvalidTokenParams.into())
        );
        assert_eq!(
            validate_token_params("Charity Token", &"B".repeat(11), 9),
            Err(CharityError::InvalidTokenParams.into())
        );
        assert_eq!(
            validate_token_params("", "CHAR", 9),
            Err(CharityError::InvalidTokenParams.into())
        );
        assert!(validate_token_params(&"A".repeat(32), &"B".repeat(10), 9).is_ok());
    }

    #[test]
    fn test_nft_metadata_lengths() {
        assert!(validate_nft_metadata("Charity Hero #1", "CHAR", "https://example.com/1.json").is_ok());
        assert_eq!(
            validate_nft_metadata("Charity Hero #1", "CHAR", &"u".repeat(201)),
            Err(CharityError::InvalidNftMetadata.into())
        );
        assert_eq!(
            validate_nft_metadata("", "CHAR", "https://example.com/1.json"),
            Err(CharityError::InvalidNftMetadata.into())
        );
    }

    #[test]
    fn test_seller_fee_bps_bounds() {
        assert!(validate_seller_fee_bps(0).is_ok());
        assert!(validate_seller_fee_bps(500).is_ok());
        assert!(validate_seller_fee_bps(10_000).is_ok());
        assert_eq!(
            validate_seller_fee_bps(10_001),
            Err(CharityError::InvalidFeeBasisPoints.into())
        );
    }

    #[test]
    fn test_declared_price_must_match() {
        assert!(validate_declared_price(1_000_000_000, 1_000_000_000).is_ok());
        assert_eq!(
            validate_declared_price(999_999_999, 1_000_000_000),
            Err(CharityError::PriceMismatch.into())
        );
        assert_eq!(
            validate_declared_price(2_000_000_000, 1_000_000_000),
            Err(CharityError::PriceMismatch.into())
        );
    }

    #[test]
    fn test_buyer_funds_floor() {
        assert!(validate_buyer_funds(1_000_000_000, 1_000_000_000).is_ok());
        assert!(validate_buyer_funds(2_000_000_000, 1_000_000_000).is_ok());
        assert_eq!(
            validate_buyer_funds(999_999_999, 1_000_000_000),
            Err(CharityError::InsufficientFunds.into())
        );
    }
}
