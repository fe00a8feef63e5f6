use anchor_lang::prelude::*;

#[error_code]
pub enum CharityError {
    #[msg("Invalid token parameters")]
    InvalidTokenParams,

    #[msg("Token info already registered for this mint")]
    AlreadyInitialized,

    #[msg("Unknown NFT price tier")]
    InvalidTier,

    #[msg("Tier is sold out")]
    SoldOut,

    #[msg("Insufficient funds for NFT purchase")]
    InsufficientFunds,

    #[msg("Declared amount does not match the tier price")]
    PriceMismatch,

    #[msg("Failed to mint reward tokens")]
    MintFailed,

    #[msg("Unauthorized: signer does not hold the required authority")]
    Unauthorized,

    #[msg("Referenced collection does not exist")]
    CollectionNotFound,

    #[msg("Seller fee basis points must be between 0 and 10000")]
    InvalidFeeBasisPoints,

    #[msg("Invalid NFT metadata")]
    InvalidNftMetadata,

    #[msg("Sales are paused")]
    Paused,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}
