use anchor_lang::prelude::*;

/// Global config for the charity sale
/// PDA seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct CharityConfig {
    /// Admin authority who can update config
    pub admin: Pubkey,

    /// Wallet receiving 100% of tier payments
    pub charity_wallet: Pubkey,

    /// Mint of the reward token paid out on every purchase
    pub reward_mint: Pubkey,

    /// Decimals of the reward mint (0-9)
    pub reward_decimals: u8,

    /// Whether purchases are paused
    pub paused: bool,

    /// Lifetime lamports transferred to the charity wallet
    pub total_raised_lamports: u64,

    /// Lifetime reward tokens minted, in base units
    pub total_rewards_minted: u64,

    /// Number of settled purchases; also keys the next PurchaseRecord PDA
    pub purchase_count: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 64],
}

impl CharityConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";
}
