use anchor_lang::prelude::*;

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod mint_authority;
pub mod state;

pub use catalog::*;
pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("7TTm7WWEFtesGC127KJS2vgrTd9dLijU8iBFqVVL1wYH");

#[program]
pub mod charity_nft {
    use super::*;

    /// Initialize the protocol: config plus the tier inventory seeded from
    /// the compile-time catalog
    pub fn initialize(ctx: Context<Initialize>, reward_decimals: u8) -> Result<()> {
        instructions::admin::initialize::handler(ctx, reward_decimals)
    }

    /// Update protocol configuration (admin only).
    /// Tiers are immutable at runtime; only the charity wallet, the pause
    /// switch, and the admin itself can change.
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_charity_wallet: Option<Pubkey>,
        paused: Option<bool>,
    ) -> Result<()> {
        instructions::admin::update_config::handler(ctx, new_charity_wallet, paused)
    }

    /// Register name/symbol/decimals metadata for a mint, once per mint
    pub fn initialize_token(
        ctx: Context<InitializeToken>,
        name: String,
        symbol: String,
        decimals: u8,
    ) -> Result<()> {
        instructions::token::initialize_token::handler(ctx, name, symbol, decimals)
    }

    /// Mint reward tokens outside the purchase path (admin only)
    pub fn mint_reward(ctx: Context<MintReward>, amount: u64) -> Result<()> {
        instructions::token::mint_reward::handler(ctx, amount)
    }

    /// Purchase one unit of a tier: transfers the tier price in SOL to the
    /// charity wallet, mints the tier's reward to the buyer, decrements the
    /// tier inventory, and persists an immutable purchase record
    pub fn purchase_nft(
        ctx: Context<PurchaseNft>,
        tier_id: u8,
        declared_lamports: u64,
    ) -> Result<()> {
        instructions::market::purchase_nft::handler(ctx, tier_id, declared_lamports)
    }

    /// Create an NFT collection record for a collection mint
    pub fn create_nft_collection(
        ctx: Context<CreateNftCollection>,
        name: String,
        symbol: String,
        uri: String,
        seller_fee_basis_points: u16,
    ) -> Result<()> {
        instructions::nft::create_collection::handler(ctx, name, symbol, uri, seller_fee_basis_points)
    }

    /// Mint an NFT into an existing collection (collection authority only)
    pub fn mint_nft(
        ctx: Context<MintNft>,
        name: String,
        symbol: String,
        uri: String,
    ) -> Result<()> {
        instructions::nft::mint_nft::handler(ctx, name, symbol, uri)
    }
}
