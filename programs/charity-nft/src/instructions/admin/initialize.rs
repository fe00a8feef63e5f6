use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::{
    catalog::{get_tier_params, TIER_IDS},
    CharityConfig, CharityError, ProtocolInitialized, Tier, TierInventory, MAX_REWARD_DECIMALS,
    TIER_COUNT,
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Payer for account initialization (can be same as admin).
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Admin authority who will control the protocol.
    /// Must sign to prove consent to being the admin.
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + CharityConfig::INIT_SPACE,
        seeds = [CharityConfig::SEED_PREFIX],
        bump
    )]
    pub config: Account<'info, CharityConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + TierInventory::INIT_SPACE,
        seeds = [TierInventory::SEED_PREFIX],
        bump
    )]
    pub tier_inventory: Account<'info, TierInventory>,

    /// Mint of the reward token paid out on purchases.
    /// Its mint authority must be handed to the program's mint authority PDA
    /// before sales open.
    pub reward_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: Receives all tier payments; any system account
    pub charity_wallet: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, reward_decimals: u8) -> Result<()> {
    require!(
        reward_decimals <= MAX_REWARD_DECIMALS,
        CharityError::InvalidTokenParams
    );
    require!(
        reward_decimals == ctx.accounts.reward_mint.decimals,
        CharityError::InvalidTokenParams
    );

    let clock = Clock::get()?;

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.charity_wallet = ctx.accounts.charity_wallet.key();
    config.reward_mint = ctx.accounts.reward_mint.key();
    config.reward_decimals = reward_decimals;
    config.paused = false;
    config.total_raised_lamports = 0;
    config.total_rewards_minted = 0;
    config.purchase_count = 0;
    config.bump = ctx.bumps.config;

    let inventory = &mut ctx.accounts.tier_inventory;
    for (slot, id) in inventory.tiers.iter_mut().zip(TIER_IDS) {
        let params = get_tier_params(id).ok_or(CharityError::InvalidTier)?;
        *slot = Tier {
            id,
            price_lamports: params.price_lamports,
            reward_rate: params.reward_rate,
            available: params.supply,
            total: params.supply,
        };
    }
    inventory.bump = ctx.bumps.tier_inventory;

    emit!(ProtocolInitialized {
        config: ctx.accounts.config.key(),
        admin: ctx.accounts.admin.key(),
        charity_wallet: ctx.accounts.charity_wallet.key(),
        reward_mint: ctx.accounts.reward_mint.key(),
        reward_decimals,
        tier_count: TIER_COUNT as u8,
        initialized_at: clock.unix_timestamp,
    });

    Ok(())
}
