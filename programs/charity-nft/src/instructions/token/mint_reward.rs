use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    mint_authority::sign_and_mint, CharityConfig, CharityError, RewardMinted, MINT_AUTHORITY_SEED,
};

#[derive(Accounts)]
pub struct MintReward<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CharityConfig::SEED_PREFIX],
        bump = config.bump,
        has_one = admin @ CharityError::Unauthorized,
    )]
    pub config: Account<'info, CharityConfig>,

    #[account(
        mut,
        address = config.reward_mint @ CharityError::MintFailed,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = destination.mint == config.reward_mint @ CharityError::MintFailed,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Dataless PDA that co-signs mint operations
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handler(ctx: Context<MintReward>, amount: u64) -> Result<()> {
    sign_and_mint(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.destination,
        &ctx.accounts.mint_authority,
        ctx.bumps.mint_authority,
        amount,
    )?;

    let config = &mut ctx.accounts.config;
    config.total_rewards_minted = config
        .total_rewards_minted
        .checked_add(amount)
        .ok_or(CharityError::MathOverflow)?;

    let clock = Clock::get()?;
    emit!(RewardMinted {
        mint: ctx.accounts.mint.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        authority: ctx.accounts.admin.key(),
        minted_at: clock.unix_timestamp,
    });

    Ok(())
}
