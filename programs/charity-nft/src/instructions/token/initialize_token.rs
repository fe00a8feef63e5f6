use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use super::super::helpers::validate_token_params;
use crate::{CharityError, TokenInfo, TokenRegistered};

#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The mint being registered
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + TokenInfo::INIT_SPACE,
        seeds = [TokenInfo::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub token_info: Account<'info, TokenInfo>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeToken>,
    name: String,
    symbol: String,
    decimals: u8,
) -> Result<()> {
    validate_token_params(&name, &symbol, decimals)?;
    require!(
        decimals == ctx.accounts.mint.decimals,
        CharityError::InvalidTokenParams
    );

    let token_info = &mut ctx.accounts.token_info;
    require!(!token_info.is_initialized(), CharityError::AlreadyInitialized);

    let clock = Clock::get()?;

    token_info.name = name.clone();
    token_info.symbol = symbol.clone();
    token_info.decimals = decimals;
    token_info.mint = ctx.accounts.mint.key();
    token_info.authority = ctx.accounts.authority.key();
    token_info.registered_at = clock.unix_timestamp;
    token_info.bump = ctx.bumps.token_info;

    emit!(TokenRegistered {
        token_info: ctx.accounts.token_info.key(),
        mint: ctx.accounts.mint.key(),
        name,
        symbol,
        decimals,
        authority: ctx.accounts.authority.key(),
        registered_at: clock.unix_timestamp,
    });

    Ok(())
}
