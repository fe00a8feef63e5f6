use anchor_lang::prelude::*;

use crate::{CharityConfig, CharityError, ConfigUpdated};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [CharityConfig::SEED_PREFIX],
        bump = config.bump,
        has_one = admin @ CharityError::Unauthorized,
    )]
    pub config: Account<'info, CharityConfig>,

    /// Optional new admin - must sign to prove consent to receiving admin rights
    /// If not provided, admin remains unchanged
    pub new_admin: Option<Signer<'info>>,
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    new_charity_wallet: Option<Pubkey>,
    paused: Option<bool>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // Only update admin if new_admin signer is provided
    if let Some(new_admin) = &ctx.accounts.new_admin {
        config.admin = new_admin.key();
    }

    if let Some(charity_wallet) = new_charity_wallet {
        config.charity_wallet = charity_wallet;
    }

    if let Some(p) = paused {
        config.paused = p;
    }

    emit!(ConfigUpdated {
        admin: config.admin,
        charity_wallet: config.charity_wallet,
        reward_mint: config.reward_mint,
        paused: config.paused,
    });

    Ok(())
}
