use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use super::super::helpers::{validate_buyer_funds, validate_declared_price, validate_not_paused};
use crate::{
    mint_authority::sign_and_mint, CharityConfig, CharityError, NftPurchased, PurchaseRecord,
    TierInventory, MINT_AUTHORITY_SEED,
};

#[derive(Accounts)]
pub struct PurchaseNft<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Config also carries the purchase counter that keys the record PDA
    #[account(
        mut,
        seeds = [CharityConfig::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, CharityConfig>,

    #[account(
        mut,
        seeds = [TierInventory::SEED_PREFIX],
        bump = tier_inventory.bump,
    )]
    pub tier_inventory: Account<'info, TierInventory>,

    /// CHECK: Receives the donation; fixed by config
    #[account(
        mut,
        address = config.charity_wallet,
    )]
    pub charity_wallet: AccountInfo<'info>,

    #[account(
        mut,
        address = config.reward_mint @ CharityError::MintFailed,
    )]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = buyer_reward_account.mint == config.reward_mint @ CharityError::MintFailed,
        constraint = buyer_reward_account.owner == buyer.key() @ CharityError::Unauthorized,
    )]
    pub buyer_reward_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Dataless PDA that co-signs mint operations
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: AccountInfo<'info>,

    #[account(
        init,
        payer = buyer,
        space = 8 + PurchaseRecord::INIT_SPACE,
        seeds = [PurchaseRecord::SEED_PREFIX, &config.purchase_count.to_le_bytes()],
        bump
    )]
    pub purchase_record: Account<'info, PurchaseRecord>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchaseNft>, tier_id: u8, declared_lamports: u64) -> Result<()> {
    let clock = Clock::get()?;

    // Validate everything before the first transfer. A failure anywhere in
    // this instruction aborts the whole transaction, so the transfer, the
    // reward mint, the inventory decrement, and the record are all-or-nothing.
    validate_not_paused(&ctx.accounts.config)?;

    let tier = *ctx
        .accounts
        .tier_inventory
        .get(tier_id)
        .ok_or(CharityError::InvalidTier)?;
    require!(!tier.is_sold_out(), CharityError::SoldOut);
    validate_declared_price(declared_lamports, tier.price_lamports)?;
    validate_buyer_funds(ctx.accounts.buyer.lamports(), tier.price_lamports)?;

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.buyer.to_account_info(),
                to: ctx.accounts.charity_wallet.to_account_info(),
            },
        ),
        tier.price_lamports,
    )?;

    let reward = tier
        .reward_amount(ctx.accounts.config.reward_decimals)
        .ok_or(CharityError::MathOverflow)?;

    sign_and_mint(
        &ctx.accounts.token_program,
        &ctx.accounts.reward_mint,
        &ctx.accounts.buyer_reward_account,
        &ctx.accounts.mint_authority,
        ctx.bumps.mint_authority,
        reward,
    )?;

    let inventory = &mut ctx.accounts.tier_inventory;
    let slot = inventory
        .get_mut(tier_id)
        .ok_or(CharityError::InvalidTier)?;
    slot.available = slot
        .available
        .checked_sub(1)
        .ok_or(CharityError::SoldOut)?;
    let remaining = slot.available;

    let config = &mut ctx.accounts.config;
    let index = config.purchase_count;
    config.total_raised_lamports = config
        .total_raised_lamports
        .checked_add(tier.price_lamports)
        .ok_or(CharityError::MathOverflow)?;
    config.total_rewards_minted = config
        .total_rewards_minted
        .checked_add(reward)
        .ok_or(CharityError::MathOverflow)?;
    config.purchase_count = index.checked_add(1).ok_or(CharityError::MathOverflow)?;

    let record = &mut ctx.accounts.purchase_record;
    record.buyer = ctx.accounts.buyer.key();
    record.tier_id = tier_id;
    record.amount_paid = tier.price_lamports;
    record.reward_minted = reward;
    record.purchased_at = clock.unix_timestamp;
    record.index = index;
    record.bump = ctx.bumps.purchase_record;

    emit!(NftPurchased {
        record: ctx.accounts.purchase_record.key(),
        buyer: ctx.accounts.buyer.key(),
        tier_id,
        amount_paid: tier.price_lamports,
        reward_minted: reward,
        remaining,
        index,
        purchased_at: clock.unix_timestamp,
    });

    Ok(())
}
