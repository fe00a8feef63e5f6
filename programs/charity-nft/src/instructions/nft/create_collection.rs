use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use super::super::helpers::{validate_nft_metadata, validate_seller_fee_bps};
use crate::{CollectionCreated, CollectionInfo};

#[derive(Accounts)]
pub struct CreateNftCollection<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The collection mint
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = authority,
        space = 8 + CollectionInfo::INIT_SPACE,
        seeds = [CollectionInfo::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub collection_info: Account<'info, CollectionInfo>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateNftCollection>,
    name: String,
    symbol: String,
    uri: String,
    seller_fee_basis_points: u16,
) -> Result<()> {
    validate_nft_metadata(&name, &symbol, &uri)?;
    validate_seller_fee_bps(seller_fee_basis_points)?;

    let clock = Clock::get()?;

    let collection_info = &mut ctx.accounts.collection_info;
    collection_info.name = name.clone();
    collection_info.symbol = symbol.clone();
    collection_info.uri = uri.clone();
    collection_info.seller_fee_basis_points = seller_fee_basis_points;
    collection_info.mint = ctx.accounts.mint.key();
    collection_info.authority = ctx.accounts.authority.key();
    collection_info.created_at = clock.unix_timestamp;
    collection_info.bump = ctx.bumps.collection_info;

    emit!(CollectionCreated {
        collection_info: ctx.accounts.collection_info.key(),
        mint: ctx.accounts.mint.key(),
        name,
        symbol,
        uri,
        seller_fee_basis_points,
        authority: ctx.accounts.authority.key(),
        created_at: clock.unix_timestamp,
    });

    Ok(())
}
