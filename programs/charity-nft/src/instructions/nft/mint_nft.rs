use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use super::super::helpers::validate_nft_metadata;
use crate::{
    mint_authority::sign_and_mint, CharityError, CollectionInfo, NftInfo, NftMinted,
    MINT_AUTHORITY_SEED,
};

#[derive(Accounts)]
pub struct MintNft<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The asset mint; must be a fresh 0-decimal mint whose mint authority
    /// has been handed to the program's mint authority PDA
    #[account(mut)]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        constraint = token_account.mint == mint.key() @ CharityError::InvalidNftMetadata,
    )]
    pub token_account: InterfaceAccount<'info, TokenAccount>,

    /// The mint of the collection the asset joins
    pub collection_mint: InterfaceAccount<'info, Mint>,

    #[account(
        seeds = [CollectionInfo::SEED_PREFIX, collection_mint.key().as_ref()],
        bump = collection_info.bump,
        has_one = authority @ CharityError::Unauthorized,
        constraint = collection_info.mint == collection_mint.key() @ CharityError::CollectionNotFound,
    )]
    pub collection_info: Account<'info, CollectionInfo>,

    #[account(
        init,
        payer = authority,
        space = 8 + NftInfo::INIT_SPACE,
        seeds = [NftInfo::SEED_PREFIX, mint.key().as_ref()],
        bump
    )]
    pub nft_info: Account<'info, NftInfo>,

    /// CHECK: Dataless PDA that co-signs mint operations
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: AccountInfo<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintNft>, name: String, symbol: String, uri: String) -> Result<()> {
    validate_nft_metadata(&name, &symbol, &uri)?;
    require!(
        ctx.accounts.mint.decimals == 0,
        CharityError::InvalidNftMetadata
    );

    let clock = Clock::get()?;

    let nft_info = &mut ctx.accounts.nft_info;
    nft_info.name = name.clone();
    nft_info.symbol = symbol.clone();
    nft_info.uri = uri;
    nft_info.mint = ctx.accounts.mint.key();
    nft_info.collection = ctx.accounts.collection_mint.key();
    nft_info.owner = ctx.accounts.authority.key();
    nft_info.minted_at = clock.unix_timestamp;
    nft_info.bump = ctx.bumps.nft_info;

    sign_and_mint(
        &ctx.accounts.token_program,
        &ctx.accounts.mint,
        &ctx.accounts.token_account,
        &ctx.accounts.mint_authority,
        ctx.bumps.mint_authority,
        1,
    )?;

    emit!(NftMinted {
        nft_info: ctx.accounts.nft_info.key(),
        mint: ctx.accounts.mint.key(),
        collection: ctx.accounts.collection_mint.key(),
        name,
        symbol,
        owner: ctx.accounts.authority.key(),
        minted_at: clock.unix_timestamp,
    });

    Ok(())
}
