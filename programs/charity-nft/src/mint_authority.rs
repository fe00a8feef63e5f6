use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

use crate::MINT_AUTHORITY_SEED;

/// Derive the program's mint authority PDA.
///
/// The authority is a dataless account with no private key; it exists only
/// as a derivation of the fixed seed and the program id, and co-signs mint
/// CPIs through `invoke_signed`.
pub fn derive_mint_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY_SEED], program_id)
}

/// Mint `amount` base units of `mint` into `destination`, signed by the
/// mint authority PDA. The only call site of `mint_to` in this program;
/// handlers reach minting exclusively through here.
pub fn sign_and_mint<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    mint_authority: &AccountInfo<'info>,
    bump: u8,
    amount: u64,
) -> Result<()> {
    mint_to(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            MintTo {
                mint: mint.to_account_info(),
                to: destination.to_account_info(),
                authority: mint_authority.to_account_info(),
            },
            &[&[MINT_AUTHORITY_SEED, &[bump]]],
        ),
        amount,
    )
}
