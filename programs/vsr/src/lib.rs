//! Account state of the voter-stake-registry (VSR) SPL governance addin.
//!
//! This crate carries only the zero-copy layouts needed to decode accounts
//! owned by the deployed program, plus read-side helpers. It defines no
//! instructions and no entrypoint: the accompanying tooling is strictly
//! read-only.
//!
//! Layouts are byte-for-byte compatible with the on-chain program, which is
//! what makes `anchor_client`'s account fetching work against it. Every
//! struct size is statically asserted.

pub mod constants;
pub mod macros;
pub mod state;

use anchor_lang::prelude::*;
use constants::{REGISTRAR_SEED, VOTER_SEED};

// Address of the deployed voter-stake-registry program. The same program id
// is used on mainnet-beta and devnet.
declare_id!("vsr2nfGVNHmSY8uxoBGqq8AQbwz3JwaEaHqGbsTPXqQ");

/// Derives the registrar address for a realm and governing token mint.
pub fn find_registrar_address(
    realm: &Pubkey,
    realm_governing_token_mint: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            realm.as_ref(),
            REGISTRAR_SEED.as_bytes(),
            realm_governing_token_mint.as_ref(),
        ],
        program_id,
    )
}

/// Derives the voter address for an authority within a registrar.
pub fn find_voter_address(
    registrar: &Pubkey,
    voter_authority: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            registrar.as_ref(),
            VOTER_SEED.as_bytes(),
            voter_authority.as_ref(),
        ],
        program_id,
    )
}
