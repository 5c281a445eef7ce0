use crate::{assert_struct_size, constants::MAX_VOTING_MINTS};
use anchor_lang::prelude::*;

assert_struct_size!(Registrar, 872);
#[account(zero_copy(unsafe))]
#[repr(C)]
#[cfg_attr(any(feature = "client", test), derive(Debug, PartialEq, Eq))]
pub struct Registrar {
    pub governance_program_id: Pubkey,                   // 32
    pub realm: Pubkey,                                   // 32
    pub realm_governing_token_mint: Pubkey,              // 32
    pub realm_authority: Pubkey,                         // 32
    pub _reserved1: [u8; 32],                            // 32
    pub voting_mints: [VotingMintConfig; MAX_VOTING_MINTS], // 152 * 4 = 608
    pub time_offset: i64,                                // 8
    pub bump: u8,                                        // 1
    pub _reserved2: [u8; 7],                             // 7
    pub _reserved3: [u64; 11],                           // 88
}

impl Registrar {
    /// Configured voting mints, skipping empty slots.
    pub fn active_voting_mints_iter(&self) -> impl Iterator<Item = (usize, &VotingMintConfig)> {
        self.voting_mints
            .iter()
            .enumerate()
            .filter(|(_, m)| m.in_use())
    }
}

assert_struct_size!(VotingMintConfig, 152);
#[zero_copy(unsafe)]
#[repr(C)]
#[cfg_attr(any(feature = "client", test), derive(Debug, PartialEq, Eq))]
pub struct VotingMintConfig {
    pub mint: Pubkey,                                    // 32
    pub grant_authority: Pubkey,                         // 32
    pub baseline_vote_weight_scaled_factor: u64,         // 8
    pub max_extra_lockup_vote_weight_scaled_factor: u64, // 8
    pub lockup_saturation_secs: u64,                     // 8
    pub digit_shift: i8,                                 // 1
    pub _reserved1: [u8; 7],                             // 7
    pub _reserved2: [u64; 7],                            // 56
}

impl VotingMintConfig {
    /// A slot is in use once a mint has been written into it.
    #[inline]
    pub fn in_use(&self) -> bool {
        self.mint != Pubkey::default()
    }
}
