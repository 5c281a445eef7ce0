use crate::{assert_struct_size, constants::MAX_DEPOSIT_ENTRIES};
use anchor_lang::prelude::*;

assert_struct_size!(Voter, 2720);
#[account(zero_copy(unsafe))]
#[repr(C)]
#[cfg_attr(any(feature = "client", test), derive(Debug, PartialEq, Eq))]
pub struct Voter {
    pub voter_authority: Pubkey,                       // 32
    pub registrar: Pubkey,                             // 32
    pub deposits: [DepositEntry; MAX_DEPOSIT_ENTRIES], // 80 * 32 = 2560
    pub voter_bump: u8,                                // 1
    pub voter_weight_record_bump: u8,                  // 1
    pub _reserved: [u8; 94],                           // 94
}

impl Voter {
    /// Total native tokens deposited under the given voting mint config,
    /// summed over all used deposit entries.
    ///
    /// Accumulates in u128: 32 entries of u64 cannot overflow it, the checked
    /// add keeps the invariant explicit.
    pub fn deposited_for_mint(&self, mint_idx: u8) -> u128 {
        self.deposits
            .iter()
            .filter(|d| d.is_active_for_mint(mint_idx))
            .fold(0u128, |sum, d| {
                sum.checked_add(d.amount_deposited_native.into()).unwrap()
            })
    }

    pub fn active_deposits_iter(&self) -> impl Iterator<Item = (usize, &DepositEntry)> {
        self.deposits.iter().enumerate().filter(|(_, d)| d.is_used)
    }
}

assert_struct_size!(DepositEntry, 80);
#[zero_copy(unsafe)]
#[repr(C)]
#[cfg_attr(any(feature = "client", test), derive(Debug, PartialEq, Eq))]
pub struct DepositEntry {
    pub lockup: Lockup,                      // 32
    pub amount_deposited_native: u64,        // 8
    pub amount_initially_locked_native: u64, // 8
    pub is_used: bool,                       // 1
    pub allow_clawback: bool,                // 1
    pub voting_mint_config_idx: u8,          // 1
    pub _reserved: [u8; 29],                 // 29
}

// `#[zero_copy(unsafe)]` emits no bytemuck impls; supply the one the code uses.
unsafe impl bytemuck::Zeroable for DepositEntry {}

impl DepositEntry {
    /// Whether this slot holds a live deposit for the given voting mint
    /// config. Unused slots are inactive regardless of their other fields.
    #[inline]
    pub fn is_active_for_mint(&self, mint_idx: u8) -> bool {
        self.is_used && self.voting_mint_config_idx == mint_idx
    }
}

assert_struct_size!(Lockup, 32);
#[zero_copy(unsafe)]
#[repr(C)]
#[cfg_attr(any(feature = "client", test), derive(Debug, PartialEq, Eq))]
pub struct Lockup {
    pub start_ts: i64,       // 8
    pub end_ts: i64,         // 8
    pub kind: u8,            // 1
    pub _reserved: [u8; 15], // 15
}

unsafe impl bytemuck::Zeroable for Lockup {}

impl Lockup {
    /// Decoded lockup kind, or None for byte values this crate does not know.
    pub fn kind(&self) -> Option<LockupKind> {
        LockupKind::from_u8(self.kind)
    }

    pub fn seconds_left(&self, curr_ts: i64) -> u64 {
        self.end_ts.saturating_sub(curr_ts).max(0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LockupKind {
    None,
    Daily,
    Monthly,
    Cliff,
    Constant,
}

impl LockupKind {
    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(LockupKind::None),
            1 => Some(LockupKind::Daily),
            2 => Some(LockupKind::Monthly),
            3 => Some(LockupKind::Cliff),
            4 => Some(LockupKind::Constant),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use pretty_assertions::assert_eq;

    fn used_entry(mint_idx: u8, amount: u64) -> DepositEntry {
        let mut entry = DepositEntry::zeroed();
        entry.is_used = true;
        entry.voting_mint_config_idx = mint_idx;
        entry.amount_deposited_native = amount;
        entry
    }

    #[test]
    fn deposited_for_mint_skips_other_mints_and_unused_slots() {
        let mut voter = Voter::zeroed();
        voter.deposits[0] = used_entry(0, 100);
        voter.deposits[1] = used_entry(1, 50);
        voter.deposits[2] = used_entry(0, 7);
        voter.deposits[3].amount_deposited_native = 1_000; // unused slot

        assert_eq!(voter.deposited_for_mint(0), 107);
        assert_eq!(voter.deposited_for_mint(1), 50);
        assert_eq!(voter.deposited_for_mint(2), 0);
    }

    #[test]
    fn deposited_for_mint_exceeds_u64_range() {
        let mut voter = Voter::zeroed();
        voter.deposits[0] = used_entry(0, u64::MAX);
        voter.deposits[1] = used_entry(0, 1);

        assert_eq!(voter.deposited_for_mint(0), u64::MAX as u128 + 1);
    }

    #[test]
    fn lockup_kind_roundtrip() {
        let mut lockup = Lockup::zeroed();
        lockup.kind = 3;
        assert_eq!(lockup.kind(), Some(LockupKind::Cliff));
        lockup.kind = 9;
        assert_eq!(lockup.kind(), None);
    }
}
