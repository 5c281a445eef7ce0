use solana_sdk::pubkey::Pubkey;
use vsr::state::Voter;

/// Mint config slot the report sums over: the realm's primary voting mint.
pub const PRIMARY_MINT_IDX: u8 = 0;

/// One report row: a voter with a strictly positive deposit total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoterDeposit {
    pub voter: Pubkey,
    pub authority: Pubkey,
    pub total: u128,
}

/// Sums the primary-mint deposits of every voter belonging to `registrar`.
///
/// Voters of other registrars are skipped, as are unused deposit slots and
/// deposits under other voting mint configs. Voters whose total is zero are
/// not emitted. Input order is preserved; no sorting is imposed here, so the
/// output order is whatever order the account fetch returned.
///
/// Pure and synchronous: all RPC I/O happens upstream in the processor.
pub fn aggregate(voters: &[(Pubkey, Voter)], registrar: &Pubkey) -> Vec<VoterDeposit> {
    voters
        .iter()
        .filter(|(_, voter)| voter.registrar == *registrar)
        .filter_map(|(address, voter)| {
            let total = voter.deposited_for_mint(PRIMARY_MINT_IDX);
            (total > 0).then_some(VoterDeposit {
                voter: *address,
                authority: voter.voter_authority,
                total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use test_case::test_case;
    use vsr::state::DepositEntry;

    fn entry(is_used: bool, mint_idx: u8, amount: u64) -> DepositEntry {
        let mut entry = DepositEntry::zeroed();
        entry.is_used = is_used;
        entry.voting_mint_config_idx = mint_idx;
        entry.amount_deposited_native = amount;
        entry
    }

    fn voter(registrar: Pubkey, entries: &[DepositEntry]) -> Voter {
        let mut voter = Voter::zeroed();
        voter.voter_authority = Pubkey::new_unique();
        voter.registrar = registrar;
        voter.deposits[..entries.len()].copy_from_slice(entries);
        voter
    }

    #[test_case(true, 0, 100 => 100 ; "used primary mint entry counts")]
    #[test_case(true, 1, 100 => 0 ; "other mint config never contributes")]
    #[test_case(false, 0, 100 => 0 ; "unused slot never contributes")]
    #[test_case(true, 0, 0 => 0 ; "zero amount stays below the positivity bar")]
    fn single_entry_selectivity(is_used: bool, mint_idx: u8, amount: u64) -> u128 {
        let registrar = Pubkey::new_unique();
        let voters = vec![(
            Pubkey::new_unique(),
            voter(registrar, &[entry(is_used, mint_idx, amount)]),
        )];

        let rows = aggregate(&voters, &registrar);
        rows.first().map(|row| row.total).unwrap_or(0)
    }

    #[test]
    fn sums_all_primary_mint_entries() {
        let registrar = Pubkey::new_unique();
        let voters = vec![(
            Pubkey::new_unique(),
            voter(registrar, &[entry(true, 0, 5), entry(true, 0, 7)]),
        )];

        let rows = aggregate(&voters, &registrar);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total, 12);
    }

    #[test]
    fn mixed_mint_entries_only_count_the_primary_mint() {
        let registrar = Pubkey::new_unique();
        let address = Pubkey::new_unique();
        let voters = vec![(
            address,
            voter(registrar, &[entry(true, 0, 100), entry(true, 1, 50)]),
        )];

        let rows = aggregate(&voters, &registrar);
        assert_eq!(
            rows,
            vec![VoterDeposit {
                voter: address,
                authority: voters[0].1.voter_authority,
                total: 100,
            }]
        );
    }

    #[test]
    fn skips_other_registrars_and_zero_totals() {
        let registrar = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let voters = vec![
            // Belongs to the target registrar but has nothing deposited.
            (Pubkey::new_unique(), voter(registrar, &[])),
            // Has a live deposit, but under a different registrar.
            (Pubkey::new_unique(), voter(other, &[entry(true, 0, 10)])),
        ];

        assert_eq!(aggregate(&voters, &registrar), vec![]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(aggregate(&[], &Pubkey::new_unique()), vec![]);
    }

    #[test]
    fn sums_past_u64_range_without_precision_loss() {
        let registrar = Pubkey::new_unique();
        let voters = vec![(
            Pubkey::new_unique(),
            voter(registrar, &[entry(true, 0, u64::MAX), entry(true, 0, 1)]),
        )];

        let rows = aggregate(&voters, &registrar);
        assert_eq!(rows[0].total, 18_446_744_073_709_551_616);
    }

    #[test]
    fn preserves_input_order_and_is_idempotent() {
        let registrar = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let voters = vec![
            (first, voter(registrar, &[entry(true, 0, 2)])),
            (second, voter(registrar, &[entry(true, 0, 1)])),
        ];

        let rows = aggregate(&voters, &registrar);
        assert_eq!(
            rows.iter().map(|row| row.voter).collect::<Vec<_>>(),
            vec![first, second]
        );
        assert_eq!(aggregate(&voters, &registrar), rows);
    }
}
