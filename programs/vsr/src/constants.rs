pub const REGISTRAR_SEED: &str = "registrar";
pub const VOTER_SEED: &str = "voter";

/// Number of deposit entry slots in a voter account.
pub const MAX_DEPOSIT_ENTRIES: usize = 32;
/// Number of voting mint configuration slots in a registrar.
pub const MAX_VOTING_MINTS: usize = 4;
