use crate::{
    config::Config,
    deposits::{aggregate, PRIMARY_MINT_IDX},
    profile::{self, get_cli_config_dir, load_profile, CliConfig, Profile},
};
use anchor_client::Cluster;
use anyhow::{anyhow, bail, Result};
use log::info;
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};
use std::{
    fs,
    mem::size_of,
    time::{SystemTime, UNIX_EPOCH},
};
use vsr::state::{LockupKind, Registrar, Voter};

// --------------------------------------------------------------------------------------------------------------------
// deposits report
// --------------------------------------------------------------------------------------------------------------------

pub fn deposited(config: &Config, registrar: Pubkey) -> Result<()> {
    let voters: Vec<(Pubkey, Voter)> = config.vsr_program.accounts(vec![])?;
    info!(
        "loaded {} voter accounts for program {}",
        voters.len(),
        config.program_id
    );

    for row in aggregate(&voters, &registrar) {
        println!("{} {} {}", row.voter, row.authority, row.total);
    }

    Ok(())
}

// --------------------------------------------------------------------------------------------------------------------
// registrar
// --------------------------------------------------------------------------------------------------------------------

pub fn registrar_get(config: &Config, registrar: Pubkey) -> Result<()> {
    let state: Registrar = config.vsr_program.account(registrar)?;
    print_registrar(&registrar, &state);

    Ok(())
}

pub fn registrar_get_all(config: &Config) -> Result<()> {
    let registrars: Vec<(Pubkey, Registrar)> = config.vsr_program.accounts(vec![])?;
    info!("loaded {} registrar accounts", registrars.len());

    registrars
        .iter()
        .for_each(|(address, state)| print_registrar(address, state));

    Ok(())
}

fn print_registrar(address: &Pubkey, registrar: &Registrar) {
    println!(
        r#"
Registrar: {}
Realm: {}
Governing Token Mint: {}
Realm Authority: {}
Governance Program: {}
Voting Mints:"#,
        address,
        registrar.realm,
        registrar.realm_governing_token_mint,
        registrar.realm_authority,
        registrar.governance_program_id,
    );

    for (idx, mint_config) in registrar.active_voting_mints_iter() {
        println!(
            r#"  [{}] Mint: {}
      Baseline Weight Factor: {}
      Max Extra Lockup Weight Factor: {}
      Lockup Saturation: {}s
      Digit Shift: {}"#,
            idx,
            mint_config.mint,
            mint_config.baseline_vote_weight_scaled_factor,
            mint_config.max_extra_lockup_vote_weight_scaled_factor,
            mint_config.lockup_saturation_secs,
            mint_config.digit_shift,
        );
    }
}

// --------------------------------------------------------------------------------------------------------------------
// voter
// --------------------------------------------------------------------------------------------------------------------

pub fn voter_get(
    config: &Config,
    profile: &Profile,
    voter: Option<Pubkey>,
    authority: Option<Pubkey>,
) -> Result<()> {
    let address = match (voter, authority) {
        (Some(voter), _) => voter,
        (None, Some(authority)) => {
            let registrar = profile.get_registrar(None)?;
            vsr::find_voter_address(&registrar, &authority, &config.program_id).0
        }
        (None, None) => bail!("provide a voter address or --authority"),
    };

    let state: Voter = config.vsr_program.account(address)?;
    let curr_ts = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;

    println!("Voter: {}", address);
    println!("Authority: {}", state.voter_authority);
    println!("Registrar: {}", state.registrar);
    println!("Deposits:");

    for (idx, entry) in state.active_deposits_iter() {
        let lockup = match entry.lockup.kind() {
            Some(LockupKind::None) | None => "not locked".to_owned(),
            Some(kind) => format!(
                "{:?}, {}s left",
                kind,
                entry.lockup.seconds_left(curr_ts)
            ),
        };
        println!(
            "  [{}] mint idx {}: {} ({})",
            idx, entry.voting_mint_config_idx, entry.amount_deposited_native, lockup
        );
    }
    println!(
        "Primary Mint Total: {}",
        state.deposited_for_mint(PRIMARY_MINT_IDX)
    );

    Ok(())
}

pub fn voter_list(config: &Config, registrar: Option<Pubkey>) -> Result<()> {
    // The registrar field sits right after the discriminator and the
    // authority in the voter account layout.
    let filters = match registrar {
        Some(registrar) => vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
            8 + size_of::<Pubkey>(),
            registrar.to_bytes().to_vec(),
        ))],
        None => vec![],
    };

    let voters: Vec<(Pubkey, Voter)> = config.vsr_program.accounts(filters)?;

    if voters.is_empty() {
        println!("No voter accounts found");
    }

    for (address, voter) in voters {
        println!(
            "{} authority {} active deposits {} primary mint total {}",
            address,
            voter.voter_authority,
            voter.active_deposits_iter().count(),
            voter.deposited_for_mint(PRIMARY_MINT_IDX),
        );
    }

    Ok(())
}

// --------------------------------------------------------------------------------------------------------------------
// profile
// --------------------------------------------------------------------------------------------------------------------

pub fn create_profile(
    name: String,
    cluster: Cluster,
    rpc_url: String,
    program_id: Option<Pubkey>,
    commitment: Option<CommitmentLevel>,
    registrar: Option<Pubkey>,
) -> Result<()> {
    let cli_config_dir = get_cli_config_dir();
    let profile = Profile::new(name, cluster, rpc_url, program_id, commitment, registrar);
    if !cli_config_dir.exists() {
        fs::create_dir(&cli_config_dir)?;

        let cli_config_file = cli_config_dir.join("config.json");

        fs::write(
            cli_config_file,
            serde_json::to_string(&CliConfig {
                profile_name: profile.name.clone(),
            })?,
        )?;
    }

    let cli_profiles_dir = cli_config_dir.join("profiles");

    if !cli_profiles_dir.exists() {
        fs::create_dir(&cli_profiles_dir)?;
    }

    let profile_file = cli_profiles_dir.join(profile.name.clone() + ".json");
    if profile_file.exists() {
        return Err(anyhow!("Profile {} already exists", profile.name));
    }

    println!("Creating profile {profile:#?}");

    fs::write(&profile_file, serde_json::to_string(&profile)?)?;

    Ok(())
}

pub fn show_profile() -> Result<()> {
    let profile = load_profile()?;
    println!("{profile:?}");
    Ok(())
}

pub fn set_profile(name: String) -> Result<()> {
    let cli_config_dir = get_cli_config_dir();
    let cli_config_file = cli_config_dir.join("config.json");

    if !cli_config_file.exists() {
        return Err(anyhow!("Profiles not configured, run `vsr profile create`"));
    }

    let profile_file = cli_config_dir.join("profiles").join(format!("{name}.json"));

    if !profile_file.exists() {
        return Err(anyhow!("Profile {} does not exist", name));
    }

    let cli_config = fs::read_to_string(&cli_config_file)?;
    let mut cli_config: CliConfig = serde_json::from_str(&cli_config)?;

    cli_config.profile_name = name;

    fs::write(&cli_config_file, serde_json::to_string(&cli_config)?)?;

    Ok(())
}

pub fn list_profiles() -> Result<()> {
    let cli_config_dir = get_cli_config_dir();
    let cli_profiles_dir = cli_config_dir.join("profiles");

    if !cli_profiles_dir.exists() {
        return Err(anyhow!("Profiles not configured, run `vsr profile create`"));
    }

    let mut profiles = fs::read_dir(&cli_profiles_dir)?
        .map(|entry| Ok(entry?.file_name().into_string().unwrap_or_default()))
        .collect::<Result<Vec<String>>>()?;

    if profiles.is_empty() {
        println!("No profiles exist");
    }

    let cli_config = serde_json::from_str::<CliConfig>(&fs::read_to_string(
        cli_config_dir.join("config.json"),
    )?)?;

    println!("Current profile: {}", cli_config.profile_name);

    profiles.sort();

    println!("Found {} profiles", profiles.len());
    for profile in profiles {
        println!("{profile}");
    }

    Ok(())
}

pub fn configure_profile(
    name: String,
    cluster: Option<Cluster>,
    rpc_url: Option<String>,
    program_id: Option<Pubkey>,
    commitment: Option<CommitmentLevel>,
    registrar: Option<Pubkey>,
) -> Result<()> {
    let mut profile = profile::load_profile_by_name(&name)?;
    profile.config(cluster, rpc_url, program_id, commitment, registrar)?;

    println!("Updated profile {profile:#?}");

    Ok(())
}
