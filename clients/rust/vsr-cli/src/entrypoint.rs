use crate::{
    config::GlobalOptions,
    processor,
    profile::load_profile,
};
use anchor_client::Cluster;
use anyhow::Result;
use clap::Parser;
use solana_sdk::{commitment_config::CommitmentLevel, pubkey::Pubkey};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[clap(version = VERSION)]
pub struct Opts {
    #[clap(flatten)]
    pub cfg_override: GlobalOptions,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Report the total primary-mint deposits of every voter in a registrar,
    /// one `<voter> <authority> <total>` line per voter with a positive total.
    Deposited {
        /// Registrar to report on, defaults to the profile's registrar.
        registrar: Option<Pubkey>,
    },
    Registrar {
        #[clap(subcommand)]
        subcmd: RegistrarCommand,
    },
    Voter {
        #[clap(subcommand)]
        subcmd: VoterCommand,
    },
    Profile {
        #[clap(subcommand)]
        subcmd: ProfileCommand,
    },
}

#[derive(Debug, Parser)]
pub enum RegistrarCommand {
    Get {
        registrar: Option<Pubkey>,
    },
    GetAll {},
}

#[derive(Debug, Parser)]
pub enum VoterCommand {
    Get {
        /// Voter account address. May be omitted when --authority is given.
        voter: Option<Pubkey>,
        /// Derive the voter address from this authority and the registrar.
        #[clap(long, conflicts_with = "voter")]
        authority: Option<Pubkey>,
    },
    List {
        /// Restrict the listing to one registrar via an RPC-side filter.
        registrar: Option<Pubkey>,
    },
}

#[derive(Debug, Parser)]
pub enum ProfileCommand {
    Create {
        #[clap(long)]
        name: String,
        #[clap(long)]
        cluster: Cluster,
        #[clap(long)]
        rpc_url: String,
        #[clap(long)]
        program_id: Option<Pubkey>,
        #[clap(long)]
        commitment: Option<CommitmentLevel>,
        #[clap(long)]
        registrar: Option<Pubkey>,
    },
    Show,
    List,
    Set {
        name: String,
    },
    Update {
        name: String,
        #[clap(long)]
        cluster: Option<Cluster>,
        #[clap(long)]
        rpc_url: Option<String>,
        #[clap(long)]
        program_id: Option<Pubkey>,
        #[clap(long)]
        commitment: Option<CommitmentLevel>,
        #[clap(long)]
        registrar: Option<Pubkey>,
    },
}

pub fn entry(opts: Opts) -> Result<()> {
    env_logger::init();

    match opts.command {
        Command::Deposited { registrar } => deposited(registrar, &opts.cfg_override),
        Command::Registrar { subcmd } => registrar(subcmd, &opts.cfg_override),
        Command::Voter { subcmd } => voter(subcmd, &opts.cfg_override),
        Command::Profile { subcmd } => profile(subcmd),
    }
}

fn deposited(registrar: Option<Pubkey>, global_options: &GlobalOptions) -> Result<()> {
    let profile = load_profile()?;
    let config = profile.get_config(Some(global_options))?;
    let registrar = profile.get_registrar(registrar)?;

    processor::deposited(&config, registrar)
}

fn registrar(subcmd: RegistrarCommand, global_options: &GlobalOptions) -> Result<()> {
    let profile = load_profile()?;
    let config = profile.get_config(Some(global_options))?;

    match subcmd {
        RegistrarCommand::Get { registrar } => {
            processor::registrar_get(&config, profile.get_registrar(registrar)?)
        }
        RegistrarCommand::GetAll {} => processor::registrar_get_all(&config),
    }
}

fn voter(subcmd: VoterCommand, global_options: &GlobalOptions) -> Result<()> {
    let profile = load_profile()?;
    let config = profile.get_config(Some(global_options))?;

    match subcmd {
        VoterCommand::Get { voter, authority } => {
            processor::voter_get(&config, &profile, voter, authority)
        }
        VoterCommand::List { registrar } => {
            processor::voter_list(&config, registrar.or(profile.registrar))
        }
    }
}

fn profile(subcmd: ProfileCommand) -> Result<()> {
    match subcmd {
        ProfileCommand::Create {
            name,
            cluster,
            rpc_url,
            program_id,
            commitment,
            registrar,
        } => processor::create_profile(name, cluster, rpc_url, program_id, commitment, registrar),
        ProfileCommand::Show => processor::show_profile(),
        ProfileCommand::List => processor::list_profiles(),
        ProfileCommand::Set { name } => processor::set_profile(name),
        ProfileCommand::Update {
            name,
            cluster,
            rpc_url,
            program_id,
            commitment,
            registrar,
        } => processor::configure_profile(name, cluster, rpc_url, program_id, commitment, registrar),
    }
}
