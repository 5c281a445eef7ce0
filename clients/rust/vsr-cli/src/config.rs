use {
    anchor_client::{Client, Cluster, Program},
    clap::Parser,
    solana_sdk::{
        commitment_config::{CommitmentConfig, CommitmentLevel},
        pubkey::Pubkey,
        signature::Keypair,
    },
    std::rc::Rc,
};

#[derive(Default, Debug, Parser)]
pub struct GlobalOptions {
    /// RPC endpoint override.
    #[clap(global = true, long = "rpc-url")]
    pub rpc_url: Option<String>,

    /// Commitment level override.
    #[clap(global = true, long = "commitment")]
    pub commitment: Option<CommitmentLevel>,
}

pub struct Config {
    pub cluster: Cluster,
    pub program_id: Pubkey,
    pub commitment: CommitmentConfig,
    pub client: Client<Rc<Keypair>>,
    pub vsr_program: Program<Rc<Keypair>>,
}
