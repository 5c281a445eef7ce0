use {
    crate::config::{Config, GlobalOptions},
    anchor_client::{Client, Cluster},
    anyhow::{anyhow, bail, Result},
    dirs::home_dir,
    serde::{Deserialize, Serialize},
    solana_sdk::{
        commitment_config::{CommitmentConfig, CommitmentLevel},
        pubkey,
        pubkey::Pubkey,
        signature::Keypair,
    },
    std::{fs, path::PathBuf, rc::Rc},
};

#[derive(Serialize, Deserialize, Clone)]
pub struct Profile {
    pub name: String,
    pub cluster: Cluster,
    pub rpc_url: String,
    pub program_id: Option<Pubkey>,
    pub commitment: Option<CommitmentLevel>,
    pub registrar: Option<Pubkey>,
}

#[derive(Serialize, Deserialize)]
pub struct CliConfig {
    pub profile_name: String,
}

impl Profile {
    pub fn new(
        name: String,
        cluster: Cluster,
        rpc_url: String,
        program_id: Option<Pubkey>,
        commitment: Option<CommitmentLevel>,
        registrar: Option<Pubkey>,
    ) -> Self {
        Profile {
            name,
            cluster,
            rpc_url,
            program_id,
            commitment,
            registrar,
        }
    }

    pub fn get_config(&self, global_options: Option<&GlobalOptions>) -> Result<Config> {
        let cluster = self.cluster.clone();
        let program_id = match self.program_id {
            Some(pid) => pid,
            None => match cluster {
                Cluster::Mainnet | Cluster::Devnet => {
                    pubkey!("vsr2nfGVNHmSY8uxoBGqq8AQbwz3JwaEaHqGbsTPXqQ")
                }
                _ => bail!(
                    "cluster {:?} does not have a default voter-stake-registry program id, set one with `vsr profile update --program-id`",
                    cluster
                ),
            },
        };

        let rpc_url = global_options
            .and_then(|options| options.rpc_url.clone())
            .unwrap_or_else(|| self.rpc_url.clone());
        let commitment = CommitmentConfig {
            commitment: global_options
                .and_then(|options| options.commitment)
                .or(self.commitment)
                .unwrap_or(CommitmentLevel::Confirmed),
        };

        // The tool never signs anything, an ephemeral keypair satisfies the
        // client's signer requirement.
        let ws_url = rpc_url.clone();
        let client = Client::new_with_options(
            Cluster::Custom(rpc_url, ws_url),
            Rc::new(Keypair::new()),
            commitment,
        );
        let vsr_program = client.program(program_id)?;

        Ok(Config {
            cluster,
            program_id,
            commitment,
            client,
            vsr_program,
        })
    }

    pub fn config(
        &mut self,
        cluster: Option<Cluster>,
        rpc_url: Option<String>,
        program_id: Option<Pubkey>,
        commitment: Option<CommitmentLevel>,
        registrar: Option<Pubkey>,
    ) -> Result<()> {
        if let Some(cluster) = cluster {
            self.cluster = cluster;
        }

        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }

        if let Some(program_id) = program_id {
            self.program_id = Some(program_id);
        }

        if let Some(commitment) = commitment {
            self.commitment = Some(commitment);
        }

        if let Some(registrar) = registrar {
            self.registrar = Some(registrar);
        }

        self.write_to_file()?;

        Ok(())
    }

    pub fn get_registrar(&self, registrar: Option<Pubkey>) -> Result<Pubkey> {
        registrar.or(self.registrar).ok_or_else(|| {
            anyhow!(
                "no registrar set for profile \"{}\", pass one as an argument or run `vsr profile update --registrar`",
                self.name
            )
        })
    }

    fn write_to_file(&self) -> Result<()> {
        let cli_config_dir = get_cli_config_dir();
        let cli_profiles_dir = cli_config_dir.join("profiles");
        let profile_file = cli_profiles_dir.join(self.name.clone() + ".json");

        fs::write(profile_file, serde_json::to_string(&self)?)?;

        Ok(())
    }
}

pub fn load_profile() -> Result<Profile> {
    let cli_config_dir = get_cli_config_dir();
    let cli_config_file = cli_config_dir.join("config.json");

    if !cli_config_file.exists() {
        return Err(anyhow!("Profiles not configured, run `vsr profile create`"));
    }

    let cli_config = fs::read_to_string(&cli_config_file)?;
    let cli_config: CliConfig = serde_json::from_str(&cli_config)?;

    let profile_file = cli_config_dir
        .join("profiles")
        .join(format!("{}.json", cli_config.profile_name));

    if !profile_file.exists() {
        return Err(anyhow!(
            "Profile {} does not exist",
            cli_config.profile_name
        ));
    }

    let profile = fs::read_to_string(&profile_file)?;
    let profile: Profile = serde_json::from_str(&profile)?;

    Ok(profile)
}

pub fn load_profile_by_name(name: &str) -> Result<Profile> {
    let cli_config_dir = get_cli_config_dir();
    let profile_file = cli_config_dir.join("profiles").join(format!("{name}.json"));

    if !profile_file.exists() {
        return Err(anyhow!("Profile {} does not exist", name));
    }

    let profile = fs::read_to_string(&profile_file)?;
    let profile: Profile = serde_json::from_str(&profile)?;

    Ok(profile)
}

pub fn get_cli_config_dir() -> PathBuf {
    home_dir()
        .expect("$HOME not set")
        .as_path()
        .join(".config/vsr-cli")
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = self.get_config(None).map_err(|_| std::fmt::Error)?;
        write!(
            f,
            r#"
Profile:
    Name: {}
    Program: {}
    Registrar: {}
    Cluster: {}
    Rpc URL: {}
    Commitment: {}
        "#,
            self.name,
            config.program_id,
            self.registrar
                .map(|x| x.to_string())
                .unwrap_or_else(|| "None".to_owned()),
            self.cluster,
            self.rpc_url,
            config.commitment.commitment,
        )?;

        Ok(())
    }
}
