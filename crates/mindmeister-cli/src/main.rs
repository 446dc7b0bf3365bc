/*
[INPUT]:  CLI arguments, YAML configuration file, environment overrides
[OUTPUT]: MindMeister API calls with results printed to stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mindmeister_cli::{CliConfig, TokenStore};
use mindmeister_client::AuthPerms;

#[derive(Parser, Debug)]
#[command(name = "mindmeister", version, about = "MindMeister API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "token-file", value_name = "PATH", global = true)]
    token_file: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactively write a configuration file
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the URL granting this application access
    AuthUrl {
        #[arg(long, value_enum, default_value_t = PermsArg::Read)]
        perms: PermsArg,
    },
    /// Exchange the frob from the browser flow for an auth token
    Callback { frob: String },
    /// Show the user behind the current token
    Whoami,
    /// Forget the stored token
    Logout,
    /// Call any API method, e.g. `call maps_get_map map_id=42`
    Call {
        name: String,
        #[arg(value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
    /// List maps
    Maps {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long = "per-page")]
        per_page: Option<u32>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PermsArg {
    Read,
    Write,
    Delete,
}

impl From<PermsArg> for AuthPerms {
    fn from(value: PermsArg) -> Self {
        match value {
            PermsArg::Read => AuthPerms::Read,
            PermsArg::Write => AuthPerms::Write,
            PermsArg::Delete => AuthPerms::Delete,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    if let Command::Init { output } = &args.command {
        let output = match output {
            Some(path) => path.clone(),
            None => CliConfig::default_path()?,
        };
        return cli::init::run_init(output);
    }

    let config = load_config(args.config_path.as_ref())?;
    let token_path = match args.token_file {
        Some(path) => path,
        None => config.token_path()?,
    };
    let store = TokenStore::new(token_path);
    debug!(base_url = %config.base_url, token_file = %store.path().display(), "configuration loaded");

    match args.command {
        Command::Init { .. } => unreachable!("handled before loading config"),
        Command::AuthUrl { perms } => cli::commands::auth_url(&config, perms.into()),
        Command::Callback { frob } => cli::commands::callback(&config, &store, &frob).await,
        Command::Logout => cli::commands::logout(&store).await,
        Command::Whoami => {
            let client = cli::commands::build_client(&config, &store).await?;
            cli::commands::whoami(&client).await
        }
        Command::Call { name, params } => {
            let client = cli::commands::build_client(&config, &store).await?;
            cli::commands::call(&client, &name, &params).await
        }
        Command::Maps { page, per_page } => {
            let client = cli::commands::build_client(&config, &store).await?;
            cli::commands::maps(&client, page, per_page).await
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => CliConfig::load(path, true),
        None => CliConfig::load(&CliConfig::default_path()?, false),
    };
    config.context("load config")
}
