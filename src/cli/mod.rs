//! CLI argument parsing

mod config;
mod member;
mod pool;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use std::path::PathBuf;

use crate::complete::complete_pools;
use crate::config::{context as context_config, defaults};

pub use config::{ConfigAction, DeleteContextArgs, SetContextArgs, UseContextArgs};
pub use member::{MemberAction, MemberDisableArgs, MemberEnableArgs, MemberStatsArgs};
pub use pool::{PoolAction, PoolStatsArgs};

/// CLI tool for F5 BIG-IP devices
#[derive(Parser, Debug)]
#[command(name = "bigipctl")]
#[command(version, disable_version_flag = true)]
#[command(about = "CLI tool for F5 BIG-IP devices", long_about = None)]
#[command(after_help = "SHELL COMPLETION:\n  \
        source <(COMPLETE=bash bigipctl)   # bash\n  \
        source <(COMPLETE=zsh bigipctl)    # zsh\n  \
        COMPLETE=fish bigipctl | source    # fish")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Administrative partition
    #[arg(long, global = true, default_value = defaults::PARTITION)]
    pub partition: String,

    /// Pool to operate on (loaded before the command runs)
    #[arg(long, global = true, add = ArgValueCompleter::new(complete_pools))]
    pub pool: Option<String>,

    /// Print raw resource representations
    #[arg(short = 'v', long, global = true, overrides_with = "noverbose")]
    pub verbose: bool,

    /// Print formatted output (default)
    #[arg(short = 'V', long, global = true, overrides_with = "verbose")]
    pub noverbose: bool,

    /// Configuration file path
    #[arg(long, global = true, env = context_config::CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Context to use instead of the current one
    #[arg(long, global = true, env = context_config::CONTEXT_ENV_VAR)]
    pub context: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// Top-level command groups
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage device contexts
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Inspect pools
    #[command(visible_alias = "pools")]
    Pool {
        #[command(subcommand)]
        action: PoolAction,
    },

    /// Inspect and manage members of the pool given by --pool
    #[command(visible_alias = "members")]
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },
}
