//! Pool command arguments

use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;

use crate::complete::complete_pools;

/// Pool subcommands
#[derive(Subcommand, Debug)]
pub enum PoolAction {
    /// List pools in the partition
    #[command(visible_alias = "ls")]
    List,

    /// Show the current session count of a pool
    Stats(PoolStatsArgs),
}

/// Arguments for 'pool stats' subcommand
#[derive(Parser, Debug)]
pub struct PoolStatsArgs {
    /// Pool name
    #[arg(add = ArgValueCompleter::new(complete_pools))]
    pub pool_name: String,
}
