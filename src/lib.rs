//! bigipctl - Manage F5 BIG-IP pools and members from the command line
//!
//! A CLI tool to inspect LTM pools, read member statistics and take members
//! in and out of service over iControl REST.
//!
//! # Features
//!
//! - Named device contexts stored in a YAML config file
//! - Pool listing and session statistics
//! - Member listing, serverside statistics and enable/disable with drain wait
//! - Dynamic shell completion of pools, members and contexts
//!
//! # Example
//!
//! ```bash
//! # Register a device
//! bigipctl config set-context prod --host lb1.corp.com --user admin
//!
//! # List pools in the Common partition
//! bigipctl pool list
//!
//! # Serverside stats of every up member of a pool
//! bigipctl --pool web-pool member stats all
//!
//! # Take a member out of service and wait for it to drain
//! bigipctl --pool web-pool member disable 10.0.0.1:80 --wait
//! ```

pub mod bigip;
pub mod cli;
pub mod complete;
pub mod config;
pub mod context;
pub mod error;
pub mod output;
pub mod ui;

pub use bigip::{
    run_member_command, run_pool_command, BigipClient, BigipResource, Member, MemberSession,
    MemberState, Pool, Session, StatsBag,
};
pub use cli::{Cli, Command, ConfigAction, MemberAction, PoolAction};
pub use context::{
    resolve_active_context, resolve_config_path, run_config_command, ConfigDocument, ConfigStore,
    DeviceContext,
};
pub use error::{BigipError, Result};
