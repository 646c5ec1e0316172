//! BIG-IP iControl REST client module
//!
//! This module provides the REST client, the per-invocation session and the
//! pool and member command handlers.

mod client;
pub mod members;
mod models;
pub mod pools;
mod session;
mod stats;
pub mod traits;

pub use client::BigipClient;
pub use members::{run_member_command, select_members};
pub use models::{ListResponse, Member, MemberSession, MemberState, Pool};
pub use pools::run_pool_command;
pub use session::Session;
pub use stats::{StatValue, StatsBag};
pub use traits::BigipResource;
