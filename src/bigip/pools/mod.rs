//! Pools module - list pools and read pool statistics

mod api;
mod commands;

pub(crate) use api::pool_path;
pub use commands::run_pool_command;
