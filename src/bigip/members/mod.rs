//! Members module - list, inspect and toggle pool members

mod api;
mod commands;

pub use commands::{run_member_command, select_members};
