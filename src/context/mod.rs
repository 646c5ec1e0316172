//! Context management module
//!
//! Named contexts bundle device connection parameters (host, user, password)
//! for switching between several BIG-IP devices.

mod commands;
mod models;
mod resolve;
mod store;

pub use commands::run_config_command;
pub use models::{mask_password, ConfigDocument, DeviceContext};
pub use resolve::{resolve_active_context, resolve_config_path};
pub use store::ConfigStore;
