//! Config command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use log::debug;

use crate::cli::{ConfigAction, SetContextArgs};
use crate::error::{BigipError, Result};
use crate::output::render_yaml;
use crate::ui::prompt_password;

use super::models::{ConfigDocument, DeviceContext};
use super::store::ConfigStore;

/// Dispatch config subcommands
pub fn run_config_command(store: &ConfigStore, action: &ConfigAction, batch: bool) -> Result<()> {
    debug!("Using config file {}", store.path().display());
    match action {
        ConfigAction::Context(args) => run_context_use(store, &args.name),
        ConfigAction::SetContext(args) => run_context_set(store, args, batch),
        ConfigAction::GetContexts => run_context_list(store),
        ConfigAction::CurrentContext => run_context_show(store),
        ConfigAction::DeleteContext(args) => run_context_delete(store, &args.name),
        ConfigAction::View => run_config_view(store),
    }
}

/// Switch the active context
fn run_context_use(store: &ConfigStore, name: &str) -> Result<()> {
    store.set_current(name)?;
    println!("Switched to context '{}'", name);
    Ok(())
}

/// List all contexts
fn run_context_list(store: &ConfigStore) -> Result<()> {
    let config = store.load()?;

    if config.hosts.is_empty() {
        println!("No contexts configured.");
        println!("\nUse 'bigipctl config set-context <name> --host <host> --user <user>' to create one.");
        return Ok(());
    }

    println!("{}", contexts_table(&config));
    Ok(())
}

fn contexts_table(config: &ConfigDocument) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("HOST"),
            Cell::new("USER"),
        ]);

    for (name, ctx) in &config.hosts {
        let is_current = config.current.as_deref() == Some(name.as_str());
        table.add_row(vec![
            Cell::new(if is_current { "*" } else { "" }),
            Cell::new(name),
            Cell::new(&ctx.host),
            Cell::new(&ctx.user),
        ]);
    }

    table
}

/// Show the current context details
fn run_context_show(store: &ConfigStore) -> Result<()> {
    let config = store.load()?;

    let current_name = config.current.as_ref().ok_or_else(|| {
        BigipError::Config(
            "No current context set. Use 'bigipctl config context <name>' to set one."
                .to_string(),
        )
    })?;

    let ctx = config.hosts.get(current_name).ok_or_else(|| {
        BigipError::Config(format!(
            "Current context '{}' not found in config. Available: {}",
            current_name,
            config.available()
        ))
    })?;

    println!("{}", describe_context(current_name, ctx));
    Ok(())
}

fn describe_context(name: &str, ctx: &DeviceContext) -> String {
    let masked = ctx.masked();
    format!(
        "Current context: {}\n  Host:       {}\n  User:       {}\n  Password:   {}\n  Verify TLS: {}",
        name, masked.host, masked.user, masked.password, masked.verify_tls
    )
}

/// Create or update a named context
fn run_context_set(store: &ConfigStore, args: &SetContextArgs, batch: bool) -> Result<()> {
    let mut config = store.load_or_default()?;

    if let Some(existing) = config.hosts.get_mut(&args.name) {
        merge_context(existing, args);
        store.save(&config)?;
        println!("Updated context '{}'", args.name);
        return Ok(());
    }

    let (host, user) = match (&args.host, &args.user) {
        (Some(host), Some(user)) => (host.clone(), user.clone()),
        _ => {
            return Err(BigipError::Validation(format!(
                "--host and --user are required when creating a new context. Usage:\n  \
                 bigipctl config set-context {} --host <HOST> --user <USER> [--password <PASSWORD>]",
                args.name
            )))
        }
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_password(&args.name, batch)?,
    };

    config.hosts.insert(
        args.name.clone(),
        DeviceContext {
            host,
            user,
            password,
            verify_tls: args.tls_setting().unwrap_or(false),
            extra: Default::default(),
        },
    );

    // First context becomes current
    if config.current.is_none() && config.hosts.len() == 1 {
        config.current = Some(args.name.clone());
    }

    store.save(&config)?;
    println!("Created context '{}'", args.name);
    Ok(())
}

fn merge_context(existing: &mut DeviceContext, args: &SetContextArgs) {
    if let Some(host) = &args.host {
        existing.host = host.clone();
    }
    if let Some(user) = &args.user {
        existing.user = user.clone();
    }
    if let Some(password) = &args.password {
        existing.password = password.clone();
    }
    if let Some(verify) = args.tls_setting() {
        existing.verify_tls = verify;
    }
}

/// Delete a named context
fn run_context_delete(store: &ConfigStore, name: &str) -> Result<()> {
    let mut config = store.load()?;

    if config.hosts.remove(name).is_none() {
        return Err(BigipError::NotFound(format!(
            "Context '{}' not found. Available contexts: {}",
            name,
            config.available()
        )));
    }

    if config.current.as_deref() == Some(name) {
        config.current = None;
    }

    store.save(&config)?;
    println!("Deleted context '{}'", name);
    Ok(())
}

/// Print the config document with passwords masked
fn run_config_view(store: &ConfigStore) -> Result<()> {
    println!("{}", masked_document(&store.load()?)?);
    Ok(())
}

fn masked_document(config: &ConfigDocument) -> Result<String> {
    let masked = ConfigDocument {
        hosts: config
            .hosts
            .iter()
            .map(|(name, ctx)| (name.clone(), ctx.masked()))
            .collect(),
        current: config.current.clone(),
        extra: config.extra.clone(),
    };
    render_yaml(&masked)
}
