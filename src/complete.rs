//! Dynamic shell completion
//!
//! Completers run inside the `COMPLETE=<shell>` invocation, before the main
//! runtime exists, so each lookup builds its own current-thread runtime.

use clap_complete::engine::CompletionCandidate;
use log::debug;
use std::ffi::OsStr;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::bigip::{BigipClient, BigipResource, Member, Pool};
use crate::config::{context as context_config, defaults};
use crate::context::{resolve_active_context, resolve_config_path, ConfigStore};
use crate::error::{BigipError, Result};

/// Complete pool names
pub fn complete_pools(current: &OsStr) -> Vec<CompletionCandidate> {
    let args = command_line();
    candidates(filter_names(lookup_pools(&args), &current.to_string_lossy()))
}

/// Complete names of up members of the pool given by --pool
pub fn complete_members(current: &OsStr) -> Vec<CompletionCandidate> {
    let args = command_line();
    candidates(filter_names(lookup_members(&args), &current.to_string_lossy()))
}

/// Complete context names from the config file
pub fn complete_contexts(current: &OsStr) -> Vec<CompletionCandidate> {
    let args = command_line();
    candidates(filter_names(lookup_contexts(&args), &current.to_string_lossy()))
}

/// Names containing `current`. A failed lookup completes to nothing.
fn filter_names(lookup: Result<Vec<String>>, current: &str) -> Vec<String> {
    match lookup {
        Ok(names) => names.into_iter().filter(|n| n.contains(current)).collect(),
        Err(e) => {
            debug!("Completion lookup failed: {}", e);
            Vec::new()
        }
    }
}

fn candidates(names: Vec<String>) -> Vec<CompletionCandidate> {
    names.into_iter().map(CompletionCandidate::new).collect()
}

fn command_line() -> Vec<String> {
    std::env::args().collect()
}

/// Value of `--flag X` or `--flag=X`; the last occurrence wins
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{}=", flag);
    let mut found = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            if let Some(value) = iter.next() {
                found = Some(value.clone());
            }
        } else if let Some(value) = arg.strip_prefix(&prefix) {
            found = Some(value.to_string());
        }
    }
    found
}

fn config_store(args: &[String]) -> ConfigStore {
    let explicit = flag_value(args, "--config")
        .or_else(|| std::env::var(context_config::CONFIG_ENV_VAR).ok())
        .map(PathBuf::from);
    ConfigStore::with_path(resolve_config_path(explicit.as_deref()))
}

fn completion_client(args: &[String]) -> Result<BigipClient> {
    let config = config_store(args).load()?;
    let explicit = flag_value(args, "--context")
        .or_else(|| std::env::var(context_config::CONTEXT_ENV_VAR).ok());
    let (_, ctx) = resolve_active_context(&config, explicit.as_deref())?;
    BigipClient::with_timeout(&ctx, Duration::from_secs(defaults::COMPLETION_TIMEOUT_SECS))
}

fn partition(args: &[String]) -> String {
    flag_value(args, "--partition").unwrap_or_else(|| defaults::PARTITION.to_string())
}

fn block_on<F: Future<Output = Result<T>>, T>(future: F) -> Result<T> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| BigipError::Config(format!("Failed to start completion runtime: {}", e)))?;
    runtime.block_on(future)
}

fn lookup_contexts(args: &[String]) -> Result<Vec<String>> {
    let config = config_store(args).load()?;
    Ok(config.hosts.into_keys().collect())
}

fn lookup_pools(args: &[String]) -> Result<Vec<String>> {
    let client = completion_client(args)?;
    let partition = partition(args);
    block_on(async move { pool_names(&client, &partition).await })
}

fn lookup_members(args: &[String]) -> Result<Vec<String>> {
    let pool_name = flag_value(args, "--pool")
        .ok_or_else(|| BigipError::Validation("no --pool on the command line".to_string()))?;
    let client = completion_client(args)?;
    let partition = partition(args);
    block_on(async move { up_member_names(&client, &partition, &pool_name).await })
}

/// Names of the pools in `partition`
async fn pool_names(client: &BigipClient, partition: &str) -> Result<Vec<String>> {
    let pools = client.get_pools().await?;
    Ok(pools
        .into_iter()
        .filter(|p| p.partition() == partition)
        .map(|p| p.name)
        .collect())
}

/// Names of the up members of a pool
async fn up_member_names(
    client: &BigipClient,
    partition: &str,
    pool_name: &str,
) -> Result<Vec<String>> {
    let pool: Pool = client
        .get_pool(partition, pool_name)
        .await?
        .ok_or_else(|| BigipError::NotFound(format!("Pool '{}' not found", pool_name)))?;
    let members = client.get_members(&pool).await?;
    Ok(members
        .into_iter()
        .filter(Member::is_up)
        .map(|m| m.name)
        .collect())
}
