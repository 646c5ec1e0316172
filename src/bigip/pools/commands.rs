//! Pool command handlers

use log::debug;

use crate::bigip::Session;
use crate::cli::PoolAction;
use crate::config::stats;
use crate::error::{BigipError, Result};
use crate::output::{print_lines, render_pool_stats, render_pools};
use crate::ui::{create_spinner, finish_spinner};

/// Dispatch pool subcommands
pub async fn run_pool_command(session: &Session, action: &PoolAction) -> Result<()> {
    let lines = match action {
        PoolAction::List => pool_list(session).await?,
        PoolAction::Stats(args) => vec![pool_stats(session, &args.pool_name).await?],
    };
    print_lines(&lines);
    Ok(())
}

/// Pools of the session partition, rendered one per line
async fn pool_list(session: &Session) -> Result<Vec<String>> {
    let spinner = create_spinner("Fetching pools...", session.is_batch());
    let result = session.client().get_pools().await;
    finish_spinner(spinner);

    let mut pools = result?;
    pools.retain(|p| p.partition == session.partition());
    debug!(
        "{} pools in partition '{}'",
        pools.len(),
        session.partition()
    );

    if pools.is_empty() {
        eprintln!("No pools found in partition '{}'", session.partition());
    }

    render_pools(&pools, session.is_verbose())
}

/// Current session count of a pool, or the whole stats table when verbose
async fn pool_stats(session: &Session, name: &str) -> Result<String> {
    let pool = session.load_pool(name).await?;
    let stats_bag = session.client().get_pool_stats(&pool).await?;

    if session.is_verbose() {
        return Ok(render_pool_stats(&stats_bag));
    }

    stats_bag
        .counter(stats::CUR_SESSIONS)
        .map(|v| v.to_string())
        .ok_or_else(|| {
            BigipError::NotFound(format!(
                "Statistic '{}' not reported for pool '{}'",
                stats::CUR_SESSIONS,
                name
            ))
        })
}
