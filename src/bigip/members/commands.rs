//! Member command handlers

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::bigip::{BigipClient, Member, MemberSession, Pool, Session};
use crate::cli::{MemberAction, MemberDisableArgs, MemberEnableArgs, MemberStatsArgs};
use crate::config::{api, defaults, stats};
use crate::error::{BigipError, Result};
use crate::output::{print_lines, render_member_stats, render_members, MemberStatsRow};
use crate::ui::{create_spinner, finish_spinner, update_spinner};

/// Dispatch member subcommands
pub async fn run_member_command(session: &Session, action: &MemberAction) -> Result<()> {
    let lines = match action {
        MemberAction::Stats(args) => vec![member_stats(session, args).await?],
        MemberAction::List => member_list(session).await?,
        MemberAction::Disable(args) => vec![member_disable(session, args).await?],
        MemberAction::Enable(args) => vec![member_enable(session, args).await?],
        MemberAction::Restart => {
            return Err(BigipError::Unimplemented("member restart".to_string()));
        }
    };
    print_lines(&lines);
    Ok(())
}

/// Members matching a name filter and availability.
///
/// A member matches when its name contains `filter` (case-sensitive), or
/// always when `filter` is "all" in any case. Members that are not up are
/// dropped unless `show_all` is set.
pub fn select_members<'a>(members: &'a [Member], filter: &str, show_all: bool) -> Vec<&'a Member> {
    let match_all = filter.eq_ignore_ascii_case(defaults::ALL_MEMBERS);
    members
        .iter()
        .filter(|m| match_all || m.name.contains(filter))
        .filter(|m| show_all || m.is_up())
        .collect()
}

/// Serverside stats table of the selected members
async fn member_stats(session: &Session, args: &MemberStatsArgs) -> Result<String> {
    let pool = session.require_pool()?;
    let client = session.client();

    let spinner = create_spinner(
        &format!("Fetching member stats for pool '{}'...", pool.name),
        session.is_batch(),
    );
    let result = collect_member_stats(client, pool, args.filter(), args.show_all).await;
    finish_spinner(spinner);

    Ok(render_member_stats(&result?))
}

async fn collect_member_stats(
    client: &BigipClient,
    pool: &Pool,
    filter: &str,
    show_all: bool,
) -> Result<Vec<MemberStatsRow>> {
    let members = client.get_members(pool).await?;
    let selected = select_members(&members, filter, show_all);
    debug!(
        "{} of {} members of '{}' selected by filter '{}' (all states: {})",
        selected.len(),
        members.len(),
        pool.name,
        filter,
        show_all
    );

    // buffered() keeps enumeration order
    stream::iter(selected)
        .map(|member| async move {
            let bag = client.get_member_stats(pool, member).await?;
            Ok::<_, BigipError>(MemberStatsRow {
                member: member.name.clone(),
                values: bag.category(stats::SERVERSIDE_PREFIX),
            })
        })
        .buffered(api::MAX_CONCURRENT_STATS_REQUESTS)
        .try_collect()
        .await
}

/// `name [state]` lines, coloured by state
async fn member_list(session: &Session) -> Result<Vec<String>> {
    let pool = session.require_pool()?;
    let members = session.client().get_members(pool).await?;

    if members.is_empty() {
        eprintln!("Pool '{}' has no members", pool.name);
    }

    Ok(render_members(&members))
}

/// Find a member of the pool by exact name
async fn find_member(client: &BigipClient, pool: &Pool, name: &str) -> Result<Member> {
    client
        .get_members(pool)
        .await?
        .into_iter()
        .find(|m| m.name == name)
        .ok_or_else(|| {
            BigipError::Validation(format!("Member {} on pool {} not found", name, pool.name))
        })
}

/// Change the session state of a pool member and return it
async fn set_session(session: &Session, name: &str, state: MemberSession) -> Result<Member> {
    let pool = session.require_pool()?;
    let client = session.client();

    let member = find_member(client, pool, name).await?;
    client.set_member_session(pool, &member, state).await?;
    info!("Set session of '{}' in '{}' to {}", name, pool.name, state.as_str());

    Ok(member)
}

fn confirmation(member: &Member, pool: &Pool, state: MemberSession) -> String {
    format!("Member {} on pool {} {}", member.name, pool.name, state.verb())
}

async fn member_enable(session: &Session, args: &MemberEnableArgs) -> Result<String> {
    let member = set_session(session, &args.member, MemberSession::Enabled).await?;
    Ok(confirmation(&member, session.require_pool()?, MemberSession::Enabled))
}

async fn member_disable(session: &Session, args: &MemberDisableArgs) -> Result<String> {
    let member = set_session(session, &args.member, MemberSession::Disabled).await?;
    let pool = session.require_pool()?;

    if args.wait {
        let spinner = create_spinner(
            &format!("Waiting for connections to {} to drain...", member.name),
            session.is_batch(),
        );
        let result = wait_for_drain(
            session.client(),
            pool,
            &member,
            Duration::from_secs(args.timeout),
            Duration::from_secs(defaults::WAIT_POLL_SECS),
            &spinner,
        )
        .await;
        finish_spinner(spinner);
        result?;
    }

    Ok(confirmation(&member, pool, MemberSession::Disabled))
}

/// Poll serverside.curConns until it reaches zero or the timeout elapses
async fn wait_for_drain(
    client: &BigipClient,
    pool: &Pool,
    member: &Member,
    timeout: Duration,
    interval: Duration,
    spinner: &Option<indicatif::ProgressBar>,
) -> Result<()> {
    let deadline = Instant::now() + timeout;

    loop {
        let conns = client
            .get_member_stats(pool, member)
            .await?
            .counter(stats::SERVERSIDE_CUR_CONNS)
            .unwrap_or(0);
        debug!("{} has {} serverside connections", member.name, conns);

        if conns == 0 {
            return Ok(());
        }

        if Instant::now() + interval > deadline {
            return Err(BigipError::Timeout(format!(
                "member {} still has {} connections after {}s",
                member.name,
                conns,
                timeout.as_secs()
            )));
        }

        update_spinner(
            spinner,
            &format!("Waiting for {} connections to {} to drain...", conns, member.name),
        );
        sleep(interval).await;
    }
}
