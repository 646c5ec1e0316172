//! Member command arguments

use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;

use crate::complete::complete_members;
use crate::config::defaults;

/// Member subcommands (all require --pool)
#[derive(Subcommand, Debug)]
pub enum MemberAction {
    /// Show serverside statistics of members
    Stats(MemberStatsArgs),

    /// List members and their state
    #[command(visible_alias = "ls")]
    List,

    /// Disable a member (no new connections)
    Disable(MemberDisableArgs),

    /// Re-enable a disabled member
    Enable(MemberEnableArgs),

    /// Restart member connections (not implemented)
    Restart,
}

/// Arguments for 'member stats' subcommand
#[derive(Parser, Debug)]
pub struct MemberStatsArgs {
    /// Substring of member names to include, or "all"
    #[arg(add = ArgValueCompleter::new(complete_members))]
    pub member_name: Option<String>,

    /// Include members that are not up
    #[arg(long = "all", overrides_with = "noall")]
    pub show_all: bool,

    /// Only include members that are up (default)
    #[arg(long, overrides_with = "show_all")]
    pub noall: bool,
}

impl MemberStatsArgs {
    /// Name filter; empty matches every member
    pub fn filter(&self) -> &str {
        self.member_name.as_deref().unwrap_or("")
    }
}

/// Arguments for 'member disable' subcommand
#[derive(Parser, Debug)]
pub struct MemberDisableArgs {
    /// Member name (e.g. 10.0.0.1:80)
    #[arg(add = ArgValueCompleter::new(complete_members))]
    pub member: String,

    /// Wait until the member has no serverside connections left
    #[arg(long, overrides_with = "nowait")]
    pub wait: bool,

    /// Return right after disabling (default)
    #[arg(long, overrides_with = "wait")]
    pub nowait: bool,

    /// Maximum seconds to wait with --wait
    #[arg(long, default_value_t = defaults::WAIT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Arguments for 'member enable' subcommand
#[derive(Parser, Debug)]
pub struct MemberEnableArgs {
    /// Member name (e.g. 10.0.0.1:80)
    #[arg(add = ArgValueCompleter::new(complete_members))]
    pub member: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        action: MemberAction,
    }

    fn stats_args(args: &[&str]) -> MemberStatsArgs {
        let mut argv = vec!["test", "stats"];
        argv.extend_from_slice(args);
        match TestCli::parse_from(argv).action {
            MemberAction::Stats(args) => args,
            other => panic!("Expected Stats, got {:?}", other),
        }
    }

    #[test]
    fn test_member_stats_defaults() {
        let args = stats_args(&[]);
        assert_eq!(args.filter(), "");
        assert!(!args.show_all);
    }

    #[test]
    fn test_member_stats_all_flags() {
        assert!(stats_args(&["all", "--all"]).show_all);
        assert!(!stats_args(&["--all", "--noall"]).show_all);
        assert_eq!(stats_args(&["web"]).filter(), "web");
    }

    #[test]
    fn test_member_disable_defaults() {
        let cli = TestCli::parse_from(["test", "disable", "10.0.0.1:80"]);
        let MemberAction::Disable(args) = cli.action else {
            panic!("Expected Disable");
        };
        assert_eq!(args.member, "10.0.0.1:80");
        assert!(!args.wait);
        assert_eq!(args.timeout, defaults::WAIT_TIMEOUT_SECS);
    }

    #[test]
    fn test_member_disable_wait_nowait() {
        let cli = TestCli::parse_from(["test", "disable", "a", "--wait"]);
        let MemberAction::Disable(args) = cli.action else {
            panic!("Expected Disable");
        };
        assert!(args.wait);

        let cli = TestCli::parse_from(["test", "disable", "a", "--wait", "--nowait"]);
        let MemberAction::Disable(args) = cli.action else {
            panic!("Expected Disable");
        };
        assert!(!args.wait);
    }

    #[test]
    fn test_member_disable_requires_member() {
        assert!(TestCli::try_parse_from(["test", "disable"]).is_err());
    }

    #[test]
    fn test_member_restart_parses() {
        let cli = TestCli::parse_from(["test", "restart"]);
        assert!(matches!(cli.action, MemberAction::Restart));
    }
}
