//! Config management CLI arguments

use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;

use crate::complete::complete_contexts;

/// Config subcommands for managing device contexts
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Switch the current context
    #[command(visible_alias = "use-context")]
    Context(UseContextArgs),

    /// Create or update a context entry
    #[command(name = "set-context")]
    SetContext(SetContextArgs),

    /// List all contexts
    #[command(name = "get-contexts")]
    GetContexts,

    /// Display the current context
    #[command(name = "current-context")]
    CurrentContext,

    /// Delete a context from the config file
    #[command(name = "delete-context")]
    DeleteContext(DeleteContextArgs),

    /// Display config file contents (passwords masked)
    View,
}

/// Arguments for 'config context' subcommand
#[derive(Parser, Debug)]
pub struct UseContextArgs {
    /// Context name to activate
    #[arg(add = ArgValueCompleter::new(complete_contexts))]
    pub name: String,
}

/// Arguments for 'config set-context' subcommand
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        bigipctl config set-context prod --host lb1.corp.com --user admin\n  \
        bigipctl config set-context lab --host https://10.0.0.5:8443 --user admin --password admin\n  \
        bigipctl config set-context prod --verify-tls   # update existing context")]
pub struct SetContextArgs {
    /// Context name
    #[arg(add = ArgValueCompleter::new(complete_contexts))]
    pub name: String,
    /// Management address (host[:port] or URL)
    #[arg(long)]
    pub host: Option<String>,
    /// Management user
    #[arg(long)]
    pub user: Option<String>,
    /// Management password (prompted for when creating a context without it)
    #[arg(long)]
    pub password: Option<String>,
    /// Verify the device TLS certificate
    #[arg(long, overrides_with = "no_verify_tls")]
    pub verify_tls: bool,
    /// Skip TLS certificate verification
    #[arg(long, overrides_with = "verify_tls")]
    pub no_verify_tls: bool,
}

impl SetContextArgs {
    /// Requested TLS verification setting, if either flag was given
    pub fn tls_setting(&self) -> Option<bool> {
        if self.verify_tls {
            Some(true)
        } else if self.no_verify_tls {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for 'config delete-context' subcommand
#[derive(Parser, Debug)]
pub struct DeleteContextArgs {
    /// Context name to delete
    #[arg(add = ArgValueCompleter::new(complete_contexts))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        action: ConfigAction,
    }

    #[test]
    fn test_context_args_parsing() {
        let cli = TestCli::parse_from(["test", "context", "dev"]);
        match cli.action {
            ConfigAction::Context(args) => assert_eq!(args.name, "dev"),
            other => panic!("Expected Context, got {:?}", other),
        }
    }

    #[test]
    fn test_use_context_alias() {
        let cli = TestCli::parse_from(["test", "use-context", "dev"]);
        assert!(matches!(cli.action, ConfigAction::Context(_)));
    }

    #[test]
    fn test_context_requires_name() {
        assert!(TestCli::try_parse_from(["test", "context"]).is_err());
    }

    #[test]
    fn test_set_context_tls_setting() {
        let cli = TestCli::parse_from(["test", "set-context", "prod", "--host", "h1"]);
        let ConfigAction::SetContext(args) = cli.action else {
            panic!("Expected SetContext");
        };
        assert_eq!(args.host, Some("h1".to_string()));
        assert_eq!(args.tls_setting(), None);

        let cli = TestCli::parse_from(["test", "set-context", "prod", "--verify-tls"]);
        let ConfigAction::SetContext(args) = cli.action else {
            panic!("Expected SetContext");
        };
        assert_eq!(args.tls_setting(), Some(true));

        let cli = TestCli::parse_from([
            "test",
            "set-context",
            "prod",
            "--verify-tls",
            "--no-verify-tls",
        ]);
        let ConfigAction::SetContext(args) = cli.action else {
            panic!("Expected SetContext");
        };
        assert_eq!(args.tls_setting(), Some(false));
    }
}
