//! bigipctl - Main entry point

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use console::style;
use log::{debug, info};
use std::process::ExitCode;

use bigipctl::{
    resolve_config_path, run_config_command, run_member_command, run_pool_command, Cli, Command,
    ConfigStore, Result, Session,
};

fn main() -> ExitCode {
    // Completers block on their own runtime, so this runs before ours exists
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting bigipctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: partition={}, pool={:?}, verbose={}, context={:?}, batch={}",
        cli.partition, cli.pool, cli.verbose, cli.context, cli.batch
    );

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(bigipctl::BigipError::from)
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(()) => {
            info!("Command completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Config { action } => {
            let store = ConfigStore::with_path(resolve_config_path(cli.config.as_deref()));
            run_config_command(&store, action, cli.batch)
        }
        Command::Pool { action } => {
            let session = Session::start(&cli).await?;
            run_pool_command(&session, action).await
        }
        Command::Member { action } => {
            let session = Session::start(&cli).await?;
            run_member_command(&session, action).await
        }
    }
}
