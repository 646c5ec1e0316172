//! Per-invocation management session

use log::{debug, info};

use crate::cli::Cli;
use crate::context::{resolve_active_context, resolve_config_path, ConfigStore};
use crate::error::{BigipError, Result};

use super::{BigipClient, Pool};

/// Authenticated session shared by all command handlers
pub struct Session {
    client: BigipClient,
    partition: String,
    pool: Option<Pool>,
    verbose: bool,
    batch: bool,
}

impl Session {
    /// Wrap an existing client
    pub fn with_client(client: BigipClient, partition: &str) -> Self {
        Self {
            client,
            partition: partition.to_string(),
            pool: None,
            verbose: false,
            batch: true,
        }
    }

    /// Set verbose (raw) output
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set batch mode
    pub fn batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    /// Load config, authenticate against the active context and preload --pool
    pub async fn start(cli: &Cli) -> Result<Self> {
        let store = ConfigStore::with_path(resolve_config_path(cli.config.as_deref()));
        let config = store.load()?;
        let (name, ctx) = resolve_active_context(&config, cli.context.as_deref())?;

        let client = BigipClient::new(&ctx)?;
        let version = client.authenticate().await?;
        info!(
            "Connected to context '{}' ({}), TMOS {}",
            name,
            client.host(),
            version
        );

        let mut session = Self::with_client(client, &cli.partition)
            .verbose(cli.verbose)
            .batch(cli.batch);

        if let Some(pool_name) = &cli.pool {
            session.select_pool(pool_name).await?;
        }

        Ok(session)
    }

    /// Load a pool from the session partition
    pub async fn load_pool(&self, name: &str) -> Result<Pool> {
        debug!("Loading pool '{}' in partition '{}'", name, self.partition);
        self.client
            .get_pool(&self.partition, name)
            .await?
            .ok_or_else(|| {
                BigipError::NotFound(format!(
                    "Pool '{}' not found in partition '{}'",
                    name, self.partition
                ))
            })
    }

    /// Preload a pool for member commands
    pub async fn select_pool(&mut self, name: &str) -> Result<()> {
        self.pool = Some(self.load_pool(name).await?);
        Ok(())
    }

    /// The pool given by --pool
    pub fn require_pool(&self) -> Result<&Pool> {
        self.pool.as_ref().ok_or_else(|| {
            BigipError::Validation(
                "Member commands require a pool: use --pool <name>".to_string(),
            )
        })
    }

    pub fn client(&self) -> &BigipClient {
        &self.client
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_batch(&self) -> bool {
        self.batch
    }
}
