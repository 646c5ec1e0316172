/// Configuration constants for the iControl REST API
pub mod api {
    /// Local traffic manager root
    pub const LTM_BASE: &str = "/mgmt/tm/ltm";

    /// Pool collection endpoint (relative to LTM_BASE)
    pub const POOLS: &str = "pool";

    /// Member sub-collection of a pool
    pub const MEMBERS: &str = "members";

    /// Stats sub-resource
    pub const STATS: &str = "stats";

    /// Endpoint used to verify credentials at startup
    pub const SYS_VERSION: &str = "/mgmt/tm/sys/version";

    /// Maximum number of concurrent member stats requests
    pub const MAX_CONCURRENT_STATS_REQUESTS: usize = 8;
}

/// Configuration constants for the context file
pub mod context {
    /// Config file name, looked up relative to the working directory first
    pub const FILE_NAME: &str = "bigip.yaml";

    /// Fallback config directory (relative to HOME)
    pub const DIR_NAME: &str = ".bigip";

    /// Environment variable overriding the config file path
    pub const CONFIG_ENV_VAR: &str = "BIGIP_CONFIG";

    /// Environment variable overriding the active context
    pub const CONTEXT_ENV_VAR: &str = "BIGIP_CONTEXT";
}

/// Statistic names read by commands
pub mod stats {
    /// Category prefix of member stats shown by `member stats`
    pub const SERVERSIDE_PREFIX: &str = "serverside";

    /// Pool metric printed by `pool stats`
    pub const CUR_SESSIONS: &str = "curSessions";

    /// Member metric polled by `member disable --wait`
    pub const SERVERSIDE_CUR_CONNS: &str = "serverside.curConns";
}

/// Default values for CLI
pub mod defaults {
    /// Default administrative partition
    pub const PARTITION: &str = "Common";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Keyword matching every member in `member stats`
    pub const ALL_MEMBERS: &str = "all";

    /// Seconds between connection-drain polls
    pub const WAIT_POLL_SECS: u64 = 2;

    /// Maximum seconds to wait for connections to drain
    pub const WAIT_TIMEOUT_SECS: u64 = 300;

    /// Request timeout for shell completion lookups
    pub const COMPLETION_TIMEOUT_SECS: u64 = 5;

    /// Request timeout for regular commands
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout for all requests
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
