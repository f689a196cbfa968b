/// Configuration constants for the context document
pub mod context {
    /// Environment variable overriding the config directory
    pub const HOME_ENV_VAR: &str = "NOMAD_CONTEXT_HOME";

    /// Directory name under the platform config dir
    pub const DIR_NAME: &str = "nomad-context";

    /// Context document file name
    pub const FILE_NAME: &str = "config.json";
}

/// Configuration constants for the OS credential vault
pub mod secrets {
    /// Service identifier every token is stored under
    pub const SERVICE: &str = "nomad-context";
}

/// Configuration constants for the forwarded nomad process
pub mod nomad {
    /// Environment variable overriding the nomad binary
    pub const BINARY_ENV_VAR: &str = "NOMAD_CONTEXT_NOMAD_PATH";

    /// Binary invoked when no override is set
    pub const DEFAULT_BINARY: &str = "nomad";

    /// Address variable injected into the child environment
    pub const ADDR_ENV_VAR: &str = "NOMAD_ADDR";

    /// ACL token variable injected into the child environment
    pub const TOKEN_ENV_VAR: &str = "NOMAD_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable for the log level
    pub const LOG_ENV_VAR: &str = "NOMAD_CONTEXT_LOG";
}
