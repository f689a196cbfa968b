use std::fmt;

/// Custom error type for context operations
#[derive(Debug)]
pub enum ContextError {
    /// Bad user input (empty name, missing address)
    InvalidArgument(String),
    /// No context with the given name exists
    ContextNotFound(String),
    /// No current context is set
    NoCurrentContext,
    /// No token stored for the given context
    TokenNotFound(String),
    /// Failed to locate, read, parse or write the context document
    Config(String),
    /// Credential vault failure other than a missing entry
    SecretStore(String),
    /// Interactive input failed
    Prompt(String),
    /// Forwarded command could not run or exited unsuccessfully
    Command(String),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::InvalidArgument(msg) => write!(f, "{}", msg),
            ContextError::ContextNotFound(name) => write!(f, "context not found: {}", name),
            ContextError::NoCurrentContext => write!(f, "no current context configured"),
            ContextError::TokenNotFound(name) => {
                write!(f, "token not found for context: {}", name)
            }
            ContextError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ContextError::SecretStore(msg) => write!(f, "Secret store error: {}", msg),
            ContextError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            ContextError::Command(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ContextError {}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        ContextError::Config(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ContextError {
    fn from(err: std::io::Error) -> Self {
        ContextError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for ContextError {
    fn from(err: dialoguer::Error) -> Self {
        ContextError::Prompt(err.to_string())
    }
}

/// Result type alias for context operations
pub type Result<T> = std::result::Result<T, ContextError>;
