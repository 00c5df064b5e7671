use thiserror::Error;

/// Errors raised while loading application configuration at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing required environment variable '{0}'")]
    MissingEnvVar(String),

    /// The listen address could not be parsed as host:port.
    #[error("Invalid listen address '{value}': {source}")]
    InvalidListenAddr {
        /// The configured address string.
        value: String,
        /// The underlying parse error.
        #[source]
        source: std::net::AddrParseError,
    },
}
