/// Errors the drift engine surfaces to its caller.
///
/// Drift itself is never an error; these only cover broken input contracts
/// and configuration that cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    #[error("malformed signature `{name}` at {file}:{line}: {reason}")]
    MalformedSignature {
        name: String,
        file: String,
        line: u32,
        reason: String,
    },

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
