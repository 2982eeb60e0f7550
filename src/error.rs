//! Error type definitions.
//!
//! Every error here is command-local: the `Display` text is what gets printed
//! to the user, and none of them change the process exit code.

use thiserror::Error;

use crate::constants;

/// Failures talking to a remote HTTP service.
#[derive(Error, Debug)]
pub enum NetError {
    /// The HTTP client could not be constructed.
    #[error("{prefix}: {0}", prefix = constants::ERR_HTTP_CLIENT_BUILD_FAILED)]
    ClientBuild(String),

    /// Connection, TLS or protocol failure before a response arrived.
    #[error("{prefix}: {0}", prefix = constants::ERR_NETWORK_REQUEST_FAILED)]
    Request(String),

    /// The response arrived but its body could not be read.
    #[error("{prefix}: {0}", prefix = constants::ERR_READ_CONTENT_FAILED)]
    Read(String),
}

/// Failures of the `lookup` command.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No address was given on the command line.
    #[error("{msg}", msg = constants::ERR_IP_REQUIRED)]
    MissingAddress,

    /// The argument is not an IPv4 or IPv6 address.
    #[error("{msg}", msg = constants::ERR_IP_INVALID)]
    InvalidAddress(String),

    #[error(transparent)]
    Net(#[from] NetError),

    /// The response body is not the expected JSON object.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

/// Failures reading the operating system's interface table.
#[derive(Error, Debug)]
#[error("{prefix}: {0}", prefix = constants::ERR_ENUMERATE_INTERFACES)]
pub struct InterfaceError(#[from] pub std::io::Error);

/// Failures loading `config.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
