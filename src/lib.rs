//! ipinfo - IP address information from the command line.
//!
//! Two reports share this crate:
//!
//! - `address`: local interfaces with one IPv4 and one IPv6 address each,
//!   optionally preceded by the host's public address.
//! - `lookup`: location and organization metadata for any IP address.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logger;
pub mod state;
pub mod theme;
