//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout ipinfo, including
//! API endpoints, interface name policies, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Path Configuration ===

/// Name of the configuration subdirectory under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "ipinfo";
/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "IPINFO_CONFIG_DIR";

// === API Endpoints ===

/// Base URL of the IP metadata lookup service.
pub const LOOKUP_API_BASE: &str = "https://ipinfo.io";
/// Plain-text public address service.
pub const PUBLIC_IP_API: &str = "https://api.ipify.org";

// === Interface Policies ===

/// Interface name prefixes skipped by the deny-list policy.
pub const DENIED_INTERFACE_PREFIXES: [&str; 2] = ["lo", "docker"];

/// Interface name prefixes accepted by the allow-list policy.
///
/// Covers common wired (`eth`, `en*`) and wireless (`wl*`, `wifi`) adapters
/// plus VPN tunnel devices.
pub const ALLOWED_INTERFACE_PREFIXES: [&str; 11] = [
    "eth", "en", "wl", "wlan", "wifi", "tun", "tap", "utun", "wg", "ppp", "ipsec",
];

/// Prefix of IPv6 link-local addresses (fe80::/10).
pub const LINK_LOCAL_PREFIX: &str = "fe80";

// === Output Labels ===

pub const LABEL_PUBLIC_ADDRESS: &str = "PUBLIC ADDRESS:";
pub const LABEL_LOCAL_INTERFACES: &str = "LOCAL INTERFACES:";
pub const LABEL_LOOKUP_HEADING: &str = "IPINFO - Address Information";

// === Error Messages ===

pub const ERR_IP_REQUIRED: &str = "IP address argument is required.";
pub const ERR_IP_INVALID: &str = "That is not a valid IP Address.";
pub const ERR_HTTP_CLIENT_BUILD_FAILED: &str = "Failed to build HTTP client";
pub const ERR_NETWORK_REQUEST_FAILED: &str = "Network request failed";
pub const ERR_READ_CONTENT_FAILED: &str = "Failed to read content";
pub const ERR_ENUMERATE_INTERFACES: &str = "Failed to enumerate interfaces";
