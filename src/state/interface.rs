//! Local interface address types.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::constants;

/// Address family as decided by the colon-count heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Classifies an address string: two or more `:` characters means IPv6.
    ///
    /// This is textual, not a parse. `notanip:x:y` is classified as IPv6.
    #[must_use]
    pub fn classify(address: &str) -> Self {
        if address.matches(':').count() >= 2 {
            Self::V6
        } else {
            Self::V4
        }
    }
}

/// Interface exclusion policy for the local address report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceFilter {
    /// Skip interfaces named `lo*` or `docker*`, report everything else.
    #[default]
    Deny,
    /// Report only interfaces with a known adapter or tunnel prefix.
    Allow,
}

impl InterfaceFilter {
    /// Returns `true` if an interface with this name should be reported.
    #[must_use]
    pub fn accepts(self, name: &str) -> bool {
        match self {
            Self::Deny => !constants::DENIED_INTERFACE_PREFIXES
                .iter()
                .any(|prefix| name.starts_with(prefix)),
            Self::Allow => constants::ALLOWED_INTERFACE_PREFIXES
                .iter()
                .any(|prefix| name.starts_with(prefix)),
        }
    }

    /// Link-local filtering used when neither the CLI nor the config sets it.
    #[must_use]
    pub fn skips_link_local_by_default(self) -> bool {
        matches!(self, Self::Deny)
    }
}

impl fmt::Display for InterfaceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterfaceFilter::Deny => write!(f, "deny"),
            InterfaceFilter::Allow => write!(f, "allow"),
        }
    }
}

/// One address bound to an interface, as reported by the OS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceAddress {
    /// System interface name (e.g., eth0, wlan0, utun3).
    pub interface: String,
    /// Address in CIDR form, e.g. `192.168.1.5/24`.
    pub address: String,
}

impl InterfaceAddress {
    pub fn new(interface: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            address: address.into(),
        }
    }
}

/// A reported interface with at most one address per family.
///
/// Addresses are stored without the prefix length; either may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterfaceSummary {
    pub name: String,
    pub ipv4: String,
    pub ipv6: String,
}

impl InterfaceSummary {
    /// Returns `true` if no address of either family was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ipv4.is_empty() && self.ipv6.is_empty()
    }
}
