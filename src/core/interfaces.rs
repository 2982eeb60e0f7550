//! Local interface enumeration and filtering.
//!
//! The OS reports one entry per bound address. Entries are grouped by
//! interface name (first-seen order), filtered by the active
//! [`InterfaceFilter`], and reduced to one IPv4 and one IPv6 address each.

use if_addrs::IfAddr;

use crate::constants;
use crate::error::InterfaceError;
use crate::state::{AddressFamily, InterfaceAddress, InterfaceFilter, InterfaceSummary};
use crate::theme::Theme;

/// Reads the interface table, rendering each address in CIDR form.
///
/// # Errors
///
/// Returns [`InterfaceError`] if the operating system call fails.
pub fn enumerate() -> Result<Vec<InterfaceAddress>, InterfaceError> {
    let interfaces = if_addrs::get_if_addrs()?;

    Ok(interfaces
        .into_iter()
        .map(|iface| {
            let address = cidr(&iface.addr);
            InterfaceAddress::new(iface.name, address)
        })
        .collect())
}

fn cidr(addr: &IfAddr) -> String {
    match addr {
        IfAddr::V4(v4) => format!("{}/{}", v4.ip, u32::from(v4.netmask).count_ones()),
        IfAddr::V6(v6) => format!("{}/{}", v6.ip, u128::from(v6.netmask).count_ones()),
    }
}

/// Groups addresses per interface and keeps the last address of each family.
///
/// Interfaces rejected by `filter` are skipped entirely. With
/// `skip_link_local`, empty strings and `fe80` addresses are ignored.
/// Interfaces left without any address are dropped.
#[must_use]
pub fn summarize(
    addresses: &[InterfaceAddress],
    filter: InterfaceFilter,
    skip_link_local: bool,
) -> Vec<InterfaceSummary> {
    let mut summaries: Vec<InterfaceSummary> = Vec::new();

    for entry in addresses {
        if !filter.accepts(&entry.interface) {
            continue;
        }

        let index = match summaries.iter().position(|s| s.name == entry.interface) {
            Some(index) => index,
            None => {
                summaries.push(InterfaceSummary {
                    name: entry.interface.clone(),
                    ..InterfaceSummary::default()
                });
                summaries.len() - 1
            }
        };

        let address = entry.address.as_str();
        if skip_link_local && (address.is_empty() || is_link_local(address)) {
            continue;
        }

        let host = host_part(address).to_string();
        let summary = &mut summaries[index];
        match AddressFamily::classify(address) {
            AddressFamily::V4 => summary.ipv4 = host,
            AddressFamily::V6 => summary.ipv6 = host,
        }
    }

    summaries.retain(|s| !s.is_empty());
    summaries
}

fn is_link_local(address: &str) -> bool {
    address
        .get(..constants::LINK_LOCAL_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(constants::LINK_LOCAL_PREFIX))
}

/// Strips a `/prefix` suffix: `192.168.1.5/24` -> `192.168.1.5`.
fn host_part(address: &str) -> &str {
    address.split_once('/').map_or(address, |(host, _)| host)
}

/// One report line: `  eth0:  192.168.1.5 (2001:db8::5)`.
#[must_use]
pub fn render_summary(summary: &InterfaceSummary, theme: Theme) -> String {
    format!(
        "{} {} ({})",
        theme.label(&format!("  {}: ", summary.name)),
        summary.ipv4,
        summary.ipv6
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(name: &str, address: &str) -> InterfaceAddress {
        InterfaceAddress::new(name, address)
    }

    #[test]
    fn test_ipv4_only_interface() {
        let summaries = summarize(&[addr("eth0", "192.168.1.5/24")], InterfaceFilter::Deny, true);
        assert_eq!(summaries.len(), 1);
        assert_eq!(
            render_summary(&summaries[0], Theme::plain()),
            "  eth0:  192.168.1.5 ()"
        );
    }

    #[test]
    fn test_loopback_never_reported_under_deny_list() {
        let addresses = [
            addr("lo0", "127.0.0.1/8"),
            addr("lo0", "::1/128"),
            addr("lo", "127.0.0.1/8"),
            addr("docker0", "172.17.0.1/16"),
            addr("eth0", "10.0.0.2/24"),
        ];
        let summaries = summarize(&addresses, InterfaceFilter::Deny, true);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["eth0"]);
    }

    #[test]
    fn test_last_address_of_each_family_wins() {
        let addresses = [
            addr("en0", "192.168.1.5/24"),
            addr("en0", "2001:db8::1/64"),
            addr("en0", "192.168.1.6/24"),
            addr("en0", "2001:db8::2/64"),
        ];
        let summaries = summarize(&addresses, InterfaceFilter::Deny, true);
        assert_eq!(summaries[0].ipv4, "192.168.1.6");
        assert_eq!(summaries[0].ipv6, "2001:db8::2");
    }

    #[test]
    fn test_link_local_skipped_when_enabled() {
        let addresses = [
            addr("en0", "fe80::1c2b:3aff:fe4d:5e6f/64"),
            addr("en0", "192.168.1.5/24"),
        ];
        let summaries = summarize(&addresses, InterfaceFilter::Deny, true);
        assert_eq!(summaries[0].ipv6, "");

        let summaries = summarize(&addresses, InterfaceFilter::Deny, false);
        assert_eq!(summaries[0].ipv6, "fe80::1c2b:3aff:fe4d:5e6f");
    }

    #[test]
    fn test_interface_with_only_link_local_is_dropped() {
        let addresses = [addr("utun0", "fe80::ce81:b1c:bd2c:69e/64")];
        assert!(summarize(&addresses, InterfaceFilter::Deny, true).is_empty());
    }

    #[test]
    fn test_allow_list_policy() {
        let addresses = [
            addr("bridge100", "192.168.64.1/24"),
            addr("wlan0", "192.168.0.10/24"),
            addr("veth12ab", "172.18.0.1/16"),
            addr("wg0", "10.8.0.2/32"),
        ];
        let summaries = summarize(&addresses, InterfaceFilter::Allow, false);
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["wlan0", "wg0"]);
    }

    #[test]
    fn test_order_follows_first_appearance() {
        let addresses = [
            addr("wlan0", "192.168.0.10/24"),
            addr("eth0", "10.0.0.2/24"),
            addr("wlan0", "2001:db8::10/64"),
        ];
        let summaries = summarize(&addresses, InterfaceFilter::Deny, true);
        assert_eq!(summaries[0].name, "wlan0");
        assert_eq!(summaries[0].ipv6, "2001:db8::10");
        assert_eq!(summaries[1].name, "eth0");
    }

    #[test]
    fn test_heuristic_classification_flows_through() {
        let summaries = summarize(&[addr("eth0", "notanip:x:y")], InterfaceFilter::Deny, true);
        assert_eq!(summaries[0].ipv4, "");
        assert_eq!(summaries[0].ipv6, "notanip:x:y");
    }

    #[test]
    fn test_host_part() {
        assert_eq!(host_part("10.0.0.1/8"), "10.0.0.1");
        assert_eq!(host_part("10.0.0.1"), "10.0.0.1");
        assert_eq!(host_part(""), "");
    }

    #[test]
    fn test_is_link_local_handles_short_and_upper_case() {
        assert!(is_link_local("FE80::1/64"));
        assert!(!is_link_local("fe8"));
        assert!(!is_link_local(""));
        assert!(!is_link_local("2001:db8::1"));
    }

    #[test]
    fn test_render_dual_stack() {
        let summary = InterfaceSummary {
            name: "eth0".to_string(),
            ipv4: "192.168.1.5".to_string(),
            ipv6: "2001:db8::5".to_string(),
        };
        assert_eq!(
            render_summary(&summary, Theme::plain()),
            "  eth0:  192.168.1.5 (2001:db8::5)"
        );
    }
}
