//! Terminal match report.

use crate::config::ProxyConfig;
use crate::processing::find_matching_rule;
use colored::Colorize;
use itertools::Itertools;
use std::net::Ipv6Addr;

/// Left-pad a value into a fixed-width column.
pub fn pad_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

/// Print, per proxy, which candidate addresses its rules match.
///
/// Rules are shown in canonical sorted order; a matched address is printed
/// with its winning rule in green, an unmatched one in red.
pub fn print_match_report(proxies: &[ProxyConfig], addrs: &[Ipv6Addr]) {
    let width = addrs
        .iter()
        .map(|a| a.to_string().len())
        .max()
        .unwrap_or(0);

    for proxy in proxies {
        println!(
            "proxy {} (ifindex {})",
            proxy.iface.bold(),
            proxy.ifindex
        );

        let rules = proxy.rules.iter().sorted().join(", ");
        println!("  rules: {rules}");

        for addr in addrs {
            match find_matching_rule(&proxy.rules, addr) {
                Some(rule) => println!(
                    "  {} {} {}",
                    pad_field(addr, width),
                    "matches".green(),
                    rule
                ),
                None => println!("  {} {}", pad_field(addr, width), "no match".red()),
            }
        }
        println!();
    }

    log::debug!(
        "Reported {} address(es) against {} prox(ies)",
        addrs.len(),
        proxies.len()
    );
}
