//! Rule matching and de-duplication.
//!
//! A proxy carries a list of subnet rules; every observed address is checked
//! against that list. Matching is the hot path, de-duplication runs once at
//! load time.

use crate::models::Ipv6Cidr;
use std::net::Ipv6Addr;

/// Find the first rule whose subnet contains `addr`.
pub fn find_matching_rule<'a>(rules: &'a [Ipv6Cidr], addr: &Ipv6Addr) -> Option<&'a Ipv6Cidr> {
    rules.iter().find(|rule| rule.matches(addr))
}

/// Does any rule contain `addr`?
///
/// This is the per-packet predicate; it performs no allocation.
pub fn match_any(rules: &[Ipv6Cidr], addr: &Ipv6Addr) -> bool {
    rules.iter().any(|rule| rule.matches(addr))
}

/// De-duplicate a rule list.
///
/// Rules are sorted before dedup, so the returned list is also in canonical
/// order. Dropped duplicates are logged.
pub fn de_duplicate_rules(mut rules: Vec<Ipv6Cidr>) -> Vec<Ipv6Cidr> {
    let before = rules.len();

    // Dedup requires sorted input
    rules.sort();
    rules.dedup();

    let dropped = before - rules.len();
    if dropped > 0 {
        log::info!("Dropped {dropped} duplicate rule(s) out of {before}");
    }

    rules
}
