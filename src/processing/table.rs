//! Sorted table of known (address, interface) pairs.

use crate::models::{Interface, InterfaceAddress};
use std::collections::BTreeSet;
use std::net::Ipv6Addr;

/// Sorted set of addresses seen on interfaces, keyed by the
/// [`InterfaceAddress`] total order (address first, then interface index).
///
/// The same address on two interfaces is two distinct entries.
#[derive(Debug, Default)]
pub struct AddressTable {
    addresses: BTreeSet<InterfaceAddress>,
}

impl AddressTable {
    pub fn new() -> AddressTable {
        AddressTable::default()
    }

    /// Insert an entry. Returns false if the (address, interface) pair was
    /// already present.
    pub fn insert(&mut self, entry: InterfaceAddress) -> bool {
        let inserted = self.addresses.insert(entry);
        if !inserted {
            log::debug!("Address already tracked, ignoring insert");
        }
        inserted
    }

    /// Remove the entry for (addr, ifindex), if present.
    pub fn remove(&mut self, addr: &Ipv6Addr, ifindex: u32) -> bool {
        self.addresses.remove(&lookup_key(addr, ifindex))
    }

    pub fn contains(&self, addr: &Ipv6Addr, ifindex: u32) -> bool {
        self.addresses.contains(&lookup_key(addr, ifindex))
    }

    /// All entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &InterfaceAddress> {
        self.addresses.iter()
    }

    /// Entries on a single interface, in address order.
    pub fn on_iface(&self, ifindex: u32) -> impl Iterator<Item = &InterfaceAddress> {
        self.addresses
            .iter()
            .filter(move |e| e.iface().index == ifindex)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Key for O(log n) set lookups. Eq and Ord on [`InterfaceAddress`] only use
/// the address and the interface index, so the placeholder name never affects
/// the comparison.
fn lookup_key(addr: &Ipv6Addr, ifindex: u32) -> InterfaceAddress {
    InterfaceAddress::new(*addr, Interface::new(ifindex, ""))
}
