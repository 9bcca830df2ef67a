//! Network interface references and the (address, interface) ordering.

use std::cmp::Ordering;
use std::net::Ipv6Addr;
use std::sync::Arc;

/// A network interface as seen by this crate.
///
/// Owned by the collaborator that enumerates interfaces; shared here through
/// an `Arc` reference only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Kernel-assigned interface index.
    pub index: u32,
    /// Interface name (e.g., "eth0").
    pub name: String,
}

impl Interface {
    pub fn new(index: u32, name: &str) -> Arc<Interface> {
        Arc::new(Interface {
            index,
            name: name.to_string(),
        })
    }
}

/// An IPv6 address paired with the interface it lives on.
///
/// Ordered by address value first (word-by-word, most significant first),
/// then by interface index, giving a strict total order over
/// (address, interface) pairs for sorted containers.
#[derive(Debug, Clone)]
pub struct InterfaceAddress {
    addr: Ipv6Addr,
    iface: Arc<Interface>,
}

impl InterfaceAddress {
    pub fn new(addr: Ipv6Addr, iface: Arc<Interface>) -> InterfaceAddress {
        InterfaceAddress { addr, iface }
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    pub fn iface(&self) -> &Arc<Interface> {
        &self.iface
    }
}

impl PartialEq for InterfaceAddress {
    fn eq(&self, other: &InterfaceAddress) -> bool {
        self.addr == other.addr && self.iface.index == other.iface.index
    }
}

impl Eq for InterfaceAddress {}

impl Ord for InterfaceAddress {
    fn cmp(&self, other: &InterfaceAddress) -> Ordering {
        // Ipv6Addr compares as a big-endian number, i.e. most significant
        // word first.
        self.addr
            .cmp(&other.addr)
            .then_with(|| self.iface.index.cmp(&other.iface.index))
    }
}

impl PartialOrd for InterfaceAddress {
    fn partial_cmp(&self, other: &InterfaceAddress) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
