//! Domain models for IPv6 subnet matching.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv6Cidr`] - IPv6 subnet descriptor with CIDR notation support
//! - [`Interface`] and [`InterfaceAddress`] - interface references and the
//!   (address, interface) ordering
//! - [`mask_for`] / [`prefix_mask`] - the precomputed prefix mask table

mod cidr;
mod iface;
mod mask;

// Re-export public types
pub use cidr::{Ipv6Cidr, ParseCidrError};
pub use iface::{Interface, InterfaceAddress};
pub use mask::{mask_for, prefix_mask, MAX_LENGTH};
