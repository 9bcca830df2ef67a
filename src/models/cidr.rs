//! IPv6 subnet descriptor with CIDR notation support.
//!
//! Provides [`Ipv6Cidr`] for representing an IPv6 address plus prefix length,
//! with parsing, canonical formatting and a constant-time membership test.

use super::mask::{mask_for, MAX_LENGTH};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Error parsing a textual CIDR descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCidrError {
    /// The address part is not a valid IPv6 address.
    #[error("invalid IPv6 address: {0}")]
    InvalidAddress(String),
    /// The prefix part is not a base-10 integer in 0..=128.
    #[error("invalid prefix length: {0}")]
    InvalidPrefix(String),
}

/// IPv6 subnet descriptor: an address and a prefix length in 0..=128.
///
/// Immutable after construction except through [`Ipv6Cidr::set_prefix`].
/// There is no "unset" sentinel value; use `Option<Ipv6Cidr>` for a subnet
/// that may not be configured.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv6Cidr {
    addr: Ipv6Addr,
    prefix: u8,
}

impl Ipv6Cidr {
    /// Parse a CIDR string (e.g., `"2001:db8::/32"`).
    ///
    /// A missing `/prefix` defaults to 128 (host route). A prefix that is not
    /// a base-10 integer in 0..=128 is rejected with
    /// [`ParseCidrError::InvalidPrefix`]; parsing never clamps.
    pub fn new(cidr: &str) -> Result<Ipv6Cidr, ParseCidrError> {
        cidr.parse()
    }

    /// Build a descriptor from a raw address and prefix, clamping the prefix
    /// into [0, 128] (negative becomes 0, above 128 becomes 128).
    ///
    /// This is the entry point for binary collaborators (e.g. netlink address
    /// monitors) where clamping, not rejection, is the contract.
    pub fn from_parts(addr: Ipv6Addr, prefix: i32) -> Ipv6Cidr {
        let mut cidr = Ipv6Cidr {
            addr,
            prefix: MAX_LENGTH,
        };
        cidr.set_prefix(prefix);
        cidr
    }

    /// The subnet's reference address.
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Current prefix length.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Set the prefix length, clamping any input into [0, 128].
    pub fn set_prefix(&mut self, prefix: i32) {
        self.prefix = prefix.clamp(0, i32::from(MAX_LENGTH)) as u8;
    }

    /// Constant-time membership test: does `addr` fall inside this subnet?
    ///
    /// Compares the first `prefix` bits of `addr` against the reference
    /// address; bits beyond the prefix are masked out on both sides. All four
    /// words are compared unconditionally and OR-reduced, so latency does not
    /// depend on where the first differing bit sits. A /0 subnet matches every
    /// address, a /128 subnet only its own.
    pub fn matches(&self, addr: &Ipv6Addr) -> bool {
        let mask = mask_for(self.prefix);
        let a = words(&self.addr);
        let b = words(addr);

        ((a[0] ^ b[0]) & mask[0]
            | (a[1] ^ b[1]) & mask[1]
            | (a[2] ^ b[2]) & mask[2]
            | (a[3] ^ b[3]) & mask[3])
            == 0
    }
}

/// Split an address into four 32-bit words, network byte order first.
fn words(addr: &Ipv6Addr) -> [u32; 4] {
    let o = addr.octets();
    [
        u32::from_be_bytes([o[0], o[1], o[2], o[3]]),
        u32::from_be_bytes([o[4], o[5], o[6], o[7]]),
        u32::from_be_bytes([o[8], o[9], o[10], o[11]]),
        u32::from_be_bytes([o[12], o[13], o[14], o[15]]),
    ]
}

impl FromStr for Ipv6Cidr {
    type Err = ParseCidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (addr_part, prefix) = match s.split_once('/') {
            Some((addr_part, prefix_part)) => {
                // parse::<u8> would also take a leading '+'; the prefix is
                // plain base-10 digits only.
                if !prefix_part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseCidrError::InvalidPrefix(prefix_part.to_string()));
                }
                let prefix: u8 = prefix_part
                    .parse()
                    .map_err(|_| ParseCidrError::InvalidPrefix(prefix_part.to_string()))?;
                if prefix > MAX_LENGTH {
                    return Err(ParseCidrError::InvalidPrefix(prefix_part.to_string()));
                }
                (addr_part, prefix)
            }
            None => (s, MAX_LENGTH),
        };

        // Pure IPv6 notation only: a dot means plain IPv4 or mixed
        // IPv4-in-IPv6 notation ("::ffff:10.0.0.1"), neither is accepted.
        if addr_part.contains('.') {
            return Err(ParseCidrError::InvalidAddress(addr_part.to_string()));
        }

        let addr = Ipv6Addr::from_str(addr_part)
            .map_err(|_| ParseCidrError::InvalidAddress(addr_part.to_string()))?;

        Ok(Ipv6Cidr { addr, prefix })
    }
}

impl fmt::Display for Ipv6Cidr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Host routes render as bare addresses, the /128 suffix is implied.
        if self.prefix < MAX_LENGTH {
            write!(f, "{}/{}", self.addr, self.prefix)
        } else {
            write!(f, "{}", self.addr)
        }
    }
}

impl Serialize for Ipv6Cidr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv6Cidr {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        let cidr = Ipv6Cidr::new("2001:db8::/32").unwrap();
        assert_eq!(cidr.addr(), "2001:db8::".parse::<Ipv6Addr>().unwrap());
        assert_eq!(cidr.prefix(), 32);
    }

    #[test]
    fn test_parse_without_prefix_defaults_to_128() {
        let cidr = Ipv6Cidr::new("fe80::1").unwrap();
        assert_eq!(cidr.prefix(), 128);
        assert_eq!(cidr.to_string(), "fe80::1");
    }

    #[test]
    fn test_parse_invalid_address() {
        let err = Ipv6Cidr::new("not-an-address/64").unwrap_err();
        assert!(matches!(err, ParseCidrError::InvalidAddress(_)));

        // Plain IPv4 is not accepted.
        let err = Ipv6Cidr::new("10.0.0.0/8").unwrap_err();
        assert!(matches!(err, ParseCidrError::InvalidAddress(_)));
    }

    #[test]
    fn test_parse_rejects_ipv4_mapped_notation() {
        for bad in ["::ffff:10.0.0.1/96", "::ffff:10.0.0.1", "64:ff9b::192.0.2.1/96"] {
            let err = Ipv6Cidr::new(bad).unwrap_err();
            assert!(
                matches!(err, ParseCidrError::InvalidAddress(_)),
                "expected InvalidAddress for {bad:?}, got {err:?}"
            );
        }
        // The same value in pure hex notation stays valid.
        assert!(Ipv6Cidr::new("::ffff:a00:1/96").is_ok());
    }

    #[test]
    fn test_parse_invalid_prefix() {
        for bad in [
            "2001:db8::/129",
            "2001:db8::/-1",
            "2001:db8::/+64",
            "2001:db8::/x",
            "2001:db8::/",
        ] {
            let err = Ipv6Cidr::new(bad).unwrap_err();
            assert!(
                matches!(err, ParseCidrError::InvalidPrefix(_)),
                "expected InvalidPrefix for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_from_parts_clamps_prefix() {
        let addr: Ipv6Addr = "2001:db8::1".parse().unwrap();
        assert_eq!(Ipv6Cidr::from_parts(addr, -5).prefix(), 0);
        assert_eq!(Ipv6Cidr::from_parts(addr, 200).prefix(), 128);
        assert_eq!(Ipv6Cidr::from_parts(addr, 64).prefix(), 64);
    }

    #[test]
    fn test_set_prefix_clamps() {
        let mut cidr = Ipv6Cidr::new("2001:db8::/32").unwrap();
        cidr.set_prefix(-1);
        assert_eq!(cidr.prefix(), 0);
        cidr.set_prefix(300);
        assert_eq!(cidr.prefix(), 128);
    }

    #[test]
    fn test_display_omits_128_suffix() {
        assert_eq!(Ipv6Cidr::new("2001:db8::/32").unwrap().to_string(), "2001:db8::/32");
        assert_eq!(Ipv6Cidr::new("fe80::1/128").unwrap().to_string(), "fe80::1");
        assert_eq!(Ipv6Cidr::new("::/0").unwrap().to_string(), "::/0");
    }

    #[test]
    fn test_format_round_trip() {
        for s in ["2001:db8::/32", "fd00:1::/64", "::/0", "fe80::1/128", "fe80::1"] {
            let cidr = Ipv6Cidr::new(s).unwrap();
            let reparsed = Ipv6Cidr::new(&cidr.to_string()).unwrap();
            assert_eq!(cidr, reparsed, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_matches_own_address() {
        for s in ["2001:db8::/32", "2001:db8:1:2::1/64", "fe80::1", "::/0"] {
            let cidr = Ipv6Cidr::new(s).unwrap();
            assert!(cidr.matches(&cidr.addr()), "subnet must match its own address: {s}");
        }
    }

    #[test]
    fn test_matches_prefix_boundary() {
        let cidr = Ipv6Cidr::new("2001:db8::/32").unwrap();
        assert!(cidr.matches(&"2001:db8:1:2::1".parse().unwrap()));
        assert!(cidr.matches(&"2001:db8:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap()));
        assert!(!cidr.matches(&"2001:db9::1".parse().unwrap()));
    }

    #[test]
    fn test_matches_prefix_zero_matches_everything() {
        let cidr = Ipv6Cidr::new("::/0").unwrap();
        assert!(cidr.matches(&"2001:db8::1".parse().unwrap()));
        assert!(cidr.matches(&"ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap()));
        assert!(cidr.matches(&"::".parse().unwrap()));
    }

    #[test]
    fn test_matches_prefix_128_exact_only() {
        let cidr = Ipv6Cidr::new("fe80::1").unwrap();
        assert!(cidr.matches(&"fe80::1".parse().unwrap()));
        assert!(!cidr.matches(&"fe80::2".parse().unwrap()));
    }

    #[test]
    fn test_matches_non_word_aligned_prefix() {
        // /33 crosses into the second word by one bit.
        let cidr = Ipv6Cidr::new("2001:db8:8000::/33").unwrap();
        assert!(cidr.matches(&"2001:db8:8000::1".parse().unwrap()));
        assert!(cidr.matches(&"2001:db8:ffff::1".parse().unwrap()));
        assert!(!cidr.matches(&"2001:db8:7fff::1".parse().unwrap()));
    }

    #[test]
    fn test_serde_string_form() {
        let cidr = Ipv6Cidr::new("2001:db8::/32").unwrap();
        let json = serde_json::to_string(&cidr).unwrap();
        assert_eq!(json, "\"2001:db8::/32\"");
        let back: Ipv6Cidr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cidr);

        assert!(serde_json::from_str::<Ipv6Cidr>("\"bogus/64\"").is_err());
    }
}
