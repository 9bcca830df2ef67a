//! Prefix mask table for IPv6 subnet membership tests.
//!
//! Provides a process-wide, read-only table mapping a prefix length (0-128) to
//! the 128-bit mask with that many leading bits set, stored as four 32-bit
//! words in network byte order.

use lazy_static::lazy_static;

/// Maximum length for an IPv6 subnet prefix (128 bits).
pub const MAX_LENGTH: u8 = 128;

/// Build the prefix mask for `len` leading bits as four network-order words.
///
/// Bit `i` (transmission order) is set iff `i < len`. The mask is derived
/// arithmetically per word (word = i/32), so the result is identical on any
/// host byte order. Lengths above 128 are treated as 128.
///
/// # Examples
/// ```
/// use ipv6_subnet_match::models::prefix_mask;
/// assert_eq!(prefix_mask(24), [0xFFFF_FF00, 0, 0, 0]);
/// ```
pub fn prefix_mask(len: u8) -> [u32; 4] {
    let len = u32::from(len.min(MAX_LENGTH));
    let mut mask = [0u32; 4];

    for (word, slot) in mask.iter_mut().enumerate() {
        let bits = len.saturating_sub(word as u32 * 32).min(32);
        // Widen to u64 so a 32-bit shift of an empty word is well defined.
        let right = 32 - bits;
        *slot = (((u32::MAX as u64) >> right) << right) as u32;
    }

    mask
}

lazy_static! {
    /// All 129 prefix masks, computed once before first use.
    static ref MASK_TABLE: [[u32; 4]; 129] = {
        let mut table = [[0u32; 4]; 129];
        for (len, entry) in table.iter_mut().enumerate() {
            *entry = prefix_mask(len as u8);
        }
        table
    };
}

/// Look up the precomputed mask for a prefix length.
///
/// Total function: any `len` above 128 yields the all-ones mask. O(1) and
/// allocation-free, suitable for the per-packet hot path.
pub fn mask_for(len: u8) -> &'static [u32; 4] {
    &MASK_TABLE[usize::from(len.min(MAX_LENGTH))]
}
