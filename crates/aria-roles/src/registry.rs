//! The fixed role table and the read-only queries over it.
//!
//! Everything here is `'static` data derived from [`Role::ALL`], so the
//! string view can never drift from the typed view and callers can hold
//! the returned slices for as long as they like.

use crate::Role;

/// Number of roles in the registry.
pub const ROLE_COUNT: usize = Role::ALL.len();

/// The name of every valid role, in ascending name order.
pub const ROLE_NAMES: [&str; ROLE_COUNT] = {
    let mut names = [""; ROLE_COUNT];
    let mut i = 0;
    while i < ROLE_COUNT {
        names[i] = Role::ALL[i].as_str();
        i += 1;
    }
    names
};

/// Returns every valid role, in ascending name order.
pub fn roles() -> &'static [Role] {
    &Role::ALL
}

/// Returns the name of every valid role, in ascending name order.
pub fn role_names() -> &'static [&'static str] {
    &ROLE_NAMES
}

/// Returns whether `name` exactly matches a valid role.
///
/// Comparison is byte-wise: no case folding, no trimming, no prefix
/// matching.
pub fn is_valid_role(name: &str) -> bool {
    // The table is in ascending byte order, so membership is a binary
    // search rather than a scan.
    ROLE_NAMES.binary_search(&name).is_ok()
}
