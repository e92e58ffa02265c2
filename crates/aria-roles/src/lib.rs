//! WAI-ARIA role registry
//!
//! The closed set of 69 valid ARIA role names, with validation and
//! typed lookup. The whole crate is one fixed table plus read-only
//! queries over it; there is no state to build or tear down.
//!
//! Features:
//! - Full role list in ascending name order
//! - Exact-match validation (case-sensitive, no trimming)
//! - Typed [`Role`] enum for narrowing untrusted strings
//! - Per-role name constants ([`names`])
//! - Role categories and live region metadata
//! - Optional serde support (`serde` feature)

pub mod category;
pub mod names;
pub mod registry;
pub mod role;

pub use category::{LiveRegionMode, RoleCategory};
pub use registry::{is_valid_role, role_names, roles, ROLE_COUNT, ROLE_NAMES};
pub use role::Role;

/// Error returned when a string is not a valid ARIA role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ARIA role: {0}")]
pub struct InvalidRole(pub String);
