//! Authentication primitives.
//!
//! Session management is delegated to the external auth provider; this
//! backend only validates the HS256 bearer tokens it mints. See
//! [`jwt`] for token validation and the test-only generation helper.

pub mod jwt;
