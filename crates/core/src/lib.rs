//! Domain layer for the Reachly marketplace backend.
//!
//! This crate holds the pure business rules shared by the persistence and
//! HTTP layers: shared scalar types, the domain error enum, campaign
//! status/type rules and field validation, the per-type campaign payload
//! union, and pagination/search helpers. It deliberately has no internal
//! dependencies so it can be used from repositories, handlers, and any
//! future CLI tooling alike.

pub mod campaign;
pub mod error;
pub mod payload;
pub mod search;
pub mod types;

pub use error::{CoreError, FieldError, ValidationErrors};
