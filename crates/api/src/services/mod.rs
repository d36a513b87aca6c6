//! Service layer: the single authorized entry point for domain operations.
//!
//! Handlers stay thin; every read goes through an ownership check here and
//! every mutation runs validation and its verify-then-write steps inside
//! one transaction.

pub mod campaign;
