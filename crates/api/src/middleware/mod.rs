//! Request-scoped extractors: authenticated caller and store context.

pub mod auth;
pub mod store;

pub use auth::AuthUser;
pub use store::StoreContext;
