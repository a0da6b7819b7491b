//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `leaves`) so pages depend on small
//! focused models that can be unit-tested without a reactive runtime.

pub mod leaves;
pub mod session;
