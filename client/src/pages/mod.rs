//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches and form state and delegates table and header
//! rendering to `components`. Access control lives in the route table, not
//! here.

pub mod admin;
pub(crate) mod approvals;
pub mod employee;
pub mod login;
pub mod manager;
pub mod not_authorized;
pub mod register;
