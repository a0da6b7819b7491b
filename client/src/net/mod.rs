//! Networking modules for the leave-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared by
//! pages and state.

pub mod api;
pub mod types;
