//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; pages own data fetching
//! and hand state signals down.

pub mod leave_table;
pub mod page_header;
pub mod route_outlet;
