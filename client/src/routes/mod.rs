//! Role-based routing: guard chains and the path table built from them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` decides whether a session may see a route, `table` maps paths to
//! guard chains and pages. Both are plain data so they can be tested without
//! a browser; `components::route_outlet` binds them to the Leptos router.

pub mod guard;
pub mod table;
