//! Request handlers, one submodule per resource.
//!
//! Handlers delegate to the repositories in `eventsphere_db` and map errors
//! via [`crate::error::AppError`]. Role checks happen at the handler
//! boundary through the RBAC extractors; state-machine rules live in
//! `eventsphere_core` and the repositories.

pub mod auth;
pub mod bookmarks;
pub mod exhibitors;
pub mod expos;
pub mod feedback;
pub mod messages;
pub mod notifications;
pub mod sessions;
