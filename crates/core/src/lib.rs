//! EventSphere domain core.
//!
//! Pure domain types shared by the DB and API layers: ID/timestamp aliases,
//! role names, the status enums for every stateful entity (with their
//! transition rules checked centrally here rather than scattered across
//! endpoints), and the domain error type.

pub mod application;
pub mod booth;
pub mod error;
pub mod expo;
pub mod feedback;
pub mod notification;
pub mod registration;
pub mod roles;
pub mod session;
pub mod types;
