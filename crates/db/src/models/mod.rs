pub mod application;
pub mod expo;
pub mod feedback;
pub mod message;
pub mod notification;
pub mod registration;
pub mod session;
pub mod user;
