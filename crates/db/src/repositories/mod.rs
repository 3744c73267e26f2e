pub mod application_repo;
pub mod bookmark_repo;
pub mod expo_repo;
pub mod feedback_repo;
pub mod message_repo;
pub mod notification_repo;
pub mod registration_repo;
pub mod session_repo;
pub mod user_repo;

pub use application_repo::{ApplicationRepo, ApproveOutcome};
pub use bookmark_repo::BookmarkRepo;
pub use expo_repo::ExpoRepo;
pub use feedback_repo::FeedbackRepo;
pub use message_repo::MessageRepo;
pub use notification_repo::NotificationRepo;
pub use registration_repo::{RegisterOutcome, RegistrationRepo};
pub use session_repo::{SessionRegisterOutcome, SessionRepo};
pub use user_repo::UserRepo;
