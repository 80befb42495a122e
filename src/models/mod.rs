pub mod team;
pub mod user;

// Re-export commonly used types
pub use team::{Member, Role, Team, TeamDraft};
pub use user::User;
