//! Screen state, independent of how it is drawn.

pub mod auth;
pub mod input;
pub mod landing;
pub mod notification;
pub mod team;

pub use auth::{AuthField, AuthForm, AuthMode, AuthPage, FieldErrors, validate_form};
pub use input::{Edit, TextInput};
pub use landing::LandingPage;
pub use notification::{Notification, NotificationKind, NotificationSlot};
pub use team::{Confirmation, Overlay, PendingAction, TeamForm, TeamFormField, TeamPage, TeamServices, TeamView};
