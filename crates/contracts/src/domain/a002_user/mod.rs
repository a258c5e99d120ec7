pub mod aggregate;
pub mod form;

pub use aggregate::{User, UserId, UserRole, DEFAULT_AVATAR};
pub use form::{without_user, UserForm};
