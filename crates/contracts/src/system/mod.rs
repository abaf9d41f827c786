pub mod users;

pub use users::{User, UserRole};
