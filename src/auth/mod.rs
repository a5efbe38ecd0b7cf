//! Operator authentication
//!
//! Operator passwords are stored as Argon2id PHC strings in users.csv and
//! verified on every command that touches employee or vacation data.

pub mod login;
pub mod password;

pub use login::{authenticate, require_admin};
pub use password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
