//! Operator account repository for CSV storage

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::VacationError;
use crate::models::{Role, User};

use super::csv_io::{read_csv, write_csv_atomic};

/// Column layout of users.csv
pub const USER_CSV_HEADER: &[&str] = &["username", "password", "role"];

/// One row of users.csv; `password` holds the Argon2 hash, never plain text
#[derive(Serialize, Deserialize)]
struct UserRecord {
    username: String,
    password: String,
    role: String,
}

impl TryFrom<UserRecord> for User {
    type Error = VacationError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        if record.username.is_empty() {
            return Err(VacationError::Validation("Username cannot be empty".into()));
        }
        if record.password.is_empty() {
            return Err(VacationError::Validation(format!(
                "User '{}' has no password hash",
                record.username
            )));
        }
        let role = record.role.parse::<Role>()?;
        Ok(User::new(record.username, record.password, role))
    }
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password_hash.clone(),
            role: user.role.to_string(),
        }
    }
}

/// Repository for operator accounts
pub struct UserRepository {
    path: PathBuf,
    users: Vec<User>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: Vec::new(),
        }
    }

    /// Load users from disk
    pub fn load(&mut self) -> Result<(), VacationError> {
        self.users = read_csv::<UserRecord, User, _>(&self.path, USER_CSV_HEADER)?.records;
        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), VacationError> {
        write_csv_atomic(
            &self.path,
            USER_CSV_HEADER,
            self.users.iter().map(UserRecord::from),
        )
    }

    /// Get a user by username (exact match)
    pub fn get(&self, username: &str) -> Option<&User> {
        let username = username.trim();
        self.users.iter().find(|u| u.username == username)
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Append a user and save; a failed save leaves the list unchanged
    pub fn insert(&mut self, user: User) -> Result<(), VacationError> {
        self.users.push(user);
        if let Err(e) = self.save() {
            self.users.pop();
            return Err(e);
        }
        Ok(())
    }

    /// True until the first operator account is created
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
