//! Operator login

use tracing::{info, warn};

use crate::error::{VacationError, VacationResult};
use crate::models::User;

use super::password::verify_password;

const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Authenticate an operator against the stored accounts
///
/// Unknown users and wrong passwords fail with the same message.
pub fn authenticate(users: &[User], username: &str, password: &str) -> VacationResult<User> {
    let username = username.trim();

    if username.is_empty() {
        return Err(VacationError::Validation("Username cannot be empty".into()));
    }
    if password.trim().is_empty() {
        return Err(VacationError::Validation("Password cannot be empty".into()));
    }

    let Some(user) = users.iter().find(|u| u.username == username) else {
        warn!(username, "login failed: unknown user");
        return Err(VacationError::Authentication(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(username, "login failed: wrong password");
        return Err(VacationError::Authentication(INVALID_CREDENTIALS.into()));
    }

    info!(username, role = %user.role, "operator authenticated");
    Ok(user.clone())
}

/// Fail unless the operator is an administrator
pub fn require_admin(user: &User) -> VacationResult<()> {
    if user.is_admin() {
        Ok(())
    } else {
        Err(VacationError::Authentication(format!(
            "user '{}' is not an administrator",
            user.username
        )))
    }
}
