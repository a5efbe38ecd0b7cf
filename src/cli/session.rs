//! Operator login for CLI commands
//!
//! Credentials come from `--user`/`--password` (or their environment
//! variables) and are prompted for when missing.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::auth::authenticate;
use crate::error::{VacationError, VacationResult};
use crate::models::User;
use crate::storage::Storage;

/// Credentials supplied on the command line
#[derive(Default)]
pub struct Credentials {
    pub user: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

impl Credentials {
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        Self {
            user,
            password: password.map(Zeroizing::new),
        }
    }
}

/// Authenticate the operator running the command
pub fn login(storage: &Storage, credentials: Credentials) -> VacationResult<User> {
    if storage.users.is_empty() {
        return Err(VacationError::Authentication(
            "no operator accounts exist yet; create one with 'vacations user add <username>'"
                .into(),
        ));
    }

    let username = match credentials.user {
        Some(user) => user,
        None => prompt_line("Username: ")?,
    };

    let password = match credentials.password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    authenticate(storage.users.all(), &username, &password)
}

/// Prompt for a password without echo
pub fn prompt_password(prompt: &str) -> VacationResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| VacationError::Io(format!("Failed to read password: {}", e)))
}

/// Prompt for a new password, asking twice
pub fn prompt_new_password() -> VacationResult<Zeroizing<String>> {
    let first = prompt_password("New password: ")?;
    let second = prompt_password("Confirm password: ")?;

    if *first != *second {
        return Err(VacationError::Validation("Passwords do not match".into()));
    }

    Ok(first)
}

fn prompt_line(prompt: &str) -> VacationResult<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", prompt)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::VacationPaths;
    use crate::models::Role;
    use crate::services::UserService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = VacationPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_login_without_accounts() {
        let (_temp_dir, storage) = create_test_storage();
        let credentials = Credentials::new(Some("admin".into()), Some("whatever".into()));
        assert!(matches!(
            login(&storage, credentials),
            Err(VacationError::Authentication(_))
        ));
    }

    #[test]
    fn test_login_with_supplied_credentials() {
        let (_temp_dir, mut storage) = create_test_storage();
        UserService::new(&mut storage)
            .add("admin", "admin-secret", Role::Admin)
            .unwrap();

        let credentials = Credentials::new(Some("admin".into()), Some("admin-secret".into()));
        let user = login(&storage, credentials).unwrap();
        assert!(user.is_admin());
    }
}
