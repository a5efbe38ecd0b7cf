//! Operator account service

use tracing::info;

use crate::audit::EntityType;
use crate::auth::{hash_password, MIN_PASSWORD_LENGTH};
use crate::error::{VacationError, VacationResult};
use crate::models::{Role, User};
use crate::storage::Storage;

/// Service for operator accounts
pub struct UserService<'a> {
    storage: &'a mut Storage,
    actor: Option<&'a str>,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self {
            storage,
            actor: None,
        }
    }

    /// Attribute audit entries to an operator
    pub fn acting_as(mut self, actor: Option<&'a str>) -> Self {
        self.actor = actor;
        self
    }

    /// True until the first operator account exists
    pub fn needs_bootstrap(&self) -> bool {
        self.storage.users.is_empty()
    }

    /// Create an operator account
    ///
    /// The first account is always an administrator.
    pub fn add(&mut self, username: &str, password: &str, role: Role) -> VacationResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(VacationError::Validation("Username cannot be empty".into()));
        }
        if username.contains(',') || username.chars().any(char::is_whitespace) {
            return Err(VacationError::Validation(format!(
                "Username '{}' cannot contain commas or spaces",
                username
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(VacationError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.storage.users.get(username).is_some() {
            return Err(VacationError::duplicate_user(username));
        }

        let role = if self.needs_bootstrap() { Role::Admin } else { role };
        let user = User::new(username, hash_password(password)?, role);

        self.storage.users.insert(user.clone())?;

        self.storage.log_create(
            EntityType::User,
            user.username.clone(),
            None,
            &user,
            self.actor,
        )?;

        info!(username = %user.username, role = %user.role, "operator account created");

        Ok(user)
    }

    /// All operator accounts
    pub fn list(&self) -> &[User] {
        self.storage.users.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::authenticate;
    use crate::config::paths::VacationPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = VacationPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_first_user_is_admin() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = UserService::new(&mut storage);
        assert!(service.needs_bootstrap());

        let first = service.add("admin", "admin-secret", Role::Manager).unwrap();
        assert_eq!(first.role, Role::Admin);

        let second = service.add("maria", "maria-secret", Role::Manager).unwrap();
        assert_eq!(second.role, Role::Manager);
        assert!(!service.needs_bootstrap());
    }

    #[test]
    fn test_added_user_can_log_in() {
        let (_temp_dir, mut storage) = create_test_storage();
        UserService::new(&mut storage)
            .add("admin", "admin-secret", Role::Admin)
            .unwrap();

        let user = authenticate(storage.users.all(), "admin", "admin-secret").unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn test_audit_entry_has_no_hash() {
        let (temp_dir, mut storage) = create_test_storage();
        UserService::new(&mut storage)
            .add("admin", "admin-secret", Role::Admin)
            .unwrap();

        let log = std::fs::read_to_string(temp_dir.path().join("audit.log")).unwrap();
        assert!(log.contains("\"admin\""));
        assert!(!log.contains("argon2"));
    }

    #[test]
    fn test_failed_save_keeps_bootstrap_open() {
        let (temp_dir, mut storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("data").join("users.csv.tmp")).unwrap();
        let mut service = UserService::new(&mut storage);

        assert!(service.add("admin", "admin-secret", Role::Admin).is_err());
        assert!(service.needs_bootstrap());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_rejects_bad_input() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = UserService::new(&mut storage);

        assert!(service.add("", "long-enough", Role::Admin).unwrap_err().is_validation());
        assert!(service.add("a b", "long-enough", Role::Admin).unwrap_err().is_validation());
        assert!(service.add("admin", "short", Role::Admin).unwrap_err().is_validation());

        service.add("admin", "long-enough", Role::Admin).unwrap();
        assert!(matches!(
            service.add("admin", "long-enough", Role::Admin),
            Err(VacationError::Duplicate { entity_type: "User", .. })
        ));
    }
}
