//! Operator account display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: String,
}

/// Format operator accounts as a table; hashes are never shown
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let mut table = Table::new(users.iter().map(|u| UserRow {
        username: u.username.clone(),
        role: u.role.to_string(),
    }));
    table.with(Style::psql());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_hash_is_hidden() {
        let users = vec![User::new("admin", "$argon2id$secret", Role::Admin)];
        let output = format_user_list(&users);
        assert!(output.contains("admin"));
        assert!(!output.contains("argon2id"));
    }
}
