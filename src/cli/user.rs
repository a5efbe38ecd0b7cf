//! Operator account CLI commands

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::display::format_user_list;
use crate::error::VacationResult;
use crate::models::{Role, User};
use crate::services::UserService;
use crate::storage::Storage;

use super::session::prompt_new_password;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an operator account (the first one needs no login and is always admin)
    Add {
        /// Username
        username: String,
        /// Role (admin or manager)
        #[arg(short, long, default_value = "manager")]
        role: Role,
        /// Password for the new account (prompted when omitted)
        #[arg(long, env = "VACATIONS_NEW_PASSWORD", hide_env_values = true)]
        new_password: Option<String>,
    },
    /// List operator accounts
    List,
}

/// Handle a user command
///
/// `operator` is `None` only while bootstrapping the first account.
pub fn handle_user_command(
    storage: &mut Storage,
    operator: Option<&User>,
    cmd: UserCommands,
) -> VacationResult<()> {
    let actor = operator.map(|u| u.username.as_str());
    let mut service = UserService::new(storage).acting_as(actor);

    match cmd {
        UserCommands::Add {
            username,
            role,
            new_password,
        } => {
            let password = match new_password {
                Some(password) => Zeroizing::new(password),
                None => prompt_new_password()?,
            };

            let user = service.add(&username, &password, role)?;
            println!("Created user '{}' with role {}", user.username, user.role);
        }

        UserCommands::List => {
            println!("{}", format_user_list(service.list()));
        }
    }

    Ok(())
}
