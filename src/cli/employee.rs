//! Employee CLI commands

use clap::Subcommand;

use crate::display::{format_employee_details, format_employee_list};
use crate::error::VacationResult;
use crate::models::{parse_date, User};
use crate::services::EmployeeService;
use crate::storage::Storage;

/// Employee subcommands
#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Register a new employee
    Add {
        /// Unique employee ID
        employee_id: String,
        /// Full name
        full_name: String,
        /// Job position
        #[arg(short, long)]
        position: String,
        /// Department or area
        #[arg(short, long)]
        department: String,
        /// Hire date (YYYY-MM-DD)
        #[arg(long)]
        hire_date: String,
    },
    /// List all employees
    List,
    /// Show one employee
    Show {
        /// Employee ID
        employee_id: String,
    },
}

/// Handle an employee command
pub fn handle_employee_command(
    storage: &mut Storage,
    operator: &User,
    cmd: EmployeeCommands,
) -> VacationResult<()> {
    let mut service =
        EmployeeService::new(storage).acting_as(Some(operator.username.as_str()));

    match cmd {
        EmployeeCommands::Add {
            employee_id,
            full_name,
            position,
            department,
            hire_date,
        } => {
            let hire_date = parse_date(&hire_date)?;
            let employee =
                service.add(&employee_id, &full_name, &position, &department, hire_date)?;

            println!("Added employee: {}", employee);
        }

        EmployeeCommands::List => {
            println!("{}", format_employee_list(service.list()));
        }

        EmployeeCommands::Show { employee_id } => {
            print!("{}", format_employee_details(service.get(&employee_id)?));
        }
    }

    Ok(())
}
