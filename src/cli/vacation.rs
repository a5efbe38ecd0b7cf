//! Vacation CLI commands
//!
//! Balances and eligibility are evaluated at a reference date that defaults
//! to today and can be pinned with `--as-of`.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_balance, format_history, format_pending_list, format_request};
use crate::error::VacationResult;
use crate::models::{parse_date, Decision, User};
use crate::services::{EmployeeService, VacationService};
use crate::storage::Storage;

/// Vacation subcommands
#[derive(Subcommand)]
pub enum VacationCommands {
    /// Show an employee's vacation balance
    Balance {
        /// Employee ID
        employee_id: String,
        /// Reference date (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Request vacations for an employee
    Request {
        /// Employee ID
        employee_id: String,
        /// First day of vacations (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,
        /// Last day of vacations, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
        /// Reference date for the balance (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// List requests awaiting a decision
    Pending,
    /// Approve a pending request by its number in `vacation pending`
    Approve {
        /// Request number
        number: usize,
    },
    /// Reject a pending request by its number in `vacation pending`
    Reject {
        /// Request number
        number: usize,
    },
    /// Show all requests of an employee
    History {
        /// Employee ID
        employee_id: String,
    },
}

fn reference_date(as_of: Option<&str>) -> VacationResult<NaiveDate> {
    match as_of {
        Some(text) => parse_date(text),
        None => Ok(Local::now().date_naive()),
    }
}

/// Handle a vacation command
pub fn handle_vacation_command(
    storage: &mut Storage,
    operator: &User,
    cmd: VacationCommands,
) -> VacationResult<()> {
    match cmd {
        VacationCommands::Balance { employee_id, as_of } => {
            let as_of = reference_date(as_of.as_deref())?;
            let summary = VacationService::new(storage).balance(&employee_id, as_of)?;
            print!("{}", format_balance(&summary));
        }

        VacationCommands::Request {
            employee_id,
            start,
            end,
            as_of,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let as_of = reference_date(as_of.as_deref())?;

            let request = VacationService::new(storage)
                .acting_as(Some(operator.username.as_str()))
                .submit(&employee_id, start, end, as_of)?;

            println!("Vacation request created: {}", format_request(&request));
            println!("Run 'vacations vacation pending' to review it.");
        }

        VacationCommands::Pending => {
            let service = VacationService::new(storage);
            println!("{}", format_pending_list(&service.pending()));
        }

        VacationCommands::Approve { number } => {
            decide(storage, operator, number, Decision::Approve)?;
        }

        VacationCommands::Reject { number } => {
            decide(storage, operator, number, Decision::Reject)?;
        }

        VacationCommands::History { employee_id } => {
            let employee = EmployeeService::new(storage).get(&employee_id)?.clone();
            let service = VacationService::new(storage);
            let requests = service.history(&employee.employee_id)?;
            println!("{}", format_history(&employee, &requests));
        }
    }

    Ok(())
}

fn decide(
    storage: &mut Storage,
    operator: &User,
    number: usize,
    decision: Decision,
) -> VacationResult<()> {
    let request = VacationService::new(storage)
        .acting_as(Some(operator.username.as_str()))
        .decide(number, decision)?;

    println!("Resolved request: {}", format_request(&request));
    Ok(())
}
