//! Vacation display formatting
//!
//! Formats balances, the numbered approval queue and request history.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Employee, VacationRequest};
use crate::services::BalanceSummary;

#[derive(Tabled)]
struct PendingRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Days")]
    days: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format an employee's balance
pub fn format_balance(summary: &BalanceSummary) -> String {
    let balance = &summary.balance;
    let mut output = String::new();

    output.push_str(&format!(
        "Vacation balance: {} as of {}\n",
        summary.employee, summary.as_of
    ));
    output.push_str(&format!("  Months worked: {}\n", balance.months_worked));
    output.push_str(&format!("  Accrued days:  {:.2}\n", balance.accrued_days));
    output.push_str(&format!("  Used days:     {:.2}\n", balance.used_days));
    output.push_str(&format!("  Available:     {:.2}\n", balance.available));

    output
}

/// Format a single request
pub fn format_request(request: &VacationRequest) -> String {
    format!(
        "{} ({}) {} to {}: {} day(s), {}",
        request.full_name,
        request.employee_id,
        request.start_date,
        request.end_date,
        request.total_days_taken,
        request.approval_status
    )
}

/// Format the approval queue, numbered from 1
pub fn format_pending_list(pending: &[&VacationRequest]) -> String {
    if pending.is_empty() {
        return "No pending vacation requests.".to_string();
    }

    let rows = pending.iter().enumerate().map(|(i, r)| PendingRow {
        number: i + 1,
        id: r.employee_id.clone(),
        name: r.full_name.clone(),
        start: r.start_date.to_string(),
        end: r.end_date.to_string(),
        days: format!("{:.1}", r.total_days_taken),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format an employee's request history
pub fn format_history(employee: &Employee, requests: &[&VacationRequest]) -> String {
    let mut output = format!("Vacation history: {}\n", employee);

    if requests.is_empty() {
        output.push_str("No vacation requests found.");
        return output;
    }

    let rows = requests.iter().map(|r| HistoryRow {
        start: r.start_date.to_string(),
        end: r.end_date.to_string(),
        days: format!("{:.1}", r.total_days_taken),
        status: r.approval_status.to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    output.push_str(&table.to_string());
    output
}
