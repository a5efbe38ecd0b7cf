//! Eligibility rules for new vacation requests

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{VacationError, VacationResult};
use crate::models::{count_days_excluding_sundays, Employee};

use super::accrual::VacationBalance;

/// Full months an employee must have worked before requesting vacations
pub const MIN_MONTHS_FOR_VACATION: u32 = 6;

/// Validate a requested range against the employee's balance
///
/// Rules are checked in order and the first failure is returned: tenure,
/// date order, chargeable days, then balance. On success returns the number
/// of chargeable days (Sundays excluded).
pub fn validate_request(
    employee: &Employee,
    balance: &VacationBalance,
    start: NaiveDate,
    end: NaiveDate,
) -> VacationResult<u32> {
    if balance.months_worked < MIN_MONTHS_FOR_VACATION {
        return Err(VacationError::InsufficientTenure {
            months_worked: balance.months_worked,
            required: MIN_MONTHS_FOR_VACATION,
        });
    }

    if end < start {
        return Err(VacationError::DateRangeInverted { start, end });
    }

    let days = count_days_excluding_sundays(start, end);
    if days == 0 {
        return Err(VacationError::ZeroDaysRequested);
    }

    if f64::from(days) > balance.available {
        return Err(VacationError::InsufficientBalance {
            requested: days,
            available: balance.available,
        });
    }

    debug!(
        employee_id = %employee.employee_id,
        %start,
        %end,
        days,
        available = balance.available,
        "vacation request is eligible"
    );

    Ok(days)
}
