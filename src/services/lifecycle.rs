//! Vacation request lifecycle
//!
//! A request is created `Pending` and moves exactly once to `Approved` or
//! `Rejected`. Requests have no surrogate id; they are addressed by employee
//! and date range, and duplicates are resolved in insertion order.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{VacationError, VacationResult};
use crate::models::{Decision, Employee, RequestSelector, VacationRequest};

/// Build a new pending request, snapshotting the employee's name
pub fn create(employee: &Employee, start: NaiveDate, end: NaiveDate, days: u32) -> VacationRequest {
    VacationRequest::pending(employee, start, end, days)
}

/// Apply a decision to the first pending request matching `selector`
///
/// Only the status of that one request changes. When no pending request
/// matches, the error tells apart a request that was already decided from one
/// that does not exist.
pub fn resolve<'a>(
    requests: &'a mut [VacationRequest],
    selector: &RequestSelector,
    decision: Decision,
) -> VacationResult<&'a VacationRequest> {
    let position = requests
        .iter()
        .position(|r| selector.matches(r) && r.is_pending());

    match position {
        Some(index) => {
            let request = &mut requests[index];
            request.approval_status = decision.into();
            info!(
                request = %selector,
                status = %request.approval_status,
                "vacation request resolved"
            );
            Ok(request)
        }
        None => match requests
            .iter()
            .find(|r| selector.matches(r) && r.approval_status.is_terminal())
        {
            Some(resolved) => Err(VacationError::AlreadyResolved {
                key: selector.to_string(),
                status: resolved.approval_status,
            }),
            None => Err(VacationError::RequestNotFound(selector.to_string())),
        },
    }
}
