//! Approval queue
//!
//! Pending requests are presented as a numbered list (1-based, insertion
//! order) and decided by their position in that list.

use crate::error::{VacationError, VacationResult};
use crate::models::{Decision, VacationRequest};

use super::lifecycle;

/// Pending requests in insertion order
pub fn list_pending(requests: &[VacationRequest]) -> Vec<&VacationRequest> {
    requests.iter().filter(|r| r.is_pending()).collect()
}

/// Approve or reject the `index`-th pending request (1-based)
///
/// Returns a copy of the resolved request.
pub fn approve_or_reject(
    requests: &mut [VacationRequest],
    index: usize,
    decision: Decision,
) -> VacationResult<VacationRequest> {
    let selector = {
        let pending = list_pending(requests);
        if index == 0 || index > pending.len() {
            return Err(VacationError::InvalidSelection {
                selection: index,
                count: pending.len(),
            });
        }
        pending[index - 1].selector()
    };

    lifecycle::resolve(requests, &selector, decision).cloned()
}
