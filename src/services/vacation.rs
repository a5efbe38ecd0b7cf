//! Vacation service
//!
//! Orchestrates the accrual, eligibility, lifecycle and approval rules on
//! top of the storage layer: every change is saved immediately and recorded
//! in the audit log.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{VacationError, VacationResult};
use crate::models::{ApprovalStatus, Decision, Employee, VacationRequest};
use crate::storage::Storage;

use super::accrual::{compute_balance, VacationBalance};
use super::{approval, eligibility, history, lifecycle};

/// An employee together with their balance at a reference date
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSummary {
    pub employee: Employee,
    pub as_of: NaiveDate,
    pub balance: VacationBalance,
}

/// Service for vacation requests
pub struct VacationService<'a> {
    storage: &'a mut Storage,
    actor: Option<&'a str>,
}

impl<'a> VacationService<'a> {
    /// Create a new vacation service
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

    fn employee(&self, employee_id: &str) -> VacationResult<&Employee> {
        self.storage
            .employees
            .get(employee_id)
            .ok_or_else(|| VacationError::employee_not_found(employee_id.trim()))
    }

    /// Compute an employee's balance at `as_of`
    pub fn balance(&self, employee_id: &str, as_of: NaiveDate) -> VacationResult<BalanceSummary> {
        let employee = self.employee(employee_id)?;
        let balance = compute_balance(employee, as_of, self.storage.vacations.all());

        Ok(BalanceSummary {
            employee: employee.clone(),
            as_of,
            balance,
        })
    }

    /// Validate and record a new pending request
    ///
    /// Nothing is stored when any rule rejects the request.
    pub fn submit(
        &mut self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        as_of: NaiveDate,
    ) -> VacationResult<VacationRequest> {
        let employee = self.employee(employee_id)?.clone();
        let balance = compute_balance(&employee, as_of, self.storage.vacations.all());

        let days = eligibility::validate_request(&employee, &balance, start, end)?;
        let request = lifecycle::create(&employee, start, end, days);

        self.storage.vacations.insert(request.clone())?;

        self.storage.log_create(
            EntityType::VacationRequest,
            request.selector().to_string(),
            Some(request.full_name.clone()),
            &request,
            self.actor,
        )?;

        info!(
            employee_id = %request.employee_id,
            start = %request.start_date,
            end = %request.end_date,
            days,
            "vacation request submitted"
        );

        Ok(request)
    }

    /// Requests awaiting a decision, in the order they will be numbered
    pub fn pending(&self) -> Vec<&VacationRequest> {
        approval::list_pending(self.storage.vacations.all())
    }

    /// Approve or reject the `index`-th pending request (1-based)
    pub fn decide(&mut self, index: usize, decision: Decision) -> VacationResult<VacationRequest> {
        let resolved = self
            .storage
            .vacations
            .update(|requests| approval::approve_or_reject(requests, index, decision))?;

        let mut before = resolved.clone();
        before.approval_status = ApprovalStatus::Pending;

        self.storage.log_update(
            EntityType::VacationRequest,
            resolved.selector().to_string(),
            Some(resolved.full_name.clone()),
            &before,
            &resolved,
            self.actor,
        )?;

        Ok(resolved)
    }

    /// Every request of a known employee, any status
    pub fn history(&self, employee_id: &str) -> VacationResult<Vec<&VacationRequest>> {
        let employee = self.employee(employee_id)?;
        Ok(history::by_employee(
            self.storage.vacations.all(),
            &employee.employee_id,
        ))
    }
}
