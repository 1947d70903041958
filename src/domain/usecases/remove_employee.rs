//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to remove an employee record from the repository.
///
/// Returns the number of records removed, zero if none matched.
///
pub struct RemoveEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl RemoveEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<u64, Params> for RemoveEmployee {
    fn call(&self, params: Params) -> Result<u64, Error> {
        let deleted = self.records.delete_employee(&params.employee_id)?;
        Ok(deleted)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of employee to be removed.
    pub employee_id: String,
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(employee: {})", self.employee_id)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
    }
}

impl cmp::Eq for Params {}
