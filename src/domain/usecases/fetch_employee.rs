//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::cmp;
use std::fmt;
use std::sync::Arc;

///
/// Use case to retrieve an employee record from the repository.
///
pub struct FetchEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl FetchEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<Employee, Params> for FetchEmployee {
    fn call(&self, params: Params) -> Result<Employee, Error> {
        let employee = self.records.get_employee(&params.employee_id)?;
        Ok(employee)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of employee to be retrieved.
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
