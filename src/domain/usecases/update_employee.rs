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
/// Use case to overwrite selected fields of an existing employee record.
///
/// Fields left empty in the parameters keep their stored values. Returns the
/// number of records modified, which is zero when nothing matched.
///
pub struct UpdateEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl UpdateEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<u64, Params> for UpdateEmployee {
    fn call(&self, params: Params) -> Result<u64, Error> {
        if params.employee_id.is_empty() {
            return Err(crate::Error::MissingIdentifier.into());
        }
        // the target record is always the one named by the identifier
        let mut partial = params.employee;
        partial.id.clone_from(&params.employee_id);
        let count = self.records.update_employee(&params.employee_id, partial)?;
        Ok(count)
    }
}

#[derive(Clone)]
pub struct Params {
    /// Identifier of employee to be updated.
    pub employee_id: String,
    /// New field values, empty fields are left unchanged.
    pub employee: Employee,
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
