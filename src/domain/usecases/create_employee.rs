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
/// Use case to create an employee record with a freshly generated
/// identifier and add it to the repository.
///
/// Returns the identifier assigned to the new record.
///
pub struct CreateEmployee {
    records: Arc<dyn EmployeeRepository>,
}

impl CreateEmployee {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<String, Params> for CreateEmployee {
    fn call(&self, params: Params) -> Result<String, Error> {
        let employee = Employee {
            id: uuid::Uuid::new_v4().to_string(),
            name: params.name,
            department: params.department,
            position: params.position,
        };
        let employee_id = employee.id.clone();
        self.records.insert_employee(employee)?;
        Ok(employee_id)
    }
}

#[derive(Clone, Default)]
pub struct Params {
    pub name: String,
    pub department: String,
    pub position: String,
}

impl From<Employee> for Params {
    // any identifier provided by the caller is discarded
    fn from(employee: Employee) -> Self {
        Self {
            name: employee.name,
            department: employee.department,
            position: employee.position,
        }
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Params(name: {})", self.name)
    }
}

impl cmp::PartialEq for Params {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.department == other.department
            && self.position == other.position
    }
}

impl cmp::Eq for Params {}
