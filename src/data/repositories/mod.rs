//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EmployeeDataSource;
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use crate::Error;
use std::sync::Arc;

///
/// Default implementation of the employee repository.
///
pub struct EmployeeRepositoryImpl {
    datasource: Arc<dyn EmployeeDataSource>,
}

impl EmployeeRepositoryImpl {
    pub fn new(datasource: Arc<dyn EmployeeDataSource>) -> Self {
        Self { datasource }
    }
}

impl EmployeeRepository for EmployeeRepositoryImpl {
    fn insert_employee(&self, employee: Employee) -> Result<(), Error> {
        self.datasource.insert_employee(employee)
    }

    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error> {
        self.datasource.get_employee(employee_id)
    }

    fn all_employees(&self) -> Result<Vec<Employee>, Error> {
        self.datasource.all_employees()
    }

    fn update_employee(&self, employee_id: &str, partial: Employee) -> Result<u64, Error> {
        self.datasource.update_employee(employee_id, partial)
    }

    fn delete_employee(&self, employee_id: &str) -> Result<u64, Error> {
        self.datasource.delete_employee(employee_id)
    }

    fn delete_all_employees(&self) -> Result<u64, Error> {
        self.datasource.delete_all_employees()
    }
}
