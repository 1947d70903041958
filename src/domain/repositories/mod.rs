//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};

///
/// Repository for employee records.
///
#[cfg_attr(test, automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Add the given employee record.
    fn insert_employee(&self, employee: Employee) -> Result<(), Error>;

    /// Retrieve the employee record with the given identifier.
    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error>;

    /// Retrieve every employee record, in no particular order.
    fn all_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Overwrite the non-empty fields of the matching record with those of
    /// the given partial record.
    ///
    /// Returns the number of records modified (zero or one).
    fn update_employee(&self, employee_id: &str, partial: Employee) -> Result<u64, Error>;

    /// Delete the employee record with the given identifier.
    ///
    /// Returns the number of records removed (zero or one).
    fn delete_employee(&self, employee_id: &str) -> Result<u64, Error>;

    /// Delete all employee records, returning the number removed.
    fn delete_all_employees(&self) -> Result<u64, Error>;
}
