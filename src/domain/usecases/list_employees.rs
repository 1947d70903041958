//
// Copyright (c) 2024 Nathan Fiedler
//
use super::NoParams;
use crate::domain::entities::Employee;
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::sync::Arc;

///
/// Use case to retrieve every employee record in the repository.
///
pub struct ListEmployees {
    records: Arc<dyn EmployeeRepository>,
}

impl ListEmployees {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<Vec<Employee>, NoParams> for ListEmployees {
    fn call(&self, _params: NoParams) -> Result<Vec<Employee>, Error> {
        let employees = self.records.all_employees()?;
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::repositories::MockEmployeeRepository;

    #[test]
    fn test_list_employees_err() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records
            .expect_all_employees()
            .returning(|| Err(crate::Error::InternalError("oh no".into())));
        // act
        let usecase = ListEmployees::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "something bad happened: oh no"
        );
    }

    #[test]
    fn test_list_employees_empty() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records.expect_all_employees().returning(|| Ok(vec![]));
        // act
        let usecase = ListEmployees::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_list_employees_ok() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records.expect_all_employees().returning(|| {
            Ok(vec![
                Employee {
                    id: "8a1c".into(),
                    name: "Alice".into(),
                    ..Default::default()
                },
                Employee {
                    id: "77f0".into(),
                    name: "Bob".into(),
                    ..Default::default()
                },
            ])
        });
        // act
        let usecase = ListEmployees::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_ok());
        let employees = result.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].name, "Bob");
    }
}
