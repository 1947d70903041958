//
// Copyright (c) 2024 Nathan Fiedler
//
use super::NoParams;
use crate::domain::repositories::EmployeeRepository;
use anyhow::Error;
use std::sync::Arc;

///
/// Use case to remove every employee record from the repository.
///
pub struct RemoveAllEmployees {
    records: Arc<dyn EmployeeRepository>,
}

impl RemoveAllEmployees {
    pub fn new(records: Arc<dyn EmployeeRepository>) -> Self {
        Self { records }
    }
}

impl super::UseCase<u64, NoParams> for RemoveAllEmployees {
    fn call(&self, _params: NoParams) -> Result<u64, Error> {
        let deleted = self.records.delete_all_employees()?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::super::UseCase;
    use super::*;
    use crate::domain::repositories::MockEmployeeRepository;

    #[test]
    fn test_remove_all_employees_err() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records
            .expect_delete_all_employees()
            .returning(|| Err(crate::Error::InternalError("oh no".into())));
        // act
        let usecase = RemoveAllEmployees::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "something bad happened: oh no"
        );
    }

    #[test]
    fn test_remove_all_employees_ok() {
        // arrange
        let mut records = MockEmployeeRepository::new();
        records.expect_delete_all_employees().returning(|| Ok(3));
        // act
        let usecase = RemoveAllEmployees::new(Arc::new(records));
        let result = usecase.call(NoParams {});

        // assert
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 3);
    }
}
