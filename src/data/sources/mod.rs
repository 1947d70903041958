//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::domain::entities::Employee;
use crate::Error;
#[cfg(test)]
use mockall::{automock, predicate::*};
use std::env;
use std::sync::Arc;

mod mongo;
mod sqlite;

///
/// Data source for employee records.
///
#[cfg_attr(test, automock)]
pub trait EmployeeDataSource: Send + Sync {
    /// Add the given employee record.
    fn insert_employee(&self, employee: Employee) -> Result<(), Error>;

    /// Retrieve the employee record with the given identifier.
    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error>;

    /// Retrieve every employee record, in the natural order of the store.
    fn all_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Merge the non-empty fields of `partial` into the matching record.
    ///
    /// Returns the number of records modified (zero or one).
    fn update_employee(&self, employee_id: &str, partial: Employee) -> Result<u64, Error>;

    /// Delete the employee record with the given identifier.
    ///
    /// Returns the number of records removed (zero or one).
    fn delete_employee(&self, employee_id: &str) -> Result<u64, Error>;

    /// Delete all employee records, returning the number removed.
    fn delete_all_employees(&self) -> Result<u64, Error>;

    /// Release the connection to the underlying store.
    fn close(&self);
}

///
/// Type for creating the desired type of data source.
///
#[derive(Clone, Debug, PartialEq)]
pub enum DataSourceType {
    /// MongoDB collection within the named database.
    MongoDb {
        uri: String,
        database: String,
        collection: String,
    },
    /// SQLite resident in memory, not persistent.
    SqliteMemory,
    /// SQLite stored persistently to the given file path.
    SqliteFile(String),
}

impl DataSourceType {
    ///
    /// Determine the data source settings from the process environment.
    ///
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    ///
    /// Determine the data source settings using the given function to look
    /// up each configuration value by name.
    ///
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, Error> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Configuration(key.to_owned()))
        };
        let kind = lookup("DATA_SOURCE").unwrap_or_else(|| "mongodb".to_owned());
        match kind.to_lowercase().as_str() {
            "mongodb" => Ok(DataSourceType::MongoDb {
                uri: required("MONGO_URI")?,
                database: required("DB_NAME")?,
                collection: required("COLLECTION_NAME")?,
            }),
            "sqlite" => match lookup("SQLITE_PATH") {
                Some(path) if !path.is_empty() && path != ":memory:" => {
                    Ok(DataSourceType::SqliteFile(path))
                }
                _ => Ok(DataSourceType::SqliteMemory),
            },
            other => Err(Error::Configuration(format!(
                "DATA_SOURCE (unsupported value {})",
                other
            ))),
        }
    }
}

///
/// Construct a data source appropriate for the given type.
///
pub fn build_data_source(dstype: DataSourceType) -> Result<Arc<dyn EmployeeDataSource>, Error> {
    match dstype {
        DataSourceType::MongoDb {
            uri,
            database,
            collection,
        } => {
            let source: Arc<dyn EmployeeDataSource> = Arc::new(
                mongo::MongoEmployeeDataSource::new(&uri, &database, &collection)?,
            );
            Ok(source)
        }
        DataSourceType::SqliteMemory => {
            let source: Arc<dyn EmployeeDataSource> =
                Arc::new(sqlite::SQLiteEmployeeDataSource::new_in_memory()?);
            Ok(source)
        }
        DataSourceType::SqliteFile(path) => {
            let source: Arc<dyn EmployeeDataSource> =
                Arc::new(sqlite::SQLiteEmployeeDataSource::new(path)?);
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let table: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| table.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_mongodb() {
        let lookup = lookup_in(&[
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("DB_NAME", "company"),
            ("COLLECTION_NAME", "employees"),
        ]);
        let result = DataSourceType::from_lookup(lookup);
        assert_eq!(
            result.unwrap(),
            DataSourceType::MongoDb {
                uri: "mongodb://localhost:27017".into(),
                database: "company".into(),
                collection: "employees".into(),
            }
        );
    }

    #[test]
    fn test_from_lookup_mongodb_missing() {
        let lookup = lookup_in(&[
            ("DATA_SOURCE", "mongodb"),
            ("MONGO_URI", "mongodb://localhost:27017"),
            ("COLLECTION_NAME", "employees"),
        ]);
        let result = DataSourceType::from_lookup(lookup);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "missing configuration: DB_NAME"
        );

        // empty values count as missing
        let lookup = lookup_in(&[
            ("MONGO_URI", ""),
            ("DB_NAME", "company"),
            ("COLLECTION_NAME", "employees"),
        ]);
        let result = DataSourceType::from_lookup(lookup);
        assert_eq!(
            result.unwrap_err().to_string(),
            "missing configuration: MONGO_URI"
        );
    }

    #[test]
    fn test_from_lookup_sqlite() {
        let lookup = lookup_in(&[("DATA_SOURCE", "sqlite")]);
        let result = DataSourceType::from_lookup(lookup);
        assert_eq!(result.unwrap(), DataSourceType::SqliteMemory);

        let lookup = lookup_in(&[("DATA_SOURCE", "SQLite"), ("SQLITE_PATH", ":memory:")]);
        let result = DataSourceType::from_lookup(lookup);
        assert_eq!(result.unwrap(), DataSourceType::SqliteMemory);

        let lookup = lookup_in(&[("DATA_SOURCE", "sqlite"), ("SQLITE_PATH", "tmp/emp.db3")]);
        let result = DataSourceType::from_lookup(lookup);
        assert_eq!(
            result.unwrap(),
            DataSourceType::SqliteFile("tmp/emp.db3".into())
        );
    }

    #[test]
    fn test_from_lookup_unsupported() {
        let lookup = lookup_in(&[("DATA_SOURCE", "redis")]);
        let result = DataSourceType::from_lookup(lookup);
        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("unsupported value redis"));
    }

    #[test]
    fn test_build_data_source_memory() -> Result<(), Error> {
        let source = build_data_source(DataSourceType::SqliteMemory)?;
        let employees = source.all_employees()?;
        assert!(employees.is_empty());
        source.close();
        Ok(())
    }
}
