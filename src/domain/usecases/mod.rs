//
// Copyright (c) 2024 Nathan Fiedler
//

//! Use cases for managing employee records, one for each operation exposed
//! by the web service. Each holds a shared handle to the repository, making
//! them cheap to construct for every request.

use anyhow::Error;
use std::cmp;
use std::fmt;

pub mod create_employee;
pub mod fetch_employee;
pub mod list_employees;
pub mod remove_all_employees;
pub mod remove_employee;
pub mod update_employee;

/// `UseCase` is the interface by which all use cases are invoked.
pub trait UseCase<Type, Params> {
    fn call(&self, params: Params) -> Result<Type, Error>;
}

/// `NoParams` is the type for use cases that operate on every record.
#[derive(Clone, Debug)]
pub struct NoParams {}

impl fmt::Display for NoParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoParams()")
    }
}

impl cmp::PartialEq for NoParams {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl cmp::Eq for NoParams {}
