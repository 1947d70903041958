//
// Copyright (c) 2024 Nathan Fiedler
//
pub mod data;
pub mod domain;

///
/// This type represents various errors that can occur within this crate.
///
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Error occurred during an I/O related operation.
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
    /// Error occurred during an SQL related operation.
    #[error("SQL error: {0}")]
    SQLError(#[from] rusqlite::Error),
    /// Error occurred while (de)serializing JSON.
    #[error("JSON error: {0}")]
    JSONError(#[from] serde_json::Error),
    /// Error reported by the MongoDB driver.
    #[error("MongoDB error: {0}")]
    MongoError(#[from] mongodb::error::Error),
    /// Error occurred while serializing a BSON document.
    #[error("BSON error: {0}")]
    BsonError(#[from] mongodb::bson::ser::Error),
    /// Employee record for given identifier was not found.
    #[error("no such employee: {0}")]
    EmployeeNotFound(String),
    /// Operation requires an employee identifier but none was given.
    #[error("invalid employee id")]
    MissingIdentifier,
    /// Required configuration setting was not provided.
    #[error("missing configuration: {0}")]
    Configuration(String),
    /// An unexpected error occurred that would otherwise have been a panic.
    #[error("something bad happened: {0}")]
    InternalError(String),
}
