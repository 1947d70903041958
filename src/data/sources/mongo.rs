//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EmployeeDataSource;
use crate::domain::entities::Employee;
use crate::Error;
use log::{error, info};
use mongodb::bson::{doc, to_document, Document};
use mongodb::sync::{Client, Collection};

///
/// Data source implementation backed by a MongoDB collection.
///
/// Records are located by their `e_id` field, never by the `_id` key that
/// MongoDB assigns to each document.
///
pub struct MongoEmployeeDataSource {
    // client owns the connection pool shared by every request
    client: Client,
    collection: Collection<Employee>,
}

impl MongoEmployeeDataSource {
    ///
    /// Connect to the server at the given URI and verify the connection by
    /// sending a `ping` command before returning.
    ///
    pub fn new(uri: &str, database: &str, collection: &str) -> Result<Self, Error> {
        let client = Client::with_uri_str(uri)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)?;
        info!("connected to mongodb");
        let collection = client.database(database).collection::<Employee>(collection);
        Ok(Self { client, collection })
    }
}

impl EmployeeDataSource for MongoEmployeeDataSource {
    fn insert_employee(&self, employee: Employee) -> Result<(), Error> {
        let result = self.collection.insert_one(&employee, None).map_err(|e| {
            error!("error while inserting employee: {}", e);
            e
        })?;
        info!(
            "employee {} stored as document {}",
            employee.id, result.inserted_id
        );
        Ok(())
    }

    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error> {
        let found = self
            .collection
            .find_one(id_filter(employee_id), None)
            .map_err(|e| {
                error!("error while getting employee: {}", e);
                e
            })?;
        found.ok_or_else(|| Error::EmployeeNotFound(employee_id.to_owned()))
    }

    fn all_employees(&self) -> Result<Vec<Employee>, Error> {
        let cursor = self.collection.find(doc! {}, None).map_err(|e| {
            error!("error while getting employees: {}", e);
            e
        })?;
        collect_employees(cursor)
    }

    fn update_employee(&self, employee_id: &str, partial: Employee) -> Result<u64, Error> {
        let update = merge_update(&partial)?;
        let result = self
            .collection
            .update_one(id_filter(employee_id), update, None)
            .map_err(|e| {
                error!("error while updating employee: {}", e);
                e
            })?;
        Ok(result.modified_count)
    }

    fn delete_employee(&self, employee_id: &str) -> Result<u64, Error> {
        let result = self
            .collection
            .delete_one(id_filter(employee_id), None)
            .map_err(|e| {
                error!("error while deleting employee: {}", e);
                e
            })?;
        Ok(result.deleted_count)
    }

    fn delete_all_employees(&self) -> Result<u64, Error> {
        let result = self.collection.delete_many(doc! {}, None).map_err(|e| {
            error!("error while deleting all employees: {}", e);
            e
        })?;
        Ok(result.deleted_count)
    }

    fn close(&self) {
        // the client is a handle to shared state, shutting down a clone
        // terminates the background workers of all of them
        self.client.clone().shutdown();
        info!("disconnected from mongodb");
    }
}

//
// Filter matching the document(s) with the given employee identifier.
//
fn id_filter(employee_id: &str) -> Document {
    doc! { "e_id": employee_id }
}

//
// Drain the cursor, stopping at the first document that fails to decode.
//
fn collect_employees<I>(cursor: I) -> Result<Vec<Employee>, Error>
where
    I: IntoIterator<Item = mongodb::error::Result<Employee>>,
{
    let mut employees: Vec<Employee> = Vec::new();
    for result in cursor {
        let employee = result.map_err(|e| {
            error!("error while decoding employees: {}", e);
            e
        })?;
        employees.push(employee);
    }
    Ok(employees)
}

//
// Update that sets only the non-empty fields of the partial record.
//
fn merge_update(partial: &Employee) -> Result<Document, Error> {
    let fields = to_document(partial)?;
    Ok(doc! { "$set": fields })
}
