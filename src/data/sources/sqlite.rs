//
// Copyright (c) 2024 Nathan Fiedler
//
use crate::data::sources::EmployeeDataSource;
use crate::domain::entities::Employee;
use crate::Error;
use log::error;
use rusqlite::{Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

///
/// Data source implementation backed by an SQLite database.
///
/// Each employee is one row of a single flat table. The `rowid` assigned by
/// SQLite plays the part of the store's internal key and is never exposed.
///
pub struct SQLiteEmployeeDataSource {
    // database connection
    conn: Arc<Mutex<Connection>>,
}

impl SQLiteEmployeeDataSource {
    /// Construct an SQLite-based data source that will be stored at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let conn = Connection::open(path)?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Construct an SQLite-based data source that will be memory resident.
    pub fn new_in_memory() -> Result<Self, Error> {
        let conn = Connection::open_in_memory()?;
        create_tables(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.conn
            .lock()
            .map_err(|e| Error::InternalError(format!("database lock poisoned: {}", e)))
    }
}

impl EmployeeDataSource for SQLiteEmployeeDataSource {
    fn insert_employee(&self, employee: Employee) -> Result<(), Error> {
        let db = self.lock()?;
        let mut stmt = db.prepare(
            "INSERT INTO employee (e_id, name, department, position) VALUES (?, ?, ?, ?)",
        )?;
        if stmt.execute([
            employee.id,
            employee.name,
            employee.department,
            employee.position,
        ])? == 1
        {
            Ok(())
        } else {
            // mysterious failure
            error!("error while inserting employee: no row written");
            Err(Error::InternalError("employee row not written".into()))
        }
    }

    fn get_employee(&self, employee_id: &str) -> Result<Employee, Error> {
        let db = self.lock()?;
        let found = fetch_employee(&db, employee_id)?;
        found
            .map(|(_, employee)| employee)
            .ok_or_else(|| Error::EmployeeNotFound(employee_id.to_owned()))
    }

    fn all_employees(&self) -> Result<Vec<Employee>, Error> {
        let db = self.lock()?;
        let mut stmt =
            db.prepare("SELECT e_id, name, department, position FROM employee ORDER BY rowid")?;
        let rows = stmt.query_map([], employee_from_row)?;
        let mut employees: Vec<Employee> = Vec::new();
        for row in rows {
            employees.push(row?);
        }
        Ok(employees)
    }

    fn update_employee(&self, employee_id: &str, partial: Employee) -> Result<u64, Error> {
        let db = self.lock()?;
        let Some((rowid, mut employee)) = fetch_employee(&db, employee_id)? else {
            return Ok(0);
        };
        // only report a modification when a value actually changed
        if !employee.overlay(&partial) {
            return Ok(0);
        }
        let mut stmt = db.prepare(
            "UPDATE employee SET e_id = ?, name = ?, department = ?, position = ? WHERE rowid = ?",
        )?;
        let count = stmt.execute(rusqlite::params![
            employee.id,
            employee.name,
            employee.department,
            employee.position,
            rowid
        ])?;
        Ok(count as u64)
    }

    fn delete_employee(&self, employee_id: &str) -> Result<u64, Error> {
        let db = self.lock()?;
        // identifiers are not unique, remove only the first match
        let mut stmt = db.prepare(
            "DELETE FROM employee WHERE rowid = (SELECT rowid FROM employee WHERE e_id = ? LIMIT 1)",
        )?;
        let count = stmt.execute([employee_id])?;
        Ok(count as u64)
    }

    fn delete_all_employees(&self) -> Result<u64, Error> {
        let db = self.lock()?;
        let count = db.execute("DELETE FROM employee", ())?;
        Ok(count as u64)
    }

    fn close(&self) {
        // the connection is closed when the last reference is dropped
    }
}

//
// Find the first row with the given employee identifier, returning the
// rowid along with the record.
//
fn fetch_employee(db: &Connection, employee_id: &str) -> Result<Option<(i64, Employee)>, Error> {
    let mut stmt = db.prepare(
        "SELECT e_id, name, department, position, rowid FROM employee WHERE e_id = ? LIMIT 1",
    )?;
    let found = stmt
        .query_row([employee_id], |row| {
            let rowid: i64 = row.get(4)?;
            Ok((rowid, employee_from_row(row)?))
        })
        .optional()?;
    Ok(found)
}

fn employee_from_row(row: &Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        position: row.get(3)?,
    })
}

//
// Create the database tables if they do not exist.
//
fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS employee (
            e_id TEXT NOT NULL,
            name TEXT NOT NULL DEFAULT '',
            department TEXT NOT NULL DEFAULT '',
            position TEXT NOT NULL DEFAULT ''
        )",
        (),
    )?;
    Ok(())
}
