//! SQLite-backed record store
//!
//! Owns the canonical in-memory list of students and mirrors every add to
//! the configured database table. Each database operation opens its own
//! connection, executes, and disconnects; nothing is pooled or reused.

use rusqlite::{params, Connection, Result as SqliteResult};
use std::path::PathBuf;
use thiserror::Error;

use super::models::Student;
use crate::config::DatabaseConfig;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Failed to create data directory: {0}")]
    CreateDir(std::io::Error),
}

/// Record store for student rows.
pub struct Store {
    db_path: PathBuf,
    table: String,
    students: Vec<Student>,
}

impl Store {
    /// Open the store described by `config` and load every existing row.
    ///
    /// Never fails: if the database is unreachable the error is logged and
    /// the store starts with an empty list.
    pub fn open(config: &DatabaseConfig) -> Self {
        let mut store = Self {
            db_path: config.path.clone(),
            table: config.table.clone(),
            students: Vec::new(),
        };

        match store.load_all() {
            Ok(rows) => store.students = rows,
            Err(err) => {
                tracing::error!(
                    path = %store.db_path.display(),
                    error = %err,
                    "Failed to load students, starting with an empty list"
                );
            }
        }

        store
    }

    /// The canonical in-memory list, in load/insert order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Append a record to the in-memory list, then write it to the table.
    ///
    /// The in-memory append stands even when the write fails, so the two
    /// views may diverge until the next load. Callers log the error and
    /// carry on; nothing is retried or rolled back.
    pub fn add(&mut self, student: Student) -> Result<(), StoreError> {
        let row = student.clone();
        self.students.push(student);
        self.insert(&row)
    }

    /// Fetch every row from the table in natural retrieval order.
    fn load_all(&self) -> Result<Vec<Student>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT name, regNumber, mathMarks, javaMarks, phpMarks FROM {}",
            self.table
        ))?;

        let students = stmt
            .query_map([], Self::row_to_student)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(students)
    }

    fn insert(&self, student: &Student) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (name, regNumber, mathMarks, javaMarks, phpMarks)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                self.table
            ),
            params![
                student.name,
                student.reg_number,
                student.math_marks,
                student.java_marks,
                student.php_marks,
            ],
        )?;
        Ok(())
    }

    /// Open a fresh connection and make sure the table exists.
    ///
    /// The table name comes from configuration and is interpolated into the
    /// statement text; identifiers cannot be bound as parameters. Values
    /// always go through placeholders.
    fn connect(&self) -> Result<Connection, StoreError> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::CreateDir)?;
        }

        let conn = Connection::open(&self.db_path)?;
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    name TEXT NOT NULL,
                    regNumber TEXT NOT NULL,
                    mathMarks INTEGER NOT NULL,
                    javaMarks INTEGER NOT NULL,
                    phpMarks INTEGER NOT NULL
                )",
                self.table
            ),
            [],
        )?;

        Ok(conn)
    }

    /// Convert a database row to a Student
    fn row_to_student(row: &rusqlite::Row) -> SqliteResult<Student> {
        Ok(Student {
            name: row.get(0)?,
            reg_number: row.get(1)?,
            math_marks: row.get(2)?,
            java_marks: row.get(3)?,
            php_marks: row.get(4)?,
        })
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.db_path)
            .field("table", &self.table)
            .field("students", &self.students.len())
            .finish()
    }
}
