use async_trait::async_trait;
use chrono::NaiveTime;
use sqlx::SqlitePool;
use tracing::{debug, error};

use super::{EmployeeRepository, WorkEntryRepository};
use crate::error::{AppError, AppResult};
use crate::model::employee::Employee;
use crate::model::work_entry::{NewWorkEntry, WorkEntry};

/// Both repositories over one SQLite pool.
#[derive(Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Deletes the employee's entries then the employee in one transaction.
    /// Returns the (entries, employees) row counts.
    async fn delete_cascade(&self, id: &str) -> Result<(u64, u64), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entries = sqlx::query("DELETE FROM work_entries WHERE employee_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let employees = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((entries.rows_affected(), employees.rows_affected()))
    }
}

#[async_trait]
impl EmployeeRepository for SqlStore {
    async fn get(&self, id: &str) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>("SELECT id, name FROM employees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .inspect_err(|e| error!(error = %e, employee_id = id, "Employee lookup failed"))?;
        Ok(employee)
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees =
            sqlx::query_as::<_, Employee>("SELECT id, name FROM employees ORDER BY rowid")
                .fetch_all(&self.pool)
                .await
                .inspect_err(|e| error!(error = %e, "Employee listing failed"))?;
        Ok(employees)
    }

    async fn insert(&self, employee: &Employee) -> AppResult<()> {
        let result = sqlx::query("INSERT INTO employees (id, name) VALUES (?, ?)")
            .bind(&employee.id)
            .bind(&employee.name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::duplicate_employee())
            }
            Err(e) => {
                error!(error = %e, employee_id = %employee.id, "Employee insert failed");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let (entries, employees) = self
            .delete_cascade(id)
            .await
            .inspect_err(|e| error!(error = %e, employee_id = id, "Employee delete failed"))?;

        debug!(
            employee_id = id,
            entries_removed = entries,
            "Employee delete committed"
        );
        Ok(employees > 0)
    }
}

#[async_trait]
impl WorkEntryRepository for SqlStore {
    async fn get(&self, id: i64) -> AppResult<Option<WorkEntry>> {
        let entry = sqlx::query_as::<_, WorkEntry>(
            r#"
            SELECT id, employee_id, date, day_of_week, time_in, time_out
            FROM work_entries
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| error!(error = %e, entry_id = id, "Entry lookup failed"))?;
        Ok(entry)
    }

    async fn list(&self, employee_id: Option<&str>) -> AppResult<Vec<WorkEntry>> {
        let entries = match employee_id {
            Some(employee_id) => {
                sqlx::query_as::<_, WorkEntry>(
                    r#"
                    SELECT id, employee_id, date, day_of_week, time_in, time_out
                    FROM work_entries
                    WHERE employee_id = ?
                    ORDER BY id
                    "#,
                )
                .bind(employee_id)
                .fetch_all(&self.pool)
                .await
                .inspect_err(|e| error!(error = %e, employee_id, "Entry listing failed"))?
            }
            None => {
                sqlx::query_as::<_, WorkEntry>(
                    r#"
                    SELECT id, employee_id, date, day_of_week, time_in, time_out
                    FROM work_entries
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
                .inspect_err(|e| error!(error = %e, "Entry listing failed"))?
            }
        };
        Ok(entries)
    }

    async fn insert(&self, entry: &NewWorkEntry) -> AppResult<WorkEntry> {
        let result = sqlx::query(
            r#"
            INSERT INTO work_entries (employee_id, date, day_of_week, time_in, time_out)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.employee_id)
        .bind(entry.date)
        .bind(&entry.day_of_week)
        .bind(entry.time_in)
        .bind(entry.time_out)
        .execute(&self.pool)
        .await
        .inspect_err(|e| {
            error!(error = %e, employee_id = %entry.employee_id, "Entry insert failed")
        })?;

        Ok(WorkEntry {
            id: result.last_insert_rowid(),
            employee_id: entry.employee_id.clone(),
            date: entry.date,
            day_of_week: entry.day_of_week.clone(),
            time_in: entry.time_in,
            time_out: entry.time_out,
        })
    }

    async fn set_time_out(&self, id: i64, time_out: NaiveTime) -> AppResult<bool> {
        let result = sqlx::query("UPDATE work_entries SET time_out = ? WHERE id = ?")
            .bind(time_out)
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!(error = %e, entry_id = id, "Entry clock-out failed"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM work_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .inspect_err(|e| error!(error = %e, entry_id = id, "Entry delete failed"))?;
        Ok(result.rows_affected() > 0)
    }
}
