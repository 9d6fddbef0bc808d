//! Narrow persistence ports, one per entity.

use async_trait::async_trait;
use chrono::NaiveTime;

use crate::error::AppResult;
use crate::model::employee::Employee;
use crate::model::work_entry::{NewWorkEntry, WorkEntry};

pub mod sqlite;

pub use sqlite::SqlStore;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get(&self, id: &str) -> AppResult<Option<Employee>>;

    /// All employees in insertion order.
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Fails with `Conflict` when the id is already taken.
    async fn insert(&self, employee: &Employee) -> AppResult<()>;

    /// Removes the employee and every work entry it owns. Returns `false`
    /// when no such employee existed.
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait WorkEntryRepository: Send + Sync {
    async fn get(&self, id: i64) -> AppResult<Option<WorkEntry>>;

    /// Entries in id order, optionally restricted to one employee.
    async fn list(&self, employee_id: Option<&str>) -> AppResult<Vec<WorkEntry>>;

    async fn insert(&self, entry: &NewWorkEntry) -> AppResult<WorkEntry>;

    async fn set_time_out(&self, id: i64, time_out: NaiveTime) -> AppResult<bool>;

    async fn delete(&self, id: i64) -> AppResult<bool>;
}
