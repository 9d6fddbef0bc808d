use std::sync::Arc;

use mockable::Clock;

use crate::error::{AppError, AppResult};
use crate::model::employee::Employee;
use crate::repository::EmployeeRepository;

pub mod directory;
pub mod export;
pub mod timesheet;

pub use directory::DirectoryService;
pub use timesheet::TimesheetService;

pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Loads an employee or fails with `NotFound`.
async fn require_employee(
    employees: &dyn EmployeeRepository,
    employee_id: &str,
) -> AppResult<Employee> {
    employees
        .get(employee_id)
        .await?
        .ok_or_else(AppError::employee_not_found)
}
