use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::require_employee;
use crate::error::{AppError, AppResult};
use crate::model::employee::{Employee, EmployeeSummary};
use crate::repository::{EmployeeRepository, WorkEntryRepository};

/// Employee identity records.
#[derive(Clone)]
pub struct DirectoryService {
    employees: Arc<dyn EmployeeRepository>,
    entries: Arc<dyn WorkEntryRepository>,
}

impl DirectoryService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        entries: Arc<dyn WorkEntryRepository>,
    ) -> Self {
        Self { employees, entries }
    }

    /// Creates an employee under a caller-chosen id and returns that id.
    pub async fn add_employee(&self, id: &str, name: &str) -> AppResult<String> {
        if id.trim().is_empty() {
            return Err(AppError::Validation("Employee ID must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(AppError::Validation("Employee name must not be empty".into()));
        }

        if self.employees.get(id).await?.is_some() {
            return Err(AppError::duplicate_employee());
        }

        let employee = Employee {
            id: id.to_string(),
            name: name.to_string(),
        };
        self.employees.insert(&employee).await?;

        info!(employee_id = %employee.id, "Employee added");
        Ok(employee.id)
    }

    pub async fn get_employee(&self, id: &str) -> AppResult<Employee> {
        require_employee(self.employees.as_ref(), id).await
    }

    pub async fn list_employees(&self) -> AppResult<Vec<EmployeeSummary>> {
        let employees = self.employees.list().await?;

        let mut entry_ids: HashMap<String, Vec<i64>> = HashMap::new();
        for entry in self.entries.list(None).await? {
            entry_ids.entry(entry.employee_id).or_default().push(entry.id);
        }

        Ok(employees
            .into_iter()
            .map(|employee| EmployeeSummary {
                work_entries: entry_ids.remove(&employee.id).unwrap_or_default(),
                id: employee.id,
                name: employee.name,
            })
            .collect())
    }

    /// Deletes the employee along with all of its work entries.
    pub async fn delete_employee(&self, id: &str) -> AppResult<()> {
        if !self.employees.delete(id).await? {
            return Err(AppError::employee_not_found());
        }

        info!(employee_id = id, "Employee deleted");
        Ok(())
    }
}
