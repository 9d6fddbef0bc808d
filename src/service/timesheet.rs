use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, Timelike};
use chrono_tz::Tz;
use tracing::{debug, info};

use super::{SharedClock, export, require_employee};
use crate::error::{AppError, AppResult};
use crate::model::work_entry::{DATE_FORMAT, EntryView, NewWorkEntry, TIME_FORMAT};
use crate::repository::{EmployeeRepository, WorkEntryRepository};

/// Clock-in/clock-out bookkeeping and the reports derived from it.
#[derive(Clone)]
pub struct TimesheetService {
    employees: Arc<dyn EmployeeRepository>,
    entries: Arc<dyn WorkEntryRepository>,
    clock: SharedClock,
    timezone: Tz,
}

impl TimesheetService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        entries: Arc<dyn WorkEntryRepository>,
        clock: SharedClock,
        timezone: Tz,
    ) -> Self {
        Self {
            employees,
            entries,
            clock,
            timezone,
        }
    }

    /// Wall-clock time in the configured zone, to the second.
    fn local_now(&self) -> NaiveDateTime {
        self.clock
            .utc()
            .with_timezone(&self.timezone)
            .naive_local()
            .trunc_subsecs(0)
    }

    /// Opens a new entry stamped with the current date and time. An employee
    /// may hold several open entries at once.
    pub async fn clock_in(&self, employee_id: &str) -> AppResult<i64> {
        let employee = require_employee(self.employees.as_ref(), employee_id).await?;

        let now = self.local_now();
        let entry = self
            .entries
            .insert(&NewWorkEntry::new(employee.id, now.date(), now.time(), None))
            .await?;

        info!(
            employee_id,
            entry_id = entry.id,
            date = %entry.date,
            time_in = %entry.time_in,
            "Clocked in"
        );
        Ok(entry.id)
    }

    /// Stamps `time_out` with the current time. A closed entry is overwritten
    /// rather than rejected.
    pub async fn clock_out(&self, entry_id: i64) -> AppResult<NaiveTime> {
        let entry = self
            .entries
            .get(entry_id)
            .await?
            .ok_or_else(AppError::entry_not_found)?;

        let time_out = self.local_now().time();
        if !self.entries.set_time_out(entry.id, time_out).await? {
            return Err(AppError::entry_not_found());
        }

        if !entry.is_open() {
            debug!(entry_id, previous = ?entry.time_out, %time_out, "Overwriting time_out of closed entry");
        }
        info!(entry_id, %time_out, "Clocked out");
        Ok(time_out)
    }

    /// Records an entry from caller-supplied values. `time_out` of `None` or
    /// `""` leaves the entry open.
    pub async fn add_custom_entry(
        &self,
        employee_id: &str,
        date: &str,
        time_in: &str,
        time_out: Option<&str>,
    ) -> AppResult<EntryView> {
        let employee = require_employee(self.employees.as_ref(), employee_id).await?;

        let date = unpadded(date)
            .and_then(|d| NaiveDate::parse_from_str(d, DATE_FORMAT).ok())
            .ok_or_else(|| {
                AppError::Validation(format!("Invalid date `{date}`, expected YYYY-MM-DD"))
            })?;
        let time_in = parse_time("time_in", time_in)?;
        let time_out = match time_out {
            Some(raw) if !raw.is_empty() => Some(parse_time("time_out", raw)?),
            _ => None,
        };

        let entry = self
            .entries
            .insert(&NewWorkEntry::new(employee.id, date, time_in, time_out))
            .await?;

        info!(employee_id, entry_id = entry.id, "Custom entry added");
        Ok(EntryView::new(entry, employee.name))
    }

    /// Entries joined with their employee's name, optionally for one employee.
    pub async fn list_entries(&self, employee_id: Option<&str>) -> AppResult<Vec<EntryView>> {
        let names: HashMap<String, String> = self
            .employees
            .list()
            .await?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();

        let entries = self.entries.list(employee_id).await?;
        debug!(count = entries.len(), ?employee_id, "Listing entries");

        Ok(entries
            .into_iter()
            .map(|entry| {
                let name = names.get(&entry.employee_id).cloned().unwrap_or_default();
                EntryView::new(entry, name)
            })
            .collect())
    }

    pub async fn delete_entry(&self, entry_id: i64) -> AppResult<()> {
        if !self.entries.delete(entry_id).await? {
            return Err(AppError::entry_not_found());
        }

        info!(entry_id, "Entry deleted");
        Ok(())
    }

    /// Every entry as CSV, header first.
    pub async fn export_csv(&self) -> AppResult<String> {
        let rows = self.list_entries(None).await?;
        export::render_csv(&rows)
    }
}

/// chrono skips whitespace before numeric fields; wire values carry none.
fn unpadded(raw: &str) -> Option<&str> {
    (!raw.chars().any(char::is_whitespace)).then_some(raw)
}

fn parse_time(field: &str, raw: &str) -> AppResult<NaiveTime> {
    let invalid = || AppError::Validation(format!("Invalid {field} `{raw}`, expected HH:MM:SS"));

    let time = unpadded(raw)
        .and_then(|t| NaiveTime::parse_from_str(t, TIME_FORMAT).ok())
        .ok_or_else(invalid)?;
    // chrono reads `:60` as a leap second
    if time.nanosecond() >= 1_000_000_000 {
        return Err(invalid());
    }
    Ok(time)
}
