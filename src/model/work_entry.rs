use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// English weekday name of `date`, e.g. `Friday`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WorkEntry {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub time_in: NaiveTime,
    /// `None` while the employee is still clocked in
    pub time_out: Option<NaiveTime>,
}

impl WorkEntry {
    pub fn is_open(&self) -> bool {
        self.time_out.is_none()
    }
}

/// Entry fields before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkEntry {
    pub employee_id: String,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub time_in: NaiveTime,
    pub time_out: Option<NaiveTime>,
}

impl NewWorkEntry {
    pub fn new(
        employee_id: impl Into<String>,
        date: NaiveDate,
        time_in: NaiveTime,
        time_out: Option<NaiveTime>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            day_of_week: weekday_name(date),
            time_in,
            time_out,
        }
    }
}

/// Wire form of a work entry joined with its employee's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(
    example = json!({
        "id": 7,
        "employee_id": "1001",
        "employee_name": "Jane Doe",
        "date": "2024-03-15",
        "day_of_week": "Friday",
        "time_in": "09:00:00",
        "time_out": null
    })
)]
pub struct EntryView {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    #[schema(format = "date")]
    pub date: String,
    pub day_of_week: String,
    pub time_in: String,
    #[schema(nullable = true)]
    pub time_out: Option<String>,
}

impl EntryView {
    pub fn new(entry: WorkEntry, employee_name: String) -> Self {
        Self {
            id: entry.id,
            employee_id: entry.employee_id,
            employee_name,
            date: entry.date.format(DATE_FORMAT).to_string(),
            day_of_week: entry.day_of_week,
            time_in: entry.time_in.format(TIME_FORMAT).to_string(),
            time_out: entry.time_out.map(|t| t.format(TIME_FORMAT).to_string()),
        }
    }
}
