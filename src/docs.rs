use crate::api::employee::AddEmployee;
use crate::api::work_entry::{ClockIn, CustomEntry};
use crate::model::employee::{Employee, EmployeeSummary};
use crate::model::work_entry::EntryView;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Timesheet API",
        version = "0.1.0",
        description = r#"
## Employee Time Tracking

Records employees and their clock-in/clock-out work entries.

### Key Features
- **Directory**: add, view, list and delete employees (deleting an employee removes its entries)
- **Timesheet**: clock in, clock out, record manual entries, list and delete entries
- **Export**: every entry as CSV

### Formats
- Dates are `YYYY-MM-DD`, times are `HH:MM:SS`
- Server-generated timestamps use the zone configured at deployment
- Errors are returned as `{"error": "<message>"}`
"#,
    ),
    paths(
        crate::api::employee::add_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::get_employee,
        crate::api::employee::list_employees,

        crate::api::work_entry::clock_in,
        crate::api::work_entry::clock_out,
        crate::api::work_entry::list_entries,
        crate::api::work_entry::add_custom_entry,
        crate::api::work_entry::delete_entry,
        crate::api::work_entry::export_csv
    ),
    components(
        schemas(
            AddEmployee,
            Employee,
            EmployeeSummary,
            ClockIn,
            CustomEntry,
            EntryView
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Timesheet", description = "Work entry and export APIs"),
    )
)]
pub struct ApiDoc;
