use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{AppError, AppResult};
use crate::model::work_entry::EntryView;

pub const CSV_HEADER: [&str; 7] = [
    "id",
    "employee_id",
    "employee_name",
    "date",
    "day_of_week",
    "time_in",
    "time_out",
];

/// Writes the rows verbatim. Fields are never quoted, so a value holding a
/// comma shifts the columns of its row.
pub fn render_csv(rows: &[EntryView]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER).map_err(export_error)?;

    for row in rows {
        let id = row.id.to_string();
        wtr.write_record([
            id.as_str(),
            row.employee_id.as_str(),
            row.employee_name.as_str(),
            row.date.as_str(),
            row.day_of_week.as_str(),
            row.time_in.as_str(),
            row.time_out.as_deref().unwrap_or(""),
        ])
        .map_err(export_error)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

fn export_error(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}
