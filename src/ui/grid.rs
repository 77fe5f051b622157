//! Terminal rendering of the workbook grid.

use crate::core::Workbook;
use crate::core::projection::{SortDirection, ViewQuery};
use crate::models::{Record, RecordField};
use crate::utils::colors::{CYAN, GREY, colorize, colorize_optional, colorize_status};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::truncate;

const GRID_FIELDS: [RecordField; 7] = [
    RecordField::ImportedData,
    RecordField::LastUpdated,
    RecordField::CompanyName,
    RecordField::CompanyWebsite,
    RecordField::LinkedinUrl,
    RecordField::EmailWaterfall,
    RecordField::CompanyLogo,
];

const CELL_MAX: usize = 32;

pub const EMPTY_STATE: &str = "No matching records found";
pub const ADD_RECORD_HINT: &str = "Add a new record with `add`";

fn header_for(field: RecordField, query: &ViewQuery) -> String {
    match query.sort {
        Some(spec) if spec.field == field => {
            let arrow = match spec.direction {
                SortDirection::Asc => "▲",
                SortDirection::Desc => "▼",
            };
            format!("{} {arrow}", field.title())
        }
        _ => field.title().to_string(),
    }
}

fn cell(record: &Record, field: RecordField) -> String {
    match field {
        RecordField::EmailWaterfall => colorize_status(record.email_waterfall),
        other => colorize_optional(&truncate(record.field_value(other), CELL_MAX)),
    }
}

/// Build the grid text for the current projection. The row being edited shows
/// its pending buffer and a `*` marker.
pub fn render_grid(wb: &Workbook) -> String {
    let rows = wb.display_rows();
    let query = wb.query();
    let mut out = String::new();

    let mut filters = Vec::new();
    if !query.search.is_empty() {
        filters.push(format!("search \"{}\"", query.search));
    }
    if query.is_filtered() {
        let labels: Vec<&str> = query.filters.iter().map(|s| s.label()).collect();
        filters.push(format!("status {}", labels.join(", ")));
    }
    if !filters.is_empty() {
        out.push_str(&colorize(&format!("Filters: {}", filters.join(" | ")), GREY));
        out.push('\n');
    }

    if rows.is_empty() {
        out.push_str(&format!("\n  {}\n  {}\n", bold(EMPTY_STATE), colorize(ADD_RECORD_HINT, CYAN)));
    } else {
        let select_header = if wb.all_selected() { "[x]" } else { "[ ]" };
        let mut columns = vec![Column::new(select_header), Column::new("#")];
        columns.extend(GRID_FIELDS.iter().map(|f| Column::new(header_for(*f, query))));
        let mut table = Table::new(columns);

        let editing = wb.editor().buffer();

        for record in rows {
            let shown = match editing {
                Some(buf) if buf.id == record.id => buf,
                _ => record,
            };
            let marker = if wb.selection().contains(record.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let id = if editing.is_some_and(|b| b.id == record.id) {
                format!("{}*", record.id)
            } else {
                record.id.to_string()
            };

            let mut row = vec![marker.to_string(), id];
            row.extend(GRID_FIELDS.iter().map(|f| cell(shown, *f)));
            table.add_row(row);
        }

        out.push_str(&table.render());
    }

    out.push_str(&footer(wb));
    out
}

/// "N Rows", plus the selection count and run state when relevant.
pub fn footer(wb: &Workbook) -> String {
    let visible = wb.display_rows().len();
    let mut parts = vec![format!("{} Rows", visible)];

    if visible != wb.len() {
        parts.push(format!("{} total", wb.len()));
    }
    if !wb.selection().is_empty() {
        parts.push(format!("{} selected", wb.selection().len()));
    }
    if wb.is_busy() {
        parts.push(format!("enriching {}%", wb.progress()));
    }
    if wb.ui().auto_run {
        parts.push("auto run".to_string());
    }

    format!("{}\n", parts.join(" · "))
}

pub fn print_grid(wb: &Workbook) {
    print!("{}", render_grid(wb));
}
