use serde::Serialize;
use stringsgen::{L10nEnumBuilder, PlaceholderType};
use unicode_width::UnicodeWidthStr;

use crate::config::Settings;
use crate::generate::collect_entries;

/// One row of the inspect report.
#[derive(Debug, Serialize)]
pub struct InspectRow {
    pub key: String,
    pub case: String,
    pub types: Vec<PlaceholderType>,
}

pub fn inspect_rows(builder: &L10nEnumBuilder) -> Vec<InspectRow> {
    builder
        .entries()
        .iter()
        .map(|entry| InspectRow {
            key: entry.key().to_string(),
            case: builder.case_name(entry),
            types: entry.types().to_vec(),
        })
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Render rows as an aligned three-column table.
pub fn format_table(rows: &[InspectRow]) -> String {
    let key_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.key.as_str()))
        .chain(std::iter::once("KEY".len()))
        .max()
        .unwrap_or(0);
    let case_width = rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.case.as_str()))
        .chain(std::iter::once("CASE".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}  {}  TYPES\n", pad("KEY", key_width), pad("CASE", case_width));
    for row in rows {
        let types = if row.types.is_empty() {
            "-".to_string()
        } else {
            row.types
                .iter()
                .map(PlaceholderType::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!(
            "{}  {}  {}\n",
            pad(&row.key, key_width),
            pad(&row.case, case_width),
            types
        ));
    }
    out
}

/// Run the inspect command: print the entries a generate run would emit.
pub fn run_inspect_command(settings: Settings, json: bool) -> Result<(), String> {
    let builder = collect_entries(&settings)?;
    let rows = inspect_rows(&builder);

    if json {
        let text = serde_json::to_string_pretty(&rows)
            .map_err(|e| format!("Error serializing to JSON: {}", e))?;
        println!("{}", text);
    } else {
        print!("{}", format_table(&rows));
        println!("\n{} entries", rows.len());
    }
    Ok(())
}
