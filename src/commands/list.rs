//! Lists the active donor's donations as a table, JSON or CSV.

use crate::args::{ListArgs, OutputFormat};
use crate::commands::{bound_view, plural, Out};
use crate::model::Donation;
use crate::{Config, Mode, Result};
use anyhow::Context;

const COLUMNS: [&str; 7] = [
    "Id",
    "Date",
    "Organization",
    "Amount",
    "Frequency",
    "Category",
    "Notes",
];

/// Shows the donations visible to the active donor.
///
/// # Arguments
///
/// - `config` - The application configuration, which carries the active
///   donor.
/// - `mode` - Where donation records are read from.
/// - `args` - The output format, `table` by default.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - The rendered listing as the message.
/// - The visible `Donation` records as structured data, in insertion order.
///
/// # Errors
///
/// Returns an error when no donor is active.
pub async fn list(config: Config, mode: Mode, args: &ListArgs) -> Result<Out<Vec<Donation>>> {
    let (donor, _store, view) = bound_view(&config, mode).await?;
    let visible = view.visible().to_vec();

    let message = match args.format() {
        OutputFormat::Table if visible.is_empty() => {
            format!("No donations recorded for donor '{donor}'")
        }
        OutputFormat::Table => {
            let count = visible.len();
            format!(
                "{count} donation{} for donor '{donor}':\n\n{}",
                plural(count),
                render_table(&visible)
            )
        }
        OutputFormat::Json => serde_json::to_string_pretty(&visible)
            .context("Unable to render the donations as JSON")?,
        OutputFormat::Csv => super::export::to_csv(&visible)?,
    };
    Ok(Out::new(message, visible))
}

fn render_table(donations: &[Donation]) -> String {
    let rows: Vec<[String; 7]> = donations
        .iter()
        .map(|d| {
            [
                d.id.to_string(),
                d.date.to_string(),
                d.organization_name.clone(),
                d.amount.to_string(),
                d.frequency.label().to_string(),
                d.category.clone().unwrap_or_default(),
                d.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(&COLUMNS.map(str::to_string), &widths));
    lines.push(format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.join("\n")
}

fn format_row(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut out = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:<width$}"));
    }
    out.trim_end().to_string()
}
