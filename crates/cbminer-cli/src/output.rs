//! CSV emission for the startup and investor reports.
//!
//! Contract: every field is quoted, multi-value fields (permalink
//! collections) are joined with a line break inside the field, rows are
//! comma-joined, output is UTF-8, no header row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use cbminer_core::report::{InvestorRow, StartupRow};
use csv::{QuoteStyle, WriterBuilder};

/// Writes the startup report to `path`. Overwrites any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written; fatal for
/// the run.
pub fn write_startup_csv(path: &Path, rows: &[StartupRow]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create startup report {}", path.display()))?;
    write_startup_rows(file, rows)
        .with_context(|| format!("cannot write startup report {}", path.display()))
}

/// Writes the investor report to `path`. Overwrites any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written; fatal for
/// the run.
pub fn write_investor_csv(path: &Path, rows: &[InvestorRow]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create investor report {}", path.display()))?;
    write_investor_rows(file, rows)
        .with_context(|| format!("cannot write investor report {}", path.display()))
}

fn writer<W: Write>(sink: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(sink)
}

fn write_startup_rows<W: Write>(sink: W, rows: &[StartupRow]) -> csv::Result<()> {
    let mut out = writer(sink);
    for row in rows {
        let raised_amount = display_opt(row.raised_amount);
        let year = display_opt(row.year);
        let month = display_opt(row.month);
        let vc_links = row.vc_links.join("\n");
        let person_links = row.person_links.join("\n");
        out.write_record([
            row.company_name.as_str(),
            row.crunchbase_url.as_str(),
            row.permalink.as_str(),
            row.industry.as_str(),
            raised_amount.as_str(),
            year.as_str(),
            month.as_str(),
            row.category.as_str(),
            vc_links.as_str(),
            person_links.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

fn write_investor_rows<W: Write>(sink: W, rows: &[InvestorRow]) -> csv::Result<()> {
    let mut out = writer(sink);
    for row in rows {
        out.write_record([
            row.name.as_str(),
            row.crunchbase_url.as_str(),
            row.permalink.as_str(),
            row.homepage_url.as_deref().unwrap_or(""),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Absent numeric provider fields become an empty (still quoted) field.
fn display_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
