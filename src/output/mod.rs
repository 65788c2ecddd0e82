pub mod formatter;

pub use formatter::Formatter;

use crate::cli::OutputFormat;
use crate::counter::LaborReport;
use crate::error::Result;

/// Format a labor report based on the specified format
pub fn format_report(report: &LaborReport, format: OutputFormat) -> Result<String> {
    let formatter = Formatter::new(format);
    formatter.format_report(report)
}
