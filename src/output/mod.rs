pub mod json_formatter;
pub mod text_formatter;

pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;

use crate::compare::KeyReport;
use crate::config::OutputFormat;

/// Render a report in the requested format
pub fn render(report: &KeyReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new().format(report)),
        OutputFormat::Json => JsonFormatter::new().format(report),
    }
}
