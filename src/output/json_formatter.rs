use crate::compare::KeyReport;

/// Formatter for machine-readable output
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output, one report per line
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn format(&self, report: &KeyReport) -> serde_json::Result<String> {
        let mut output = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        output.push('\n');
        Ok(output)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}
