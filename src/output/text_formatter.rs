use crate::compare::KeyReport;

/// Formatter for the plain-text report printed to stdout
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a report, one line per item:
    ///
    /// ```text
    /// Missing in HI (2): ['footer', 'title']
    /// Extra in HI (1): ['legacy']
    /// EN: 10 keys, HI: 9 keys
    /// ```
    ///
    /// When nothing differs the missing/extra lines are replaced by
    /// `All keys match!`.
    pub fn format(&self, report: &KeyReport) -> String {
        let mut output = String::new();

        if !report.missing.is_empty() {
            let line = format!(
                "Missing in {} ({}): {}",
                report.target.label,
                report.missing.len(),
                Self::format_key_list(&report.missing)
            );
            output.push_str(&line);
            output.push('\n');
        }

        if !report.extra.is_empty() {
            let line = format!(
                "Extra in {} ({}): {}",
                report.target.label,
                report.extra.len(),
                Self::format_key_list(&report.extra)
            );
            output.push_str(&line);
            output.push('\n');
        }

        if report.missing.is_empty() && report.extra.is_empty() {
            output.push_str("All keys match!\n");
        }

        let counts = format!(
            "{}: {} keys, {}: {} keys",
            report.reference.label,
            report.reference.key_count,
            report.target.label,
            report.target.key_count
        );
        output.push_str(&counts);
        output.push('\n');

        output
    }

    /// Render keys as a bracketed, comma-separated list of quoted literals
    pub fn format_key_list(keys: &[String]) -> String {
        let quoted: Vec<String> = keys.iter().map(|k| Self::quote_key(k)).collect();
        format!("[{}]", quoted.join(", "))
    }

    /// Quote a key with single quotes, or double quotes when the key holds a
    /// single quote and no double quote. Backslashes, the chosen quote and
    /// control characters are escaped.
    fn quote_key(key: &str) -> String {
        let quote = if key.contains('\'') && !key.contains('"') {
            '"'
        } else {
            '\''
        };

        let mut out = String::with_capacity(key.len() + 2);
        out.push(quote);
        for ch in key.chars() {
            match ch {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if Self::is_invisible(c) => out.push_str(&Self::escape_code_point(c)),
                c => out.push(c),
            }
        }
        out.push(quote);
        out
    }

    /// Control, format and non-space separator characters. These render as
    /// nothing (or as plain whitespace) and would hide a key difference.
    fn is_invisible(c: char) -> bool {
        if c.is_control() {
            return true;
        }
        matches!(
            c as u32,
            // separators other than U+0020
            0x00A0 | 0x1680 | 0x2000..=0x200A | 0x2028 | 0x2029 | 0x202F | 0x205F | 0x3000
            // format characters (Cf)
            | 0x00AD | 0x0600..=0x0605 | 0x061C | 0x06DD | 0x070F | 0x0890..=0x0891
            | 0x08E2 | 0x180E | 0x200B..=0x200F | 0x202A..=0x202E | 0x2060..=0x2064
            | 0x2066..=0x206F | 0xFEFF | 0xFFF9..=0xFFFB | 0x110BD | 0x110CD
            | 0x13430..=0x1343F | 0x1BCA0..=0x1BCA3 | 0x1D173..=0x1D17A | 0xE0001
            | 0xE0020..=0xE007F
            // private use and noncharacters
            | 0xE000..=0xF8FF | 0xFDD0..=0xFDEF | 0xFFFE | 0xFFFF | 0xF0000..=0x10FFFF
        )
    }

    /// `\xhh`, `\uhhhh` or `\Uhhhhhhhh` depending on the code point width
    fn escape_code_point(c: char) -> String {
        let code = c as u32;
        if code <= 0xFF {
            format!("\\x{:02x}", code)
        } else if code <= 0xFFFF {
            format!("\\u{:04x}", code)
        } else {
            format!("\\U{:08x}", code)
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}
