pub mod defaults;
pub mod formats;

pub use defaults::{default_reference_path, default_target_path, locale_label};
pub use formats::{detect_format, DocumentFormat, KeyMode, OutputFormat};
