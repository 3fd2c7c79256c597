// UI and formatting module

pub mod formatters;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::format_flag;
pub use system_formatters::{format_admin_decision, format_host_report};
