// Configuration and host reporting

pub mod config;
pub mod report;

// Re-export commonly used items
pub use config::Config;
pub use report::{HostReport, PrivilegeReport, SessionReport};
