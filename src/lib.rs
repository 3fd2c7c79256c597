// hostprobe library - platform and privilege detection

// Re-export error types
pub mod error;
pub use error::{ProbeError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use platform::{PlatformDetector, PlatformFamily, PrivilegeDetector};

// Initialize logging
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG still wins over the default level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
