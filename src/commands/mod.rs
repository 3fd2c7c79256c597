// Command handlers module
pub mod admin;
pub mod completions;
pub mod config;
pub mod info;
pub mod version;

// Re-exports for cleaner imports
pub use admin::execute as admin;
pub use info::execute as info;
pub use version::execute as version;
