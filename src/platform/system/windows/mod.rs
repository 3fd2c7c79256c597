// Windows native primitives

pub mod identity;
pub mod version;

pub use identity::{WindowsIdentity, WindowsIdentityProvider};
pub use version::{query_version_info, VersionInfo};
