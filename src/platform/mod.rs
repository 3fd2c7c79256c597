// Platform and privilege detection

pub mod detector;
pub mod elevation;
pub mod identity;
pub mod providers;
pub mod system;

// Re-exports for cleaner imports
pub use detector::{windows_version_name, PlatformDetector, PlatformFamily};
pub use elevation::{AdminCheck, AdminDecision, PrivilegeDetector, RemoteSessionPolicy};
pub use identity::{ElevationType, IdentityProvider, NoIdentity, SystemIdentity};
pub use providers::{
    Environment, FileSystem, OsVersion, ProductType, RawPlatform, SystemEnvironment,
    SystemFileSystem,
};
