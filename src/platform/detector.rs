// OS platform detection

use crate::platform::providers::{
    Environment, FileSystem, OsVersion, ProductType, RawPlatform, SystemEnvironment,
    SystemFileSystem,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Root folders that only exist together on macOS
pub const MAC_MARKER_DIRECTORIES: [&str; 4] = ["/Applications", "/System", "/Users", "/Volumes"];

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Windows,
    Linux,
    Mac,
    Unknown,
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlatformFamily::Windows => "Windows",
            PlatformFamily::Linux => "Linux",
            PlatformFamily::Mac => "Mac",
            PlatformFamily::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Determines the platform family, version and display name of the host.
///
/// Every query reads the providers again; nothing is cached.
#[derive(Debug, Clone)]
pub struct PlatformDetector<E = SystemEnvironment, F = SystemFileSystem> {
    env: E,
    fs: F,
}

impl PlatformDetector {
    /// Detector backed by the real OS
    pub fn system() -> Self {
        Self::new(SystemEnvironment, SystemFileSystem)
    }
}

impl Default for PlatformDetector {
    fn default() -> Self {
        Self::system()
    }
}

impl<E: Environment, F: FileSystem> PlatformDetector<E, F> {
    pub fn new(env: E, fs: F) -> Self {
        Self { env, fs }
    }

    pub fn environment(&self) -> &E {
        &self.env
    }

    pub fn platform(&self) -> PlatformFamily {
        match self.env.os_platform() {
            RawPlatform::MacOsx => PlatformFamily::Mac,
            // Some runtimes report macOS as plain Unix, so fall back to
            // checking for the macOS root folders.
            RawPlatform::Unix => {
                if self.has_mac_markers() {
                    PlatformFamily::Mac
                } else {
                    PlatformFamily::Linux
                }
            }
            _ => PlatformFamily::Windows,
        }
    }

    pub fn version(&self) -> OsVersion {
        self.env.os_version()
    }

    /// Human readable OS name
    pub fn name(&self) -> String {
        match self.platform() {
            PlatformFamily::Linux => "Linux".to_string(),
            PlatformFamily::Mac => "macOS".to_string(),
            PlatformFamily::Windows => {
                let product_type = self
                    .env
                    .os_product_type()
                    .unwrap_or(ProductType::Workstation);
                windows_version_name(self.version(), product_type).to_string()
            }
            PlatformFamily::Unknown => String::new(),
        }
    }

    fn has_mac_markers(&self) -> bool {
        // Probe every marker, no short circuit
        MAC_MARKER_DIRECTORIES
            .iter()
            .map(|dir| self.fs.directory_exists(dir))
            .fold(true, |all, present| all & present)
    }
}

/// Release name for a Windows version, `"Windows"` when the version is not known
pub fn windows_version_name(version: OsVersion, product_type: ProductType) -> &'static str {
    let is_server = product_type == ProductType::Server;

    match (version.major, version.minor) {
        (10, 0) | (6, 4) => {
            if is_server {
                "Windows Server 2016"
            } else {
                "Windows 10"
            }
        }
        (6, 3) => {
            if is_server {
                "Windows Server 2012 R2"
            } else {
                "Windows 8.1"
            }
        }
        (6, 2) => {
            if is_server {
                "Windows Server 2012"
            } else {
                "Windows 8"
            }
        }
        (6, 1) => {
            if is_server {
                "Windows Server 2008 R2"
            } else {
                "Windows 7"
            }
        }
        _ => "Windows",
    }
}
