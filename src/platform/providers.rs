// Host environment and filesystem seams used by the detectors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Raw platform identifier as reported by the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RawPlatform {
    WindowsNt,
    Unix,
    MacOsx,
    Other,
}

/// Windows product type from the OS version-info query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    Workstation,
    Server,
}

/// OS version snapshot (major.minor.build)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Parse the leading numeric components of a release string.
    ///
    /// Kernel releases such as `6.8.0-45-generic` or `23.4.0` are accepted;
    /// anything after the first non-numeric component is ignored. Returns
    /// `None` when not even a major number is present.
    pub fn parse(release: &str) -> Option<Self> {
        let mut parts = release
            .trim()
            .split(|c: char| c == '.' || c == '-' || c == '+' || c == '_')
            .map(|part| part.parse::<u32>().ok());

        let major = parts.next().flatten()?;
        let minor = parts.next().flatten().unwrap_or(0);
        let build = parts.next().flatten().unwrap_or(0);

        Some(Self::new(major, minor, build))
    }

    /// `major.minor` key used for release-name lookup
    pub fn major_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

/// Environment information source
pub trait Environment {
    fn os_platform(&self) -> RawPlatform;

    fn os_version(&self) -> OsVersion;

    /// Workstation/server flag; `None` when the query is unavailable or failed
    fn os_product_type(&self) -> Option<ProductType>;

    /// Value of an environment variable, `None` when unset
    fn var(&self, name: &str) -> Option<String>;

    /// Kernel release string as the OS reports it
    fn kernel_version(&self) -> Option<String> {
        None
    }
}

/// Filesystem existence checks
pub trait FileSystem {
    fn directory_exists(&self, path: &str) -> bool;
}

impl<T: Environment + ?Sized> Environment for &T {
    fn os_platform(&self) -> RawPlatform {
        (**self).os_platform()
    }

    fn os_version(&self) -> OsVersion {
        (**self).os_version()
    }

    fn os_product_type(&self) -> Option<ProductType> {
        (**self).os_product_type()
    }

    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }

    fn kernel_version(&self) -> Option<String> {
        (**self).kernel_version()
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn directory_exists(&self, path: &str) -> bool {
        (**self).directory_exists(path)
    }
}

/// Environment backed by the running process and OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn os_platform(&self) -> RawPlatform {
        if cfg!(windows) {
            RawPlatform::WindowsNt
        } else if cfg!(target_os = "macos") {
            RawPlatform::MacOsx
        } else if cfg!(unix) {
            RawPlatform::Unix
        } else {
            RawPlatform::Other
        }
    }

    #[cfg(windows)]
    fn os_version(&self) -> OsVersion {
        crate::platform::system::windows::version::query_version_info()
            .map(|info| info.version)
            .unwrap_or_default()
    }

    #[cfg(not(windows))]
    fn os_version(&self) -> OsVersion {
        self.kernel_version()
            .as_deref()
            .and_then(OsVersion::parse)
            .unwrap_or_default()
    }

    #[cfg(windows)]
    fn os_product_type(&self) -> Option<ProductType> {
        crate::platform::system::windows::version::query_version_info()
            .ok()
            .map(|info| info.product_type)
    }

    #[cfg(not(windows))]
    fn os_product_type(&self) -> Option<ProductType> {
        None
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn kernel_version(&self) -> Option<String> {
        sysinfo::System::kernel_version()
    }
}

/// Filesystem backed by the real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileSystem;

impl FileSystem for SystemFileSystem {
    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }
}
