// Scripted providers shared by the integration tests

use hostprobe::error::{ProbeError, Result};
use hostprobe::platform::{
    ElevationType, Environment, FileSystem, IdentityProvider, OsVersion, ProductType, RawPlatform,
};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FakeEnvironment {
    pub platform: RawPlatform,
    pub version: OsVersion,
    pub product_type: Option<ProductType>,
    pub vars: HashMap<String, String>,
    pub kernel_version: Option<String>,
}

impl FakeEnvironment {
    pub fn new(platform: RawPlatform) -> Self {
        Self {
            platform,
            version: OsVersion::new(10, 0, 19045),
            product_type: Some(ProductType::Workstation),
            vars: HashMap::new(),
            kernel_version: None,
        }
    }

    pub fn windows(major: u32, minor: u32) -> Self {
        Self {
            version: OsVersion::new(major, minor, 0),
            ..Self::new(RawPlatform::WindowsNt)
        }
    }

    pub fn with_product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_kernel_version(mut self, release: &str) -> Self {
        self.kernel_version = Some(release.to_string());
        self
    }
}

impl Environment for FakeEnvironment {
    fn os_platform(&self) -> RawPlatform {
        self.platform
    }

    fn os_version(&self) -> OsVersion {
        self.version
    }

    fn os_product_type(&self) -> Option<ProductType> {
        self.product_type
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn kernel_version(&self) -> Option<String> {
        self.kernel_version.clone()
    }
}

/// Resolves absolute marker paths below a private root directory
#[derive(Debug, Clone)]
pub struct RootedFileSystem {
    pub root: PathBuf,
}

impl FileSystem for RootedFileSystem {
    fn directory_exists(&self, path: &str) -> bool {
        self.root.join(path.trim_start_matches('/')).is_dir()
    }
}

/// Filesystem with no directories at all
#[derive(Debug, Clone, Copy)]
pub struct EmptyFileSystem;

impl FileSystem for EmptyFileSystem {
    fn directory_exists(&self, _path: &str) -> bool {
        false
    }
}

/// Identity with a scripted role membership and token answer
#[derive(Debug)]
pub struct FakeIdentity {
    pub present: bool,
    pub in_administrators_role: bool,
    pub system_account: bool,
    pub elevation: std::result::Result<ElevationType, u32>,
    pub identities_opened: Cell<usize>,
    pub token_queries: Cell<usize>,
}

impl FakeIdentity {
    pub fn new(in_administrators_role: bool, elevation: ElevationType) -> Self {
        Self {
            present: true,
            in_administrators_role,
            system_account: false,
            elevation: Ok(elevation),
            identities_opened: Cell::new(0),
            token_queries: Cell::new(0),
        }
    }

    pub fn failing_token_query(in_administrators_role: bool, code: u32) -> Self {
        Self {
            elevation: Err(code),
            ..Self::new(in_administrators_role, ElevationType::NotSplit)
        }
    }

    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new(true, ElevationType::FullSplitElevated)
        }
    }
}

impl IdentityProvider for FakeIdentity {
    type Identity = ();

    fn current_identity(&self) -> Option<()> {
        self.identities_opened.set(self.identities_opened.get() + 1);
        self.present.then_some(())
    }

    fn is_in_administrators_role(&self, _identity: &()) -> bool {
        self.in_administrators_role
    }

    fn is_system_account(&self, _identity: &()) -> bool {
        self.system_account
    }

    fn token_elevation_type(&self, _identity: &()) -> Result<ElevationType> {
        self.token_queries.set(self.token_queries.get() + 1);
        self.elevation
            .map_err(|code| ProbeError::native_query("GetTokenInformation", code))
    }
}
