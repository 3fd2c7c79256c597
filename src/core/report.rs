use crate::platform::{
    AdminDecision, Environment, FileSystem, IdentityProvider, OsVersion, PlatformFamily,
    PrivilegeDetector,
};
use serde::Serialize;

/// Snapshot of everything the detectors know about the host
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    pub platform: PlatformFamily,
    pub name: String,
    pub version: OsVersion,
    pub architecture: String,
    pub kernel_version: Option<String>,
    pub privileges: PrivilegeReport,
    pub session: SessionReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrivilegeReport {
    pub elevated: bool,
    pub administrator: AdminDecision,
    pub system_account: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub session_name: Option<String>,
    pub terminal_services: bool,
    pub remote: bool,
}

impl HostReport {
    pub fn collect<E, F, I>(detector: &PrivilegeDetector<E, F, I>) -> Self
    where
        E: Environment,
        F: FileSystem,
        I: IdentityProvider,
    {
        let platform = detector.platform();

        HostReport {
            platform: platform.platform(),
            name: platform.name(),
            version: platform.version(),
            architecture: std::env::consts::ARCH.to_string(),
            kernel_version: platform.environment().kernel_version(),
            privileges: PrivilegeReport {
                elevated: detector.is_elevated(),
                administrator: detector.administrator_decision(),
                system_account: detector.user_is_system(),
            },
            session: SessionReport {
                session_name: platform
                    .environment()
                    .var(crate::platform::elevation::SESSION_NAME_VAR),
                terminal_services: detector.user_is_terminal_services(),
                remote: detector.user_is_remote(),
            },
        }
    }
}
