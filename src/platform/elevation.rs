// Administrator / elevation detection

use crate::error::{ProbeError, Result};
use crate::platform::detector::{PlatformDetector, PlatformFamily};
use crate::platform::identity::{ElevationType, IdentityProvider, SystemIdentity};
use crate::platform::providers::{Environment, FileSystem, SystemEnvironment, SystemFileSystem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First Windows major version with UAC (Vista)
pub const UAC_MIN_MAJOR_VERSION: u32 = 6;

/// Environment variable naming the interactive session kind
pub const SESSION_NAME_VAR: &str = "SESSIONNAME";

const RDP_SESSION_MARKER: &str = "rdp-";

/// How an unset session-name variable is interpreted by `user_is_remote`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteSessionPolicy {
    /// Unset is treated like an empty value, which counts as remote
    #[default]
    AbsentIsRemote,
    /// Only an explicitly empty value counts as remote
    AbsentIsLocal,
}

/// Which step of the administrator check produced the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AdminCheck {
    /// Not Windows, no administrator concept applies
    UnsupportedPlatform,
    /// No security identity for the current process
    MissingIdentity,
    /// Direct administrators-role membership
    RoleMembership,
    /// Split-token fallback with the elevation type it observed
    SplitToken { elevation_type: ElevationType },
    /// Split-token fallback whose token query failed
    SplitTokenUnavailable { error_code: Option<u32> },
}

/// Result of the administrator check with the path that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDecision {
    pub is_admin: bool,
    pub check: AdminCheck,
}

impl AdminDecision {
    fn new(is_admin: bool, check: AdminCheck) -> Self {
        Self { is_admin, check }
    }
}

impl fmt::Display for AdminCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminCheck::UnsupportedPlatform => write!(f, "not a Windows host"),
            AdminCheck::MissingIdentity => write!(f, "no security identity available"),
            AdminCheck::RoleMembership => write!(f, "administrators role membership"),
            AdminCheck::SplitToken { elevation_type } => {
                write!(f, "split token check (elevation type: {:?})", elevation_type)
            }
            AdminCheck::SplitTokenUnavailable {
                error_code: Some(code),
            } => write!(f, "split token check failed (error {})", code),
            AdminCheck::SplitTokenUnavailable { error_code: None } => {
                write!(f, "split token check failed")
            }
        }
    }
}

/// Answers privilege questions about the current user and process.
///
/// All queries are total: a missing identity, a missing variable or a failed
/// native call degrade to `false`.
#[derive(Debug, Clone)]
pub struct PrivilegeDetector<E = SystemEnvironment, F = SystemFileSystem, I = SystemIdentity> {
    platform: PlatformDetector<E, F>,
    identity: I,
    remote_policy: RemoteSessionPolicy,
}

impl PrivilegeDetector {
    /// Detector backed by the real OS
    pub fn system() -> Self {
        Self::new(PlatformDetector::system(), SystemIdentity::default())
    }
}

impl Default for PrivilegeDetector {
    fn default() -> Self {
        Self::system()
    }
}

impl<E, F, I> PrivilegeDetector<E, F, I>
where
    E: Environment,
    F: FileSystem,
    I: IdentityProvider,
{
    pub fn new(platform: PlatformDetector<E, F>, identity: I) -> Self {
        Self {
            platform,
            identity,
            remote_policy: RemoteSessionPolicy::default(),
        }
    }

    pub fn with_remote_policy(mut self, policy: RemoteSessionPolicy) -> Self {
        self.remote_policy = policy;
        self
    }

    pub fn platform(&self) -> &PlatformDetector<E, F> {
        &self.platform
    }

    pub fn remote_policy(&self) -> RemoteSessionPolicy {
        self.remote_policy
    }

    fn require_windows(&self) -> Result<()> {
        match self.platform.platform() {
            PlatformFamily::Windows => Ok(()),
            other => Err(ProbeError::unsupported_platform(other.to_string())),
        }
    }

    /// Current identity of a Windows host
    fn identity(&self) -> Result<I::Identity> {
        self.require_windows()?;
        self.identity
            .current_identity()
            .ok_or(ProbeError::MissingIdentity)
    }

    /// Whether the current process token carries the administrators role
    pub fn is_elevated(&self) -> bool {
        self.identity()
            .map(|identity| self.identity.is_in_administrators_role(&identity))
            .unwrap_or(false)
    }

    /// Whether the user account has administrative rights, even when the
    /// process itself runs with a UAC-filtered token
    pub fn user_is_administrator(&self) -> bool {
        self.administrator_decision().is_admin
    }

    pub fn administrator_decision(&self) -> AdminDecision {
        let identity = match self.identity() {
            Ok(identity) => identity,
            Err(ProbeError::UnsupportedPlatform(_)) => {
                return AdminDecision::new(false, AdminCheck::UnsupportedPlatform)
            }
            Err(_) => return AdminDecision::new(false, AdminCheck::MissingIdentity),
        };

        let is_admin = self.identity.is_in_administrators_role(&identity);

        // No UAC before Vista, the role check is the whole answer
        if self.platform.version().major < UAC_MIN_MAJOR_VERSION || is_admin {
            return AdminDecision::new(is_admin, AdminCheck::RoleMembership);
        }

        // UAC strips the Administrators group from filtered tokens, so the
        // role check above fails for admins running unelevated. A split token
        // means the account can elevate. Other privileged groups can also get
        // a split token, so this is not exact.
        log::debug!("User may be subject to UAC, checking for a split token (not 100% effective).");

        match self.identity.token_elevation_type(&identity) {
            Ok(elevation_type) => AdminDecision::new(
                elevation_type.is_split(),
                AdminCheck::SplitToken { elevation_type },
            ),
            Err(e) => {
                let error_code = e.native_code();
                let detail = error_code.map_or_else(|| e.to_string(), |code| code.to_string());
                log::warn!("Error during native GetTokenInformation call - {}", detail);
                AdminDecision::new(false, AdminCheck::SplitTokenUnavailable { error_code })
            }
        }
    }

    /// Whether the current identity is the built-in LocalSystem account
    pub fn user_is_system(&self) -> bool {
        self.identity()
            .map(|identity| self.identity.is_system_account(&identity))
            .unwrap_or(false)
    }

    /// Whether the session name marks a Remote Desktop session
    pub fn user_is_terminal_services(&self) -> bool {
        self.session_name()
            .unwrap_or_default()
            .to_lowercase()
            .contains(RDP_SESSION_MARKER)
    }

    /// Remote Desktop, or a session that leaves the session name empty
    pub fn user_is_remote(&self) -> bool {
        if self.user_is_terminal_services() {
            return true;
        }

        match self.session_name() {
            Some(name) => name.is_empty(),
            None => self.remote_policy == RemoteSessionPolicy::AbsentIsRemote,
        }
    }

    fn session_name(&self) -> Option<String> {
        self.platform.environment().var(SESSION_NAME_VAR)
    }
}
