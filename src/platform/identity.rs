// Security identity primitives

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// How a token relates to UAC elevation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElevationType {
    /// No linked token (UAC off, built-in Administrator, or a standard user)
    NotSplit,
    /// Split token, process is running elevated
    FullSplitElevated,
    /// Split token, process is running with the filtered token
    LimitedSplitNotElevated,
}

impl ElevationType {
    /// Any split token means the account itself can elevate
    pub fn is_split(self) -> bool {
        matches!(
            self,
            ElevationType::FullSplitElevated | ElevationType::LimitedSplitNotElevated
        )
    }
}

/// Access to the current user's security identity.
///
/// An `Identity` is only held for the duration of one detector query and
/// must release any OS handle it owns when dropped.
pub trait IdentityProvider {
    type Identity;

    fn current_identity(&self) -> Option<Self::Identity>;

    fn is_in_administrators_role(&self, identity: &Self::Identity) -> bool;

    fn is_system_account(&self, identity: &Self::Identity) -> bool;

    fn token_elevation_type(&self, identity: &Self::Identity) -> Result<ElevationType>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    type Identity = T::Identity;

    fn current_identity(&self) -> Option<Self::Identity> {
        (**self).current_identity()
    }

    fn is_in_administrators_role(&self, identity: &Self::Identity) -> bool {
        (**self).is_in_administrators_role(identity)
    }

    fn is_system_account(&self, identity: &Self::Identity) -> bool {
        (**self).is_system_account(identity)
    }

    fn token_elevation_type(&self, identity: &Self::Identity) -> Result<ElevationType> {
        (**self).token_elevation_type(identity)
    }
}

/// Provider for hosts without Windows security tokens; never yields an identity
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentity;

impl IdentityProvider for NoIdentity {
    type Identity = std::convert::Infallible;

    fn current_identity(&self) -> Option<Self::Identity> {
        None
    }

    fn is_in_administrators_role(&self, identity: &Self::Identity) -> bool {
        match *identity {}
    }

    fn is_system_account(&self, identity: &Self::Identity) -> bool {
        match *identity {}
    }

    fn token_elevation_type(&self, identity: &Self::Identity) -> Result<ElevationType> {
        match *identity {}
    }
}

#[cfg(windows)]
pub type SystemIdentity = crate::platform::system::windows::identity::WindowsIdentityProvider;

#[cfg(not(windows))]
pub type SystemIdentity = NoIdentity;
