// Windows security token access (current user identity, roles, UAC elevation)

use crate::error::{ProbeError, Result};
use crate::platform::identity::{ElevationType, IdentityProvider};
use std::mem;
use std::ptr;
use winapi::ctypes::c_void;
use winapi::shared::minwindef::{BOOL, DWORD, FALSE, TRUE};
use winapi::shared::winerror::ERROR_NO_TOKEN;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{
    GetCurrentProcess, GetCurrentThread, OpenProcessToken, OpenThreadToken,
};
use winapi::um::securitybaseapi::{
    CheckTokenMembership, CreateWellKnownSid, DuplicateToken, GetTokenInformation, IsWellKnownSid,
};
use winapi::um::winnt::{
    SecurityIdentification, TokenElevationType, TokenElevationTypeFull,
    TokenElevationTypeLimited, TokenUser, WinBuiltinAdministratorsSid, WinLocalSystemSid, HANDLE,
    PSID, TOKEN_DUPLICATE, TOKEN_ELEVATION_TYPE, TOKEN_QUERY, TOKEN_USER, WELL_KNOWN_SID_TYPE,
};

// SECURITY_MAX_SID_SIZE
const SID_BUFFER_LEN: usize = 68;

/// Owned access token of the current thread or process, closed on drop
#[derive(Debug)]
pub struct WindowsIdentity {
    token: HANDLE,
}

impl WindowsIdentity {
    /// Token of the impersonating thread, or of the process when the thread
    /// is not impersonating
    fn current() -> Option<Self> {
        let access = TOKEN_QUERY | TOKEN_DUPLICATE;
        let mut token: HANDLE = ptr::null_mut();

        unsafe {
            if OpenThreadToken(GetCurrentThread(), access, TRUE, &mut token) != 0 {
                return Some(Self { token });
            }

            let thread_error = GetLastError();
            if thread_error != ERROR_NO_TOKEN {
                log::debug!("OpenThreadToken failed - {}", thread_error);
                return None;
            }

            if OpenProcessToken(GetCurrentProcess(), access, &mut token) == 0 {
                log::debug!("OpenProcessToken failed - {}", GetLastError());
                return None;
            }
        }

        Some(Self { token })
    }

    fn handle(&self) -> HANDLE {
        self.token
    }
}

impl Drop for WindowsIdentity {
    fn drop(&mut self) {
        unsafe {
            CloseHandle(self.token);
        }
    }
}

/// Buffer large enough for any SID, DWORD aligned
struct SidBuffer {
    words: [u32; SID_BUFFER_LEN / 4],
}

impl SidBuffer {
    fn well_known(kind: WELL_KNOWN_SID_TYPE) -> Result<Self> {
        let mut buffer = Self {
            words: [0; SID_BUFFER_LEN / 4],
        };
        let mut len = SID_BUFFER_LEN as DWORD;

        let ok = unsafe { CreateWellKnownSid(kind, ptr::null_mut(), buffer.as_psid(), &mut len) };
        if ok == 0 {
            return Err(ProbeError::native_query("CreateWellKnownSid", unsafe {
                GetLastError()
            }));
        }

        Ok(buffer)
    }

    fn as_psid(&mut self) -> PSID {
        self.words.as_mut_ptr() as PSID
    }
}

/// Identity provider backed by the Win32 security API
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsIdentityProvider;

impl WindowsIdentityProvider {
    fn check_administrators_membership(identity: &WindowsIdentity) -> Result<bool> {
        let mut admins = SidBuffer::well_known(WinBuiltinAdministratorsSid)?;

        // CheckTokenMembership needs an impersonation token
        let mut duplicate: HANDLE = ptr::null_mut();
        if unsafe { DuplicateToken(identity.handle(), SecurityIdentification, &mut duplicate) } == 0
        {
            return Err(ProbeError::native_query("DuplicateToken", unsafe {
                GetLastError()
            }));
        }
        let duplicate = WindowsIdentity { token: duplicate };

        let mut is_member: BOOL = FALSE;
        let ok = unsafe { CheckTokenMembership(duplicate.handle(), admins.as_psid(), &mut is_member) };
        if ok == 0 {
            return Err(ProbeError::native_query("CheckTokenMembership", unsafe {
                GetLastError()
            }));
        }

        Ok(is_member != 0)
    }

    fn check_local_system(identity: &WindowsIdentity) -> Result<bool> {
        let mut needed: DWORD = 0;
        unsafe {
            GetTokenInformation(identity.handle(), TokenUser, ptr::null_mut(), 0, &mut needed);
        }
        if needed == 0 {
            return Err(ProbeError::native_query("GetTokenInformation", unsafe {
                GetLastError()
            }));
        }

        // u64 words keep the TOKEN_USER header pointer aligned
        let mut buffer = vec![0u64; (needed as usize).div_ceil(mem::size_of::<u64>())];
        let ok = unsafe {
            GetTokenInformation(
                identity.handle(),
                TokenUser,
                buffer.as_mut_ptr() as *mut c_void,
                (buffer.len() * mem::size_of::<u64>()) as DWORD,
                &mut needed,
            )
        };
        if ok == 0 {
            return Err(ProbeError::native_query("GetTokenInformation", unsafe {
                GetLastError()
            }));
        }

        let user = buffer.as_ptr() as *const TOKEN_USER;
        Ok(unsafe { IsWellKnownSid((*user).User.Sid, WinLocalSystemSid) } != 0)
    }
}

impl IdentityProvider for WindowsIdentityProvider {
    type Identity = WindowsIdentity;

    fn current_identity(&self) -> Option<WindowsIdentity> {
        WindowsIdentity::current()
    }

    fn is_in_administrators_role(&self, identity: &WindowsIdentity) -> bool {
        Self::check_administrators_membership(identity).unwrap_or_else(|e| {
            log::debug!("Administrators role check failed: {}", e);
            false
        })
    }

    fn is_system_account(&self, identity: &WindowsIdentity) -> bool {
        Self::check_local_system(identity).unwrap_or_else(|e| {
            log::debug!("LocalSystem check failed: {}", e);
            false
        })
    }

    fn token_elevation_type(&self, identity: &WindowsIdentity) -> Result<ElevationType> {
        let mut elevation_type: TOKEN_ELEVATION_TYPE = 0;
        let mut size: DWORD = 0;

        let ok = unsafe {
            GetTokenInformation(
                identity.handle(),
                TokenElevationType,
                &mut elevation_type as *mut _ as *mut c_void,
                mem::size_of::<TOKEN_ELEVATION_TYPE>() as DWORD,
                &mut size,
            )
        };
        if ok == 0 {
            return Err(ProbeError::native_query("GetTokenInformation", unsafe {
                GetLastError()
            }));
        }

        Ok(match elevation_type {
            TokenElevationTypeFull => ElevationType::FullSplitElevated,
            TokenElevationTypeLimited => ElevationType::LimitedSplitNotElevated,
            _ => ElevationType::NotSplit,
        })
    }
}
