// Windows version and product type via RtlGetVersion
//
// GetVersionEx reports whatever the application manifest claims, so the
// version comes from ntdll instead.

use crate::error::{ProbeError, Result};
use crate::platform::providers::{OsVersion, ProductType};
use std::mem;
use windows_sys::Wdk::System::SystemServices::RtlGetVersion;
use windows_sys::Win32::System::SystemInformation::{OSVERSIONINFOEXW, OSVERSIONINFOW};
use winapi::um::winnt::VER_NT_WORKSTATION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: OsVersion,
    pub product_type: ProductType,
}

pub fn query_version_info() -> Result<VersionInfo> {
    let mut info: OSVERSIONINFOEXW = unsafe { mem::zeroed() };
    info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOEXW>() as u32;

    let status = unsafe { RtlGetVersion(&mut info as *mut OSVERSIONINFOEXW as *mut OSVERSIONINFOW) };
    if status != 0 {
        return Err(ProbeError::native_query("RtlGetVersion", status as u32));
    }

    // Domain controllers report VER_NT_DOMAIN_CONTROLLER, which is a server
    let product_type = if info.wProductType == VER_NT_WORKSTATION {
        ProductType::Workstation
    } else {
        ProductType::Server
    };

    Ok(VersionInfo {
        version: OsVersion::new(info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber),
        product_type,
    })
}
