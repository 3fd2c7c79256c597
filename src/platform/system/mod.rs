// OS-specific system primitives

#[cfg(windows)]
pub mod windows;
