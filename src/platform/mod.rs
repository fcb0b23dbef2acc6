//! Platform-specific implementations.
//!
//! Only Windows is implemented: the overlay relies on layered windows,
//! low-level mouse hooks and `PlaySoundW`.

#[cfg(target_os = "windows")]
pub mod windows;
