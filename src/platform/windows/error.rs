//! Start-up errors of the Win32 layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Win32 call failed: {0}")]
    Win32(#[from] windows::core::Error),

    #[error("cannot start the mouse hook thread: {0}")]
    Thread(#[from] std::io::Error),

    #[error("cannot install the mouse hook: {0}")]
    HookInstall(String),

    #[error("mouse hook thread exited before reporting back")]
    HookThreadGone,
}
