//! Global quit hotkey (Ctrl+Shift+Q).

use log::warn;
use windows::Win32::Foundation::{HWND, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT,
};

// Hotkey IDs
pub const HOTKEY_QUIT: i32 = 1;

const VK_Q: u32 = 0x51;

/// Register Ctrl+Shift+Q on `hwnd`. Best-effort: another app may own it.
pub fn install_quit_hotkey(hwnd: HWND) {
    unsafe {
        if let Err(e) = RegisterHotKey(
            Some(hwnd),
            HOTKEY_QUIT,
            MOD_CONTROL | MOD_SHIFT | MOD_NOREPEAT,
            VK_Q,
        ) {
            warn!("Ctrl+Shift+Q unavailable, quit hotkey disabled: {}", e);
        }
    }
}

pub fn uninstall_quit_hotkey(hwnd: HWND) {
    unsafe {
        let _ = UnregisterHotKey(Some(hwnd), HOTKEY_QUIT);
    }
}

/// True when a `WM_HOTKEY` wParam is the quit hotkey.
pub fn is_quit_hotkey(wparam: WPARAM) -> bool {
    wparam.0 as i32 == HOTKEY_QUIT
}
