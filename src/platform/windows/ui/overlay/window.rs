//! Layered, click-through overlay window.
//!
//! One window is created at start-up and reused for every ripple: each
//! trigger moves it over the click and shows it, the last tick hides it.

use log::warn;
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Direct2D::ID2D1Factory;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, KillTimer, PostQuitMessage, RegisterClassW,
    SetTimer, SetWindowPos, ShowWindow, HWND_TOPMOST, SWP_NOACTIVATE, SW_HIDE,
    SW_SHOWNOACTIVATE, WM_DESTROY, WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use super::renderer::paint_ripple;
use crate::animation::RippleFrame;
use crate::overlay::{OverlaySurface, Placement};

/// Timer id of the ripple tick.
pub const TIMER_RIPPLE: usize = 1;

const CLASS_NAME: PCWSTR = w!("ClickRippleOverlay");

pub struct RippleWindow {
    hwnd: HWND,
    factory: ID2D1Factory,
    placement: Placement,
}

impl RippleWindow {
    /// Register the window class and create the (hidden) overlay window.
    pub fn create(factory: ID2D1Factory, size: i32) -> windows::core::Result<Self> {
        unsafe {
            let instance = GetModuleHandleW(None)?;

            let wc = WNDCLASSW {
                lpfnWndProc: Some(wndproc),
                hInstance: instance.into(),
                lpszClassName: CLASS_NAME,
                ..Default::default()
            };
            RegisterClassW(&wc);

            // Layered, transparent to input, topmost, never activated, no taskbar button
            let ex_style = WS_EX_LAYERED
                | WS_EX_TRANSPARENT
                | WS_EX_TOPMOST
                | WS_EX_NOACTIVATE
                | WS_EX_TOOLWINDOW;

            let hwnd = CreateWindowExW(
                ex_style,
                CLASS_NAME,
                w!("Click Ripple"),
                WS_POPUP,
                0,
                0,
                size,
                size,
                None,
                None,
                Some(instance.into()),
                None,
            )?;

            Ok(Self {
                hwnd,
                factory,
                placement: Placement {
                    left: 0,
                    top: 0,
                    size,
                },
            })
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    pub fn destroy(self) {
        unsafe {
            let _ = KillTimer(Some(self.hwnd), TIMER_RIPPLE);
            let _ = DestroyWindow(self.hwnd);
        }
    }
}

impl OverlaySurface for RippleWindow {
    fn place(&mut self, placement: Placement) {
        self.placement = placement;
        unsafe {
            if let Err(e) = SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                placement.left,
                placement.top,
                placement.size,
                placement.size,
                SWP_NOACTIVATE,
            ) {
                warn!("SetWindowPos failed: {}", e);
            }
        }
    }

    fn show(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWNOACTIVATE);
        }
    }

    fn hide(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }

    fn render(&mut self, frame: &RippleFrame) {
        unsafe { paint_ripple(self.hwnd, &self.factory, self.placement, frame) }
    }

    fn start_ticks(&mut self, interval_ms: u32) {
        // Re-arming an existing timer id replaces it, so a re-trigger never
        // ends up with two timers.
        let id = unsafe { SetTimer(Some(self.hwnd), TIMER_RIPPLE, interval_ms, None) };
        if id == 0 {
            warn!("SetTimer failed, ripple will not animate");
        }
    }

    fn stop_ticks(&mut self) {
        unsafe {
            let _ = KillTimer(Some(self.hwnd), TIMER_RIPPLE);
        }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }
            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
