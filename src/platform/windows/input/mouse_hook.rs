//! Global low-level mouse hook.
//!
//! The hook is installed on its own thread, which pumps messages so Windows
//! can call it. The hook never touches the overlay: it publishes a click on
//! the event bus and posts a wake-up message to the overlay window. The UI
//! thread does the rest.

use std::cell::RefCell;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use log::{debug, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PeekMessageW, PostMessageW,
    PostThreadMessageW, SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, MSG,
    MSLLHOOKSTRUCT, PM_NOREMOVE, WH_MOUSE_LL, WM_APP, WM_LBUTTONDOWN, WM_MBUTTONDOWN, WM_QUIT,
    WM_RBUTTONDOWN, WM_USER, WM_XBUTTONDOWN,
};

use crate::events::{AppEvent, EventPublisher, MouseButton};
use crate::platform::windows::error::PlatformError;

/// Posted to the overlay window after a click was published.
pub const WM_RIPPLE_WAKE: u32 = WM_APP + 1;

// High word of MSLLHOOKSTRUCT::mouseData for WM_XBUTTONDOWN
const XBUTTON1: u32 = 0x0001;
const XBUTTON2: u32 = 0x0002;

/// Where the hook thread sends what it sees.
struct HookSink {
    publisher: EventPublisher,
    /// Overlay window handle, kept as an integer so it can cross threads.
    wake: isize,
}

impl HookSink {
    fn forward(&self, event: AppEvent) {
        self.publisher.publish(event);
        unsafe {
            let _ = PostMessageW(
                Some(HWND(self.wake as *mut _)),
                WM_RIPPLE_WAKE,
                WPARAM(0),
                LPARAM(0),
            );
        }
    }
}

thread_local! {
    // Only ever set on the hook thread.
    static SINK: RefCell<Option<HookSink>> = const { RefCell::new(None) };
}

/// Map a hook message to the button it presses. Releases, moves and wheel
/// events map to `None`.
pub fn pressed_button(message: u32, mouse_data: u32) -> Option<MouseButton> {
    match message {
        WM_LBUTTONDOWN => Some(MouseButton::Left),
        WM_RBUTTONDOWN => Some(MouseButton::Right),
        WM_MBUTTONDOWN => Some(MouseButton::Middle),
        WM_XBUTTONDOWN => match mouse_data >> 16 {
            XBUTTON1 => Some(MouseButton::X1),
            XBUTTON2 => Some(MouseButton::X2),
            _ => None,
        },
        _ => None,
    }
}

extern "system" fn mouse_hook_proc(ncode: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if ncode >= 0 {
            let info = &*(lparam.0 as *const MSLLHOOKSTRUCT);
            if let Some(button) = pressed_button(wparam.0 as u32, info.mouseData) {
                let event = AppEvent::click(info.pt.x, info.pt.y, button);
                SINK.with(|s| {
                    if let Some(sink) = s.borrow().as_ref() {
                        sink.forward(event);
                    }
                });
            }
        }

        CallNextHookEx(None, ncode, wparam, lparam)
    }
}

/// Running hook thread.
pub struct MouseListener {
    thread_id: u32,
    handle: JoinHandle<()>,
}

impl MouseListener {
    /// Start the hook thread and wait until the hook is installed.
    pub fn spawn(publisher: EventPublisher, wake: HWND) -> Result<Self, PlatformError> {
        let wake = wake.0 as isize;
        let (ready_tx, ready_rx) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("mouse-hook".into())
            .spawn(move || run_hook_thread(HookSink { publisher, wake }, ready_tx))?;

        match ready_rx.recv() {
            Ok(Ok(thread_id)) => {
                info!("Mouse hook installed");
                Ok(Self { thread_id, handle })
            }
            Ok(Err(message)) => {
                let _ = handle.join();
                Err(PlatformError::HookInstall(message))
            }
            Err(_) => {
                let _ = handle.join();
                Err(PlatformError::HookThreadGone)
            }
        }
    }

    /// Remove the hook and join its thread.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        if self.handle.join().is_err() {
            debug!("Mouse hook thread panicked");
        }
    }
}

fn run_hook_thread(sink: HookSink, ready: mpsc::Sender<Result<u32, String>>) {
    unsafe {
        // Make sure this thread has a message queue before anyone posts to it.
        let mut msg = MSG::default();
        let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);

        SINK.with(|s| *s.borrow_mut() = Some(sink));

        let hook = match SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) {
            Ok(hook) => hook,
            Err(e) => {
                let _ = ready.send(Err(e.to_string()));
                return;
            }
        };
        let _ = ready.send(Ok(GetCurrentThreadId()));

        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        let _ = UnhookWindowsHookEx(hook);
        SINK.with(|s| *s.borrow_mut() = None);
        debug!("Mouse hook removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{WM_LBUTTONUP, WM_MOUSEMOVE, WM_MOUSEWHEEL};

    #[test]
    fn button_downs_are_clicks() {
        assert_eq!(pressed_button(WM_LBUTTONDOWN, 0), Some(MouseButton::Left));
        assert_eq!(pressed_button(WM_RBUTTONDOWN, 0), Some(MouseButton::Right));
        assert_eq!(pressed_button(WM_MBUTTONDOWN, 0), Some(MouseButton::Middle));
    }

    #[test]
    fn x_buttons_use_high_word() {
        assert_eq!(
            pressed_button(WM_XBUTTONDOWN, XBUTTON1 << 16),
            Some(MouseButton::X1)
        );
        assert_eq!(
            pressed_button(WM_XBUTTONDOWN, XBUTTON2 << 16),
            Some(MouseButton::X2)
        );
        assert_eq!(pressed_button(WM_XBUTTONDOWN, 0), None);
    }

    #[test]
    fn releases_and_moves_are_ignored() {
        assert_eq!(pressed_button(WM_LBUTTONUP, 0), None);
        assert_eq!(pressed_button(WM_MOUSEMOVE, 0), None);
        assert_eq!(pressed_button(WM_MOUSEWHEEL, 120 << 16), None);
    }
}
