//! Windows entry point and message loop.
//!
//! The UI thread owns the overlay outright: the window, its timer, the
//! animation and the sound folder. The mouse hook thread only publishes
//! clicks and posts a wake-up message; everything else happens here.

use log::{error, info};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Factory, D2D1_FACTORY_TYPE_SINGLE_THREADED,
};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, PostQuitMessage, TranslateMessage, MSG, WM_HOTKEY, WM_TIMER,
};

use clickripple::events::{AppEvent, EventBus};
use clickripple::handlers::{dispatch_events, Dispatch};
use clickripple::model::RippleConfig;
use clickripple::overlay::RippleOverlay;
use clickripple::platform::windows::input::{
    install_quit_hotkey, is_quit_hotkey, uninstall_quit_hotkey, MouseListener, WM_RIPPLE_WAKE,
};
use clickripple::platform::windows::{PlatformError, RippleWindow, WinSoundPlayer, TIMER_RIPPLE};
use clickripple::sound::{default_sound_folder, ClickSounds};

type Overlay = RippleOverlay<RippleWindow, WinSoundPlayer>;

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!("clickripple error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<(), PlatformError> {
    unsafe {
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;

        // Hook coordinates are physical pixels; window positions must be too.
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);

        let result = run_overlay();

        CoUninitialize();
        result
    }
}

unsafe fn run_overlay() -> Result<(), PlatformError> {
    let config = RippleConfig::default();

    let factory: ID2D1Factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
    let window = RippleWindow::create(factory, config.window_size())?;
    let hwnd = window.hwnd();

    let folder = default_sound_folder();
    info!("Click sounds folder: {}", folder.display());
    let mut overlay = RippleOverlay::new(config, window, ClickSounds::new(folder, WinSoundPlayer));

    let bus = EventBus::new();
    let listener = match MouseListener::spawn(bus.publisher(), hwnd) {
        Ok(listener) => listener,
        Err(e) => {
            overlay.into_surface().destroy();
            return Err(e);
        }
    };
    install_quit_hotkey(hwnd);
    let hotkeys = bus.publisher();

    info!("Click ripple running, Ctrl+Shift+Q quits");

    // Message loop
    let mut msg = MSG::default();
    while GetMessageW(&mut msg, None, 0, 0).as_bool() {
        match msg.message {
            WM_TIMER if msg.wParam.0 == TIMER_RIPPLE => {
                overlay.tick();
                pump_events(&bus, &mut overlay);
            }
            WM_RIPPLE_WAKE => pump_events(&bus, &mut overlay),
            WM_HOTKEY if is_quit_hotkey(msg.wParam) => {
                hotkeys.publish(AppEvent::Quit);
                pump_events(&bus, &mut overlay);
            }
            _ => {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }

    // Cleanup
    uninstall_quit_hotkey(hwnd);
    listener.stop();
    overlay.into_surface().destroy();
    info!("Click ripple stopped");

    Ok(())
}

/// Drain the bus and apply what arrived.
fn pump_events(bus: &EventBus, overlay: &mut Overlay) {
    if dispatch_events(bus.drain(), overlay) == Dispatch::Quit {
        unsafe { PostQuitMessage(0) };
    }
}
