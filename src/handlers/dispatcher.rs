//! Event dispatcher.
//!
//! Runs on the UI thread, the only place overlay state is touched.

use log::{debug, info};

use crate::events::AppEvent;
use crate::overlay::{OverlaySurface, RippleOverlay};
use crate::sound::SoundPlayer;

/// What the message loop should do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    Quit,
}

/// Apply events in arrival order.
///
/// Clicks restart the ripple, so when several arrive in one batch the last
/// one wins. A `Quit` stops dispatch; later events are dropped.
pub fn dispatch_events<S, P, I>(events: I, overlay: &mut RippleOverlay<S, P>) -> Dispatch
where
    S: OverlaySurface,
    P: SoundPlayer,
    I: IntoIterator<Item = AppEvent>,
{
    for event in events {
        match event {
            AppEvent::Click { x, y, button } => {
                debug!("{} ({:?}) at ({}, {})", event.description(), button, x, y);
                overlay.trigger(x, y);
            }
            AppEvent::Quit => {
                info!("{}", event.description());
                return Dispatch::Quit;
            }
        }
    }
    Dispatch::Continue
}
