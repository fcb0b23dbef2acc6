//! The ripple overlay: one animation, one surface, one sound folder.
//!
//! Constructed once at start-up and owned by the UI thread. Every click
//! restarts the same ripple; there is never more than one running.

use log::debug;

use super::surface::{OverlaySurface, Placement};
use crate::animation::{RippleAnimation, Tick};
use crate::model::RippleConfig;
use crate::sound::{ClickSounds, PlaybackOutcome, SoundPlayer};

pub struct RippleOverlay<S: OverlaySurface, P: SoundPlayer> {
    config: RippleConfig,
    animation: RippleAnimation,
    surface: S,
    sounds: ClickSounds<P>,
    placement: Option<Placement>,
}

impl<S: OverlaySurface, P: SoundPlayer> RippleOverlay<S, P> {
    pub fn new(mut config: RippleConfig, surface: S, sounds: ClickSounds<P>) -> Self {
        config.validate();
        let animation = RippleAnimation::from_config(&config);
        Self {
            config,
            animation,
            surface,
            sounds,
            placement: None,
        }
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn animation(&self) -> &RippleAnimation {
        &self.animation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sounds(&self) -> &ClickSounds<P> {
        &self.sounds
    }

    /// Give the surface back, e.g. to destroy its window on shutdown.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Where the window was last placed.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    /// Start a ripple centered on (x, y), restarting any running one.
    pub fn trigger(&mut self, x: i32, y: i32) {
        match self.sounds.play_random() {
            PlaybackOutcome::Played(path) => debug!("Click sound: {}", path.display()),
            PlaybackOutcome::NotFound => {
                debug!("No click sounds in {}", self.sounds.folder().display())
            }
            PlaybackOutcome::Failed(e) => debug!("Click sound skipped: {}", e),
        }

        self.animation.restart();

        let placement = Placement::centered_on(x, y, self.config.window_size());
        self.surface.place(placement);
        self.placement = Some(placement);

        self.surface.show();
        self.surface.render(&self.animation.frame(&self.config));
        self.surface.start_ticks(self.config.tick_interval_ms());
    }

    /// Advance the ripple by one timer tick.
    pub fn tick(&mut self) -> Tick {
        let tick = self.animation.advance();
        match tick {
            Tick::Redraw(_) => self.surface.render(&self.animation.frame(&self.config)),
            Tick::Finished => {
                self.surface.stop_ticks();
                self.surface.hide();
            }
            Tick::Idle => {}
        }
        tick
    }
}
