//! Ripple animation state machine.
//!
//! One instance lives for the whole process. A trigger restarts it from
//! frame 0 whatever it was doing; each timer tick advances it by one frame
//! until the frame budget is spent.

use super::easing::{ease_out_quint, lerp};
use crate::model::{RippleConfig, Rgba};

/// Whether a ripple is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    /// Window hidden, timer stopped.
    Idle,
    /// Window visible, timer running.
    Active,
}

/// Result of advancing the animation by one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still running; repaint the given frame.
    Redraw(u32),
    /// The last frame was reached; stop the timer and hide.
    Finished,
    /// Nothing running; the tick was stale.
    Idle,
}

/// What to paint for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleFrame {
    pub radius: f64,
    pub thickness: f64,
    pub glow_width: f64,
    /// Ring color with alpha set to the animated opacity.
    pub ring: Rgba,
    /// Glow color with alpha set to the animated glow alpha.
    pub glow: Rgba,
}

/// Frame counter of the single shared ripple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RippleAnimation {
    frame: u32,
    total_frames: u32,
    phase: AnimationPhase,
}

impl RippleAnimation {
    pub fn new(total_frames: u32) -> Self {
        Self {
            frame: 0,
            total_frames: total_frames.max(1),
            phase: AnimationPhase::Idle,
        }
    }

    pub fn from_config(config: &RippleConfig) -> Self {
        Self::new(config.total_frames())
    }

    pub fn frame_index(&self) -> u32 {
        self.frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == AnimationPhase::Active
    }

    /// Start over from frame 0, even if a ripple is already running.
    pub fn restart(&mut self) {
        self.frame = 0;
        self.phase = AnimationPhase::Active;
    }

    /// Advance by one frame.
    pub fn advance(&mut self) -> Tick {
        if self.phase == AnimationPhase::Idle {
            return Tick::Idle;
        }
        self.frame += 1;
        if self.frame >= self.total_frames {
            self.frame = self.total_frames;
            self.phase = AnimationPhase::Idle;
            return Tick::Finished;
        }
        Tick::Redraw(self.frame)
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f64 {
        f64::from(self.frame) / f64::from(self.total_frames)
    }

    /// Interpolated parameters for the current frame.
    pub fn frame(&self, config: &RippleConfig) -> RippleFrame {
        let t = ease_out_quint(self.progress());
        RippleFrame {
            radius: lerp(config.start_radius, config.end_radius, t),
            thickness: lerp(config.start_thickness, config.end_thickness, t),
            glow_width: config.glow_width,
            ring: config
                .ring_color
                .with_alpha(lerp(config.opacity_start, config.opacity_end, t)),
            glow: config
                .glow_color
                .with_alpha(lerp(config.glow_alpha_start, config.glow_alpha_end, t)),
        }
    }
}
