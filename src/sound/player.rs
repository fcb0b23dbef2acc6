//! Random click sound playback.

use std::path::{Path, PathBuf};

use super::library::list_sound_files;
use crate::error::SoundError;

/// Starts playback of a sound file without waiting for it to finish.
pub trait SoundPlayer {
    fn play_async(&self, path: &Path) -> Result<(), SoundError>;
}

/// What happened when a click asked for a sound.
#[derive(Debug)]
pub enum PlaybackOutcome {
    /// Playback of this file was started.
    Played(PathBuf),
    /// No folder, or no `.wav` files in it.
    NotFound,
    /// Listing the folder or starting playback failed.
    Failed(SoundError),
}

impl PlaybackOutcome {
    pub fn is_played(&self) -> bool {
        matches!(self, PlaybackOutcome::Played(_))
    }
}

/// Plays a random file from the sound folder on every click.
///
/// The folder is listed again on each call, so sounds dropped in while the
/// app runs are picked up.
pub struct ClickSounds<P: SoundPlayer> {
    folder: PathBuf,
    player: P,
    rng: fastrand::Rng,
}

impl<P: SoundPlayer> ClickSounds<P> {
    pub fn new(folder: PathBuf, player: P) -> Self {
        Self {
            folder,
            player,
            rng: fastrand::Rng::new(),
        }
    }

    /// Same as [`ClickSounds::new`] with a seeded random source.
    pub fn with_seed(folder: PathBuf, player: P, seed: u64) -> Self {
        Self {
            folder,
            player,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Pick a random `.wav` and start it. Never fails loudly.
    pub fn play_random(&mut self) -> PlaybackOutcome {
        let files = match list_sound_files(&self.folder) {
            Ok(files) => files,
            Err(e) => return PlaybackOutcome::Failed(e),
        };
        if files.is_empty() {
            return PlaybackOutcome::NotFound;
        }

        let choice = &files[self.rng.usize(..files.len())];
        match self.player.play_async(choice) {
            Ok(()) => PlaybackOutcome::Played(choice.clone()),
            Err(e) => PlaybackOutcome::Failed(e),
        }
    }
}
