//! Click sounds.
//!
//! - [`library`]: locating the sound folder and listing playable files
//! - [`player`]: the playback seam and random selection

pub mod library;
pub mod player;

pub use library::{default_sound_folder, list_sound_files, sound_folder_next_to};
pub use player::{ClickSounds, PlaybackOutcome, SoundPlayer};
