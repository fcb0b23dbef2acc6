//! Click sound playback through the Windows multimedia API.

pub mod play_sound;

pub use play_sound::WinSoundPlayer;
