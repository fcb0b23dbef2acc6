//! `PlaySoundW`-backed [`SoundPlayer`].

use std::path::Path;

use windows::core::HSTRING;
use windows::Win32::Media::Audio::{PlaySoundW, SND_ASYNC, SND_FILENAME, SND_NODEFAULT};

use crate::error::SoundError;
use crate::sound::SoundPlayer;

/// Plays a file asynchronously; a new sound cuts off the previous one.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinSoundPlayer;

impl SoundPlayer for WinSoundPlayer {
    fn play_async(&self, path: &Path) -> Result<(), SoundError> {
        let wide = HSTRING::from(path.as_os_str());
        // SND_NODEFAULT: a broken file stays silent instead of the system beep
        let started =
            unsafe { PlaySoundW(&wide, None, SND_ASYNC | SND_FILENAME | SND_NODEFAULT) };
        if started.as_bool() {
            Ok(())
        } else {
            Err(SoundError::Rejected(path.to_path_buf()))
        }
    }
}
