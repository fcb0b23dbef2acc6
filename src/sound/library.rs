//! Sound folder lookup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SoundError;
use crate::model::constants::{SOUND_EXTENSION, SOUND_FOLDER_NAME};

/// `click_sounds` in the directory that contains `exe`.
pub fn sound_folder_next_to(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(SOUND_FOLDER_NAME)
}

/// `click_sounds` next to the running executable, or in the working
/// directory when the executable path is unknown.
pub fn default_sound_folder() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => sound_folder_next_to(&exe),
        Err(_) => PathBuf::from(SOUND_FOLDER_NAME),
    }
}

/// True for a `.wav` path, ignoring case.
pub fn is_playable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOUND_EXTENSION))
}

/// Regular `.wav` files in `folder`, sorted by path.
///
/// A missing folder is not an error: it yields an empty list.
pub fn list_sound_files(folder: &Path) -> Result<Vec<PathBuf>, SoundError> {
    let entries = match fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(SoundError::ReadFolder {
                path: folder.to_path_buf(),
                source,
            })
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_playable(path))
        .collect();
    files.sort();
    Ok(files)
}
