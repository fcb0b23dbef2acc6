//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a click sound could not be played.
///
/// Never shown to the user: playback is best-effort and these only reach
/// the debug log.
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("cannot read sound folder {path}: {source}")]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("system refused to play {0}")]
    Rejected(PathBuf),
}
