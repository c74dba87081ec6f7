use thiserror::Error;

/// Errors that can occur while editing a session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Nothing selected to extract")]
    NoSelection,

    #[error(transparent)]
    Audio(#[from] clipscribe_audio::AudioError),

    #[error("Playback error: {0}")]
    Playback(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;

impl From<SessionError> for clipscribe_core::ClipError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Audio(audio) => audio.into(),
            SessionError::NoSelection => {
                clipscribe_core::ClipError::invalid_input("nothing selected to extract")
            }
            SessionError::Playback(msg) => clipscribe_core::ClipError::Playback(msg),
        }
    }
}
