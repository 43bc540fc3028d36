//! Word-wrap session errors.

/// Errors that can occur while driving a [`WordWrap`](super::WordWrap) session.
///
/// The wrapping itself never fails; these only cover lifecycle misuse
/// and I/O failures of an outer reader or sink.
#[derive(Debug, thiserror::Error)]
pub enum WrapError {
    #[error("Cannot write to a word-wrap session that has already been finished")]
    AlreadyFinished,

    #[error("Word-wrap result requested before finish() was called")]
    NotFinished,

    #[error("I/O error while wrapping: {0}")]
    Io(#[from] std::io::Error),
}

impl From<WrapError> for std::io::Error {
    fn from(err: WrapError) -> Self {
        match err {
            WrapError::Io(inner) => inner,
            other => std::io::Error::new(std::io::ErrorKind::Other, other),
        }
    }
}
