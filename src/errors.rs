use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresenterError {
    /// Fatal at construction: a session needs a presentation source with at
    /// least one slide, and a slide needs non-empty content.
    #[error("missing presentation source: {context}")]
    MissingSource { context: String },

    #[error("failed to read deck '{path}': {source}")]
    DeckRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown presentation id {id}")]
    UnknownPresentation { id: usize },
}

pub type Result<T> = std::result::Result<T, PresenterError>;
