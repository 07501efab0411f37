use std::path::PathBuf;

use crate::{header, store, sync};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database file '{0}' already exists.")]
    FileExists(PathBuf),

    #[error("Cannot open database file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Header(#[from] header::Error),

    #[error(transparent)]
    Store(#[from] store::Error),

    #[error(transparent)]
    Sync(#[from] sync::Error),
}

impl Error {
    pub fn is_empty_store(&self) -> bool {
        matches!(self, Error::Store(store::Error::EmptyStore))
    }
}
