use crate::database;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Database(#[from] database::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
