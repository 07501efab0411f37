use crate::cq;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cq(#[from] cq::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
