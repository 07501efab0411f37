use crate::{codec, header};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Header counts {count} employees, but {records} are about to be written.")]
    CountMismatch { count: u16, records: usize },

    #[error("Header declares {declared} bytes, but {count} employees take {expected} bytes.")]
    InconsistentSize {
        declared: u32,
        count: u16,
        expected: u32,
    },

    #[error("Error writing database file: {0}")]
    WriteFailure(#[from] std::io::Error),

    #[error(transparent)]
    Header(#[from] header::Error),

    #[error(transparent)]
    Codec(#[from] codec::Error),
}
