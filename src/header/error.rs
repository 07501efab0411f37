use crate::codec;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid database header magic number: {found:#x}.")]
    InvalidMagic { found: u32 },

    #[error("Unsupported database version: {found}. Supported version: {supported}.")]
    UnsupportedVersion { found: u16, supported: u16 },

    #[error("Corrupted database file: header declares {declared} bytes, file has {actual} bytes.")]
    CorruptedSize { declared: u32, actual: u64 },

    #[error("Database file is truncated: expected {expected} header bytes, got {actual}.")]
    Truncated { expected: u32, actual: usize },

    #[error(transparent)]
    Codec(#[from] codec::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
