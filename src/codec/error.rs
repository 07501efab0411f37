pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Text is {len} bytes long, the field holds {capacity} bytes with the NUL.")]
    TextTooLong { len: usize, capacity: usize },

    #[error("Text contains a NUL byte.")]
    EmbeddedNul,

    #[error("Unexpected end of data while decoding.")]
    UnexpectedEof,

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}
