use crate::{codec, types::RecordId};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid add string format '{0}'. Expected: name,address,hours")]
    MalformedInput(String),

    #[error("Employee {field} is too long: {len} bytes, the limit is {limit} bytes.")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        limit: usize,
    },

    #[error("Invalid employee {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: codec::Error,
    },

    #[error("Invalid hours format: '{0}'.")]
    InvalidHours(String),

    #[error("No employees to delete.")]
    EmptyStore,

    #[error("Invalid employee ID '{id}'. Valid IDs: 0..{count}.")]
    InvalidId { id: String, count: u16 },

    #[error("Database is full, it holds at most {capacity} employees.")]
    StoreFull { capacity: RecordId },

    #[error("Database file is truncated: expected {expected} bytes of records, got {actual}.")]
    Truncated { expected: u64, actual: usize },

    #[error("Cannot decode employee {id}: {source}")]
    CorruptedRecord {
        id: RecordId,
        #[source]
        source: codec::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
