mod error;
mod writer;

pub use error::{Error, Result};
pub use writer::write_all;
