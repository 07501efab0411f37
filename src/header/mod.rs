mod error;
mod hdr;

pub use error::{Error, Result};
pub use hdr::DbHeader;
