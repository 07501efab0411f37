mod error;
mod executor;
mod types;

pub use error::{Error, Result};
pub use executor::{CQExecutor, Executor};
pub use types::{Command, Invocation, OpenMode, Query};
