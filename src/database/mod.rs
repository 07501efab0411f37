mod db;
mod error;
mod file_ops;

pub use db::Database;
pub use error::{Error, Result};
