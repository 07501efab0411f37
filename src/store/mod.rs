mod error;
mod record;
mod records;

pub use error::{Error, Result};
pub use record::Employee;
pub use records::{EmployeeEntry, RecordStore};
