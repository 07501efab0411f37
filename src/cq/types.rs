use std::{fmt, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Create,
    Existing,
}

/// Mutations, applied in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Delete { id: String },
    Add { employee: String },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Delete { id } => write!(f, "DELETE {}", id),
            Command::Add { employee } => write!(f, "ADD {}", employee),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    List,
    Search { name: String },
}

/// Everything one run of the tool does to one database file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: PathBuf,
    pub mode: OpenMode,
    pub commands: Vec<Command>,
    pub queries: Vec<Query>,
}
