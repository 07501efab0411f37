use super::{Command, Invocation, OpenMode, Query, Result};
use crate::{
    database::{self, Database},
    types::RecordId,
};
use log::{debug, info};
use std::io::Write;

pub struct CQExecutor;

pub trait Executor {
    fn execute<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()>;
}

impl Executor for CQExecutor {
    /// Opens (or creates) the target, applies all commands, writes the file
    /// back if anything changed and then answers the queries. A failed
    /// command stops the run before anything is written.
    fn execute<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
        let mut database = match invocation.mode {
            OpenMode::Create => Database::create(&invocation.target)?,
            OpenMode::Existing => Database::open(&invocation.target)?,
        };
        info!(
            "{} employees in {:?}",
            database.header().count,
            invocation.target
        );

        if !invocation.commands.is_empty() {
            for command in &invocation.commands {
                match CQExecutor::execute_command(&mut database, command) {
                    Err(e) if e.is_empty_store() => {
                        writeln!(out, "{}", e)?;
                        return Ok(());
                    }
                    result => {
                        result?;
                    }
                }
            }
            database.sync()?;
        }

        for query in &invocation.queries {
            CQExecutor::execute_query(&database, query, out)?;
        }

        Ok(())
    }
}

impl CQExecutor {
    fn execute_command(database: &mut Database, command: &Command) -> database::Result<RecordId> {
        debug!("Executing command: {}", command);
        match command {
            Command::Delete { id } => database.delete(id),
            Command::Add { employee } => database.add(employee),
        }
    }

    fn execute_query<W: Write>(database: &Database, query: &Query, out: &mut W) -> Result<()> {
        let entries = match query {
            Query::List => database.list(),
            Query::Search { name } => {
                writeln!(out, "Searching for employees with name: {}", name)?;
                database.search(name)
            }
        };

        for entry in entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}
