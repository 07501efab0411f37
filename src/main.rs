mod codec;
mod cq;
mod database;
mod error;
mod header;
mod store;
mod sync;
mod types;

use clap::Parser;
use cq::{CQExecutor, Command, Executor, Invocation, OpenMode, Query};
use env_logger::{Builder, Env};
use log::error;
use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use crate::error::Result;

/// Single-file employee database.
#[derive(Parser)]
#[command(version, arg_required_else_help(true))]
struct Args {
    #[arg(short, long, value_name = "PATH")]
    file: PathBuf,

    /// Create a new database file instead of opening an existing one.
    #[arg(short, long)]
    new: bool,

    #[arg(short, long, value_name = "NAME,ADDRESS,HOURS")]
    add: Option<String>,

    /// Soft-delete the employee with the given ID.
    #[arg(short, long, value_name = "ID", allow_hyphen_values = true)]
    delete: Option<String>,

    #[arg(short, long)]
    list: bool,

    /// Print employees whose name matches exactly.
    #[arg(short, long, value_name = "NAME")]
    search: Option<String>,
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
}

fn main() -> ExitCode {
    init_logger();

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let invocation = build_invocation(args);

    let mut out = io::stdout().lock();
    CQExecutor::execute(&invocation, &mut out)?;
    out.flush()?;

    Ok(())
}

fn build_invocation(args: Args) -> Invocation {
    let mode = if args.new {
        OpenMode::Create
    } else {
        OpenMode::Existing
    };

    let mut commands = Vec::new();
    if let Some(id) = args.delete {
        commands.push(Command::Delete { id });
    }
    if let Some(employee) = args.add {
        commands.push(Command::Add { employee });
    }

    let mut queries = Vec::new();
    if args.list {
        queries.push(Query::List);
    }
    if let Some(name) = args.search {
        queries.push(Query::Search { name });
    }

    Invocation {
        target: args.file,
        mode,
        commands,
        queries,
    }
}
