//! oxide-tutor CLI
//!
//! Command-line front end for the SQL sandbox and its exercises.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use oxide_sandbox::{CountSource, Dataset, EngineOptions, QueryOutcome, Sandbox};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_tutor::prelude::*;

/// Practice SQL against an in-memory sample database.
#[derive(Parser)]
#[command(name = "oxide-tutor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON dataset to query instead of the built-in sample tables.
    #[arg(short, long, env = "OXIDE_TUTOR_DATASET")]
    dataset: Option<PathBuf>,

    /// Reject WHERE conditions the sandbox does not understand.
    #[arg(long)]
    strict: bool,

    /// Make COUNT(*) count filtered rows instead of the whole table.
    #[arg(long)]
    count_working_set: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one statement and print the outcome as JSON.
    Query {
        /// The SQL statement.
        sql: String,
    },

    /// List the tables with their row counts and descriptions.
    Tables,

    /// List the curriculum exercises.
    Exercises {
        /// Only show exercises of this module.
        #[arg(short, long)]
        module: Option<String>,
    },

    /// List the sandbox challenges.
    Challenges,

    /// Check a statement against an exercise or challenge.
    Check {
        /// Exercise or challenge id.
        id: String,
        /// The SQL statement.
        sql: String,
    },

    /// Read statements from stdin, one per line.
    Repl,
}

fn print_outcome(outcome: &QueryOutcome) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(outcome)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset = match &cli.dataset {
        Some(path) => {
            info!("Loading dataset from {}", path.display());
            load_dataset(path)?
        }
        None => Dataset::fixture(),
    };

    let mut options = EngineOptions::new();
    if cli.strict {
        options = options.with_strict_predicates();
    }
    if cli.count_working_set {
        options = options.with_count_source(CountSource::WorkingSet);
    }
    let sandbox = Sandbox::new(dataset).with_options(options);

    match cli.command {
        Commands::Query { sql } => {
            print_outcome(&sandbox.execute(&sql))?;
        }

        Commands::Tables => {
            for table in sandbox.dataset().tables() {
                let description = table_doc(&table.name).map_or("", |doc| doc.description);
                println!("{:<12} {:>4} rows  {}", table.name, table.rows.len(), description);
                if let Some(doc) = table_doc(&table.name) {
                    for column in doc.columns {
                        println!("    {:<12} {:<8} {}", column.name, column.sql_type, column.note);
                    }
                }
            }
        }

        Commands::Exercises { module } => {
            for exercise in EXERCISES {
                if let Some(target) = &module {
                    if exercise.module != target.as_str() {
                        continue;
                    }
                }
                println!("[{}] ({}) {}", exercise.id, exercise.module, exercise.prompt);
            }
        }

        Commands::Challenges => {
            for challenge in CHALLENGES {
                println!("[{}] ({}) {}", challenge.id, challenge.difficulty, challenge.prompt);
            }
        }

        Commands::Check { id, sql } => {
            let task = require_task(&id)?;
            let attempt = task.check(&sandbox, &sql);
            print_outcome(&attempt.outcome)?;
            if attempt.passed {
                println!("\n[X] {} passed", task.id());
            } else {
                println!("\n[ ] {} not yet. Hint: {}", task.id(), task.hint());
            }
        }

        Commands::Repl => {
            info!("Reading statements from stdin. End with Ctrl-D.");
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            for line in stdin.lock().lines() {
                let line = line?;
                let sql = line.trim();
                if sql.is_empty() {
                    continue;
                }
                print_outcome(&sandbox.execute(sql))?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}
