//! sqlf CLI
//!
//! Command-line tool for composing and rendering parameterized SQL.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use sqlf_core::dialect::DialectKind;
use sqlf_core::{Query, SqlValue};
use sqlf_sqlx::QueryExecutor;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

/// Compose parameterized SQL, printf style.
#[derive(Parser)]
#[command(name = "sqlf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// A template and its arguments.
#[derive(Args)]
struct TemplateArgs {
    /// Template, e.g. "SELECT * FROM users WHERE id = %d".
    format: String,

    /// Arguments, one per verb. Each is parsed as JSON (`1`, `"a"`, `null`,
    /// `[1, 2]`); anything that is not valid JSON is taken as text.
    args: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template with dialect placeholders and print its arguments.
    Render {
        #[command(flatten)]
        template: TemplateArgs,

        /// Placeholder dialect (simple, postgres, oracle, sqlserver).
        #[arg(short, long, env = "SQLF_DIALECT", default_value_t = DialectKind::Postgres)]
        dialect: DialectKind,

        /// Print `{"sql": ..., "args": [...]}` instead of two lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the template with arguments inlined as literals (debug only).
    Inline {
        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Execute the statement against a SQLite database.
    Exec {
        #[command(flatten)]
        template: TemplateArgs,

        /// Database URL.
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
        database: String,
    },
}

fn parse_arg(raw: &str) -> SqlValue {
    serde_json::from_str(raw).unwrap_or_else(|_| SqlValue::Text(raw.to_string()))
}

fn compose(template: &TemplateArgs) -> anyhow::Result<Query> {
    let args: Vec<SqlValue> = template.args.iter().map(|raw| parse_arg(raw)).collect();
    debug!(format = %template.format, args = args.len(), "Composing query");
    Query::compose(&template.format, args).context("failed to compose query")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            template,
            dialect,
            json,
        } => {
            let query = compose(&template)?;
            let (sql, args) = query.build(&dialect);
            if json {
                println!("{}", json!({ "sql": sql, "args": args }));
            } else {
                println!("{sql}");
                println!("{}", serde_json::to_string(&args)?);
            }
        }

        Commands::Inline { template } => {
            let query = compose(&template)?;
            println!("{}", query.to_sql_inline()?);
        }

        Commands::Exec { template, database } => {
            let query = compose(&template)?;
            let pool = SqlitePoolOptions::new()
                .max_connections(1)
                .connect(&database)
                .await
                .with_context(|| format!("failed to connect to {database}"))?;

            let executor = QueryExecutor::new(pool);
            let rows = executor.execute(&query).await?;
            info!("{rows} row(s) affected");
        }
    }

    Ok(())
}
