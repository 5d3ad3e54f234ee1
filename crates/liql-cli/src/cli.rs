//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Compile LiQL filters, queries and search URLs.
#[derive(Debug, Parser)]
#[command(name = "liql")]
#[command(version)]
#[command(about = "Compile LiQL filters, queries and search URLs")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// YAML config file with `base_url` and `format` options
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a filter into a WHERE fragment
    Where(WhereArgs),

    /// Render a SELECT field list
    Fields(FieldsArgs),

    /// Assemble a full query, or its search URL
    Query(QueryArgs),
}

/// Where the filter comes from and how its clauses are joined.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Filter as inline JSON, e.g. '{"id": 5}' or '[["id", ">", 5], ["id", "<", 9]]'
    #[arg(long, conflicts_with = "filter_file")]
    pub filter: Option<String>,

    /// JSON or YAML file holding the filter
    #[arg(long, value_name = "PATH")]
    pub filter_file: Option<PathBuf>,

    /// Join keyword (AND, OR, IN, MATCHES); repeat to give one per clause gap
    #[arg(long = "join", value_name = "OP")]
    pub join: Vec<String>,
}

#[derive(Debug, Args)]
pub struct WhereArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// One field list ("id, subject" or "id;subject") or several field names
    #[arg(required = true)]
    pub fields: Vec<String>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Fields to select
    #[arg(long)]
    pub select: String,

    /// Collection to query, e.g. messages
    #[arg(long)]
    pub from: String,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Field to order by (descending unless --asc)
    #[arg(long, value_name = "FIELD")]
    pub order_by: Option<String>,

    /// Order ascending
    #[arg(long, requires = "order_by")]
    pub asc: bool,

    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long)]
    pub offset: Option<usize>,

    /// Cursor from a previous response
    #[arg(long)]
    pub cursor: Option<String>,

    /// Print the search URL instead of the query text
    #[arg(long)]
    pub url: bool,

    /// API v2 base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub pretty_print: bool,

    #[arg(long)]
    pub track_in_lsi: bool,

    #[arg(long)]
    pub always_ok: bool,

    #[arg(long, value_name = "CODE")]
    pub error_code: Option<String>,

    /// Leave statement keywords as written
    #[arg(long)]
    pub raw_statements: bool,
}
