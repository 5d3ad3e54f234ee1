//! Command handlers. Each returns the text to print.

use anyhow::{bail, Context, Result};
use liql::{parse_select_fields, parse_where_clause, Dir, Filter, JoinLogic, Query, SelectFields};
use tracing::debug;

use crate::cli::{Cli, Command, FieldsArgs, FilterArgs, QueryArgs, WhereArgs};
use crate::config::{load_filter, parse_filter, Config};

/// Runs the parsed command line.
pub fn run(cli: &Cli) -> Result<String> {
    let config = Config::load_optional(cli.config.as_deref())?;
    match &cli.command {
        Command::Where(args) => run_where(args),
        Command::Fields(args) => Ok(run_fields(args)),
        Command::Query(args) => run_query(args, &config),
    }
}

fn run_where(args: &WhereArgs) -> Result<String> {
    let Some(filter) = read_filter(&args.filter)? else {
        bail!("a filter is required (--filter or --filter-file)");
    };
    let fragment = parse_where_clause(filter, &join_logic(&args.filter.join))
        .context("failed to compile filter")?;
    debug!(%fragment, "compiled where clause");
    Ok(fragment)
}

fn run_fields(args: &FieldsArgs) -> String {
    let fields = match args.fields.as_slice() {
        [single] => SelectFields::Text(single.clone()),
        many => SelectFields::List(many.to_vec()),
    };
    parse_select_fields(fields)
}

fn run_query(args: &QueryArgs, config: &Config) -> Result<String> {
    let mut query = Query::select(args.select.as_str())
        .from(args.from.as_str())
        .join_logic(join_logic(&args.filter.join));
    if let Some(filter) = read_filter(&args.filter)? {
        query = query.filter(filter);
    }
    if let Some(field) = &args.order_by {
        let dir = if args.asc { Dir::Asc } else { Dir::Desc };
        query = query.order_by(field.as_str(), dir);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = args.offset {
        query = query.offset(offset);
    }
    if let Some(cursor) = &args.cursor {
        query = query.cursor(cursor.as_str());
    }

    if !args.url {
        let text = query.build().context("failed to build query")?;
        debug!(%text, "built query");
        return Ok(text);
    }

    let Some(base) = args.base_url.as_deref().or(config.base_url.as_deref()) else {
        bail!("--url needs a base URL (--base-url or base_url in the config file)");
    };
    let options = format_options(args, config);
    let url = query.to_url(base, &options).context("failed to build query")?;
    debug!(%url, "built query url");
    Ok(url)
}

fn read_filter(args: &FilterArgs) -> Result<Option<Filter>> {
    match (&args.filter, &args.filter_file) {
        (Some(text), _) => parse_filter(text).map(Some),
        (None, Some(path)) => load_filter(path).map(Some),
        (None, None) => Ok(None),
    }
}

fn join_logic(join: &[String]) -> JoinLogic {
    match join {
        [] => JoinLogic::default(),
        [single] => JoinLogic::Single(single.clone()),
        many => JoinLogic::Sequence(many.to_vec()),
    }
}

// Flags switch options on; they never switch off what the config enables.
fn format_options(args: &QueryArgs, config: &Config) -> liql::FormatOptions {
    let mut options = config.format.clone();
    options.pretty_print |= args.pretty_print;
    options.track_in_lsi |= args.track_in_lsi;
    options.always_ok |= args.always_ok;
    if let Some(code) = &args.error_code {
        options.error_code = code.clone();
    }
    if args.raw_statements {
        options.format_statements = false;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("liql").chain(args.iter().copied()))?;
        run(&cli)
    }

    #[test]
    fn where_with_inline_filter() {
        let out = run_args(&["where", "--filter", r#"[["id", 5], ["id", 6]]"#]).unwrap();
        assert_eq!(out, "id = 5 AND id = 6");
    }

    #[test]
    fn where_with_join_sequence() {
        let out = run_args(&[
            "where",
            "--filter",
            r#"[["a", 1], ["b", "x"], ["c", ">", 3]]"#,
            "--join",
            "OR",
            "--join",
            "AND",
        ])
        .unwrap();
        assert_eq!(out, "a = 1 OR b = 'x' AND c > 3");
    }

    #[test]
    fn where_requires_filter() {
        let err = run_args(&["where"]).unwrap_err();
        assert!(err.to_string().contains("filter is required"));
    }

    #[test]
    fn where_reports_compile_errors() {
        let err = run_args(&["where", "--filter", r#"["id", "~=", 5]"#]).unwrap_err();
        assert_eq!(err.to_string(), "failed to compile filter");
        assert!(format!("{err:#}").contains("invalid operator '~='"));
    }

    #[test]
    fn fields_single_and_many() {
        assert_eq!(run_args(&["fields", "id; subject"]).unwrap(), "id,subject");
        assert_eq!(run_args(&["fields", "id", "subject"]).unwrap(), "id,subject");
    }

    #[test]
    fn query_text() {
        let out = run_args(&[
            "query",
            "--select",
            "id, subject",
            "--from",
            "messages",
            "--filter",
            r#"{"board.id": "ideas", "kudos.sum(weight)": [">", 5]}"#,
            "--order-by",
            "post_time",
            "--limit",
            "10",
        ])
        .unwrap();
        assert_eq!(
            out,
            "SELECT id,subject FROM messages WHERE board.id = 'ideas' AND kudos.sum(weight) > 5 \
             ORDER BY post_time DESC LIMIT 10"
        );
    }

    #[test]
    fn query_url_from_config() {
        let mut config = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        config
            .write_all(b"base_url: https://community.example.com/api/2.0\nformat:\n  always_ok: true\n")
            .unwrap();
        let config_path = config.path().to_str().unwrap();

        let out = run_args(&[
            "--config",
            config_path,
            "query",
            "--select",
            "id",
            "--from",
            "users",
            "--filter",
            r#"["login", "alice"]"#,
            "--url",
            "--error-code",
            "500",
        ])
        .unwrap();
        assert_eq!(
            out,
            "https://community.example.com/api/2.0/search?q=SELECT+id+FROM+users+WHERE+login+%3D+'alice'\
             &api.always_ok=true&api.error_code=500"
        );
    }

    #[test]
    fn query_url_needs_base() {
        let err = run_args(&["query", "--select", "id", "--from", "users", "--url"]).unwrap_err();
        assert!(err.to_string().contains("base URL"));
    }

    #[test]
    fn raw_statements_skip_keyword_formatting() {
        let out = run_args(&[
            "query",
            "--select",
            "date_from",
            "--from",
            "events",
            "--url",
            "--base-url",
            "https://x.test/api/2.0",
            "--raw-statements",
        ])
        .unwrap();
        assert_eq!(out, "https://x.test/api/2.0/search?q=SELECT+date_from+FROM+events");
    }

    #[test]
    fn conflicting_filter_sources() {
        assert!(run_args(&["where", "--filter", "[]", "--filter-file", "f.yaml"]).is_err());
    }
}
