use miette::{IntoDiagnostic, Result, WrapErr};
use quill_editor_core::{
    Edit, EditorStats, MarkupTable, SelectionMarkupEditor, SelectionRange, quote_reply,
};
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

mod config;

use config::Config;

#[derive(Parser)]
#[command(version, about = "quill - markup toolbar actions for plain text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to KDL config file (defaults to <config dir>/quill/config.kdl)
    #[arg(long, global = true, env = "QUILL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap the selection in markup and print the new text
    Apply {
        /// Operation id, e.g. `bold`, `heading1`, `url`
        #[arg(long)]
        op: String,

        /// Markup table to use
        #[arg(long)]
        table: Option<String>,

        /// Selection start, in chars (defaults to --end, or the end of input)
        #[arg(long)]
        start: Option<usize>,

        /// Selection end, in chars (defaults to --start)
        #[arg(long)]
        end: Option<usize>,

        /// Print the new buffer and selection as JSON
        #[arg(long)]
        json: bool,

        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// List the operations of a markup table
    Ops {
        #[arg(long)]
        table: Option<String>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Word count and reading time
    Stats {
        #[arg(long)]
        json: bool,

        /// Input file (stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Append a quoted post to a reply
    Quote {
        #[arg(long)]
        author: String,

        #[arg(long)]
        body: String,

        /// Reply so far (stdin if omitted)
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_miette();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Apply {
            op,
            table,
            start,
            end,
            json,
            file,
        } => {
            let editor = SelectionMarkupEditor::new(config.table(table.as_deref())?);
            let buffer = read_input(file.as_deref())?;
            let selection = selection_from_args(&buffer, start, end);
            apply(&editor, &buffer, selection, &op, json)?;
        }
        Commands::Ops { table, json } => {
            let table = config.table(table.as_deref())?;
            if json {
                println!("{}", ops_json(&table)?);
            } else {
                println!("{} ({} operations)", table.name(), table.len());
                for (id, rule) in table.rules() {
                    println!(
                        "  {id:<10} {:<28} {:<12} {}",
                        format!("{:?}", rule.prefix.as_str()),
                        format!("{:?}", rule.suffix.as_str()),
                        rule.policy.name()
                    );
                }
                println!("tables: {}", config.table_names().join(", "));
            }
        }
        Commands::Stats { json, file } => {
            let stats = EditorStats::of(&read_input(file.as_deref())?);
            if json {
                println!("{}", serde_json::to_string(&stats).into_diagnostic()?);
            } else {
                println!("{stats}");
            }
        }
        Commands::Quote { author, body, file } => {
            let buffer = read_input(file.as_deref())?;
            print!("{}", quote_reply(&buffer, &author, &body).buffer);
        }
    }

    Ok(())
}

fn apply(
    editor: &SelectionMarkupEditor,
    buffer: &str,
    selection: SelectionRange,
    op: &str,
    json: bool,
) -> Result<()> {
    let edit = match editor.apply(buffer, selection, op) {
        Ok(edit) => edit,
        Err(err) if err.is_no_op() => {
            tracing::warn!("{err}, output unchanged");
            Edit::new(buffer, selection)
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        start = edit.selection.start,
        end = edit.selection.end,
        "selection after {op}"
    );

    if json {
        println!("{}", serde_json::to_string(&edit).into_diagnostic()?);
    } else {
        print!("{}", edit.buffer);
    }
    Ok(())
}

fn ops_json(table: &MarkupTable) -> Result<String> {
    serde_json::to_string(table).into_diagnostic()
}

/// Missing offsets collapse onto the other one, or onto the end of input.
fn selection_from_args(buffer: &str, start: Option<usize>, end: Option<usize>) -> SelectionRange {
    match (start, end) {
        (Some(start), Some(end)) => SelectionRange::new(start, end),
        (Some(offset), None) | (None, Some(offset)) => SelectionRange::caret(offset),
        (None, None) => SelectionRange::caret(buffer.chars().count()),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .into_diagnostic()?;
            Ok(buffer)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn init_miette() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .context_lines(3)
                .tab_width(2)
                .build(),
        )
    }))
    .expect("couldn't set the miette hook");
    miette::set_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults_to_end_of_input() {
        assert_eq!(
            selection_from_args("héllo", None, None),
            SelectionRange::caret(5)
        );
    }

    #[test]
    fn test_selection_collapses_single_offset() {
        assert_eq!(selection_from_args("abc", Some(1), None), SelectionRange::caret(1));
        assert_eq!(selection_from_args("abc", None, Some(2)), SelectionRange::caret(2));
        assert_eq!(
            selection_from_args("abc", Some(0), Some(3)),
            SelectionRange::new(0, 3)
        );
    }

    #[test]
    fn test_apply_unknown_op_is_not_an_error() {
        let editor = SelectionMarkupEditor::bbcode();
        assert!(apply(&editor, "abc", SelectionRange::new(0, 1), "bold", true).is_ok());
    }

    #[test]
    fn test_apply_invalid_range_is_an_error() {
        let editor = SelectionMarkupEditor::markdown();
        assert!(apply(&editor, "abc", SelectionRange::new(2, 1), "bold", true).is_err());
    }

    #[test]
    fn test_ops_json_lists_rules_in_order() {
        let json = ops_json(&MarkupTable::bbcode()).unwrap();
        assert!(json.starts_with(r#"{"name":"bbcode","rules":[["b",{"prefix":"[b]""#));
        assert!(json.contains(r#""policy":"wrap_selection""#));
        assert!(json.find(r#"["b","#) < json.find(r#"["list","#));
    }

    #[test]
    fn test_cli_parses_apply() {
        let cli = Cli::try_parse_from([
            "quill", "apply", "--op", "bold", "--start", "0", "--end", "5", "notes.md",
        ])
        .unwrap();
        match cli.command {
            Commands::Apply {
                op, start, end, file, ..
            } => {
                assert_eq!(op, "bold");
                assert_eq!((start, end), (Some(0), Some(5)));
                assert_eq!(file.as_deref(), Some(Path::new("notes.md")));
            }
            _ => panic!("expected apply"),
        }
    }
}
