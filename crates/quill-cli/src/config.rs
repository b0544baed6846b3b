//! KDL configuration: extra markup tables and the default table.
//!
//! ```kdl
//! default-table "wiki"
//! table "wiki" {
//!     op "bold" prefix="'''" suffix="'''"
//!     op "h2" prefix="== " cursor="collapse"
//! }
//! ```
//!
//! A table named like a built-in (`markdown`, `bbcode`) extends it.

use std::path::{Path, PathBuf};

use kdl::{KdlDocument, KdlNode};
use miette::Diagnostic;
use quill_editor_core::{CursorPolicy, MarkupRule, MarkupTable, SmolStr};

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    #[diagnostic(code(quill::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse failure, rendered with the KDL parser's own labels and snippet.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] kdl::KdlError),

    #[error("`{node}` node needs a name argument")]
    #[diagnostic(code(quill::config::missing_name))]
    MissingName { node: SmolStr },

    #[error("op `{op}` in table `{table}` has no prefix")]
    #[diagnostic(code(quill::config::missing_prefix))]
    MissingPrefix { table: SmolStr, op: SmolStr },

    #[error("op `{op}` in table `{table}` has unknown cursor policy `{value}`")]
    #[diagnostic(code(quill::config::cursor), help("use `wrap` or `collapse`"))]
    InvalidCursor {
        table: SmolStr,
        op: SmolStr,
        value: SmolStr,
    },

    #[error("no markup table named `{name}`")]
    #[diagnostic(
        code(quill::config::unknown_table),
        help("built-in tables are `markdown` and `bbcode`")
    )]
    UnknownTable { name: SmolStr },
}

#[derive(Debug, Default)]
pub struct Config {
    default_table: Option<SmolStr>,
    tables: Vec<MarkupTable>,
}

impl Config {
    /// Load from an explicit path, or the default location if it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("no config file, using built-in tables");
                    return Ok(Self::default());
                }
            },
        };

        let src = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&src)?;
        tracing::debug!(
            path = %path.display(),
            tables = config.tables.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn parse(src: &str) -> Result<Self, ConfigError> {
        let doc: KdlDocument = src.parse()?;
        let mut config = Self::default();

        for node in doc.nodes() {
            match node.name().value() {
                "default-table" => {
                    let name = argument(node).ok_or_else(|| missing_name(node))?;
                    config.default_table = Some(SmolStr::new(name));
                }
                "table" => {
                    let name = argument(node).ok_or_else(|| missing_name(node))?;
                    config.tables.push(parse_table(name, node)?);
                }
                other => tracing::warn!(node = other, "ignoring unknown config node"),
            }
        }

        Ok(config)
    }

    /// Resolve a table by name, falling back to `default-table`, then Markdown.
    ///
    /// Config tables with a built-in name are layered over the built-in.
    pub fn table(&self, name: Option<&str>) -> Result<MarkupTable, ConfigError> {
        let name = name
            .or(self.default_table.as_deref())
            .unwrap_or("markdown");

        let configured = self.tables.iter().find(|t| t.name() == name);
        match (MarkupTable::builtin(name), configured) {
            (Some(mut base), Some(extra)) => {
                for (id, rule) in extra.rules() {
                    base.insert(id, rule.clone());
                }
                Ok(base)
            }
            (Some(base), None) => Ok(base),
            (None, Some(extra)) => Ok(extra.clone()),
            (None, None) => Err(ConfigError::UnknownTable {
                name: SmolStr::new(name),
            }),
        }
    }

    /// Names of all tables this config can resolve.
    pub fn table_names(&self) -> Vec<&str> {
        let mut names = vec!["markdown", "bbcode"];
        for table in &self.tables {
            if !names.contains(&table.name()) {
                names.push(table.name());
            }
        }
        names
    }
}

fn parse_table(name: &str, node: &KdlNode) -> Result<MarkupTable, ConfigError> {
    let mut table = MarkupTable::new(name);
    let Some(children) = node.children() else {
        return Ok(table);
    };

    for op in children.nodes() {
        if op.name().value() != "op" {
            tracing::warn!(
                table = name,
                node = op.name().value(),
                "ignoring unknown node in table"
            );
            continue;
        }
        let id = argument(op).ok_or_else(|| missing_name(op))?;
        let prefix = property(op, "prefix").ok_or_else(|| ConfigError::MissingPrefix {
            table: SmolStr::new(name),
            op: SmolStr::new(id),
        })?;
        let suffix = property(op, "suffix").unwrap_or("");
        let policy = match property(op, "cursor") {
            None => CursorPolicy::WrapSelection,
            Some(value) => {
                CursorPolicy::from_name(value).ok_or_else(|| ConfigError::InvalidCursor {
                    table: SmolStr::new(name),
                    op: SmolStr::new(id),
                    value: SmolStr::new(value),
                })?
            }
        };

        table.insert(
            id,
            MarkupRule {
                prefix: SmolStr::new(prefix),
                suffix: SmolStr::new(suffix),
                policy,
            },
        );
    }

    Ok(table)
}

/// First positional string argument of a node.
fn argument(node: &KdlNode) -> Option<&str> {
    node.entries()
        .iter()
        .find(|e| e.name().is_none())
        .and_then(|e| e.value().as_string())
}

fn property<'a>(node: &'a KdlNode, key: &str) -> Option<&'a str> {
    node.entries()
        .iter()
        .find(|e| e.name().map(|n| n.value()) == Some(key))
        .and_then(|e| e.value().as_string())
}

fn missing_name(node: &KdlNode) -> ConfigError {
    ConfigError::MissingName {
        node: SmolStr::new(node.name().value()),
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quill").join("config.kdl"))
}
