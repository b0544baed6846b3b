//! Markup tables: operation id -> delimiters and cursor policy.
//!
//! The blog editor and the forum reply box differ only in their tables, so
//! both run through the same engine with a different `MarkupTable`.

use serde::Serialize;
use smol_str::SmolStr;

/// Where the selection lands after an edit.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPolicy {
    /// Select the operand, inside the inserted delimiters.
    #[default]
    WrapSelection,
    /// Caret at the original end offset shifted by the prefix length.
    CollapseAfterPrefix,
}

impl CursorPolicy {
    /// Parse the short names used in config files (`wrap`, `collapse`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "wrap" | "wrap_selection" => Some(Self::WrapSelection),
            "collapse" | "collapse_after_prefix" => Some(Self::CollapseAfterPrefix),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::WrapSelection => "wrap",
            Self::CollapseAfterPrefix => "collapse",
        }
    }
}

/// Delimiters inserted around the operand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkupRule {
    pub prefix: SmolStr,
    pub suffix: SmolStr,
    pub policy: CursorPolicy,
}

impl MarkupRule {
    /// Symmetric or asymmetric delimiters with the operand kept selected.
    pub fn wrap(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: SmolStr::new(prefix),
            suffix: SmolStr::new(suffix),
            policy: CursorPolicy::WrapSelection,
        }
    }

    /// Line marker (heading, quote, list item) with a collapsed caret.
    pub fn line_prefix(prefix: &str) -> Self {
        Self {
            prefix: SmolStr::new(prefix),
            suffix: SmolStr::default(),
            policy: CursorPolicy::CollapseAfterPrefix,
        }
    }
}

/// A named, ordered set of markup rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarkupTable {
    name: SmolStr,
    rules: Vec<(SmolStr, MarkupRule)>,
}

impl MarkupTable {
    pub fn new(name: &str) -> Self {
        Self {
            name: SmolStr::new(name),
            rules: Vec::new(),
        }
    }

    /// Add a rule, replacing any existing rule with the same id in place.
    pub fn with_rule(mut self, id: &str, rule: MarkupRule) -> Self {
        self.insert(id, rule);
        self
    }

    /// Add a rule, replacing any existing rule with the same id in place.
    pub fn insert(&mut self, id: &str, rule: MarkupRule) {
        match self.rules.iter_mut().find(|(existing, _)| existing == id) {
            Some((_, slot)) => *slot = rule,
            None => self.rules.push((SmolStr::new(id), rule)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, id: &str) -> Option<&MarkupRule> {
        self.rules
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Operation ids in the order they were added.
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(id, _)| id.as_str())
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &MarkupRule)> {
        self.rules.iter().map(|(id, rule)| (id.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Markdown toolbar of the blog editor.
    pub fn markdown() -> Self {
        Self::new("markdown")
            .with_rule("bold", MarkupRule::wrap("**", "**"))
            .with_rule("italic", MarkupRule::wrap("*", "*"))
            .with_rule("heading1", MarkupRule::line_prefix("# "))
            .with_rule("heading2", MarkupRule::line_prefix("## "))
            .with_rule("heading3", MarkupRule::line_prefix("### "))
            .with_rule("link", MarkupRule::wrap("[", "](url)"))
            .with_rule("code", MarkupRule::wrap("`", "`"))
            .with_rule("quote", MarkupRule::line_prefix("> "))
            .with_rule("list", MarkupRule::line_prefix("- "))
            .with_rule("list-num", MarkupRule::line_prefix("1. "))
            .with_rule("image", MarkupRule::wrap("![alt text](", ")"))
    }

    /// BBCode toolbar of the forum reply box.
    pub fn bbcode() -> Self {
        Self::new("bbcode")
            .with_rule("b", MarkupRule::wrap("[b]", "[/b]"))
            .with_rule("i", MarkupRule::wrap("[i]", "[/i]"))
            .with_rule("u", MarkupRule::wrap("[u]", "[/u]"))
            .with_rule("url", MarkupRule::wrap("[url=http://example.com]", "[/url]"))
            .with_rule("img", MarkupRule::wrap("[img]", "[/img]"))
            .with_rule("code", MarkupRule::wrap("[code]", "[/code]"))
            .with_rule("quote", MarkupRule::wrap("[quote]", "[/quote]"))
            .with_rule("list", MarkupRule::wrap("[list]\n[*]", "\n[/list]"))
    }

    /// Look up a built-in table by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "markdown" => Some(Self::markdown()),
            "bbcode" => Some(Self::bbcode()),
            _ => None,
        }
    }
}
