//! Import-declaration matching and alias collection.
//!
//! Recognizes the destructuring import shape used by `goog.module` code:
//!
//! ```text
//! const {Measurable, Types: blockTypes} = goog.require('Blockly.blockRendering.Types');
//! const {ConstantProvider} = goog.requireType('Blockly.blockRendering.ConstantProvider');
//! ```
//!
//! Each bound name becomes an alias for the dotted module path; for an
//! `identifier: alias` pair the right-hand side is the recorded alias. A line
//! that does not match the shape contributes nothing. This is a dedicated
//! structured matcher rather than a regular expression, so the
//! punctuation-sensitive parsing stays isolated and testable.

use indexmap::IndexMap;

/// One recognized `const {…} = goog.require[Type]('…');` declaration.
///
/// `goog.requireType` (type-only) declarations bind aliases exactly the
/// same way, so the two forms are not distinguished here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Aliases bound by the destructuring pattern, in declaration order.
    pub aliases: Vec<String>,
    /// The dotted module path named by the declaration.
    pub qualified: String,
}

/// Characters that may form an identifier.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(is_word_char),
        _ => false,
    }
}

/// Match a single import declaration, anchored at the start of `line`.
///
/// Returns `None` for any line that does not have the exact shape; a miss is
/// not an error. Name entries that are not identifiers (or `identifier:
/// alias` pairs) are skipped silently, and a declaration binding no usable
/// name at all is treated as a miss.
pub fn parse_import_line(line: &str) -> Option<ImportDecl> {
    let rest = line.strip_prefix("const {")?;
    let (names, rest) = rest.split_once('}')?;

    // The destructuring body may only contain names, commas, spaces, and
    // colon-pair separators; anything else rejects the whole line.
    if !names
        .chars()
        .all(|c| is_word_char(c) || c == ',' || c == ' ' || c == ':')
    {
        return None;
    }

    let rest = rest.strip_prefix(" = goog.require")?;
    let rest = rest.strip_prefix("Type").unwrap_or(rest);
    let rest = rest.strip_prefix("('")?;
    let (qualified, _) = rest.split_once("');")?;
    if qualified.is_empty() {
        return None;
    }

    let mut aliases = Vec::new();
    for entry in names.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        // `Exported: local` binds the local name, not the exported one.
        let alias = match entry.split_once(':') {
            Some((_, local)) => local.trim(),
            None => entry,
        };
        if is_identifier(alias) {
            aliases.push(alias.to_string());
        }
    }
    if aliases.is_empty() {
        return None;
    }

    Some(ImportDecl {
        aliases,
        qualified: qualified.to_string(),
    })
}

/// Ordered alias → fully-qualified substitution table for one file.
///
/// Entries are sorted ascending by alias length (stable, so declaration
/// order is preserved among equal lengths). Applying substitutions in that
/// order keeps a shorter alias from corrupting a longer one that contains
/// it as a substring.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
}

impl AliasTable {
    /// Scan every line of `content` for import declarations and build the
    /// table. Duplicate aliases within the file resolve last-write-wins.
    pub fn collect(content: &str) -> Self {
        let mut bindings: IndexMap<String, String> = IndexMap::new();
        for line in content.lines() {
            if let Some(decl) = parse_import_line(line) {
                for alias in decl.aliases {
                    bindings.insert(alias, decl.qualified.clone());
                }
            }
        }
        Self::from_bindings(bindings)
    }

    /// Build the length-sorted table from collected bindings.
    pub fn from_bindings(bindings: IndexMap<String, String>) -> Self {
        let mut entries: Vec<(String, String)> = bindings.into_iter().collect();
        entries.sort_by_key(|(alias, _)| alias.len());
        Self { entries }
    }

    /// The `(alias, fully_qualified)` pairs in application order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of distinct aliases in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the file bound no aliases at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_identifier() {
        let decl =
            parse_import_line("const {Measurable} = goog.require('Blockly.blockRendering.Measurable');")
                .unwrap();
        assert_eq!(decl.aliases, vec!["Measurable"]);
        assert_eq!(decl.qualified, "Blockly.blockRendering.Measurable");
    }

    #[test]
    fn test_parse_multiple_names() {
        let decl = parse_import_line("const {Foo, Bar, baz} = goog.require('a.b.c');").unwrap();
        assert_eq!(decl.aliases, vec!["Foo", "Bar", "baz"]);
    }

    #[test]
    fn test_colon_pair_binds_local_name() {
        let decl = parse_import_line("const {Foo: bar} = goog.require('x.y.Foo');").unwrap();
        assert_eq!(decl.aliases, vec!["bar"]);
        assert_eq!(decl.qualified, "x.y.Foo");
    }

    #[test]
    fn test_require_type_binds_the_same() {
        let typed =
            parse_import_line("const {ConstantProvider} = goog.requireType('Blockly.ConstantProvider');")
                .unwrap();
        let plain =
            parse_import_line("const {ConstantProvider} = goog.require('Blockly.ConstantProvider');")
                .unwrap();
        assert_eq!(typed, plain);
        assert_eq!(typed.aliases, vec!["ConstantProvider"]);
    }

    #[test]
    fn test_miss_is_not_matched() {
        // Anchored at line start; indented declarations do not match.
        assert!(parse_import_line("  const {Foo} = goog.require('a.b');").is_none());
        assert!(parse_import_line("const Foo = goog.require('a.b');").is_none());
        assert!(parse_import_line("const {Foo} = goog.require(\"a.b\");").is_none());
        assert!(parse_import_line("const {Foo} = goog.require('');").is_none());
        assert!(parse_import_line("const {...rest} = goog.require('a.b');").is_none());
        assert!(parse_import_line("goog.module('Blockly.utils.Svg');").is_none());
    }

    #[test]
    fn test_collect_sorts_by_alias_length() {
        let content = "\
const {longest} = goog.require('l.o.n.g');
const {ab} = goog.require('baz.qux');
const {a} = goog.require('foo.bar');
";
        let table = AliasTable::collect(content);
        let aliases: Vec<&str> = table.entries().iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(aliases, vec!["a", "ab", "longest"]);
    }

    #[test]
    fn test_duplicate_alias_last_write_wins() {
        let content = "\
const {Foo} = goog.require('first.Foo');
const {Foo} = goog.require('second.Foo');
";
        let table = AliasTable::collect(content);
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0], ("Foo".to_string(), "second.Foo".to_string()));
    }

    #[test]
    fn test_collect_empty_for_plain_file() {
        let table = AliasTable::collect("class Foo {}\nconst x = 1;\n");
        assert!(table.is_empty());
    }
}
