//! Annotation-region alias substitution.
//!
//! A line is eligible for rewriting when it carries an `@` marker followed,
//! later on the same line, by a `{{` opener. Substitution applies only
//! inside each `{{ … }}` region of such a line: an alias is replaced when it
//! stands as a whole token there, leaving the rest of the line intact.
//!
//! Token boundaries: the occurrence must be preceded by the region start or
//! a character that is neither an identifier character nor `.` (so the tail
//! of an already-qualified `x.y.Foo` is never expanded again, which makes
//! the pass idempotent), and followed by one of the delimiter characters
//! `. = , > | )` or the region closer `}`.

use crate::core::imports::{is_word_char, AliasTable};

/// Characters that may immediately follow an alias token.
const DELIMITERS: &[char] = &['.', '=', ',', '>', '|', ')', '}'];

/// Outcome of rewriting one file's content.
#[derive(Debug)]
pub struct Rewritten {
    /// The content with all eligible alias occurrences replaced.
    pub content: String,
    /// Number of alias occurrences replaced.
    pub substitutions: usize,
}

/// Apply the alias table to `content`, line by line.
///
/// Returns `None` when nothing changed. Line endings (`\n` and `\r\n`) and
/// any missing final newline are preserved byte for byte.
pub fn rewrite_content(content: &str, table: &AliasTable) -> Option<Rewritten> {
    if table.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(content.len());
    let mut substitutions = 0;
    for raw in content.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw);
        match rewrite_line(line, table) {
            Some((new_line, count)) => {
                substitutions += count;
                out.push_str(&new_line);
            }
            None => out.push_str(line),
        }
        out.push_str(ending);
    }

    (substitutions > 0).then_some(Rewritten {
        content: out,
        substitutions,
    })
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Rewrite one line, applying aliases in table order (ascending length).
fn rewrite_line(line: &str, table: &AliasTable) -> Option<(String, usize)> {
    // Cheap eligibility gate before any per-alias scanning.
    let at = line.find('@')?;
    line[at..].find("{{")?;

    let mut current = line.to_string();
    let mut substitutions = 0;
    for (alias, qualified) in table.entries() {
        if let Some((next, count)) = rewrite_alias_in_line(&current, alias, qualified) {
            current = next;
            substitutions += count;
        }
    }
    (substitutions > 0).then_some((current, substitutions))
}

/// Replace every eligible occurrence of one alias on one line.
///
/// Only `{{ … }}` regions that open after the line's first `@` marker are
/// scanned; a region left unterminated extends to the end of the line, but
/// then has no closer to act as an end-of-token delimiter.
fn rewrite_alias_in_line(line: &str, alias: &str, qualified: &str) -> Option<(String, usize)> {
    let at = line.find('@')?;

    let mut out = String::with_capacity(line.len());
    let mut substitutions = 0;
    let mut copied = 0;
    let mut search = at;
    while let Some(open_rel) = line[search..].find("{{") {
        let interior_start = search + open_rel + 2;
        let (interior_end, closed) = match line[interior_start..].find("}}") {
            Some(rel) => (interior_start + rel, true),
            None => (line.len(), false),
        };

        out.push_str(&line[copied..interior_start]);
        let (region, count) =
            rewrite_region(&line[interior_start..interior_end], alias, qualified, closed);
        out.push_str(&region);
        substitutions += count;

        copied = interior_end;
        if !closed {
            break;
        }
        search = interior_end + 2;
    }
    out.push_str(&line[copied..]);

    (substitutions > 0).then_some((out, substitutions))
}

/// Replace eligible occurrences of `alias` inside one region interior.
///
/// Scanning resumes after each inserted replacement, so text produced by
/// this pass is never rescanned within the same pass.
fn rewrite_region(interior: &str, alias: &str, qualified: &str, closed: bool) -> (String, usize) {
    let mut out = String::with_capacity(interior.len());
    let mut substitutions = 0;
    let mut i = 0;
    while let Some(rel) = interior[i..].find(alias) {
        let start = i + rel;
        let end = start + alias.len();

        let left_ok = match interior[..start].chars().next_back() {
            None => true,
            Some(c) => !is_word_char(c) && c != '.',
        };
        let right_ok = match interior[end..].chars().next() {
            // At the region's end the `}}` closer stands in as delimiter.
            None => closed,
            Some(c) => DELIMITERS.contains(&c),
        };

        if left_ok && right_ok {
            out.push_str(&interior[i..start]);
            out.push_str(qualified);
            substitutions += 1;
            i = end;
        } else {
            // Step one char (not one byte; aliases may start with a
            // multibyte letter) so a later occurrence overlapping this miss
            // is still considered.
            let step = interior[start..].chars().next().map_or(1, char::len_utf8);
            out.push_str(&interior[i..start + step]);
            i = start + step;
        }
    }
    out.push_str(&interior[i..]);
    (out, substitutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn table(pairs: &[(&str, &str)]) -> AliasTable {
        let bindings: IndexMap<String, String> = pairs
            .iter()
            .map(|(a, q)| ((*a).to_string(), (*q).to_string()))
            .collect();
        AliasTable::from_bindings(bindings)
    }

    #[test]
    fn test_basic_annotation_rewrite() {
        let t = table(&[("x", "a.b.c")]);
        let rewritten = rewrite_content(" * @doc {{x.method()}}\n", &t).unwrap();
        assert_eq!(rewritten.content, " * @doc {{a.b.c.method()}}\n");
        assert_eq!(rewritten.substitutions, 1);
    }

    #[test]
    fn test_alias_outside_region_untouched() {
        let t = table(&[("x", "a.b.c")]);
        assert!(rewrite_content("const y = x.method();\n", &t).is_none());
        assert!(rewrite_content(" * x. appears with no marker {{x.}}\n", &t).is_none());
        // Marker present, but the alias sits before the region.
        let rewritten = rewrite_content(" * @doc x. then {{x.y}}\n", &t).unwrap();
        assert_eq!(rewritten.content, " * @doc x. then {{a.b.c.y}}\n");
    }

    #[test]
    fn test_region_must_follow_marker() {
        let t = table(&[("x", "a.b.c")]);
        // `{{` before the only `@` is not an annotation region.
        assert!(rewrite_content(" * {{x.y}} no marker after@\n", &t).is_none());
    }

    #[test]
    fn test_substring_aliases_do_not_corrupt() {
        let t = table(&[("a", "foo.bar"), ("ab", "baz.qux")]);
        let rewritten = rewrite_content(" * @type {{ab.z}}\n", &t).unwrap();
        assert_eq!(rewritten.content, " * @type {{baz.qux.z}}\n");
    }

    #[test]
    fn test_delimiter_class() {
        let t = table(&[("Svg", "Blockly.utils.Svg")]);
        for (input, expected) in [
            (" * @type {{!Svg.ANIMATE}}", " * @type {{!Blockly.utils.Svg.ANIMATE}}"),
            (" * @type {{a:Svg,b:c}}", " * @type {{a:Blockly.utils.Svg,b:c}}"),
            (" * @type {{!Svg<!SVGElement>}}", " * @type {{!Blockly.utils.Svg<!SVGElement>}}"),
            (" * @type {{Svg|null}}", " * @type {{Blockly.utils.Svg|null}}"),
            (" * @param {{fn(Svg)}} f", " * @param {{fn(Blockly.utils.Svg)}} f"),
            (" * @type {{Svg=}}", " * @type {{Blockly.utils.Svg=}}"),
            (" * @type {{Svg}}", " * @type {{Blockly.utils.Svg}}"),
        ] {
            let rewritten = rewrite_content(input, &t).unwrap();
            assert_eq!(rewritten.content, expected, "input: {input}");
        }
        // Followed by a non-delimiter: no match.
        assert!(rewrite_content(" * @type {{Svg2.x}}", &t).is_none());
        assert!(rewrite_content(" * @type {{Svg foo}}", &t).is_none());
    }

    #[test]
    fn test_multibyte_alias_miss_advances_safely() {
        let t = table(&[("área", "geo.área")]);
        // Embedded in a longer word the alias is not a whole token; the scan
        // must step past the miss without splitting the multibyte char.
        assert!(rewrite_content(" * @type {{xárea.y}}\n", &t).is_none());
        let rewritten = rewrite_content(" * @type {{xárea.y, área.z}}\n", &t).unwrap();
        assert_eq!(rewritten.content, " * @type {{xárea.y, geo.área.z}}\n");
    }

    #[test]
    fn test_unterminated_region_has_no_end_delimiter() {
        let t = table(&[("x", "a.b.c")]);
        // Region runs to end of line; an alias at the very end has no
        // following delimiter, so only the dotted use rewrites.
        let rewritten = rewrite_content(" * @typedef {{x.y, x\n", &t).unwrap();
        assert_eq!(rewritten.content, " * @typedef {{a.b.c.y, x\n");
    }

    #[test]
    fn test_already_qualified_tail_not_reexpanded() {
        let t = table(&[("Foo", "x.y.Foo")]);
        let first = rewrite_content(" * @type {{Foo.bar}}\n", &t).unwrap();
        assert_eq!(first.content, " * @type {{x.y.Foo.bar}}\n");
        // Second pass over the qualified output is a no-op.
        assert!(rewrite_content(&first.content, &t).is_none());
    }

    #[test]
    fn test_multiple_regions_and_occurrences() {
        let t = table(&[("x", "a.b")]);
        let rewritten = rewrite_content(" * @p {{x.u}} and {{x.v}} and {{x.w, x.z}}\n", &t).unwrap();
        assert_eq!(
            rewritten.content,
            " * @p {{a.b.u}} and {{a.b.v}} and {{a.b.w, a.b.z}}\n"
        );
        assert_eq!(rewritten.substitutions, 4);
    }

    #[test]
    fn test_multiline_content_only_matching_lines_change() {
        let t = table(&[("Measurable", "Blockly.blockRendering.Measurable")]);
        let content = "\
class Connection extends Measurable {
 * @extends {{Measurable}}
const m = new Measurable();
";
        let rewritten = rewrite_content(content, &t).unwrap();
        assert_eq!(
            rewritten.content,
            "\
class Connection extends Measurable {
 * @extends {{Blockly.blockRendering.Measurable}}
const m = new Measurable();
"
        );
    }

    #[test]
    fn test_crlf_and_missing_final_newline_preserved() {
        let t = table(&[("x", "a.b")]);
        let rewritten = rewrite_content(" * @doc {{x.y}}\r\n * @doc {{x.z}}", &t).unwrap();
        assert_eq!(rewritten.content, " * @doc {{a.b.y}}\r\n * @doc {{a.b.z}}");
    }

    #[test]
    fn test_empty_table_is_noop() {
        let t = AliasTable::default();
        assert!(rewrite_content(" * @doc {{x.y}}\n", &t).is_none());
    }
}
