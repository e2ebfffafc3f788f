use crate::prerequisite_analysis::domain::DependencyMap;
use regex::Regex;
use std::sync::LazyLock;

/// `<target> : <prerequisites>`, stopping at the order-only separator `|`
static RULE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s]+)\s*:\s*([^|]*)").expect("rule line pattern is valid")
});

/// ASCII and Unicode line separators; a lone `\r` or form feed ends a rule.
/// `\r\n` yields an extra empty line, which never matches a rule.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// DatabaseParser service for reading the output of `make -pq`
///
/// Only rule lines are of interest; variable assignments without a colon,
/// comments, recipe lines (tab-indented) and blank lines never match and are
/// dropped. Make prints the effective rule of a target last, so a later line
/// for the same target replaces an earlier one.
pub struct DatabaseParser;

impl DatabaseParser {
    pub fn parse(raw: &str) -> DependencyMap {
        let mut map = DependencyMap::new();

        for line in raw.split(is_line_boundary) {
            if let Some((target, prerequisites)) = Self::parse_rule_line(line) {
                map.insert(target, prerequisites);
            }
        }

        map
    }

    /// Splits a single rule line into its target and prerequisite names
    fn parse_rule_line(line: &str) -> Option<(String, Vec<String>)> {
        let captures = RULE_LINE.captures(line)?;
        let target = captures.get(1)?.as_str().to_string();
        let prerequisites = captures
            .get(2)
            .map(|list| {
                list.as_str()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Some((target, prerequisites))
    }
}
