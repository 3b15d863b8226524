//! Matching a compiled template against input and reading the arguments.
//!
//! A template is matched once (first match only). The result distinguishes
//! "no match" (`None`) from "matched with no placeholders" (an empty
//! [`Captures`]).
//!
//! Arguments can be read in two orders:
//! * by placeholder index ([`Captures::values`]), which is what
//!   [`extract_arguments`] returns: `"My name is {1} {0}."` against
//!   `"My name is Aleksey Nagovitsyn."` yields `["Nagovitsyn", "Aleksey"]`;
//! * in template text order ([`Captures::in_text_order`]), one entry per
//!   placeholder occurrence.
//!
//! When an index occurs more than once, the by-index view reports the last
//! occurrence.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::cache::TemplateCache;
use crate::pattern::{CompiledTemplate, ComparisonMode, MatchOptions};
use xt_core::errors::Result;

/// One captured placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument<'h> {
    index: usize,
    value: &'h str,
    span: Range<usize>,
}

impl<'h> Argument<'h> {
    /// Placeholder index (`n` in `{n}`).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Captured text.
    pub fn value(&self) -> &'h str {
        self.value
    }

    /// Byte range of the capture within the input.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// The arguments captured by a single template match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'h> {
    matched: &'h str,
    arguments: Vec<Argument<'h>>,
}

impl<'h> Captures<'h> {
    /// The whole matched text.
    pub fn matched(&self) -> &'h str {
        self.matched
    }

    /// Every placeholder occurrence, in template text order.
    pub fn in_text_order(&self) -> &[Argument<'h>] {
        &self.arguments
    }

    /// Captured value per distinct placeholder index, ascending.
    pub fn by_index(&self) -> BTreeMap<usize, &'h str> {
        self.arguments
            .iter()
            .map(|a| (a.index, a.value))
            .collect()
    }

    /// The value captured for placeholder `index`.
    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.arguments
            .iter()
            .rev()
            .find(|a| a.index == index)
            .map(|a| a.value)
    }

    /// Values ordered by placeholder index.
    pub fn values(&self) -> Vec<String> {
        self.by_index().into_values().map(str::to_string).collect()
    }

    /// Number of distinct placeholder indices captured.
    pub fn len(&self) -> usize {
        self.by_index().len()
    }

    /// `true` if the template had no placeholders.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl CompiledTemplate {
    /// Match against `input` once; `None` if the template does not match.
    pub fn captures<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        let caps = self.regex().captures(input)?;
        let arguments = self
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(k, &index)| {
                caps.get(k + 1).map(|m| Argument {
                    index,
                    value: m.as_str(),
                    span: m.range(),
                })
            })
            .collect();
        let matched = caps.get(0).map_or("", |m| m.as_str());
        Some(Captures { matched, arguments })
    }
}

/// Match `template` against `input` with explicit options.
///
/// Compiled templates are shared through [`TemplateCache::global`].
///
/// # Errors
/// Fails only when the template is malformed or the pattern cannot be
/// built; a template that does not match yields `Ok(None)`.
pub fn extract<'h>(
    input: &'h str,
    template: &str,
    mode: ComparisonMode,
    options: MatchOptions,
) -> Result<Option<Captures<'h>>> {
    let compiled = TemplateCache::global().get_or_compile(template, mode, options)?;
    Ok(compiled.captures(input))
}

/// Extract arguments by template, ordered by placeholder index.
///
/// Returns an empty vector when the template does not match.
///
/// # Example
/// ```
/// use xt_text::{extract_arguments, ComparisonMode};
///
/// let args = extract_arguments(
///     "My name is Aleksey Nagovitsyn. I'm from Russia.",
///     "My name is {1} {0}. I'm from {2}.",
///     ComparisonMode::Default,
/// )
/// .unwrap();
/// assert_eq!(args, ["Nagovitsyn", "Aleksey", "Russia"]);
/// ```
pub fn extract_arguments(input: &str, template: &str, mode: ComparisonMode) -> Result<Vec<String>> {
    extract_arguments_with(input, template, mode, MatchOptions::default())
}

/// [`extract_arguments`] with explicit regex flags.
pub fn extract_arguments_with(
    input: &str,
    template: &str,
    mode: ComparisonMode,
    options: MatchOptions,
) -> Result<Vec<String>> {
    Ok(extract(input, template, mode, options)?
        .map(|c| c.values())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "My name is Aleksey Nagovitsyn. I'm from Russia.";
    const TEMPLATE: &str = "My name is {1} {0}. I'm from {2}.";

    #[test]
    fn values_follow_placeholder_index() {
        let args = extract_arguments(INPUT, TEMPLATE, ComparisonMode::Default).unwrap();
        assert_eq!(args, vec!["Nagovitsyn", "Aleksey", "Russia"]);
    }

    #[test]
    fn text_order_is_available() {
        let caps = extract(INPUT, TEMPLATE, ComparisonMode::Whole, MatchOptions::default())
            .unwrap()
            .unwrap();
        let text: Vec<(usize, &str)> = caps
            .in_text_order()
            .iter()
            .map(|a| (a.index(), a.value()))
            .collect();
        assert_eq!(text, vec![(1, "Aleksey"), (0, "Nagovitsyn"), (2, "Russia")]);
        assert_eq!(caps.get(0), Some("Nagovitsyn"));
        assert_eq!(caps.matched(), INPUT);
        assert_eq!(caps.in_text_order()[0].span(), 11..18);
    }

    #[test]
    fn no_match_is_none() {
        let caps = extract("Hello", TEMPLATE, ComparisonMode::Default, MatchOptions::default())
            .unwrap();
        assert!(caps.is_none());
        let args = extract_arguments("Hello", TEMPLATE, ComparisonMode::Default).unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn empty_template_matches_without_arguments() {
        let caps = extract("anything", "", ComparisonMode::Default, MatchOptions::default())
            .unwrap()
            .unwrap();
        assert!(caps.is_empty());
        assert_eq!(caps.matched(), "");
    }

    #[test]
    fn consecutive_placeholders_are_deterministic() {
        // Lazy first group takes nothing; the trailing anchor forces the
        // second group to take the rest.
        let args = extract_arguments("abc", "{0}{1}", ComparisonMode::Default).unwrap();
        assert_eq!(args, vec!["", "abc"]);
        let args = extract_arguments("abc", "{0}{1}", ComparisonMode::FromStart).unwrap();
        assert_eq!(args, vec!["", ""]);
    }

    #[test]
    fn repeated_index_reports_last_occurrence() {
        let caps = extract("a-b-c", "{0}-{1}-{0}", ComparisonMode::Whole, MatchOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(caps.get(0), Some("c"));
        assert_eq!(caps.len(), 2);
        assert_eq!(caps.in_text_order().len(), 3);
    }

    #[test]
    fn case_insensitive_option() {
        let args = extract_arguments_with(
            "MY NAME IS Bob",
            "my name is {0}",
            ComparisonMode::Whole,
            MatchOptions::case_insensitive(),
        )
        .unwrap();
        assert_eq!(args, vec!["Bob"]);
    }
}
