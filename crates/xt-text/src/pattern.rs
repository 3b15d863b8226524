//! Template → regular expression compiler.
//!
//! Literal text is escaped; each placeholder becomes a lazy capture so that
//! arguments take the least text consistent with the surrounding literals.
//! The first occurrence of `{n}` becomes the named group `_{n+1}`; repeats
//! of the same index become unnamed groups. [`CompiledTemplate::slots`]
//! records which placeholder every capture group belongs to.

use regex::{Regex, RegexBuilder};

use crate::template::{Template, Token};
use xt_core::errors::{Error, Result};

/// Where the template has to line up with the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonMode {
    /// Anywhere in the input. Anchored at the end only when the template
    /// ends in a placeholder (ignoring trailing whitespace).
    #[default]
    Default,
    /// Must match at the start of the input.
    FromStart,
    /// Must match at the end of the input.
    AtTheEnd,
    /// Must match the whole input.
    Whole,
}

impl ComparisonMode {
    fn anchors_start(self) -> bool {
        matches!(self, ComparisonMode::FromStart | ComparisonMode::Whole)
    }

    fn anchors_end(self, template: &Template) -> bool {
        match self {
            ComparisonMode::AtTheEnd | ComparisonMode::Whole => true,
            ComparisonMode::Default => template.ends_with_placeholder(),
            ComparisonMode::FromStart => false,
        }
    }
}

/// Regex flags applied to the compiled pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatchOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// Placeholders may span newlines.
    pub dot_matches_new_line: bool,
    /// Verbose regex syntax. Literal whitespace in the template is escaped,
    /// so it still has to match.
    pub ignore_whitespace: bool,
}

impl MatchOptions {
    /// Case-insensitive matching, other flags off.
    pub fn case_insensitive() -> Self {
        Self {
            case_insensitive: true,
            ..Self::default()
        }
    }
}

/// A template compiled to a regular expression.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    template: Template,
    mode: ComparisonMode,
    options: MatchOptions,
    regex: Regex,
    slots: Vec<usize>,
}

impl CompiledTemplate {
    /// Tokenize and compile `template`.
    pub fn new(template: &str, mode: ComparisonMode, options: MatchOptions) -> Result<Self> {
        Self::from_template(Template::parse(template)?, mode, options)
    }

    /// Compile an already tokenized template.
    pub fn from_template(
        template: Template,
        mode: ComparisonMode,
        options: MatchOptions,
    ) -> Result<Self> {
        let (pattern, slots) = build_pattern(&template, mode, options);
        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .ignore_whitespace(options.ignore_whitespace)
            .build()
            .map_err(|e| Error::Pattern(e.to_string()))?;
        tracing::debug!(
            template = template.source(),
            %pattern,
            groups = slots.len(),
            "compiled template"
        );
        Ok(Self {
            template,
            mode,
            options,
            regex,
            slots,
        })
    }

    /// The derived regular expression source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The tokenized template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Anchoring mode.
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Regex flags.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Placeholder index of each capture group; `slots()[k]` belongs to
    /// group `k + 1`.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }
}

/// Escape literal text. In verbose mode whitespace is written as `\x{..}`
/// since the regex parser would otherwise drop it.
fn escape_literal(text: &str, options: MatchOptions) -> String {
    let escaped = regex::escape(text);
    if !options.ignore_whitespace {
        return escaped;
    }
    escaped
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                format!("\\x{{{:X}}}", u32::from(c))
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Build the pattern source and the group → placeholder table.
fn build_pattern(
    template: &Template,
    mode: ComparisonMode,
    options: MatchOptions,
) -> (String, Vec<usize>) {
    let mut pattern = String::new();
    let mut slots: Vec<usize> = Vec::new();

    if mode.anchors_start() {
        pattern.push('^');
    }
    for token in template.tokens() {
        match token {
            Token::Literal(text) => pattern.push_str(&escape_literal(text, options)),
            Token::Placeholder(index) if slots.contains(index) => {
                pattern.push_str("(.*?)");
                slots.push(*index);
            }
            Token::Placeholder(index) => {
                pattern.push_str(&format!("(?P<_{}>.*?)", index + 1));
                slots.push(*index);
            }
        }
    }
    if mode.anchors_end(template) {
        pattern.push('$');
    }
    (pattern, slots)
}
