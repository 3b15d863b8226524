//! Template tokenizer.
//!
//! A template is literal text with numbered placeholders: `"My name is {1}
//! {0}."`. `{{` and `}}` stand for literal braces. Any other use of a brace
//! is rejected with [`Error::InvalidTemplate`].

use std::collections::BTreeSet;

use xt_core::errors::{Error, Result};

/// One piece of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text matched verbatim.
    Literal(String),
    /// `{n}`: captures an argument with index `n`.
    Placeholder(usize),
}

/// A tokenized template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    /// Tokenize `source`.
    ///
    /// # Errors
    /// [`Error::InvalidTemplate`] for an unclosed `{`, a stray `}`, an empty
    /// `{}`, non-digit placeholder content, or an index that overflows
    /// `usize`.
    pub fn parse(source: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, n)| n == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, n)| n == '}').is_some() => literal.push('}'),
                '{' => {
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, d)) if d.is_ascii_digit() => digits.push(d),
                            Some((at, other)) => {
                                return Err(Error::invalid_template(
                                    at,
                                    format!("unexpected {other:?} inside placeholder"),
                                ))
                            }
                            None => {
                                return Err(Error::invalid_template(pos, "unclosed '{'"));
                            }
                        }
                    }
                    if digits.is_empty() {
                        return Err(Error::invalid_template(pos, "empty placeholder"));
                    }
                    let index = digits.parse::<usize>().map_err(|_| {
                        Error::invalid_template(pos, format!("placeholder index {digits} too large"))
                    })?;
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(Token::Placeholder(index));
                }
                '}' => return Err(Error::invalid_template(pos, "unmatched '}'")),
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tokens in template order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Distinct placeholder indices, ascending.
    pub fn placeholder_indices(&self) -> BTreeSet<usize> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                Token::Placeholder(i) => Some(*i),
                Token::Literal(_) => None,
            })
            .collect()
    }

    /// Whether the last non-whitespace content is a placeholder.
    pub fn ends_with_placeholder(&self) -> bool {
        self.tokens
            .iter()
            .rev()
            .find(|t| !matches!(t, Token::Literal(s) if s.trim().is_empty()))
            .is_some_and(|t| matches!(t, Token::Placeholder(_)))
    }
}

impl std::str::FromStr for Template {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Template::parse(s)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Token {
        Token::Literal(s.to_string())
    }

    #[test]
    fn splits_literals_and_placeholders() {
        let t = Template::parse("My name is {1} {0}. I'm from {2}.").unwrap();
        assert_eq!(
            t.tokens(),
            &[
                lit("My name is "),
                Token::Placeholder(1),
                lit(" "),
                Token::Placeholder(0),
                lit(". I'm from "),
                Token::Placeholder(2),
                lit("."),
            ]
        );
        assert_eq!(t.placeholder_indices().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn escaped_braces_are_literal() {
        let t = Template::parse("{{x}} = {0}").unwrap();
        assert_eq!(t.tokens(), &[lit("{x} = "), Token::Placeholder(0)]);
    }

    #[test]
    fn consecutive_placeholders() {
        let t = Template::parse("{0}{1}").unwrap();
        assert_eq!(t.tokens(), &[Token::Placeholder(0), Token::Placeholder(1)]);
    }

    #[test]
    fn empty_template() {
        let t = Template::parse("").unwrap();
        assert!(t.tokens().is_empty());
        assert!(!t.ends_with_placeholder());
    }

    #[test]
    fn trailing_placeholder_detection() {
        assert!(Template::parse("a {0}").unwrap().ends_with_placeholder());
        assert!(Template::parse("a {0}  ").unwrap().ends_with_placeholder());
        assert!(!Template::parse("a {0}.").unwrap().ends_with_placeholder());
        assert!(!Template::parse("a {{0}}").unwrap().ends_with_placeholder());
    }

    #[test]
    fn malformed_templates() {
        let err = |s: &str| Template::parse(s).unwrap_err();
        assert_eq!(err("a {0"), Error::invalid_template(2, "unclosed '{'"));
        assert_eq!(err("a }"), Error::invalid_template(2, "unmatched '}'"));
        assert_eq!(err("{}"), Error::invalid_template(0, "empty placeholder"));
        assert!(matches!(err("{name}"), Error::InvalidTemplate { position: 1, .. }));
        assert!(matches!(err("{-1}"), Error::InvalidTemplate { .. }));
        assert!(matches!(
            err("{99999999999999999999999}"),
            Error::InvalidTemplate { position: 0, .. }
        ));
    }
}
