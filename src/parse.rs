use crate::{Polynomial, Term, Variable};
use thiserror::Error;

/// Parse a [`Polynomial`] from some text, e.g. `"3x^2 + 2x - 5"`.
///
/// This uses the default [`ParseOptions`], which silently skip anything that
/// isn't understood.
pub fn parse(src: &str) -> Result<Polynomial, ParseError> {
    parse_with(src, &ParseOptions::default())
}

/// Parse a [`Polynomial`] with explicit [`ParseOptions`].
pub fn parse_with(
    src: &str,
    options: &ParseOptions,
) -> Result<Polynomial, ParseError> {
    Parser::new(src, options).parse()
}

/// Settings controlling how text is turned into a [`Polynomial`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            mode: ParseMode::Strict,
        }
    }

    pub fn permissive() -> Self {
        ParseOptions {
            mode: ParseMode::Permissive,
        }
    }
}

/// How to deal with text the parser doesn't understand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseMode {
    /// Skip unrecognised characters, possibly ending up with a constant.
    Permissive,
    /// Fail with [`ParseError::MalformedExpression`].
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self { ParseMode::Permissive }
}

/// Possible errors that may occur while parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unable to parse \"{fragment}\": {reason}")]
    MalformedExpression {
        fragment: String,
        reason: &'static str,
    },
    #[error("The number \"{text}\" is too large")]
    IntegerOutOfRange { text: String },
}

/// A parser for sums of terms.
///
/// The grammar, after all whitespace has been removed:
///
/// ```text
/// polynomial   := term*            (each term starts at a "+" or "-")
///
/// term         := coefficient "*" variables
///               | coefficient? variables
///
/// coefficient  := ("+" | "-")? DIGIT+
/// variables    := (LETTER ("^" DIGIT+)?)*
/// ```
///
/// A missing coefficient is `1` (or `-1` if the term starts with a minus),
/// and variables within one term are multiplied together.
#[derive(Debug, Clone)]
pub(crate) struct Parser<'a> {
    src: String,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(src: &str, options: &'a ParseOptions) -> Self {
        Parser {
            src: src.chars().filter(|c| !c.is_whitespace()).collect(),
            options,
        }
    }

    fn strict(&self) -> bool { self.options.mode == ParseMode::Strict }

    pub(crate) fn parse(&self) -> Result<Polynomial, ParseError> {
        let fragments = split_terms(&self.src);

        if fragments.is_empty() && self.strict() {
            return Err(ParseError::MalformedExpression {
                fragment: self.src.clone(),
                reason: "expected at least one term",
            });
        }

        let mut terms = Vec::with_capacity(fragments.len());

        for fragment in fragments {
            let term = self.term(fragment)?;
            log::trace!("Parsed \"{}\" as {}", fragment, term);
            terms.push(term);
        }

        log::debug!("Parsed {} term(s) from \"{}\"", terms.len(), self.src);

        Ok(Polynomial::new(terms))
    }

    fn term(&self, fragment: &str) -> Result<Term, ParseError> {
        let (coefficient, variables) = match fragment.find('*') {
            Some(index) => {
                let coefficient = self.explicit_coefficient(
                    fragment,
                    &fragment[..index],
                )?;
                (Some(coefficient), &fragment[index + 1..])
            },
            None => {
                let mut cursor = Cursor::new(fragment);
                match cursor.chomp_signed_integer() {
                    Some(text) => (Some(parse_int(text)?), cursor.rest()),
                    None => (None, fragment),
                }
            },
        };

        let powers = match coefficient {
            Some(_) => self.variables(fragment, variables)?,
            // the sign belongs to the implicit coefficient
            None => self.variables(
                fragment,
                variables.trim_start_matches(|c: char| c == '+' || c == '-'),
            )?,
        };

        if coefficient.is_none() && powers.is_empty() && self.strict() {
            return Err(ParseError::MalformedExpression {
                fragment: fragment.to_string(),
                reason: "a term needs a coefficient or at least one variable",
            });
        }

        let coefficient = coefficient.unwrap_or_else(|| {
            if fragment.starts_with('-') {
                -1
            } else {
                1
            }
        });

        Ok(Term::new(powers, coefficient))
    }

    /// The coefficient written before a `*`.
    fn explicit_coefficient(
        &self,
        fragment: &str,
        text: &str,
    ) -> Result<i64, ParseError> {
        let mut cursor = Cursor::new(text);

        match cursor.chomp_signed_integer() {
            Some(digits) if cursor.rest().is_empty() || !self.strict() => {
                parse_int(digits)
            },
            _ if self.strict() => Err(ParseError::MalformedExpression {
                fragment: fragment.to_string(),
                reason: "expected an integer coefficient before the \"*\"",
            }),
            // whatever is there doesn't start with a number
            _ => Ok(0),
        }
    }

    fn variables(
        &self,
        fragment: &str,
        text: &str,
    ) -> Result<Vec<(Variable, u32)>, ParseError> {
        let mut cursor = Cursor::new(text);
        let mut powers = Vec::new();
        let mut ignored = String::new();

        while let Some(c) = cursor.advance() {
            if c.is_ascii_lowercase() {
                let power = if cursor.peek() == Some('^') {
                    self.exponent(fragment, &mut cursor, &mut ignored)?
                } else {
                    1
                };
                powers.push((Variable::named(c.to_string()), power));
            } else if c == '*' {
                // explicit multiplication between variables
            } else if self.strict() {
                return Err(ParseError::MalformedExpression {
                    fragment: fragment.to_string(),
                    reason: "variables must be single lowercase letters",
                });
            } else {
                ignored.push(c);
            }
        }

        if !ignored.is_empty() {
            log::warn!(
                "Ignoring unrecognised characters \"{}\" in \"{}\"",
                ignored,
                fragment
            );
        }

        Ok(powers)
    }

    /// Read the `^123` after a variable.
    fn exponent(
        &self,
        fragment: &str,
        cursor: &mut Cursor<'_>,
        ignored: &mut String,
    ) -> Result<u32, ParseError> {
        let mut lookahead = cursor.clone();
        lookahead.advance();

        match lookahead.take_while(|c| c.is_ascii_digit()) {
            Some(digits) => {
                *cursor = lookahead;
                digits.parse().map_err(|_| ParseError::IntegerOutOfRange {
                    text: digits.to_string(),
                })
            },
            None if self.strict() => Err(ParseError::MalformedExpression {
                fragment: fragment.to_string(),
                reason: "expected digits after the \"^\"",
            }),
            None => {
                // leave the caret behind and treat it as noise
                cursor.advance();
                ignored.push('^');
                Ok(1)
            },
        }
    }
}

/// Split a whitespace-free string into terms, starting a new term before
/// every `+` or `-`.
fn split_terms(src: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for (index, c) in src.char_indices() {
        if (c == '+' || c == '-') && index > start {
            fragments.push(&src[start..index]);
            start = index;
        }
    }

    if start < src.len() {
        fragments.push(&src[start..]);
    }

    fragments
}

fn parse_int(text: &str) -> Result<i64, ParseError> {
    text.parse().map_err(|_| ParseError::IntegerOutOfRange {
        text: text.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq)]
struct Cursor<'a> {
    src: &'a str,
    cursor: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self { Cursor { src, cursor: 0 } }

    fn rest(&self) -> &'a str { &self.src[self.cursor..] }

    fn peek(&self) -> Option<char> { self.rest().chars().next() }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    fn take_while<P>(&mut self, mut predicate: P) -> Option<&'a str>
    where
        P: FnMut(char) -> bool,
    {
        let start = self.cursor;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.advance();
        }

        let end = self.cursor;

        if start != end {
            Some(&self.src[start..end])
        } else {
            None
        }
    }

    /// Consume an optional sign followed by at least one digit, leaving the
    /// cursor untouched if there are no digits.
    fn chomp_signed_integer(&mut self) -> Option<&'a str> {
        let start = self.cursor;

        if let Some('+') | Some('-') = self.peek() {
            self.advance();
        }

        match self.take_while(|c| c.is_ascii_digit()) {
            Some(_) => Some(&self.src[start..self.cursor]),
            None => {
                self.cursor = start;
                None
            },
        }
    }
}

#[cfg(test)]
mod splitter_tests {
    use super::*;

    macro_rules! split_test {
        ($name:ident, $src:expr, $should_be:expr) => {
            #[test]
            fn $name() {
                let should_be: &[&str] = &$should_be;

                let got = split_terms($src);

                assert_eq!(got, should_be);
            }
        };
    }

    split_test!(empty_string, "", []);
    split_test!(single_term, "3x^2", ["3x^2"]);
    split_test!(leading_minus_stays_attached, "-3x", ["-3x"]);
    split_test!(plus_and_minus, "3x^2+2x-5", ["3x^2", "+2x", "-5"]);
    split_test!(double_sign, "1--2", ["1", "-", "-2"]);
    split_test!(trailing_sign, "x+", ["x", "+"]);
}
