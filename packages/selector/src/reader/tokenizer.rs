//! Selector tokenizer implementation
//!
//! Scans the selector character by character, tracking bracket depth and
//! escapes, and produces two immutable sequences: fragments and the
//! combinator scopes between them. The matcher consumes both by index.

use super::scope::Scope;
use crate::error::{SelectorResult, parse_error};

/// Character that escapes the following character
pub const ESCAPE_CHARACTER: char = '\\';

const SEPARATORS: [char; 3] = [' ', '>', '+'];

/// Tokenized selector, consumed incrementally by the matcher
#[derive(Debug, Clone)]
pub struct SelectorReader {
    selector: String,
    fragments: Vec<String>,
    combinators: Vec<Scope>,
    fragment_cursor: usize,
    combinator_cursor: usize,
}

impl SelectorReader {
    /// Tokenize selector text
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::Parse` when brackets are unbalanced, when a
    /// combinator has nothing after it (or nothing before it), or when
    /// separators combine into an unknown combinator such as `> +`.
    pub fn parse(selector: &str) -> SelectorResult<Self> {
        let normalized = collapse_whitespace(selector);
        let mut scanner = Scanner::new(selector);

        for letter in normalized.chars() {
            scanner.push(letter)?;
        }

        let (fragments, combinators) = scanner.finish()?;
        log::trace!(
            "tokenized selector '{}' into {} fragment(s) and {} combinator(s)",
            normalized,
            fragments.len(),
            combinators.len()
        );

        Ok(Self {
            selector: normalized,
            fragments,
            combinators,
            fragment_cursor: 0,
            combinator_cursor: 0,
        })
    }

    /// The whitespace-normalized selector text
    #[inline]
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// All fragments in order, regardless of how many were consumed
    #[inline]
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// All combinator scopes in order
    #[inline]
    #[must_use]
    pub fn combinators(&self) -> &[Scope] {
        &self.combinators
    }

    /// Returns the next fragment, if any remain
    pub fn next_fragment(&mut self) -> Option<&str> {
        let fragment = self.fragments.get(self.fragment_cursor)?;
        self.fragment_cursor += 1;
        Some(fragment.as_str())
    }

    /// Returns the next combinator scope, if any remain
    pub fn next_combinator(&mut self) -> Option<Scope> {
        let scope = self.combinators.get(self.combinator_cursor).copied()?;
        self.combinator_cursor += 1;
        Some(scope)
    }

    /// Returns true once every fragment and combinator has been consumed
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.fragment_cursor >= self.fragments.len()
            && self.combinator_cursor >= self.combinators.len()
    }
}

/// Collapses every whitespace run to a single space and trims both ends
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct Scanner<'s> {
    selector: &'s str,
    fragment: String,
    combinator: String,
    depth: usize,
    escaping: bool,
    fragments: Vec<String>,
    combinators: Vec<Scope>,
}

impl<'s> Scanner<'s> {
    fn new(selector: &'s str) -> Self {
        Self {
            selector,
            fragment: String::new(),
            combinator: String::new(),
            depth: 0,
            escaping: false,
            fragments: Vec::new(),
            combinators: Vec::new(),
        }
    }

    fn push(&mut self, letter: char) -> SelectorResult<()> {
        let escaped = self.escaping;
        self.escaping = !escaped && letter == ESCAPE_CHARACTER;

        if !escaped {
            match letter {
                '[' => self.depth += 1,
                ']' => {
                    self.depth = self.depth.checked_sub(1).ok_or_else(|| {
                        parse_error(self.selector, "unexpected ']' without a matching '['")
                    })?;
                }
                _ => {}
            }
        }

        if !escaped && self.depth == 0 && SEPARATORS.contains(&letter) {
            self.combinator.push(letter);
            self.flush_fragment();
        } else {
            self.fragment.push(letter);
            self.flush_combinator()?;
        }
        Ok(())
    }

    fn flush_fragment(&mut self) {
        let fragment = self.fragment.trim();
        if !fragment.is_empty() {
            self.fragments.push(fragment.to_string());
        }
        self.fragment.clear();
    }

    fn flush_combinator(&mut self) -> SelectorResult<()> {
        if self.combinator.is_empty() {
            return Ok(());
        }
        if self.fragments.is_empty() {
            return Err(parse_error(
                self.selector,
                "a selector cannot start with a combinator",
            ));
        }

        let text = self.combinator.trim();
        let scope = Scope::from_combinator(text).ok_or_else(|| {
            parse_error(self.selector, format!("'{text}' is not a valid combinator"))
        })?;
        self.combinators.push(scope);
        self.combinator.clear();
        Ok(())
    }

    fn finish(mut self) -> SelectorResult<(Vec<String>, Vec<Scope>)> {
        if self.depth == 0 {
            self.flush_fragment();
        }

        let leftover = format!("{}{}", self.combinator, self.fragment);
        if !leftover.trim().is_empty() {
            let reason = if self.depth > 0 {
                format!("unclosed '[' in '{}'", leftover.trim())
            } else {
                format!("dangling combinator '{}'", leftover.trim())
            };
            return Err(parse_error(self.selector, reason));
        }

        debug_assert!(
            self.fragments.is_empty() || self.fragments.len() == self.combinators.len() + 1
        );
        Ok((self.fragments, self.combinators))
    }
}
