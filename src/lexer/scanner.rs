use tracing::{debug, trace};

use super::rules::{LexRule, LexRules};
use super::token::Token;
use crate::error::LexError;

/// Longest-match tokenizer over a rule table
///
/// Holds nothing but its rules, so one tokenizer can scan any number of
/// inputs, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    rules: LexRules,
}

impl Tokenizer {
    /// Creates a tokenizer with the standard rule table
    pub fn new() -> Self {
        Tokenizer::default()
    }

    /// Creates a tokenizer with a custom rule table
    pub fn with_rules(rules: LexRules) -> Self {
        Tokenizer { rules }
    }

    /// The rule table in use
    pub fn rules(&self) -> &LexRules {
        &self.rules
    }

    /// Scans all tokens from `input`
    ///
    /// Whitespace is dropped and the end-of-input sentinel is not included.
    /// Fails on the first position no rule matches.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        loop {
            let rest = &input[cursor..];

            let Some((rule, len)) = self.longest_match(rest) else {
                let Some(found) = rest.chars().next() else {
                    break;
                };
                return Err(LexError::NoMatch {
                    position: cursor,
                    found,
                });
            };

            // Zero-length matches only happen at the end of input and end the scan
            if len == 0 {
                break;
            }

            match rule.build(&rest[..len], cursor)? {
                Token::EndOfInput => break,
                Token::Whitespace => {}
                token => {
                    trace!(position = cursor, %token, "token");
                    tokens.push(token);
                }
            }
            cursor += len;
        }

        debug!(bytes = input.len(), tokens = tokens.len(), "tokenized input");
        Ok(tokens)
    }

    /// The rule with the longest match at the start of `rest`
    ///
    /// Ties go to the rule declared first.
    fn longest_match(&self, rest: &str) -> Option<(&LexRule, usize)> {
        let mut best: Option<(&LexRule, usize)> = None;

        for rule in self.rules.iter() {
            let Some(len) = rule.match_len(rest) else {
                continue;
            };
            if len == 0 && !rest.is_empty() {
                continue;
            }
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((rule, len));
            }
        }

        best
    }
}
