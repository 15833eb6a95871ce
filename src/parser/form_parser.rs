use tracing::{debug, trace};

use super::ast::{Atom, BinaryOp, CollectionKind, Expression};
use crate::error::ParseError;
use crate::lexer::Token;

/// Outcome of a matcher: the unconsumed suffix and the built node, or `None`
/// when the rule does not apply and the caller should try the next alternative
pub type Match<'t> = Option<(&'t [Token], Expression)>;

/// A matcher either declines, matches, or fails after committing to a production
pub type MatchResult<'t> = Result<Match<'t>, ParseError>;

/// Parser limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting allowed below a top-level form
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 256 }
    }
}

/// Recursive-descent parser over a token slice
///
/// Every matcher takes the suffix it should start at and hands back the
/// suffix it left over, so no position is ever stored or mutated.
#[derive(Debug, Clone, Copy)]
pub struct FormParser<'t> {
    tokens: &'t [Token],
    config: ParserConfig,
}

impl<'t> FormParser<'t> {
    /// Creates a parser with default limits
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Creates a parser with explicit limits
    pub fn with_config(tokens: &'t [Token], config: ParserConfig) -> Self {
        FormParser { tokens, config }
    }

    /// Parses every top-level form
    ///
    /// Fails if a remaining token cannot start a form, or if a form that was
    /// started cannot be completed. There is no partial result.
    pub fn parse_program(&self) -> Result<Vec<Expression>, ParseError> {
        let mut forms = Vec::new();
        let mut rest = self.tokens;

        while let Some(first) = rest.first() {
            let Some((after, form)) = self.match_form(rest, 0)? else {
                return Err(ParseError::NoMatchingProduction {
                    index: self.index_of(rest),
                    found: first.to_string(),
                });
            };
            forms.push(form);
            rest = after;
        }

        debug!(tokens = self.tokens.len(), forms = forms.len(), "parsed program");
        Ok(forms)
    }

    /// Form → Atom | Collection
    ///
    /// Alternatives are tried in a fixed order (literals, `not`, `if`, binary
    /// operators, then collections) and the first match wins.
    pub fn match_form(&self, rest: &'t [Token], depth: usize) -> MatchResult<'t> {
        if depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
            });
        }

        if let Some(found) = Self::match_literal(rest) {
            return Ok(Some(found));
        }
        if let Some(found) = self.match_not(rest, depth)? {
            return Ok(Some(found));
        }
        if let Some(found) = self.match_if(rest, depth)? {
            return Ok(Some(found));
        }
        if let Some(found) = self.match_binary(rest, depth)? {
            return Ok(Some(found));
        }
        for kind in CollectionKind::ALL {
            if let Some(found) = self.match_collection(rest, kind, depth)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }

    /// Boolean, number or identifier
    pub fn match_literal(rest: &'t [Token]) -> Match<'t> {
        let (head, tail) = rest.split_first()?;
        let atom = match head {
            Token::Boolean(b) => Atom::Boolean(*b),
            Token::Number(n) => Atom::Number(*n),
            Token::Identifier(name) => Atom::Identifier(name.clone()),
            _ => return None,
        };
        Some((tail, Expression::Atom(atom)))
    }

    /// 'not' Form
    pub fn match_not(&self, rest: &'t [Token], depth: usize) -> MatchResult<'t> {
        let Some((head @ Token::Not, tail)) = rest.split_first() else {
            return Ok(None);
        };
        trace!(index = self.index_of(rest), "not form");

        let (tail, operand) = self.expect_operand(tail, head, 1, 0, depth)?;
        Ok(Some((tail, Expression::not(operand))))
    }

    /// 'if' Form Form Form
    pub fn match_if(&self, rest: &'t [Token], depth: usize) -> MatchResult<'t> {
        let Some((head @ Token::If, tail)) = rest.split_first() else {
            return Ok(None);
        };
        trace!(index = self.index_of(rest), "if form");

        let (tail, guard) = self.expect_operand(tail, head, 3, 0, depth)?;
        let (tail, then_branch) = self.expect_operand(tail, head, 3, 1, depth)?;
        let (tail, else_branch) = self.expect_operand(tail, head, 3, 2, depth)?;
        Ok(Some((
            tail,
            Expression::if_then_else(guard, then_branch, else_branch),
        )))
    }

    /// BinaryOp Form Form
    pub fn match_binary(&self, rest: &'t [Token], depth: usize) -> MatchResult<'t> {
        let Some((head, tail)) = rest.split_first() else {
            return Ok(None);
        };
        let Some(op) = BinaryOp::from_token(head) else {
            return Ok(None);
        };
        trace!(index = self.index_of(rest), op = op.symbol(), "binary form");

        let (tail, left) = self.expect_operand(tail, head, 2, 0, depth)?;
        let (tail, right) = self.expect_operand(tail, head, 2, 1, depth)?;
        Ok(Some((tail, Expression::binary(op, left, right))))
    }

    /// open Form* close, for any of the three delimiter pairs
    ///
    /// Once the opener is consumed the collection must close with its own
    /// delimiter; anything else is an error, not a decline.
    pub fn match_collection(
        &self,
        rest: &'t [Token],
        kind: CollectionKind,
        depth: usize,
    ) -> MatchResult<'t> {
        let Some((head, mut tail)) = rest.split_first() else {
            return Ok(None);
        };
        if *head != kind.open() {
            return Ok(None);
        }
        trace!(index = self.index_of(rest), open = %kind.open_char(), "collection");

        let close = kind.close();
        let mut elements = Vec::new();

        loop {
            let Some((next, after)) = tail.split_first() else {
                return Err(self.unbalanced(tail, kind, "end of input".to_string()));
            };
            if *next == close {
                return Ok(Some((after, kind.build(elements))));
            }

            match self.match_form(tail, depth + 1)? {
                Some((after, element)) => {
                    elements.push(element);
                    tail = after;
                }
                None => return Err(self.unbalanced(tail, kind, next.to_string())),
            }
        }
    }

    /// Operand `found` (zero-based) of a form that needs `expected` operands
    fn expect_operand(
        &self,
        rest: &'t [Token],
        head: &Token,
        expected: usize,
        found: usize,
        depth: usize,
    ) -> Result<(&'t [Token], Expression), ParseError> {
        self.match_form(rest, depth + 1)?
            .ok_or_else(|| ParseError::IncompleteForm {
                index: self.index_of(rest),
                form: head.lexeme(),
                expected,
                found,
            })
    }

    fn unbalanced(&self, rest: &[Token], kind: CollectionKind, found: String) -> ParseError {
        ParseError::UnbalancedOrInvalidForm {
            index: self.index_of(rest),
            open: kind.open_char(),
            found,
        }
    }

    /// Offset of a suffix within the full token sequence
    ///
    /// A slice that is not a suffix of this parser's tokens is reported
    /// relative to itself.
    fn index_of(&self, rest: &[Token]) -> usize {
        let whole = self.tokens.as_ptr_range();
        let part = rest.as_ptr_range();
        if part.end == whole.end && part.start >= whole.start {
            self.tokens.len() - rest.len()
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Vec<Expression>, ParseError> {
        let tokens = tokenize(source).unwrap();
        FormParser::new(&tokens).parse_program()
    }

    #[test]
    fn test_literal_leaves_suffix() {
        let tokens = vec![Token::Number(7), Token::RightParen, Token::Number(8)];
        let (rest, expr) = FormParser::match_literal(&tokens).unwrap();
        assert_eq!(expr, Expression::number(7));
        assert_eq!(rest, &tokens[1..]);
    }

    #[test]
    fn test_literal_declines_operator() {
        assert!(FormParser::match_literal(&[Token::Add]).is_none());
        assert!(FormParser::match_literal(&[]).is_none());
    }

    #[test]
    fn test_binary_in_isolation() {
        let tokens = vec![
            Token::Add,
            Token::Number(1),
            Token::Number(2),
            Token::Identifier("tail".into()),
        ];
        let parser = FormParser::new(&tokens);
        let (rest, expr) = parser.match_binary(&tokens, 0).unwrap().unwrap();

        assert_eq!(
            expr,
            Expression::binary(BinaryOp::Plus, Expression::number(1), Expression::number(2))
        );
        assert_eq!(rest, &[Token::Identifier("tail".into())]);
    }

    #[test]
    fn test_matchers_decline_foreign_heads() {
        let tokens = vec![Token::Number(1)];
        let parser = FormParser::new(&tokens);
        assert_eq!(parser.match_not(&tokens, 0), Ok(None));
        assert_eq!(parser.match_if(&tokens, 0), Ok(None));
        assert_eq!(parser.match_binary(&tokens, 0), Ok(None));
        assert_eq!(
            parser.match_collection(&tokens, CollectionKind::Map, 0),
            Ok(None)
        );
    }

    #[test]
    fn test_collection_keeps_trailing_tokens() {
        let tokens = tokenize("[] 5").unwrap();
        let parser = FormParser::new(&tokens);
        let (rest, expr) = parser
            .match_collection(&tokens, CollectionKind::Vector, 0)
            .unwrap()
            .unwrap();
        assert_eq!(expr, Expression::vector(vec![]));
        assert_eq!(rest, &[Token::Number(5)]);
    }

    #[test]
    fn test_not_and_def() {
        assert_eq!(
            parse_str("(def x (not false))").unwrap(),
            vec![Expression::list(vec![Expression::binary(
                BinaryOp::Def,
                Expression::identifier("x"),
                Expression::not(Expression::boolean(false)),
            )])]
        );
    }

    #[test]
    fn test_bare_operator_form_at_top_level() {
        assert_eq!(
            parse_str("* 3 4 x").unwrap(),
            vec![
                Expression::binary(BinaryOp::Multiply, Expression::number(3), Expression::number(4)),
                Expression::identifier("x"),
            ]
        );
    }

    #[test]
    fn test_missing_else_branch() {
        assert_eq!(
            parse_str("(if true 1)"),
            Err(ParseError::IncompleteForm {
                index: 4,
                form: "if".to_string(),
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_operator_at_end_of_input() {
        assert_eq!(
            parse_str("- 1"),
            Err(ParseError::IncompleteForm {
                index: 2,
                form: "-".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_mismatched_closer() {
        assert_eq!(
            parse_str("[1 2}"),
            Err(ParseError::UnbalancedOrInvalidForm {
                index: 3,
                open: '[',
                found: "`}`".to_string(),
            })
        );
    }

    #[test]
    fn test_stray_closer_at_top_level() {
        assert_eq!(
            parse_str("1 )"),
            Err(ParseError::NoMatchingProduction {
                index: 1,
                found: "`)`".to_string(),
            })
        );
    }

    #[test]
    fn test_sentinel_tokens_do_not_parse() {
        let tokens = vec![Token::EndOfInput];
        assert!(matches!(
            FormParser::new(&tokens).parse_program(),
            Err(ParseError::NoMatchingProduction { index: 0, .. })
        ));
    }

    #[test]
    fn test_matchers_accept_foreign_slices() {
        let parser = FormParser::new(&[]);

        let unbalanced = [Token::LeftParen, Token::RightBracket];
        assert!(matches!(
            parser.match_form(&unbalanced, 0),
            Err(ParseError::UnbalancedOrInvalidForm { open: '(', index: 0, .. })
        ));

        let short_if = [Token::If, Token::Number(1)];
        assert!(matches!(
            parser.match_if(&short_if, 0),
            Err(ParseError::IncompleteForm { expected: 3, found: 1, index: 0, .. })
        ));

        let list = [Token::LeftParen, Token::Number(1), Token::RightParen];
        assert_eq!(
            parser.match_form(&list, 0),
            Ok(Some((&[][..], Expression::list(vec![Expression::number(1)]))))
        );
    }

    #[test]
    fn test_depth_limit() {
        let tokens = tokenize("((1))").unwrap();
        let shallow = ParserConfig { max_depth: 1 };
        assert_eq!(
            FormParser::with_config(&tokens, shallow).parse_program(),
            Err(ParseError::NestingTooDeep { limit: 1 })
        );

        let enough = ParserConfig { max_depth: 2 };
        assert!(FormParser::with_config(&tokens, enough)
            .parse_program()
            .is_ok());
    }
}
