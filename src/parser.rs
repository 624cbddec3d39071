use crate::error::{TwasumError, TwasumResult};
use crate::lexer;
use crate::puzzle::Puzzle;
use crate::token::{Token, TokenKind};

/// The parser - turns tokens intae a puzzle
///
/// Grammar: `'[' (integer (',' integer)*)? ']' ',' integer`
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parse the tokens intae a puzzle
    pub fn parse(&mut self) -> TwasumResult<Puzzle> {
        if self.is_at_end() {
            return Err(TwasumError::EmptyInput);
        }

        self.expect(&TokenKind::LeftBracket, "[")?;

        let mut nums = Vec::new();
        if !self.check(&TokenKind::RightBracket) {
            loop {
                nums.push(self.expect_integer("a number in the list")?);

                if !self.match_token(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightBracket, "]")?;
        self.expect(&TokenKind::Comma, "',' separator afore the target")?;

        if self.is_at_end() {
            return Err(TwasumError::MissingTarget {
                column: self.peek().column,
            });
        }
        let target = self.expect_integer("the target number")?;

        // Ane puzzle per line - onything left over is a mistake
        if !self.is_at_end() {
            return Err(TwasumError::UnexpectedToken {
                expected: "end of input".to_string(),
                found: self.peek().kind.to_string(),
                column: self.peek().column,
            });
        }

        Ok(Puzzle::new(nums, target))
    }

    // === Helper methods ===

    fn peek(&self) -> &Token {
        self.tokens
            .get(self.current)
            .unwrap_or(&self.tokens[self.tokens.len() - 1])
    }

    fn previous(&self) -> Option<&Token> {
        if self.current > 0 {
            self.tokens.get(self.current - 1)
        } else {
            None
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().unwrap()
    }

    fn check(&self, kind: &TokenKind) -> bool {
        if self.is_at_end() {
            false
        } else {
            std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
        }
    }

    fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &str) -> TwasumResult<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(TwasumError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.peek().kind.to_string(),
                column: self.peek().column,
            })
        }
    }

    fn expect_integer(&mut self, context: &str) -> TwasumResult<i64> {
        let token = self.peek().clone();
        if let TokenKind::Integer(n) = token.kind {
            self.advance();
            Ok(n)
        } else {
            Err(TwasumError::UnexpectedToken {
                expected: context.to_string(),
                found: token.kind.to_string(),
                column: token.column,
            })
        }
    }
}

/// Parse a puzzle line like `[2,7,11,15], 9`
pub fn parse(line: &str) -> TwasumResult<Puzzle> {
    let tokens = lexer::lex(line)?;
    let mut parser = Parser::new(tokens);
    parser.parse()
}
