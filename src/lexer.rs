use logos::Logos;

use crate::error::{TwasumError, TwasumResult};
use crate::token::{Token, TokenKind};

/// The lexer - turns a puzzle line intae tokens
pub struct Lexer<'source> {
    source: &'source str,
    logos: logos::Lexer<'source, TokenKind>,
    column: usize,
    cursor: usize,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Lexer {
            source,
            logos: TokenKind::lexer(source),
            column: 1,
            cursor: 0,
        }
    }

    fn advance_to(&mut self, pos: usize) {
        // Columns count chars, no' bytes
        self.column += self.source[self.cursor..pos].chars().count();
        self.cursor = pos;
    }

    /// Tokenize the whole line intae a vector
    pub fn tokenize(&mut self) -> TwasumResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(result) = self.logos.next() {
            let span = self.logos.span();
            self.advance_to(span.start);
            let token_column = self.column;
            let lexeme = self.logos.slice().to_string();

            match result {
                Ok(kind) => {
                    tokens.push(Token::new(kind, lexeme, token_column));
                }
                Err(_) => {
                    // A digit-shaped lexeme that failed is an i64 overflow;
                    // anything else is a character we dinnae ken at aw.
                    if looks_like_integer(&lexeme) {
                        return Err(TwasumError::NumberTooMuckle {
                            value: lexeme,
                            column: token_column,
                        });
                    }
                    return Err(TwasumError::UnkentToken {
                        lexeme,
                        column: token_column,
                    });
                }
            }

            self.advance_to(span.end);
        }

        // Add EOF token
        tokens.push(Token::eof(self.column));

        Ok(tokens)
    }
}

fn looks_like_integer(lexeme: &str) -> bool {
    let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Convenience function tae lex a line
pub fn lex(source: &str) -> TwasumResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()
}
