use logos::Logos;
use std::fmt;

/// Aw the token kinds in a puzzle line like `[2,7,11,15], 9`
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Whitespace is free - nae enforced convention
pub enum TokenKind {
    /// Opens the number list
    #[token("[")]
    LeftBracket,

    /// Closes the number list
    #[token("]")]
    RightBracket,

    /// Separates numbers, an' the list fae the target
    #[token(",")]
    Comma,

    /// A signed 64-bit integer. The callback gies back None when the
    /// literal doesnae fit in an i64, so logos turns it intae an error
    /// token the lexer can report properly.
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Integer(i64),

    // End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Integer(n) => write!(f, "{}", n),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token wi' its position in the input line
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, column: usize) -> Self {
        Token {
            kind,
            lexeme,
            column,
        }
    }

    pub fn eof(column: usize) -> Self {
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at column {}", self.kind, self.column)
    }
}
