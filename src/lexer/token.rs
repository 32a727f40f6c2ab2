use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A position within the source text, i.e. 1-based line and column.
pub type Position = (usize, usize);

/// Numeric payload of a [`Token::Num`]. A plain digit run scans as an
/// integer, a literal containing a period as floating point.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Number {
    Integer(i64),
    FloatingPoint(f64),
}

#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Token {
    Id { value: String, position: Position },
    Num { value: Number, position: Position },
    ProcKeyword { position: Position },
    RecordKeyword { position: Position },
    VarKeyword { position: Position },
    ReturnKeyword { position: Position },
    EndKeyword { position: Position },
    Comma { position: Position },
    Period { position: Position },
    Colon { position: Position },
    Assign { position: Position },
    LessThan { position: Position },
    GreaterThan { position: Position },
    Plus { position: Position },
    Minus { position: Position },
    Times { position: Position },
    Slash { position: Position },
    LParen { position: Position },
    RParen { position: Position },
    LBracket { position: Position },
    RBracket { position: Position },
    LBrace { position: Position },
    RBrace { position: Position },
    Eof { position: Position },
}

impl Token {
    pub fn position(&self) -> Position {
        match *self {
            Token::Id { position, .. }
            | Token::Num { position, .. }
            | Token::ProcKeyword { position }
            | Token::RecordKeyword { position }
            | Token::VarKeyword { position }
            | Token::ReturnKeyword { position }
            | Token::EndKeyword { position }
            | Token::Comma { position }
            | Token::Period { position }
            | Token::Colon { position }
            | Token::Assign { position }
            | Token::LessThan { position }
            | Token::GreaterThan { position }
            | Token::Plus { position }
            | Token::Minus { position }
            | Token::Times { position }
            | Token::Slash { position }
            | Token::LParen { position }
            | Token::RParen { position }
            | Token::LBracket { position }
            | Token::RBracket { position }
            | Token::LBrace { position }
            | Token::RBrace { position }
            | Token::Eof { position } => position,
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id { value, .. } => f.debug_struct("Id").field("value", value).finish(),
            Self::Num { value, .. } => f.debug_struct("Num").field("value", value).finish(),
            Self::ProcKeyword { .. } => f.debug_struct("ProcKeyword").finish(),
            Self::RecordKeyword { .. } => f.debug_struct("RecordKeyword").finish(),
            Self::VarKeyword { .. } => f.debug_struct("VarKeyword").finish(),
            Self::ReturnKeyword { .. } => f.debug_struct("ReturnKeyword").finish(),
            Self::EndKeyword { .. } => f.debug_struct("EndKeyword").finish(),
            Self::Comma { .. } => f.debug_struct("Comma").finish(),
            Self::Period { .. } => f.debug_struct("Period").finish(),
            Self::Colon { .. } => f.debug_struct("Colon").finish(),
            Self::Assign { .. } => f.debug_struct("Assign").finish(),
            Self::LessThan { .. } => f.debug_struct("LessThan").finish(),
            Self::GreaterThan { .. } => f.debug_struct("GreaterThan").finish(),
            Self::Plus { .. } => f.debug_struct("Plus").finish(),
            Self::Minus { .. } => f.debug_struct("Minus").finish(),
            Self::Times { .. } => f.debug_struct("Times").finish(),
            Self::Slash { .. } => f.debug_struct("Slash").finish(),
            Self::LParen { .. } => f.debug_struct("LParen").finish(),
            Self::RParen { .. } => f.debug_struct("RParen").finish(),
            Self::LBracket { .. } => f.debug_struct("LBracket").finish(),
            Self::RBracket { .. } => f.debug_struct("RBracket").finish(),
            Self::LBrace { .. } => f.debug_struct("LBrace").finish(),
            Self::RBrace { .. } => f.debug_struct("RBrace").finish(),
            Self::Eof { .. } => f.debug_struct("Eof").finish(),
        }
    }
}

/// Payload-free token classes. Used as values of the keyword table and by
/// the parser for expectation checks against concrete tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    ProcKeyword,
    RecordKeyword,
    VarKeyword,
    ReturnKeyword,
    EndKeyword,
    Comma,
    Period,
    Colon,
    Assign,
    LessThan,
    GreaterThan,
    Plus,
    Minus,
    Times,
    Slash,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Eof,
}

impl Terminal {
    pub fn to_token(self, position: Position) -> Token {
        match self {
            Terminal::ProcKeyword => Token::ProcKeyword { position },
            Terminal::RecordKeyword => Token::RecordKeyword { position },
            Terminal::VarKeyword => Token::VarKeyword { position },
            Terminal::ReturnKeyword => Token::ReturnKeyword { position },
            Terminal::EndKeyword => Token::EndKeyword { position },
            Terminal::Comma => Token::Comma { position },
            Terminal::Period => Token::Period { position },
            Terminal::Colon => Token::Colon { position },
            Terminal::Assign => Token::Assign { position },
            Terminal::LessThan => Token::LessThan { position },
            Terminal::GreaterThan => Token::GreaterThan { position },
            Terminal::Plus => Token::Plus { position },
            Terminal::Minus => Token::Minus { position },
            Terminal::Times => Token::Times { position },
            Terminal::Slash => Token::Slash { position },
            Terminal::LParen => Token::LParen { position },
            Terminal::RParen => Token::RParen { position },
            Terminal::LBracket => Token::LBracket { position },
            Terminal::RBracket => Token::RBracket { position },
            Terminal::LBrace => Token::LBrace { position },
            Terminal::RBrace => Token::RBrace { position },
            Terminal::Eof => Token::Eof { position },
        }
    }
}

impl PartialEq<Token> for Terminal {
    fn eq(&self, other: &Token) -> bool {
        matches!(
            (self, other),
            (Terminal::ProcKeyword, Token::ProcKeyword { .. })
                | (Terminal::RecordKeyword, Token::RecordKeyword { .. })
                | (Terminal::VarKeyword, Token::VarKeyword { .. })
                | (Terminal::ReturnKeyword, Token::ReturnKeyword { .. })
                | (Terminal::EndKeyword, Token::EndKeyword { .. })
                | (Terminal::Comma, Token::Comma { .. })
                | (Terminal::Period, Token::Period { .. })
                | (Terminal::Colon, Token::Colon { .. })
                | (Terminal::Assign, Token::Assign { .. })
                | (Terminal::LessThan, Token::LessThan { .. })
                | (Terminal::GreaterThan, Token::GreaterThan { .. })
                | (Terminal::Plus, Token::Plus { .. })
                | (Terminal::Minus, Token::Minus { .. })
                | (Terminal::Times, Token::Times { .. })
                | (Terminal::Slash, Token::Slash { .. })
                | (Terminal::LParen, Token::LParen { .. })
                | (Terminal::RParen, Token::RParen { .. })
                | (Terminal::LBracket, Token::LBracket { .. })
                | (Terminal::RBracket, Token::RBracket { .. })
                | (Terminal::LBrace, Token::LBrace { .. })
                | (Terminal::RBrace, Token::RBrace { .. })
                | (Terminal::Eof, Token::Eof { .. })
        )
    }
}

macro_rules! keyword {
    ($map:ident, $name:ident, $value:expr) => {
        $map.insert($value, Terminal::$name);
    };
}

pub(super) static KEYWORDS: Lazy<HashMap<&'static str, Terminal>> = Lazy::new(|| {
    let mut m = HashMap::new();

    keyword!(m, ProcKeyword, "proc");
    keyword!(m, RecordKeyword, "record");
    keyword!(m, VarKeyword, "var");
    keyword!(m, ReturnKeyword, "return");
    keyword!(m, EndKeyword, "end");

    m
});
