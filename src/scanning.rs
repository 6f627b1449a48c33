use crate::error_handling::LexError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number(i64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;
        match self {
            Number(value) => write!(f, "{value}"),
            Plus => f.write_str("+"),
            Minus => f.write_str("-"),
            Star => f.write_str("*"),
            Slash => f.write_str("/"),
            LParen => f.write_str("("),
            RParen => f.write_str(")"),
        }
    }
}

/// A token and the character column it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

impl Token {
    fn new(kind: TokenKind, offset: usize) -> Self {
        Self{kind, offset}
    }
}

fn single(character: char) -> Option<TokenKind> {
    use TokenKind::*;
    match character {
        '+' => Some(Plus),
        '-' => Some(Minus),
        '*' => Some(Star),
        '/' => Some(Slash),
        '(' => Some(LParen),
        ')' => Some(RParen),
        _ => None,
    }
}

pub struct StringScanner {
    chars: Vec<char>,
    index: usize,
}

impl StringScanner {
    pub fn new(string: &str) -> Self {
        Self{chars: string.chars().collect(), index: 0}
    }

    fn count_while<P: Fn(&char) -> bool>(&self, predicate: P) -> usize {
        self.chars[self.index..].iter().take_while(|c| predicate(*c)).count()
    }

    fn skip_whitespace(&mut self) {
        self.index += self.count_while(|c| c.is_whitespace());
    }

    fn get_number(&mut self) -> Result<Token, LexError> {
        let offset = self.index;
        let count = self.count_while(char::is_ascii_digit);
        let literal: String = self.chars[offset..(offset + count)].iter().collect();
        self.index += count;

        literal.parse()
            .map(|value| Token::new(TokenKind::Number(value), offset))
            .map_err(|_| LexError::InvalidNumber{literal, offset})
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace();
        let offset = self.index;
        let character = *self.chars.get(offset)?;

        if character.is_ascii_digit() {
            Some(self.get_number())
        } else if let Some(kind) = single(character) {
            self.index += 1;
            Some(Ok(Token::new(kind, offset)))
        } else {
            self.index = self.chars.len();
            Some(Err(LexError::InvalidCharacter{character, offset}))
        }
    }
}

impl Iterator for StringScanner {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    StringScanner::new(line).collect()
}

/// Read-only cursor over a finished token sequence.
pub struct TokenScanner {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenScanner {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self{tokens, index: 0}
    }

    pub fn get_current(&self) -> Option<Token> {
        self.tokens.get(self.index).copied()
    }

    pub fn advance(&mut self) {
        if self.is_valid() {
            self.index += 1;
        }
    }

    pub fn is_valid(&self) -> bool {
        self.index < self.tokens.len()
    }
}
