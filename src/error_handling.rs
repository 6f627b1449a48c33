use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("invalid character, '{character}', encountered")]
    InvalidCharacter { character: char, offset: usize },

    #[error("'{literal}' is not a valid number")]
    InvalidNumber { literal: String, offset: usize },
}

/// Grammar failures. An `offset` of `None` points past the last token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a number or '(', found {found}")]
    ExpectedOperand { found: String, offset: Option<usize> },

    #[error("could not find ')' to close this '('")]
    UnmatchedParen { offset: usize },

    #[error("did not expect '{token}'")]
    UnexpectedTrailingToken { token: String, offset: usize },

    #[error("expression is nested too deeply")]
    TooDeep { offset: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("the result of '{operator}' does not fit in a 64-bit integer")]
    Overflow { operator: char },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Character column the error points at, with `end` used for errors
    /// raised at end of input. Evaluation errors have no column.
    pub fn column(&self, end: usize) -> Option<usize> {
        match self {
            Self::Lex(LexError::InvalidCharacter { offset, .. })
            | Self::Lex(LexError::InvalidNumber { offset, .. })
            | Self::Parse(ParseError::UnmatchedParen { offset })
            | Self::Parse(ParseError::UnexpectedTrailingToken { offset, .. })
            | Self::Parse(ParseError::TooDeep { offset }) => Some(*offset),
            Self::Parse(ParseError::ExpectedOperand { offset, .. }) => Some(offset.unwrap_or(end)),
            Self::Eval(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
