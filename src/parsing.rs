use crate::error_handling::{EvalError, ParseError};
use crate::scanning::*;
use tracing::trace;

/// Deepest parenthesis nesting the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Tallest tree the parser will build. Evaluating and rendering recurse once
/// per level.
pub const MAX_HEIGHT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BinaryOperator {
    /// Applies the operator with checked `i64` arithmetic. Division
    /// truncates toward zero.
    pub fn call(&self, left: i64, right: i64) -> Result<i64, EvalError> {
        use BinaryOperator::*;

        let result = match self {
            Addition => left.checked_add(right),
            Subtraction => left.checked_sub(right),
            Multiplication => left.checked_mul(right),
            Division => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };
        result.ok_or(EvalError::Overflow{operator: self.symbol()})
    }

    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            Addition | Subtraction => 1,
            Multiplication | Division => 2,
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            Addition => '+',
            Subtraction => '-',
            Multiplication => '*',
            Division => '/',
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidOperator;

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = InvalidOperator;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        use BinaryOperator::*;
        match kind {
            TokenKind::Plus => Ok(Addition),
            TokenKind::Minus => Ok(Subtraction),
            TokenKind::Star => Ok(Multiplication),
            TokenKind::Slash => Ok(Division),
            _ => Err(InvalidOperator),
        }
    }
}

/// Parsed expression. Each node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i64),
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Self::BinaryOp{operator, left: Box::new(left), right: Box::new(right)}
    }
}

// Subtree paired with its height.
type Branch = (Expr, usize);

struct Parser {
    source: TokenScanner,
    nesting: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self{source: TokenScanner::new(tokens), nesting: 0}
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Branch, ParseError> {
        self.fold(1, Self::term)
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<Branch, ParseError> {
        self.fold(2, Self::factor)
    }

    fn operator_at(&self, precedence: i32) -> Option<(BinaryOperator, usize)> {
        let token = self.source.get_current()?;
        BinaryOperator::try_from(token.kind).ok()
            .filter(|operator| operator.precedence() == precedence)
            .map(|operator| (operator, token.offset))
    }

    fn fold(&mut self, precedence: i32, operand: fn(&mut Self) -> Result<Branch, ParseError>)
        -> Result<Branch, ParseError>
    {
        let (mut left, mut height) = operand(self)?;
        while let Some((operator, offset)) = self.operator_at(precedence) {
            self.source.advance();
            let (right, right_height) = operand(self)?;

            height = height.max(right_height) + 1;
            if height > MAX_HEIGHT {
                return Err(ParseError::TooDeep{offset});
            }
            trace!(operator = %operator.symbol(), height, "folding operands");
            left = Expr::binary(operator, left, right);
        }
        Ok((left, height))
    }

    // factor := NUMBER | '(' expression ')'
    fn factor(&mut self) -> Result<Branch, ParseError> {
        let Some(token) = self.source.get_current() else {
            return Err(ParseError::ExpectedOperand{found: "end of input".into(), offset: None});
        };

        match token.kind {
            TokenKind::Number(value) => {
                self.source.advance();
                Ok((Expr::Literal(value), 0))
            },
            TokenKind::LParen => {
                if self.nesting == MAX_NESTING {
                    return Err(ParseError::TooDeep{offset: token.offset});
                }
                self.nesting += 1;
                self.source.advance();
                let inner = self.expression()?;
                self.nesting -= 1;

                match self.source.get_current() {
                    Some(Token{kind: TokenKind::RParen, ..}) => {
                        self.source.advance();
                        Ok(inner)
                    },
                    Some(other) => Err(unexpected(other)),
                    None => Err(ParseError::UnmatchedParen{offset: token.offset}),
                }
            },
            kind => Err(ParseError::ExpectedOperand{
                found: format!("'{kind}'"),
                offset: Some(token.offset),
            }),
        }
    }
}

fn unexpected(token: Token) -> ParseError {
    ParseError::UnexpectedTrailingToken{token: token.kind.to_string(), offset: token.offset}
}

/// Builds the tree for a whole token sequence. Every token must be consumed.
pub fn parse(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(tokens);
    let (tree, _) = parser.expression()?;

    match parser.source.get_current() {
        Some(token) => Err(unexpected(token)),
        None => Ok(tree),
    }
}
