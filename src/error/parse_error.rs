#[derive(Debug)]
/// Represents all errors that can occur during parsing.
///
/// Positions are sequence indexes into the token stream, counted from 0.
/// Parsing aborts on the first error; there is no recovery.
pub enum ParseError {
    /// Found a token of one kind where another was required.
    UnexpectedToken {
        /// The token kind(s) the parser required.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// Sequence index of the offending token.
        pos:      usize,
    },
    /// The token stream ran out while a construct was still incomplete.
    UnexpectedEndOfInput,
    /// A statement started with a token no statement can start with.
    UnrecognizedStatement {
        /// The token encountered.
        token: String,
        /// Sequence index of the offending token.
        pos:   usize,
    },
    /// An expression was required but the current token cannot begin one.
    ExpectedExpression {
        /// The token encountered.
        token: String,
        /// Sequence index of the offending token.
        pos:   usize,
    },
    /// An array length literal was too large to be used as a length.
    LengthTooLarge {
        /// Sequence index of the length literal.
        pos: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    pos, } => {
                write!(f, "Error at position {pos}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: No more tokens."),

            Self::UnrecognizedStatement { token, pos } => {
                write!(f, "Error at position {pos}: Cannot recognize token {token}.")
            },

            Self::ExpectedExpression { token, pos } => {
                write!(f, "Error at position {pos}: Cannot parse an expression at {token}.")
            },

            Self::LengthTooLarge { pos } => {
                write!(f, "Error at position {pos}: Array length is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
