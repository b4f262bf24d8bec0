#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are the token sequence index recorded on the AST node that
/// raised the error.
pub enum RuntimeError {
    /// Tried to use a variable that was never declared.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// Position of the reference in the token stream.
        pos:  usize,
    },
    /// A declared variable holds no value yet, but one was required.
    MissingValue {
        /// The name of the variable.
        name: String,
        /// Position of the reference in the token stream.
        pos:  usize,
    },
    /// Index `0` was used for element access. he arrays are 1-based; `0` is
    /// reserved as the bulk-update sentinel in assignment position.
    InvalidIndex {
        /// Position of the access in the token stream.
        pos: usize,
    },
    /// Tried to access an array element outside the allowed bounds.
    IndexOutOfBounds {
        /// The largest valid index (the array length).
        max:   usize,
        /// The index that was actually requested.
        found: i64,
        /// Position of the access in the token stream.
        pos:   usize,
    },
    /// Tried to assign into an element of a variable that holds a scalar.
    NotAnArray {
        /// The name of the target variable.
        name: String,
        /// Position of the assignment in the token stream.
        pos:  usize,
    },
    /// Tried to assign an array expression into a member (indexed) target.
    ArrayAssignment {
        /// The name of the target variable.
        name: String,
        /// Position of the assignment in the token stream.
        pos:  usize,
    },
    /// A `sprint` value is not a valid Unicode code point.
    InvalidCodePoint {
        /// The offending value.
        value: i64,
        /// Position of the `sprint` statement in the token stream.
        pos:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, pos } => {
                write!(f, "Error at position {pos}: {name} is not defined.")
            },

            Self::MissingValue { name, pos } => {
                write!(f, "Error at position {pos}: {name} has no value.")
            },

            Self::InvalidIndex { pos } => {
                write!(f, "Error at position {pos}: There is no index 0, it's not cool.")
            },

            Self::IndexOutOfBounds { max, found, pos } => write!(f,
                                                                 "Error at position {pos}: Index out of bounds. Maximum is {max}, but found {found} instead."),

            Self::NotAnArray { name, pos } => {
                write!(f, "Error at position {pos}: {name} is not an array.")
            },

            Self::ArrayAssignment { name, pos } => write!(f,
                                                          "Error at position {pos}: An array cannot be assigned into an element of {name}."),

            Self::InvalidCodePoint { value, pos } => {
                write!(f, "Error at position {pos}: {value} is not a valid code point.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
