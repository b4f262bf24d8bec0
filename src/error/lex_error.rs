#[derive(Debug)]
/// Represents all errors that can occur during lexing.
///
/// The lexer skips characters it does not recognize instead of failing, so
/// the only way tokenization can go wrong is a `/` that does not start a
/// `//` comment.
pub enum LexError {
    /// A `/` was found that is not followed by a second `/`.
    MalformedComment {
        /// Byte offset of the stray `/` in the source text.
        offset: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedComment { offset } => {
                write!(f, "Error at offset {offset}: bad grammar of comment.")
            },
        }
    }
}

impl std::error::Error for LexError {}
