/// A right-recursive bitwise-or chain of number literals, e.g. `1 | 2 | 3`.
///
/// The chain preserves left-to-right literal order: the head is the leftmost
/// literal and the tail holds the rest. Used as a value it is always
/// array-typed; in bracket position it selects several indexes at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitOrChain {
    /// The leftmost literal of the chain.
    pub head: i64,
    /// The remainder of the chain, if any.
    pub tail: Option<Box<BitOrChain>>,
}

impl BitOrChain {
    /// Flattens the chain into its ordered literal sequence.
    ///
    /// The result always has length >= 1 and keeps the source order.
    ///
    /// ## Example
    /// ```
    /// use helang::ast::BitOrChain;
    ///
    /// let chain = BitOrChain { head: 1,
    ///                          tail: Some(Box::new(BitOrChain { head: 2,
    ///                                                           tail: None, })), };
    /// assert_eq!(chain.flatten(), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn flatten(&self) -> Vec<i64> {
        let mut values = vec![self.head];
        let mut tail = self.tail.as_deref();
        while let Some(chain) = tail {
            values.push(chain.head);
            tail = chain.tail.as_deref();
        }
        values
    }
}

/// The bracketed part of a member expression.
///
/// `a[2]` carries a single literal; `a[1 | 3]` carries a chain selecting
/// several 1-based indexes in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Property {
    /// A single 1-based index.
    Single(i64),
    /// An ordered sequence of 1-based indexes.
    List(BitOrChain),
}

impl Property {
    /// Lowers the property to the runtime index form.
    #[must_use]
    pub fn index(&self) -> crate::interpreter::value::Index {
        use crate::interpreter::value::Index;

        match self {
            Self::Single(i) => Index::Single(*i),
            Self::List(chain) => Index::List(chain.flatten()),
        }
    }
}

/// The left-hand side of an assignment expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignTarget {
    /// Whole-variable reassignment, `a = ...`.
    Variable {
        /// The name of the variable.
        name: String,
    },
    /// Indexed assignment, `a[i] = ...`.
    Member {
        /// The name of the array variable.
        object:   String,
        /// The index or indexes being written.
        property: Property,
    },
}

/// Represents an update operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpdateOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl std::fmt::Display for UpdateOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant carries `pos`, the sequence index of its head token, used
/// for error reporting. The evaluator dispatches over this enum with one
/// exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Head token position.
        pos:  usize,
    },
    /// A number literal.
    Literal {
        /// The literal value.
        value: i64,
        /// Head token position.
        pos:   usize,
    },
    /// A bare bitwise-or chain. On its own it evaluates to nothing; value
    /// contexts wrap it into [`Expr::U8`] at parse time.
    BitOr {
        /// The chain.
        chain: BitOrChain,
        /// Head token position.
        pos:   usize,
    },
    /// A bitwise-or chain used as an array value, e.g. `u8 a = 1 | 2;`.
    U8 {
        /// The chain providing the elements, in order.
        elements: BitOrChain,
        /// Head token position.
        pos:      usize,
    },
    /// Member access, `a[2]` or `a[1 | 3]`.
    Member {
        /// The name of the array variable.
        object:   String,
        /// The index or indexes being read.
        property: Property,
        /// Head token position.
        pos:      usize,
    },
    /// Assignment, `a = ...` or `a[i] = ...`.
    Assignment {
        /// The target being written.
        target: AssignTarget,
        /// The right-hand side.
        value:  Box<Expr>,
        /// Head token position.
        pos:    usize,
    },
    /// Length-only array allocation, `[10]`.
    ArrayInit {
        /// Number of zero elements to allocate.
        length: usize,
        /// Head token position.
        pos:    usize,
    },
    /// Increment or decrement of a variable, `a++` or `a--`.
    Update {
        /// The operator applied.
        operator: UpdateOperator,
        /// The name of the variable.
        name:     String,
        /// Head token position.
        pos:      usize,
    },
}

impl Expr {
    /// Gets the head token position from `self`.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Identifier { pos, .. }
            | Self::Literal { pos, .. }
            | Self::BitOr { pos, .. }
            | Self::U8 { pos, .. }
            | Self::Member { pos, .. }
            | Self::Assignment { pos, .. }
            | Self::ArrayInit { pos, .. }
            | Self::Update { pos, .. } => *pos,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units the parser produces, each terminated by `;` in
/// the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable declaration using `u8`, the only construct that can
    /// introduce a new binding.
    VariableDeclaration {
        /// The name being declared.
        name: String,
        /// The optional initializer.
        init: Option<Expr>,
        /// Head token position.
        pos:  usize,
    },
    /// A standalone expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Head token position.
        pos:  usize,
    },
    /// `print <expr>;`
    Print {
        /// The expression whose value is printed.
        argument: Option<Expr>,
        /// Head token position.
        pos:      usize,
    },
    /// `sprint <chain>;` prints the chain decoded as Unicode code points.
    Sprint {
        /// The code point values, in order.
        values: BitOrChain,
        /// Head token position.
        pos:    usize,
    },
}

/// The root of a parsed program: an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The statements, in source order.
    pub body: Vec<Statement>,
}
