use std::collections::HashMap;

use crate::{
    ast::{AssignTarget, Expr, Program, Property, Statement, UpdateOperator},
    error::RuntimeError,
    interpreter::{evaluator::utils::decode_code_points, value::U8},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the single flat variable scope of a he program: a
/// mapping from names to optional [`U8`] values. The optional layer models
/// variables that were declared without an initializer (`u8 x;`).
///
/// ## Usage
///
/// A `Context` is created once and reused across evaluations, which is what
/// lets the interactive shell keep state between input lines. Independent
/// contexts are fully isolated.
pub struct Context {
    variables: HashMap<String, Option<U8>>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(), }
    }

    /// Looks up the value currently bound to `name`.
    ///
    /// Returns `None` both for undeclared variables and for declared but
    /// uninitialized ones; use [`Context::is_declared`] to tell them apart.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&U8> {
        self.variables.get(name).and_then(Option::as_ref)
    }

    /// Returns whether `name` has been declared, initialized or not.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Runs every statement of a program, in order, against this context.
    ///
    /// # Errors
    /// Stops at and propagates the first `RuntimeError`. Side effects of
    /// earlier statements are kept.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<()> {
        for statement in &program.body {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// Declarations bind names (the only construct allowed to), print
    /// statements write to standard output, and expression statements yield
    /// their expression's value.
    ///
    /// # Returns
    /// `Some(U8)` for statements that produce a value, `None` otherwise.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised by the contained expressions.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<U8>> {
        match statement {
            Statement::VariableDeclaration { name, init, .. } => {
                let value = match init {
                    Some(expr) => self.eval(expr)?,
                    None => None,
                };
                self.variables.insert(name.clone(), value);
                Ok(None)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
            Statement::Print { argument, .. } => {
                if let Some(expr) = argument {
                    match self.eval(expr)? {
                        Some(value) => println!("{value}"),
                        // An uninitialized variable or a scalar member read
                        // has no value to show.
                        None => println!("undefined"),
                    }
                }
                Ok(None)
            },
            Statement::Sprint { values, pos } => {
                println!("{}", decode_code_points(&values.flatten(), *pos)?);
                Ok(None)
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator dispatches once, exhaustively, over the node kind.
    ///
    /// # Returns
    /// `Some(U8)` for value-producing expressions; `None` for bare chains,
    /// assignments, and reads that resolve to no value.
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised along the way.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<U8>> {
        match expr {
            Expr::Identifier { name, pos } => {
                self.variables
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   pos:  *pos, })
            },
            Expr::Literal { value, .. } => Ok(Some(U8::Scalar(*value))),
            // A bare chain is not a value; value positions wrap it into
            // Expr::U8 at parse time.
            Expr::BitOr { .. } => Ok(None),
            Expr::U8 { elements, .. } => Ok(Some(U8::Array(elements.flatten()))),
            Expr::Member { object,
                           property,
                           pos, } => self.eval_member(object, property, *pos),
            Expr::Assignment { target, value, pos } => self.eval_assignment(target, value, *pos),
            Expr::ArrayInit { length, .. } => Ok(Some(U8::zeroed(*length))),
            Expr::Update { operator,
                           name,
                           pos, } => self.eval_update(*operator, name, *pos),
        }
    }

    /// Evaluates a member read, `a[2]` or `a[1 | 3]`.
    ///
    /// The object must be declared and hold a value. Reading an element of
    /// a scalar yields `None` rather than an error.
    fn eval_member(&self, object: &str, property: &Property, pos: usize) -> EvalResult<Option<U8>> {
        match self.variables.get(object) {
            Some(Some(value)) => value.get(&property.index(), pos),
            Some(None) => {
                Err(RuntimeError::MissingValue { name: object.to_string(),
                                                 pos })
            },
            None => {
                Err(RuntimeError::UnknownVariable { name: object.to_string(),
                                                    pos })
            },
        }
    }

    /// Evaluates an assignment. Assignment never declares: the target name
    /// must already be bound.
    ///
    /// For member targets the object must hold an array, the right-hand
    /// side must not be an array expression, and its scalar value (the
    /// first element, if the value is array-shaped) is written through
    /// [`U8::set`]. A right-hand side that resolves to no value leaves the
    /// target untouched.
    ///
    /// For variable targets the name is rebound to whatever the right-hand
    /// side produced, including "no value".
    fn eval_assignment(&mut self,
                       target: &AssignTarget,
                       value: &Expr,
                       pos: usize)
                       -> EvalResult<Option<U8>> {
        match target {
            AssignTarget::Member { object, property } => {
                match self.variables.get(object) {
                    Some(Some(U8::Array(_))) => {},
                    Some(Some(U8::Scalar(_))) => {
                        return Err(RuntimeError::NotAnArray { name: object.clone(),
                                                              pos });
                    },
                    Some(None) => {
                        return Err(RuntimeError::MissingValue { name: object.clone(),
                                                                pos });
                    },
                    None => {
                        return Err(RuntimeError::UnknownVariable { name: object.clone(),
                                                                   pos });
                    },
                }

                if let Expr::U8 { .. } = value {
                    return Err(RuntimeError::ArrayAssignment { name: object.clone(),
                                                               pos });
                }

                let scalar = match self.eval(value)? {
                    Some(U8::Scalar(n)) => Some(n),
                    Some(U8::Array(items)) => items.first().copied(),
                    None => None,
                };

                if let Some(scalar) = scalar {
                    let index = property.index();
                    if let Some(Some(stored)) = self.variables.get_mut(object) {
                        stored.set(&index, scalar, pos)?;
                    }
                }
                Ok(None)
            },
            AssignTarget::Variable { name } => {
                if !self.variables.contains_key(name) {
                    return Err(RuntimeError::UnknownVariable { name: name.clone(),
                                                               pos });
                }
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(None)
            },
        }
    }

    /// Evaluates `a++` or `a--`: scalars change by 1, arrays element-wise,
    /// in place. An uninitialized variable is left untouched.
    fn eval_update(&mut self,
                   operator: UpdateOperator,
                   name: &str,
                   pos: usize)
                   -> EvalResult<Option<U8>> {
        let slot = self.variables
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                      pos })?;

        match slot {
            Some(value) => {
                match operator {
                    UpdateOperator::Increment => value.increment(),
                    UpdateOperator::Decrement => value.decrement(),
                }
                Ok(Some(value.clone()))
            },
            None => Ok(None),
        }
    }
}
