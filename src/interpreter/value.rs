use std::rc::Rc;

use crate::{ast::BlockStatement, interpreter::environment::Env};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// bindings, conditions and function applications.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by `!`.
    Bool(bool),
    /// An immutable string.
    Str(String),
    /// The absence of a value: an `if` whose condition selected no branch,
    /// or an empty block.
    Null,
    /// Transient wrapper produced by a `return` statement. It passes through
    /// nested blocks unchanged so that every enclosing block short-circuits,
    /// and is unwrapped at function-call and program boundaries; callers of
    /// the evaluator never observe it.
    Return(Box<Self>),
    /// A first-class function together with the environment it closed over.
    Function(Rc<Function>),
}

/// A user-defined function value: parameter names, body, and the captured
/// defining environment. Capturing the *defining* environment (never the
/// caller's) is what makes closures lexical.
#[derive(Clone)]
pub struct Function {
    /// Ordered parameter names.
    pub parameters: Vec<String>,
    /// The function body, evaluated on every call.
    pub body:       BlockStatement,
    /// The environment the literal was evaluated in, shared by reference.
    pub env:        Env,
}

impl Value {
    /// The type name embedded in runtime error messages. Part of the
    /// external contract; tests match messages containing these literally.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
        }
    }

    /// Truthiness of a condition: every value except `false` and `null` is
    /// truthy, including `0` and the empty string.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Return(left), Self::Return(right)) => left == right,
            // Functions have no structural equality; two are equal only when
            // they are the same value.
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

// A closure bound with `let` into the scope it captured makes the captured
// environment reachable from the function itself. Deriving Debug would chase
// that loop forever, so the environment is left out.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{\n{}\n}}", function.body)
            },
        }
    }
}
