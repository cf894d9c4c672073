#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// A runtime error is an ordinary value: the first one produced becomes the
/// result of every enclosing expression up to the program boundary, exactly
/// like a `return`. The `Display` output of each variant is part of the
/// external contract; the embedded type names are those of
/// [`Value::type_name`](crate::interpreter::value::Value::type_name).
pub enum RuntimeError {
    /// A name was looked up but never bound.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// The operands of an infix expression have different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator between the operands.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand type it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An infix operator is not defined for its (matching) operand types.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator between the operands.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// Something other than a function appeared in call position.
    NotAFunction {
        /// Type name of the value that was called.
        type_name: &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    IntegerOverflow,
    /// A function was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// Number of parameters the function declares.
        expected: usize,
        /// Number of arguments the call supplied.
        got:      usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::NotAFunction { type_name } => write!(f, "not a function: {type_name}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::WrongNumberOfArguments { expected, got } => {
                write!(f, "wrong number of arguments: expected {expected}, got {got}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
