use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operation on an already-evaluated operand.
///
/// Supported operators:
/// - `!`: truthiness negation. `false` and `null` are the only falsy values,
///   so `!0` and `!""` are both `false`.
/// - `-`: defined for integers only; any other operand type produces the
///   canonical unknown-operator error.
pub(crate) fn eval_prefix(operator: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match operator {
        PrefixOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Value::Integer(value) => {
                value.checked_neg()
                     .map(Value::Integer)
                     .ok_or(RuntimeError::IntegerOverflow)
            },
            _ => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                           operand:  operand.type_name(), }),
        },
    }
}
