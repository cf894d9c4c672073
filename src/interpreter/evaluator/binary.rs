use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an infix operation on two already-evaluated operands.
///
/// Dispatch is by operand type pair:
/// - two integers support the full operator set,
/// - two strings support only `+` (concatenation),
/// - two booleans support only `==` and `!=`,
/// - operands of different types are a type mismatch,
/// - matching types with an undefined operator are an unknown operator.
pub(crate) fn eval_infix(operator: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => {
            eval_integer_infix(operator, *left, *right)
        },
        (Value::Str(left), Value::Str(right)) => eval_string_infix(operator, left, right),
        (Value::Bool(left), Value::Bool(right)) => eval_bool_infix(operator, *left, *right),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                             operator: operator.to_string(),
                                             right:    right.type_name(), })
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                      operator: operator.to_string(),
                                                      right:    right.type_name(), }),
    }
}

/// Integer arithmetic and comparisons. Division truncates toward zero; a
/// zero divisor and a result outside the 64-bit range are runtime errors.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => {
            left.checked_add(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::IntegerOverflow)
        },
        InfixOperator::Sub => {
            left.checked_sub(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::IntegerOverflow)
        },
        InfixOperator::Mul => {
            left.checked_mul(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::IntegerOverflow)
        },
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::IntegerOverflow)
        },
        InfixOperator::Lt => Ok(Value::Bool(left < right)),
        InfixOperator::Gt => Ok(Value::Bool(left > right)),
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
    }
}

fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    if operator == InfixOperator::Add {
        Ok(Value::Str(format!("{left}{right}")))
    } else {
        Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                 operator: operator.to_string(),
                                                 right:    "STRING", })
    }
}

fn eval_bool_infix(operator: InfixOperator, left: bool, right: bool) -> EvalResult<Value> {
    match operator {
        InfixOperator::Eq => Ok(Value::Bool(left == right)),
        InfixOperator::NotEq => Ok(Value::Bool(left != right)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "BOOLEAN",
                                                      operator: operator.to_string(),
                                                      right:    "BOOLEAN", }),
    }
}
