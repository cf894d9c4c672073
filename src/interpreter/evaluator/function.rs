use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, eval_block},
        value::Value,
    },
};

/// Applies an evaluated callee to already-evaluated arguments.
///
/// The callee must be a function value; anything else is the canonical
/// not-a-function error. Parameters are bound positionally in a fresh
/// environment enclosed by the function's *captured* environment (not the
/// caller's), which is what makes closures lexical. The body runs as a
/// block, and a return wrapper produced inside it is unwrapped here, at the
/// call boundary.
///
/// # Parameters
/// - `function`: The evaluated callee.
/// - `arguments`: The evaluated arguments, in call order.
///
/// # Returns
/// The function's result, or a runtime error for non-function callees and
/// arity mismatches.
pub(crate) fn apply_function(function: &Value, arguments: Vec<Value>) -> EvalResult<Value> {
    let Value::Function(function) = function else {
        return Err(RuntimeError::NotAFunction { type_name: function.type_name() });
    };

    if function.parameters.len() != arguments.len() {
        return Err(RuntimeError::WrongNumberOfArguments { expected: function.parameters.len(),
                                                          got:      arguments.len(), });
    }

    let env = Environment::new_enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.clone(), argument);
    }

    match eval_block(&function.body, &env)? {
        Value::Return(value) => Ok(*value),
        value => Ok(value),
    }
}
