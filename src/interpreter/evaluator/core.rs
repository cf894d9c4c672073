use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{binary::eval_infix, function::apply_function, unary::eval_prefix},
        value::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The first error produced
/// short-circuits every enclosing evaluation through `?` and becomes the
/// program's result.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against `env`.
///
/// Statements run in order; the program's value is the last statement's
/// value, or `null` for an empty program. A `return` executed anywhere in
/// the program stops it here: this is the one place (besides a function
/// call) where the transient return wrapper is unwrapped, so callers never
/// observe it.
///
/// # Parameters
/// - `program`: The parsed program. Callers must not evaluate a program
///   whose parser collected errors.
/// - `env`: The top-level environment; `let` bindings land in it.
///
/// # Returns
/// The final value, or the first runtime error.
pub fn eval(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;
        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates the statements between braces.
///
/// Like [`eval`], but a return wrapper is *not* unwrapped here: it is handed
/// back as-is so every enclosing block short-circuits too. That is what lets
/// a `return` escape arbitrarily nested blocks without ending constructs it
/// should not end.
pub(crate) fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a single expression against `env`.
///
/// Dispatches on the expression variant: literals convert directly,
/// identifiers resolve through the scope chain, operator forms evaluate
/// their operands first (left before right, errors propagating in that
/// order), conditionals take the truthy branch, function literals capture
/// `env` by reference, and calls defer to [`apply_function`].
pub(crate) fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier(name) => {
            env.borrow()
               .get(name)
               .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.clone() })
        },
        Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral(value) => Ok(Value::Bool(*value)),
        Expression::StringLiteral(value) => Ok(Value::Str(value.clone())),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*operator, &left, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            let condition = eval_expression(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expression::Function { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expression::Call { function, arguments } => {
            let function = eval_expression(function, env)?;

            let mut args = Vec::with_capacity(arguments.len());
            for argument in arguments {
                args.push(eval_expression(argument, env)?);
            }

            apply_function(&function, args)
        },
    }
}
