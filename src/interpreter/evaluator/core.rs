use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{BinaryOperator, Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, function, index, unary},
        value::{
            core::{FunctionValue, Value},
            environment::Env,
            hash_key::HashPair,
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. The `?` operator is the
/// evaluator's error-propagation discipline: the first error produced by any
/// sub-evaluation aborts every enclosing evaluation unchanged.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in order; a `return` executed at any depth unwinds to
/// here and the program's value is the returned one. Otherwise the program's
/// value is the value of its last statement, or `null` for an empty program.
///
/// # Errors
/// Returns the first runtime error any statement produces.
///
/// # Example
/// ```
/// use quill::interpreter::{
///     evaluator::core::eval_program,
///     parser::core::parse,
///     value::{core::Value, environment::Environment},
/// };
///
/// let (program, errors) = parse("let a = 5; let b = a; a + b");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// assert_eq!(eval_program(&program, &env), Ok(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::Return(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` and compound assignment mutate the environment and yield `Void`;
/// `return` wraps its value for the block machinery to unwind; an
/// expression statement yields the expression's value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name, value);
            Ok(Value::Void)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
        Statement::CompoundAssignment { name, op, value } => {
            eval_compound_assignment(name, *op, value, env)
        },
    }
}

/// Evaluates the statements of a block in order.
///
/// Blocks do not open a scope; they run in the environment they appear in.
/// A `return` result stops the block immediately and is passed upward still
/// wrapped, so nested blocks keep unwinding until a function boundary or the
/// program root unwraps it.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::Return(_)) {
            break;
        }
    }

    Ok(result)
}

/// Evaluates an expression to a value.
///
/// This is the evaluator's central dispatch; each variant either produces a
/// value directly or hands off to the operator, index, and call modules.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value } => Ok(Value::Bool(*value)),
        Expr::StringLiteral { value } => Ok(Value::from(value.as_str())),
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::While { condition, body } => eval_while(condition, body, env),
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments } => function::core::eval_call(function, arguments, env),
        Expr::ArrayLiteral { elements } => {
            let values = eval_expressions(elements, env)?;
            Ok(Value::from(values))
        },
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            index::eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs } => eval_hash_literal(pairs, env),
    }
}

/// Resolves a name: the environment chain first, then the built-in registry.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(builtin) = function::core::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a list of expressions left to right.
///
/// Shared by array literals and call arguments; the first failing element
/// abandons the rest.
pub(in crate::interpreter::evaluator) fn eval_expressions(exprs: &[Expr],
                                                          env: &Env)
                                                          -> EvalResult<Vec<Value>> {
    let mut values = Vec::with_capacity(exprs.len());

    for expr in exprs {
        values.push(eval_expression(expr, env)?);
    }

    Ok(values)
}

/// Evaluates an `if` expression.
///
/// Truthiness picks the branch: the consequence for a truthy condition, the
/// alternative otherwise, or `null` when no alternative exists.
fn eval_if(condition: &Expr,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Env)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

/// Evaluates a `while` loop.
///
/// The condition is re-evaluated before every iteration. The loop's value
/// is the last body value, or `null` if the body never ran. A body error
/// aborts the loop through `?`; a `return` exits it and keeps unwinding.
fn eval_while(condition: &Expr, body: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    loop {
        let condition = eval_expression(condition, env)?;
        if !condition.is_truthy() {
            break;
        }

        result = eval_block(body, env)?;
        if matches!(result, Value::Return(_)) {
            break;
        }
    }

    Ok(result)
}

/// Evaluates a compound assignment statement.
///
/// The target is read through the scope chain, combined with the evaluated
/// right-hand side under the integer rules, and re-bound in the innermost
/// scope. Inside a function frame that re-binding shadows an outer variable
/// instead of updating it; this is the language's established behavior.
fn eval_compound_assignment(name: &str,
                            op: BinaryOperator,
                            value: &Expr,
                            env: &Env)
                            -> EvalResult<Value> {
    let current = env.borrow()
                     .get(name)
                     .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })?;

    let operand = eval_expression(value, env)?;

    let result = match (&current, &operand) {
        (Value::Integer(left), Value::Integer(right)) => {
            binary::eval_integer_infix(op, *left, *right)?
        },
        _ => {
            return Err(RuntimeError::TypeMismatch { left:     current.type_name(),
                                                    operator: format!("{op}="),
                                                    right:    operand.type_name(), });
        },
    };

    env.borrow_mut().set(name, result);
    Ok(Value::Void)
}

/// Evaluates a hash literal into a hash value.
///
/// Pairs evaluate in source order (key before value); duplicate keys
/// overwrite, so the last write wins.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hashed = key.hash_key()?;
        let value = eval_expression(value_expr, env)?;
        entries.insert(hashed, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(entries)))
}
