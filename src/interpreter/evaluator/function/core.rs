use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, eval_block, eval_expression, eval_expressions},
            function::{len, print, push, remove},
        },
        value::{core::Value, environment::{Env, Environment}},
    },
};

/// Type alias for built-in function handlers.
///
/// A built-in receives the slice of evaluated argument values; arity has
/// already been checked against the registry entry when it runs.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a built-in.
#[derive(Debug, Clone, Copy)]
enum Arity {
    /// The built-in takes exactly this many arguments.
    Exact(usize),
    /// The built-in takes any number of arguments.
    Any,
}

/// A registry entry for a native function.
///
/// Identifier resolution hands these out as first-class values, so `print`
/// can be passed around and called like any user function.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the function is registered under.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

static BUILTIN_TABLE: &[Builtin] = &[Builtin { name:  "len",
                                               arity: Arity::Exact(1),
                                               func:  len::len, },
                                     Builtin { name:  "push",
                                               arity: Arity::Exact(2),
                                               func:  push::push, },
                                     Builtin { name:  "remove",
                                               arity: Arity::Exact(2),
                                               func:  remove::remove, },
                                     Builtin { name:  "print",
                                               arity: Arity::Any,
                                               func:  print::print, }];

/// Finds a built-in by name.
///
/// Consulted by identifier resolution after the environment chain misses,
/// which is what lets a `let` binding shadow a built-in name.
#[must_use]
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name).copied()
}

impl Builtin {
    /// Checks arity and invokes the native function.
    ///
    /// # Errors
    /// Returns `wrong number of arguments. got=N, want=M` on an arity
    /// mismatch, otherwise whatever the native function reports.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(want) = self.arity
           && args.len() != want
        {
            return Err(RuntimeError::WrongNumberOfArguments { got: args.len(),
                                                              want });
        }
        (self.func)(args)
    }
}

impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Evaluates a call expression.
///
/// The callee evaluates first, then the arguments left to right; the first
/// argument error abandons the call. Application then dispatches on what
/// the callee turned out to be.
pub fn eval_call(function: &Expr, arguments: &[Expr], env: &Env) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;
    let args = eval_expressions(arguments, env)?;

    apply_function(&callee, &args)
}

/// Applies a callable value to evaluated arguments.
///
/// A user function gets a fresh frame chained onto its *captured*
/// environment (not the caller's) with parameters bound by position, and a
/// `return` from the body is unwrapped here so the wrapper never escapes a
/// call. Built-ins go through their registry entry.
///
/// # Errors
/// - `wrong number of arguments. got=N, want=M` on arity mismatch.
/// - `not a function <TYPE>` when the callee is not callable.
pub fn apply_function(callee: &Value, args: &[Value]) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongNumberOfArguments {
                    got:  args.len(),
                    want: function.parameters.len(),
                });
            }

            let frame = Environment::scoped(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                frame.borrow_mut().set(parameter, argument.clone());
            }

            let result = eval_block(&function.body, &frame)?;
            Ok(unwrap_return(result))
        },
        Value::Builtin(builtin) => builtin.call(args),
        other => Err(RuntimeError::NotAFunction { found: other.type_name() }),
    }
}

/// Strips the `return` wrapper at a function boundary.
///
/// Without this, a `return` inside a callee would keep unwinding through
/// the caller's blocks as well.
fn unwrap_return(value: Value) -> Value {
    match value {
        Value::Return(inner) => *inner,
        other => other,
    }
}
