use std::{io::Write, rc::Rc};

use crate::{
    ast::{Expr, FunctionDecl},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::Token,
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a call to a user-defined function.
    ///
    /// The callee is resolved in the current environment and the argument
    /// count checked against the declaration. Arguments are then evaluated
    /// left to right in the caller's environment. The body runs on a copy of
    /// that environment with the parameters bound; afterwards the caller's
    /// environment is put back whether the body succeeded or not, so nothing
    /// the body declared or re-declared is visible to the caller.
    ///
    /// Calls always produce `Value::Null`.
    ///
    /// # Errors
    /// - `UndefinedFunction` if the name is not bound.
    /// - `NotAFunction` if the name is bound to a non-function.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - Any error raised by an argument or by the body.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %callee.lexeme))]
    pub(crate) fn eval_call(&mut self, callee: &Token, args: &[Expr]) -> EvalResult<Value> {
        let decl = self.resolve_function(callee)?;

        if args.len() != decl.params.len() {
            return Err(RuntimeError::ArityMismatch { name:     callee.lexeme.clone(),
                                                     expected: decl.params.len(),
                                                     found:    args.len(),
                                                     line:     callee.line, });
        }

        let arg_vals = args.iter()
                           .map(|arg| self.evaluate(arg))
                           .collect::<EvalResult<Vec<_>>>()?;

        let mut frame = self.environment.clone();
        for (param, value) in decl.params.iter().zip(arg_vals) {
            frame.define(param.lexeme.clone(), value);
        }

        let caller = std::mem::replace(&mut self.environment, frame);
        let result = self.execute_all(&decl.body);
        self.environment = caller;

        result.map(|()| Value::Null)
    }

    /// Finds the declaration bound to `callee`.
    fn resolve_function(&self, callee: &Token) -> EvalResult<Rc<FunctionDecl>> {
        match self.environment.get(&callee.lexeme) {
            Some(Value::Function(decl)) => Ok(Rc::clone(decl)),
            Some(_) => Err(RuntimeError::NotAFunction { name: callee.lexeme.clone(),
                                                        line: callee.line, }),
            None => Err(RuntimeError::UndefinedFunction { name: callee.lexeme.clone(),
                                                          line: callee.line, }),
        }
    }
}
