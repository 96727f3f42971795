use std::{io::Write, rc::Rc};

use crate::{
    ast::Stmt,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a single statement.
    ///
    /// - `Print` evaluates its expression and writes one rendered line.
    /// - `Var` binds the initializer's value, or null, in the current
    ///   environment.
    /// - `Function` binds the declaration node under its name.
    /// - `Block` runs its statements in the current environment; blocks do not
    ///   open a scope.
    /// - `Expression` evaluates and drops the value.
    ///
    /// Re-declaring a name replaces its previous binding.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let line = value.render(self.config.devanagari_output);
                tracing::trace!(output = %line, "print");
                writeln!(self.sink, "{line}")?;
            },
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Null,
                };
                tracing::trace!(name = %name.lexeme, %value, "declare variable");
                self.environment.define(name.lexeme.clone(), value);
            },
            Stmt::Function(decl) => {
                tracing::trace!(name = %decl.name.lexeme, params = decl.params.len(), "declare function");
                self.environment
                    .define(decl.name.lexeme.clone(), Value::Function(Rc::clone(decl)));
            },
            Stmt::Block(statements) => self.execute_all(statements)?,
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            },
        }
        Ok(())
    }

    /// Executes statements in order, stopping at the first error.
    pub(crate) fn execute_all(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        statements.iter().try_for_each(|stmt| self.execute(stmt))
    }
}
