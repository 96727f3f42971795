use std::io::Write;

use crate::{
    ast::Stmt,
    config::Config,
    error::RuntimeError,
    interpreter::evaluator::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation state.
///
/// The interpreter owns the live [`Environment`] and the output sink that
/// print statements write to. Any [`Write`] works as a sink: standard output
/// for the command line, a `Vec<u8>` in tests.
///
/// ## Usage
///
/// Create one interpreter and hand it a parsed program with
/// [`Interpreter::interpret`]. Each run starts from an empty environment.
///
/// ```
/// use lipi::{interpreter::evaluator::core::Interpreter, parse_source};
///
/// let program = parse_source("मानौ क = ५ + ३\nछाप(क)").unwrap();
/// let mut output = Vec::new();
///
/// let mut interpreter = Interpreter::new(&mut output);
/// interpreter.interpret(&program).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "८\n");
/// ```
pub struct Interpreter<W: Write> {
    pub(crate) environment: Environment,
    pub(crate) config:      Config,
    pub(crate) sink:        W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter writing to `sink` with the default
    /// configuration.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, Config::default())
    }

    /// Creates an interpreter writing to `sink` with the given configuration.
    pub fn with_config(sink: W, config: Config) -> Self {
        Self { environment: Environment::new(),
               config,
               sink }
    }

    /// Runs a program.
    ///
    /// The environment is reset before the first statement. Statements run in
    /// order and the first error stops the run; output written before the
    /// error stays written.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    pub fn interpret(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        tracing::debug!(statements = statements.len(), "interpreting program");
        self.environment = Environment::new();

        for statement in statements {
            self.execute(statement)?;
        }

        self.sink.flush()?;
        Ok(())
    }

    /// The environment as it stands after the last executed statement.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The active configuration.
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Consumes the interpreter and gives back its sink.
    pub fn into_sink(self) -> W {
        self.sink
    }
}
