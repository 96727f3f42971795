/// Runtime options for the interpreter.
///
/// ## Example
/// ```
/// use lipi::config::Config;
///
/// let config = Config::default();
/// assert!(config.devanagari_output);
///
/// let config = config.with_devanagari_output(false);
/// assert!(!config.devanagari_output);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Print numbers with Devanagari digits (`१४`) instead of ASCII (`14`).
    pub devanagari_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { devanagari_output: true }
    }
}

impl Config {
    /// Returns a copy with Devanagari number output switched on or off.
    #[must_use]
    pub const fn with_devanagari_output(mut self, on: bool) -> Self {
        self.devanagari_output = on;
        self
    }
}
