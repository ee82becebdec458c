//! Command trait and common types for the jlext CLI.
//!
//! Every subcommand is a struct built from its argument struct and run
//! through [`Command::execute`], which returns a [`CommandResult`]
//! summarizing the files it touched.

use crate::error::Result;

/// Standard command trait that all jlext commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Command execution result with metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Number of files tokenized.
    pub files_processed: usize,

    /// Number of files that produced at least one diagnostic.
    pub files_with_errors: usize,

    /// Total number of diagnostics reported.
    pub diagnostics: usize,

    /// Total number of UNKNOWN tokens.
    pub unknown_tokens: usize,

    /// Execution time in milliseconds.
    pub execution_time_ms: u64,
}

impl CommandResult {
    /// Set the number of files processed.
    pub fn with_files_processed(mut self, count: usize) -> Self {
        self.files_processed = count;
        self
    }

    /// Set the number of files with diagnostics.
    pub fn with_files_with_errors(mut self, count: usize) -> Self {
        self.files_with_errors = count;
        self
    }

    /// Set the number of diagnostics.
    pub fn with_diagnostics(mut self, count: usize) -> Self {
        self.diagnostics = count;
        self
    }

    /// Set the number of UNKNOWN tokens.
    pub fn with_unknown_tokens(mut self, count: usize) -> Self {
        self.unknown_tokens = count;
        self
    }

    /// Set the execution time.
    pub fn with_execution_time_ms(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = time_ms;
        self
    }

    /// Whether no diagnostics were reported.
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        if self.is_clean() {
            format!("checked {} file(s): no diagnostics", self.files_processed)
        } else {
            format!(
                "checked {} file(s): {} diagnostic(s) in {} file(s)",
                self.files_processed, self.diagnostics, self.files_with_errors
            )
        }
    }
}
