//! The argv handed to a supervisor.

use crate::error::{Result, SuperviseError};
use std::fmt;

/// Program followed by its arguments, passed to process creation as-is.
///
/// Always holds at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<String>,
}

impl CommandLine {
    /// Build a command line, rejecting an empty argv.
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(SuperviseError::Config("no command given".to_string()));
        }
        Ok(Self { argv })
    }

    /// The program name or path (argv[0]).
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}
