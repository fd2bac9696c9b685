//! Real stdin prompt adapter.

use std::io::{self, BufRead, Write};

use rnforge_core::{
    application::{ApplicationError, ports::LineInput},
    error::ForgeResult,
};

/// Blocking line reads from the process's standard input.
///
/// The prompt is written to stdout and flushed before blocking, so it is
/// visible even when stdout is line-buffered. One line is consumed per call;
/// EOF yields an empty line (interpreted downstream as "no").
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl LineInput for StdinPrompt {
    fn ask(&self, prompt: &str) -> ForgeResult<String> {
        print!("{prompt}");
        io::stdout().flush().map_err(|e| input_error(e))?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| input_error(e))?;
        Ok(line)
    }
}

fn input_error(e: io::Error) -> rnforge_core::error::ForgeError {
    ApplicationError::InputError {
        reason: e.to_string(),
    }
    .into()
}
