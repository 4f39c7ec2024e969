//! Command implementations.

pub mod agenda;
pub mod config;
pub mod speakers;

pub use self::agenda::execute_agenda;
pub use self::config::execute_config;
pub use self::speakers::execute_speakers;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Read program text from the file or stdin named by `input`.
pub(crate) fn read_input(input: &InputArgs) -> Result<String> {
    match &input.file {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        Some(_) => read_stdin(),
        None if input.stdin => read_stdin(),
        None => Err(CliError::InvalidInput(
            "Must specify either a FILE or --stdin".to_string(),
        )),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}
