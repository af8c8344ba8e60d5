//! Program Loader.
//!
//! This module reads program source from disk and assembles it. It performs:
//! 1. **Source loading:** Reads the file, reporting unreadable files as [`SimError::Io`].
//! 2. **Assembly:** Hands the text to the front-end, which skips bad lines.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::asm::{Program, assemble};
use crate::common::error::SimError;

/// Reads a program source file into a string.
///
/// # Arguments
///
/// * `path` - Path to the source file.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SimError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and assembles a program source file.
///
/// Lines the front-end rejects are listed in [`Program::diagnostics`]; they
/// do not make this function fail.
///
/// # Errors
///
/// [`SimError::Io`] if the file cannot be read.
pub fn load_program(path: impl AsRef<Path>) -> Result<Program, SimError> {
    let path = path.as_ref();
    let program = assemble(&read_source(path)?);
    info!(
        path = %path.display(),
        instructions = program.len(),
        skipped = program.diagnostics.len(),
        "program loaded"
    );
    Ok(program)
}
