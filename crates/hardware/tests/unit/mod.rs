//! Unit tests, one module per crate module.

/// Program front-end tests (parsing, validation, line skipping).
pub mod asm;





/// Driver loop, end-to-end program and loader tests.
pub mod sim;
