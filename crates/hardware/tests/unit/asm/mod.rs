/// Whole-program assembly and line-skipping tests.
pub mod assembler;
