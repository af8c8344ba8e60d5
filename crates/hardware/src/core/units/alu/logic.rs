//! ALU bitwise logical operations.

use super::AluOp;

/// Executes a bitwise operation.
///
/// Returns `0` for non-logical operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        _ => 0,
    }
}
