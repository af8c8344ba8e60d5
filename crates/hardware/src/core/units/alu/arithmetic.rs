//! ALU arithmetic operations.

use super::AluOp;

/// Executes an arithmetic operation with 32-bit wrap-around.
///
/// Returns `0` for non-arithmetic operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        _ => 0,
    }
}
