//! ALU shift operations.
//!
//! The shift amount comes from a 13-bit field, so it can exceed the register
//! width. Shifting by 32 or more clears the value rather than wrapping the
//! amount.

use super::AluOp;

/// Executes a logical shift.
///
/// # Arguments
///
/// * `op` - [`AluOp::Sll`] or [`AluOp::Srl`].
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount.
///
/// # Returns
///
/// The shifted value, `0` when `b >= 32`, or `0` for non-shift operations.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Sll => match a.checked_shl(b) {
            Some(v) => v,
            None => 0,
        },
        AluOp::Srl => match a.checked_shr(b) {
            Some(v) => v,
            None => 0,
        },
        _ => 0,
    }
}
