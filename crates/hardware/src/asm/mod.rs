//! Program front-end.
//!
//! Turns program source text into instruction words, one instruction per
//! line, laid down at consecutive addresses from 0. It performs the following:
//! 1. **Parsing:** A `pest` grammar splits each line into a mnemonic and operands.
//! 2. **Validation:** Operand shapes and field ranges are checked per opcode class.
//! 3. **Recovery:** A bad line is reported and skipped without reserving an
//!    address, so the instructions after it shift down.

use std::fmt;

use pest::Parser;
use pest::iterators::Pair;
use tracing::warn;

use crate::common::constants::{MAX_LINE_LEN, REGISTER_COUNT};
use crate::isa::instruction::{IMM_MAX, IMM_MIN, SHAMT_MASK, TARGET_MASK};
use crate::isa::{Instruction, OpClass, Opcode, encode};

mod parser {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "src/asm/grammar.pest"]
    pub(super) struct LineParser;
}

use parser::{LineParser, Rule};

/// Why a source line was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AsmError {
    /// The mnemonic is not one of the twelve opcodes.
    #[error("unknown instruction `{0}`")]
    UnknownMnemonic(String),

    /// The line does not match the statement grammar.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The operands do not match the opcode's class.
    #[error("{mnemonic} expects operands `{expected}`")]
    Operands {
        /// Mnemonic of the instruction.
        mnemonic: &'static str,
        /// Operand shape the class requires.
        expected: &'static str,
    },

    /// A register operand names a register above `R31`.
    #[error("register `{0}` out of range (R0-R31)")]
    RegisterOutOfRange(String),

    /// An integer operand does not fit its field.
    #[error("{what} {value} outside {min}..={max}")]
    OutOfRange {
        /// Field being filled.
        what: &'static str,
        /// Operand text.
        value: String,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The line exceeds the maximum source line length.
    #[error("line is {len} bytes long (limit {max})", max = MAX_LINE_LEN)]
    LineTooLong {
        /// Length of the line in bytes.
        len: usize,
    },
}

/// A rejected source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line number.
    pub line: usize,
    /// The line's text with surrounding whitespace removed.
    pub text: String,
    /// Why it was rejected.
    pub error: AsmError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

/// An assembled program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Encoded instructions; index is the instruction's address.
    pub words: Vec<u32>,
    /// Source line number of each word.
    pub lines: Vec<usize>,
    /// Lines that were skipped, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Program {
    /// Number of instruction words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when no instruction was assembled.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
enum Operand {
    Register(usize),
    Integer(i64),
}

/// Assembles a whole program.
///
/// Rejected lines are logged at `warn` level, recorded in
/// [`Program::diagnostics`] and skipped; assembly always continues.
pub fn assemble(source: &str) -> Program {
    let mut program = Program::default();
    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        match assemble_line(text) {
            Ok(Some(inst)) => {
                program.words.push(encode(&inst));
                program.lines.push(line);
            }
            Ok(None) => {}
            Err(error) => {
                warn!(line, "{error}, line skipped");
                program.diagnostics.push(Diagnostic {
                    line,
                    text: text.trim().to_string(),
                    error,
                });
            }
        }
    }
    program
}

/// Assembles a single source line.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines.
///
/// # Errors
///
/// An [`AsmError`] describing why the line cannot be assembled.
pub fn assemble_line(text: &str) -> Result<Option<Instruction>, AsmError> {
    if text.len() > MAX_LINE_LEN {
        return Err(AsmError::LineTooLong { len: text.len() });
    }

    let line = LineParser::parse(Rule::line, text)
        .map_err(|e| AsmError::Syntax(e.variant.message().into_owned()))?
        .next();
    let Some(statement) = line
        .into_iter()
        .flat_map(Pair::into_inner)
        .find(|pair| pair.as_rule() == Rule::statement)
    else {
        return Ok(None);
    };

    let mut inner = statement.into_inner();
    let Some(mnemonic) = inner.next() else {
        return Ok(None);
    };
    let op = Opcode::from_mnemonic(mnemonic.as_str())
        .ok_or_else(|| AsmError::UnknownMnemonic(mnemonic.as_str().to_string()))?;
    let operands = inner.map(operand).collect::<Result<Vec<_>, _>>()?;

    build(op, &operands).map(Some)
}

fn operand(pair: Pair<'_, Rule>) -> Result<Operand, AsmError> {
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::register => text[1..]
            .parse::<usize>()
            .ok()
            .filter(|&idx| idx < REGISTER_COUNT)
            .map(Operand::Register)
            .ok_or_else(|| AsmError::RegisterOutOfRange(text.to_string())),
        Rule::integer => text.parse::<i64>().map(Operand::Integer).map_err(|_| {
            AsmError::OutOfRange {
                what: "integer",
                value: text.to_string(),
                min: i64::MIN,
                max: i64::MAX,
            }
        }),
        _ => Err(AsmError::Syntax(format!("unexpected `{text}`"))),
    }
}

fn build(op: Opcode, operands: &[Operand]) -> Result<Instruction, AsmError> {
    use Operand::{Integer as I, Register as R};

    match (op.class(), operands) {
        (OpClass::Register, &[R(r1), R(r2), R(r3)]) => Ok(Instruction::Register { op, r1, r2, r3 }),
        (OpClass::Shift, &[R(r1), R(r2), I(n)]) => Ok(Instruction::Shift {
            op,
            r1,
            r2,
            shamt: ranged("shift amount", n, 0, SHAMT_MASK.into())? as u32,
        }),
        (OpClass::Immediate, &[R(r1), R(r2), I(n)]) => Ok(Instruction::Immediate {
            op,
            r1,
            r2,
            imm: ranged("immediate", n, IMM_MIN.into(), IMM_MAX.into())? as i32,
        }),
        (OpClass::Jump, &[I(n)]) => Ok(Instruction::Jump {
            target: ranged("jump target", n, 0, TARGET_MASK.into())? as u32,
        }),
        (class, _) => Err(AsmError::Operands {
            mnemonic: op.mnemonic(),
            expected: operand_shape(class),
        }),
    }
}

fn ranged(what: &'static str, value: i64, min: i64, max: i64) -> Result<i64, AsmError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AsmError::OutOfRange {
            what,
            value: value.to_string(),
            min,
            max,
        })
    }
}

const fn operand_shape(class: OpClass) -> &'static str {
    match class {
        OpClass::Register => "R<d> R<s> R<t>",
        OpClass::Shift => "R<d> R<s> <shamt>",
        OpClass::Immediate => "R<a> R<b> <imm>",
        OpClass::Jump => "<target>",
    }
}
