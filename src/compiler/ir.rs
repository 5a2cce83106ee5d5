//! In-memory form of the emitted LLVM IR and its textual rendering.

use std::fmt::Display;

use crate::ast::expressions::BinaryOp;

/// Name written into the module header.
pub const MODULE_ID: &str = "tinyexpr";

/// A virtual register, printed as `%t<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(pub u32);

impl Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%t{}", self.0)
    }
}

/// An instruction operand: a literal or the result of an earlier instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Immediate(i64),
    Register(Register),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Immediate(value) => write!(f, "{}", value),
            Value::Register(register) => write!(f, "{}", register),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    SDiv,
}

impl From<BinaryOp> for Opcode {
    fn from(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Opcode::Add,
            BinaryOp::Sub => Opcode::Sub,
            BinaryOp::Mul => Opcode::Mul,
            BinaryOp::Div => Opcode::SDiv,
        }
    }
}

impl Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Opcode::Add => write!(f, "add"),
            Opcode::Sub => write!(f, "sub"),
            Opcode::Mul => write!(f, "mul"),
            Opcode::SDiv => write!(f, "sdiv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `dest = <opcode> i64 lhs, rhs`
    Binary {
        dest: Register,
        opcode: Opcode,
        lhs: Value,
        rhs: Value,
    },
    /// `dest = trunc i64 value to i32`
    Trunc { dest: Register, value: Value },
}

impl Instruction {
    pub fn dest(&self) -> Register {
        match self {
            Instruction::Binary { dest, .. } | Instruction::Trunc { dest, .. } => *dest,
        }
    }

    pub fn operands(&self) -> Vec<Value> {
        match self {
            Instruction::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            Instruction::Trunc { value, .. } => vec![*value],
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Binary {
                dest,
                opcode,
                lhs,
                rhs,
            } => write!(f, "{} = {} i64 {}, {}", dest, opcode, lhs, rhs),
            Instruction::Trunc { dest, value } => {
                write!(f, "{} = trunc i64 {} to i32", dest, value)
            }
        }
    }
}

/// How `main` hands the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Print the `i64` result with `printf` and return 0.
    Print,
    /// Return the result truncated to `i32`.
    ExitCode,
}

/// A complete module: one `main` function with a single entry block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub instructions: Vec<Instruction>,
    pub mode: OutputMode,
    /// The printed `i64` value in print mode, the returned `i32` value otherwise.
    pub result: Value,
}

impl Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "; ModuleID = '{}'", MODULE_ID)?;

        if self.mode == OutputMode::Print {
            writeln!(f, "declare i32 @printf(i8*, ...)\n")?;
            writeln!(
                f,
                r#"@.fmt = private unnamed_addr constant [6 x i8] c"%lld\0A\00""#
            )?;
            writeln!(f)?;
        }

        writeln!(f, "define i32 @main() {{")?;
        writeln!(f, "entry:")?;

        for instruction in &self.instructions {
            writeln!(f, "  {}", instruction)?;
        }

        match self.mode {
            OutputMode::Print => {
                writeln!(
                    f,
                    "  %fmtptr = getelementptr inbounds [6 x i8], [6 x i8]* @.fmt, i64 0, i64 0"
                )?;
                writeln!(
                    f,
                    "  call i32 (i8*, ...) @printf(i8* %fmtptr, i64 {})",
                    self.result
                )?;
                writeln!(f, "  ret i32 0")?;
            }
            OutputMode::ExitCode => writeln!(f, "  ret i32 {}", self.result)?,
        }

        write!(f, "}}")
    }
}
