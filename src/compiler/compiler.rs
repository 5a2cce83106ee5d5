//! Main code generator.
//!
//! This module contains the Compiler structure that lowers an expression tree
//! into the instruction list of a single `main` function and wraps it into a
//! [`Module`] for the selected output mode.

use tracing::{debug, trace};

use crate::ast::expressions::Expr;

use super::{
    expr::gen_expression,
    ir::{Instruction, Module, Opcode, OutputMode, Register, Value},
};

/// Code generator state for one module.
///
/// The instruction buffer and the register counter belong to the instance,
/// and [`Compiler::build_module`] resets them, so one instance can build any
/// number of modules.
#[derive(Debug)]
pub struct Compiler {
    /// Whether `main` prints the result or returns it as the exit code
    pub print_result: bool,
    /// Instructions of the entry block, in emission order
    instructions: Vec<Instruction>,
    /// Number of the next register to hand out
    next_register: u32,
}

impl Compiler {
    pub fn new(print_result: bool) -> Self {
        Compiler {
            print_result,
            instructions: vec![],
            next_register: 1,
        }
    }

    pub fn new_register(&mut self) -> Register {
        let register = Register(self.next_register);
        self.next_register += 1;
        register
    }

    /// Emits `opcode lhs, rhs` into a fresh register.
    pub fn emit_binary(&mut self, opcode: Opcode, lhs: Value, rhs: Value) -> Value {
        let dest = self.new_register();
        self.emit(Instruction::Binary {
            dest,
            opcode,
            lhs,
            rhs,
        });
        Value::Register(dest)
    }

    /// Emits a truncation of `value` to `i32`.
    pub fn emit_trunc(&mut self, value: Value) -> Value {
        let dest = self.new_register();
        self.emit(Instruction::Trunc { dest, value });
        Value::Register(dest)
    }

    fn emit(&mut self, instruction: Instruction) {
        debug_assert!(
            instruction.operands().iter().all(|operand| match operand {
                Value::Register(register) => *register < instruction.dest(),
                Value::Immediate(_) => true,
            }),
            "operand used before definition in `{}`",
            instruction
        );

        trace!(instruction = %instruction, "emit");
        self.instructions.push(instruction);
    }

    /// Narrows the final `i64` value to the `i32` exit code.
    ///
    /// Immediates that fit are narrowed here. Larger immediates are first
    /// materialized with `add i64 0, v` so that the truncation happens in the
    /// generated code, exactly as it does for registers.
    fn narrow(&mut self, value: Value) -> Value {
        match value {
            Value::Immediate(immediate) if i32::try_from(immediate).is_ok() => value,
            Value::Immediate(_) => {
                let wide = self.emit_binary(Opcode::Add, Value::Immediate(0), value);
                self.emit_trunc(wide)
            }
            Value::Register(_) => self.emit_trunc(value),
        }
    }

    /// Lowers `expr` into a complete module.
    pub fn build_module(&mut self, expr: &Expr) -> Module {
        self.instructions.clear();
        self.next_register = 1;

        let value = gen_expression(self, expr);

        let (mode, result) = if self.print_result {
            (OutputMode::Print, value)
        } else {
            (OutputMode::ExitCode, self.narrow(value))
        };

        debug!(
            instructions = self.instructions.len(),
            ?mode,
            "built module"
        );

        Module {
            instructions: std::mem::take(&mut self.instructions),
            mode,
            result,
        }
    }
}

/// Lowers `expr` into a module printing (`print_result`) or returning its value.
pub fn generate(expr: &Expr, print_result: bool) -> Module {
    Compiler::new(print_result).build_module(expr)
}
