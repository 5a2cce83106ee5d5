use crate::ast::expressions::{BinaryOp, Expr, UnaryOp};

use super::{
    compiler::Compiler,
    ir::{Opcode, Value},
};

/// Pending work for [`gen_expression`].
enum Step<'a> {
    /// Lower this subtree and push its value
    Visit(&'a Expr),
    /// Apply the operator to the top value
    Unary(UnaryOp),
    /// Combine the two top values, left below right
    Binary(BinaryOp),
}

/// Generates the instructions for `expression` and returns where its value lives.
///
/// Binary nodes always emit an instruction, even with two immediate operands.
/// The only folding is unary minus on an immediate, which becomes the negated
/// immediate instead of `sub i64 0, x`.
///
/// The walk is post-order over an explicit stack, so operator chains of any
/// length use constant native stack.
pub fn gen_expression(compiler: &mut Compiler, expression: &Expr) -> Value {
    let mut steps = vec![Step::Visit(expression)];
    let mut values: Vec<Value> = vec![];

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Number(value)) => values.push(Value::Immediate(*value)),
            Step::Visit(Expr::Unary { op, operand }) => {
                steps.push(Step::Unary(*op));
                steps.push(Step::Visit(operand));
            }
            Step::Visit(Expr::Binary { op, left, right }) => {
                // Left is lowered first, so its registers are numbered first
                steps.push(Step::Binary(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            }
            Step::Unary(op) => {
                let value = pop_value(&mut values);
                let result = match (op, value) {
                    (UnaryOp::Plus, value) => value,
                    // Immediates stay within -i64::MAX..=i64::MAX, so this never wraps
                    (UnaryOp::Minus, Value::Immediate(immediate)) => {
                        Value::Immediate(immediate.wrapping_neg())
                    }
                    (UnaryOp::Minus, register) => {
                        compiler.emit_binary(Opcode::Sub, Value::Immediate(0), register)
                    }
                };
                values.push(result);
            }
            Step::Binary(op) => {
                let rhs = pop_value(&mut values);
                let lhs = pop_value(&mut values);
                values.push(compiler.emit_binary(Opcode::from(op), lhs, rhs));
            }
        }
    }

    pop_value(&mut values)
}

fn pop_value(values: &mut Vec<Value>) -> Value {
    match values.pop() {
        Some(value) => value,
        None => unreachable!("operator applied with no operand on the value stack"),
    }
}
