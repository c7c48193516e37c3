// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;

use crate::ast::Value;
use crate::error::SigilError;

/// Constants visible to expressions within one parse frame.
pub type ConstantTable = HashMap<String, Number>;

/// A numeric operand on the evaluation stack.
///
/// Integer arithmetic stays integral; `sqrt()` and any operation touching
/// a `Float` produce a `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            // Integer overflow degrades to float arithmetic instead of wrapping.
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 + b as f64)),
            _ => Number::Float(self.as_f64() + rhs.as_f64()),
        }
    }

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 - b as f64)),
            _ => Number::Float(self.as_f64() - rhs.as_f64()),
        }
    }

    /// `None` marks an integer remainder with a zero divisor. Float
    /// remainder keeps IEEE semantics (NaN on a zero divisor).
    fn rem(self, rhs: Number) -> Option<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => {
                if b == 0 {
                    None
                } else {
                    // wrapping_rem: i64::MIN % -1 is 0, not a fault
                    Some(Number::Int(a.wrapping_rem(b)))
                }
            }
            _ => Some(Number::Float(self.as_f64() % rhs.as_f64())),
        }
    }

    fn sqrt(self) -> Number {
        Number::Float(self.as_f64().sqrt())
    }

    /// Largest of the three, keeping the winning operand's tag. Ties go to
    /// the latest operand, so `3.0` and `3` tie in favor of whichever was
    /// pushed later.
    fn max3(self, second: Number, third: Number) -> Number {
        let mut best = self;
        for cand in [second, third] {
            if cand.as_f64() >= best.as_f64() {
                best = cand;
            }
        }
        best
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

/// Evaluate one postfix expression against a constant table.
///
/// Tokens are whitespace-separated and processed left to right over a value
/// stack: digit runs push integers, known constant names push their bound
/// value, and operators pop their operands and push one result. `max()`
/// pops exactly three operands. Tokens that match nothing are ignored.
///
/// When the stack ends up holding more than one value, the earliest-pushed
/// one is the result and the rest are abandoned.
pub fn evaluate(expr: &str, constants: &ConstantTable) -> Result<Number, SigilError> {
    let mut stack: Vec<Number> = Vec::new();

    for token in expr.split_whitespace() {
        if is_integer_literal(token) {
            // Digit runs beyond i64 fall through as unrecognized tokens.
            if let Ok(n) = token.parse::<i64>() {
                stack.push(Number::Int(n));
            }
        } else if let Some(&value) = constants.get(token) {
            stack.push(value);
        } else {
            match token {
                "+" => {
                    let b = pop(&mut stack, token, expr)?;
                    let a = pop(&mut stack, token, expr)?;
                    stack.push(a.add(b));
                }
                "-" => {
                    let b = pop(&mut stack, token, expr)?;
                    let a = pop(&mut stack, token, expr)?;
                    stack.push(a.sub(b));
                }
                "mod()" => {
                    let b = pop(&mut stack, token, expr)?;
                    let a = pop(&mut stack, token, expr)?;
                    let rem = a.rem(b).ok_or_else(|| SigilError::RemainderByZero {
                        expr: expr.to_string(),
                        hint: Some("The divisor operand evaluated to zero".into()),
                        code: Some(103),
                    })?;
                    stack.push(rem);
                }
                "sqrt()" => {
                    let x = pop(&mut stack, token, expr)?;
                    stack.push(x.sqrt());
                }
                "max()" => {
                    let c = pop(&mut stack, token, expr)?;
                    let b = pop(&mut stack, token, expr)?;
                    let a = pop(&mut stack, token, expr)?;
                    stack.push(a.max3(b, c));
                }
                _ => {}
            }
        }
    }

    stack.into_iter().next().ok_or_else(|| SigilError::EmptyResult {
        expr: expr.to_string(),
        hint: Some("An expression must leave a value on the stack".into()),
        code: Some(102),
    })
}

fn is_integer_literal(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

fn pop(stack: &mut Vec<Number>, token: &str, expr: &str) -> Result<Number, SigilError> {
    stack.pop().ok_or_else(|| SigilError::StackUnderflow {
        token: token.to_string(),
        expr: expr.to_string(),
        hint: Some("Check the operand count before this operator".into()),
        code: Some(101),
    })
}

// -- Tests --
