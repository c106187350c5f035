//! Arithmetic and concatenation primitives
//!
//! The interpreter never looks inside slot values. Binary operators hand two
//! strings to an [`ArithmeticPrimitives`] implementation and store whatever
//! string comes back.

use std::fmt;

/// Binary operations available to operator families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Concat,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Primitive {
    /// All primitives in operator table order
    pub const ALL: [Primitive; 5] = [
        Primitive::Concat,
        Primitive::Add,
        Primitive::Subtract,
        Primitive::Multiply,
        Primitive::Divide,
    ];
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Concat => write!(f, "concat"),
            Primitive::Add => write!(f, "add"),
            Primitive::Subtract => write!(f, "subtract"),
            Primitive::Multiply => write!(f, "multiply"),
            Primitive::Divide => write!(f, "divide"),
        }
    }
}

/// Provider of the five binary operations over string values
pub trait ArithmeticPrimitives {
    /// Apply `op` to `(left, right)` and return the value to store
    fn apply(&self, op: Primitive, left: &str, right: &str) -> String;
}

impl<T: ArithmeticPrimitives + ?Sized> ArithmeticPrimitives for &T {
    fn apply(&self, op: Primitive, left: &str, right: &str) -> String {
        (**self).apply(op, left, right)
    }
}

/// Default numeric model.
///
/// Operands are trimmed and parsed as `i64`, then as `f64`; empty or
/// non-numeric text counts as `0`. Integer operations that overflow are
/// redone in floating point. Division by zero yields the empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPrimitives;

impl ArithmeticPrimitives for StandardPrimitives {
    fn apply(&self, op: Primitive, left: &str, right: &str) -> String {
        match op {
            Primitive::Concat => {
                let mut out = String::with_capacity(left.len() + right.len());
                out.push_str(left);
                out.push_str(right);
                out
            }
            Primitive::Add => arithmetic(left, right, i64::checked_add, |a, b| a + b),
            Primitive::Subtract => arithmetic(left, right, i64::checked_sub, |a, b| a - b),
            Primitive::Multiply => arithmetic(left, right, i64::checked_mul, |a, b| a * b),
            Primitive::Divide => divide(Number::parse(left), Number::parse(right)),
        }
    }
}

/// Numeric view of a slot value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Number::Int(0);
        }
        if let Ok(i) = text.parse::<i64>() {
            return Number::Int(i);
        }
        text.parse::<f64>().map(Number::Float).unwrap_or(Number::Int(0))
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

fn arithmetic(
    left: &str,
    right: &str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> String {
    let (a, b) = (Number::parse(left), Number::parse(right));
    let result = match (a, b) {
        (Number::Int(x), Number::Int(y)) => int_op(x, y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(float_op(x as f64, y as f64))),
        _ => Number::Float(float_op(a.as_f64(), b.as_f64())),
    };
    result.to_string()
}

fn divide(a: Number, b: Number) -> String {
    if b.is_zero() {
        return String::new();
    }
    let result = match (a, b) {
        (Number::Int(x), Number::Int(y)) if x.checked_rem(y) == Some(0) => x
            .checked_div(y)
            .map(Number::Int)
            .unwrap_or_else(|| Number::Float(x as f64 / y as f64)),
        _ => Number::Float(a.as_f64() / b.as_f64()),
    };
    result.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: Primitive, left: &str, right: &str) -> String {
        StandardPrimitives.apply(op, left, right)
    }

    #[test]
    fn test_concat_keeps_operands_verbatim() {
        assert_eq!(apply(Primitive::Concat, "ab", "cd"), "abcd");
        assert_eq!(apply(Primitive::Concat, " 1\n", "2"), " 1\n2");
        assert_eq!(apply(Primitive::Concat, "", ""), "");
    }

    #[test]
    fn test_empty_operands_are_zero() {
        assert_eq!(apply(Primitive::Add, "", ""), "0");
        assert_eq!(apply(Primitive::Subtract, "", "3"), "-3");
        assert_eq!(apply(Primitive::Multiply, "", "7"), "0");
    }

    #[test]
    fn test_integer_arithmetic() {
        assert_eq!(apply(Primitive::Add, "2", "3"), "5");
        assert_eq!(apply(Primitive::Subtract, "2", "3"), "-1");
        assert_eq!(apply(Primitive::Multiply, "-4", "3"), "-12");
    }

    #[test]
    fn test_operands_are_trimmed() {
        assert_eq!(apply(Primitive::Add, "2\n", " 3 "), "5");
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(apply(Primitive::Add, "abc", "4"), "4");
    }

    #[test]
    fn test_float_arithmetic() {
        assert_eq!(apply(Primitive::Add, "1.5", "1"), "2.5");
        assert_eq!(apply(Primitive::Multiply, "0.5", "4"), "2");
    }

    #[test]
    fn test_overflow_falls_back_to_float() {
        let result = apply(Primitive::Add, &i64::MAX.to_string(), "1");
        assert_eq!(result, (i64::MAX as f64 + 1.0).to_string());
    }

    #[test]
    fn test_division() {
        assert_eq!(apply(Primitive::Divide, "6", "3"), "2");
        assert_eq!(apply(Primitive::Divide, "7", "2"), "3.5");
        assert_eq!(apply(Primitive::Divide, "1.5", "0.5"), "3");
    }

    #[test]
    fn test_division_by_zero_is_empty() {
        assert_eq!(apply(Primitive::Divide, "6", "0"), "");
        assert_eq!(apply(Primitive::Divide, "6", ""), "");
        assert_eq!(apply(Primitive::Divide, "6", "0.0"), "");
    }

    #[test]
    fn test_operand_order_matters() {
        assert_eq!(apply(Primitive::Subtract, "10", "4"), "6");
        assert_eq!(apply(Primitive::Subtract, "4", "10"), "-6");
        assert_eq!(apply(Primitive::Concat, "x", "y"), "xy");
        assert_eq!(apply(Primitive::Concat, "y", "x"), "yx");
    }
}
