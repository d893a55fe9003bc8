//! Integer cast, arithmetic, comparison, and random operations
//!
//! Integers are i64. Arithmetic saturates at the type bounds instead of
//! wrapping; a graph feeding extreme values through a chain of math nodes
//! stays at the rail rather than flipping sign.

use rand::Rng;

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::{int_arg, int_pair};

/// Register the integer operations
pub fn register(registry: &mut OpRegistry) {
    registry.register::<IntToBool>();
    registry.register::<IntToFloat>();
    registry.register::<IntAdd>();
    registry.register::<IntSub>();
    registry.register::<IntMul>();
    registry.register::<IntDiv>();
    registry.register::<IntModulo>();
    registry.register::<IntAbs>();
    registry.register::<IntRand>();
    registry.register::<IntEquals>();
    registry.register::<IntGreater>();
    registry.register::<IntGreaterEquals>();
    registry.register::<IntLess>();
    registry.register::<IntLessEquals>();
}

fn int_input(name: &'static str) -> PortDefinition {
    PortDefinition::required(name, DataType::Integer)
        .with_description("Integer operand")
        .with_default(Value::Integer(0))
}

fn binary_math(
    key: &'static str,
    display_name: &'static str,
    description: &'static str,
    tag: &'static str,
) -> OpMetadata {
    OpMetadata::new(key, display_name, OpCategory::Math, description)
        .with_tags(vec!["math", "integer", tag])
        .with_inputs(vec![int_input("a"), int_input("b")])
        .with_output(PortDefinition::required("value", DataType::Integer))
}

fn comparison(
    key: &'static str,
    display_name: &'static str,
    description: &'static str,
    tag: &'static str,
) -> OpMetadata {
    OpMetadata::new(key, display_name, OpCategory::Compare, description)
        .with_tags(vec!["condition", "integer", tag])
        .with_inputs(vec![int_input("a"), int_input("b")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
}

/// Casts an integer to a boolean: any nonzero value is true
#[derive(Default)]
pub struct IntToBool;

impl Operation for IntToBool {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "inttobool",
            "Integer to Boolean",
            OpCategory::Cast,
            "Casts an integer to a boolean",
        )
        .with_tags(vec!["cast", "math", "integer", "boolean"])
        .with_inputs(vec![int_input("a")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = int_arg(inputs, 0)?;
        Ok(Value::Boolean(a != 0))
    }
}

/// Widens an integer to a float
#[derive(Default)]
pub struct IntToFloat;

impl Operation for IntToFloat {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "inttofloat",
            "Integer to Float",
            OpCategory::Cast,
            "Casts an integer to a float",
        )
        .with_tags(vec!["cast", "math", "integer", "float"])
        .with_inputs(vec![int_input("a")])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = int_arg(inputs, 0)?;
        Ok(Value::Float(a as f64))
    }
}

/// Adds two integers, saturating at the i64 bounds
#[derive(Default)]
pub struct IntAdd;

impl Operation for IntAdd {
    fn metadata() -> OpMetadata {
        binary_math("intadd", "Integer Addition (+)", "Adds two integers", "add")
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Integer(a.saturating_add(b)))
    }
}

/// Subtracts two integers, saturating at the i64 bounds
#[derive(Default)]
pub struct IntSub;

impl Operation for IntSub {
    fn metadata() -> OpMetadata {
        binary_math(
            "intsub",
            "Integer Subtraction (-)",
            "Subtracts two integers",
            "subtract",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Integer(a.saturating_sub(b)))
    }
}

/// Multiplies two integers, saturating at the i64 bounds
#[derive(Default)]
pub struct IntMul;

impl Operation for IntMul {
    fn metadata() -> OpMetadata {
        binary_math(
            "intmul",
            "Integer Multiplication (*)",
            "Multiplies two integers",
            "multiply",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Integer(a.saturating_mul(b)))
    }
}

/// Divides two integers, truncating toward zero
#[derive(Default)]
pub struct IntDiv;

impl Operation for IntDiv {
    fn metadata() -> OpMetadata {
        binary_math(
            "intdiv",
            "Integer Division (/)",
            "Divides two integers",
            "divide",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        if b == 0 {
            return Err(InvokeError::DivisionByZero);
        }
        // i64::MIN / -1 overflows; saturate like the other integer ops
        Ok(Value::Integer(a.checked_div(b).unwrap_or(i64::MAX)))
    }
}

/// Remainder of integer division, with the sign of the dividend
/// (truncated, C-style modulo)
#[derive(Default)]
pub struct IntModulo;

impl Operation for IntModulo {
    fn metadata() -> OpMetadata {
        binary_math(
            "intmodulo",
            "Integer Modulo (%)",
            "Calculates the remainder of a division as an integer",
            "modulo",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        if b == 0 {
            return Err(InvokeError::DivisionByZero);
        }
        // i64::MIN % -1 overflows in Rust; the mathematical remainder is 0
        Ok(Value::Integer(a.checked_rem(b).unwrap_or(0)))
    }
}

/// Absolute value of an integer, saturating on i64::MIN
#[derive(Default)]
pub struct IntAbs;

impl Operation for IntAbs {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "intabs",
            "Integer Absolute (abs)",
            OpCategory::Math,
            "Calculates the absolute value of an integer",
        )
        .with_tags(vec!["math", "integer", "absolute"])
        .with_inputs(vec![int_input("a")])
        .with_output(PortDefinition::required("value", DataType::Integer))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = int_arg(inputs, 0)?;
        Ok(Value::Integer(a.saturating_abs()))
    }
}

/// Uniform random integer in [low, high)
#[derive(Default)]
pub struct IntRand;

impl Operation for IntRand {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "intrand",
            "Integer Random",
            OpCategory::Random,
            "Outputs a single random integer",
        )
        .with_tags(vec!["math", "integer", "random"])
        .with_inputs(vec![
            PortDefinition::required("low", DataType::Integer)
                .with_description("The inclusive low value")
                .with_default(Value::Integer(0)),
            PortDefinition::required("high", DataType::Integer)
                .with_description("The exclusive high value")
                .with_default(Value::Integer(i32::MAX as i64)),
        ])
        .with_output(PortDefinition::required("value", DataType::Integer))
    }

    fn evaluate(inputs: &[Value], ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (low, high) = int_pair(inputs)?;
        if low >= high {
            return Err(InvokeError::InvalidRange);
        }
        Ok(Value::Integer(ctx.rng().random_range(low..high)))
    }
}

/// Tests two integers for equality
#[derive(Default)]
pub struct IntEquals;

impl Operation for IntEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "intequals",
            "Integer Equals (==)",
            "Compares two integers",
            "equal",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Boolean(a == b))
    }
}

/// Tests a > b
#[derive(Default)]
pub struct IntGreater;

impl Operation for IntGreater {
    fn metadata() -> OpMetadata {
        comparison(
            "intgreater",
            "Integer Greater (>)",
            "Checks if the first integer is greater than the second",
            "greater",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Boolean(a > b))
    }
}

/// Tests a >= b
#[derive(Default)]
pub struct IntGreaterEquals;

impl Operation for IntGreaterEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "intgreaterequals",
            "Integer Greater or Equals (>=)",
            "Checks if the first integer is greater than or equal to the second",
            "greater",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Boolean(a >= b))
    }
}

/// Tests a < b
#[derive(Default)]
pub struct IntLess;

impl Operation for IntLess {
    fn metadata() -> OpMetadata {
        comparison(
            "intless",
            "Integer Less (<)",
            "Checks if the first integer is less than the second",
            "less",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Boolean(a < b))
    }
}

/// Tests a <= b
#[derive(Default)]
pub struct IntLessEquals;

impl Operation for IntLessEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "intlessequals",
            "Integer Less or Equals (<=)",
            "Checks if the first integer is less than or equal to the second",
            "less",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = int_pair(inputs)?;
        Ok(Value::Boolean(a <= b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> InvocationContext {
        InvocationContext::seeded(7)
    }

    fn int2(a: i64, b: i64) -> [Value; 2] {
        [Value::Integer(a), Value::Integer(b)]
    }

    #[test]
    fn test_casts() {
        let mut ctx = ctx();
        assert_eq!(
            IntToBool::evaluate(&[Value::Integer(0)], &mut ctx).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            IntToBool::evaluate(&[Value::Integer(-3)], &mut ctx).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            IntToFloat::evaluate(&[Value::Integer(4)], &mut ctx).unwrap(),
            Value::Float(4.0)
        );
    }

    #[test]
    fn test_basic_arithmetic() {
        let mut ctx = ctx();
        assert_eq!(
            IntAdd::evaluate(&int2(2, 3), &mut ctx).unwrap(),
            Value::Integer(5)
        );
        assert_eq!(
            IntSub::evaluate(&int2(2, 5), &mut ctx).unwrap(),
            Value::Integer(-3)
        );
        assert_eq!(
            IntMul::evaluate(&int2(-4, 3), &mut ctx).unwrap(),
            Value::Integer(-12)
        );
        assert_eq!(
            IntAbs::evaluate(&[Value::Integer(-9)], &mut ctx).unwrap(),
            Value::Integer(9)
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let mut ctx = ctx();
        assert_eq!(
            IntAdd::evaluate(&int2(i64::MAX, 1), &mut ctx).unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            IntSub::evaluate(&int2(i64::MIN, 1), &mut ctx).unwrap(),
            Value::Integer(i64::MIN)
        );
        assert_eq!(
            IntMul::evaluate(&int2(i64::MAX, 2), &mut ctx).unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            IntAbs::evaluate(&[Value::Integer(i64::MIN)], &mut ctx).unwrap(),
            Value::Integer(i64::MAX)
        );
        assert_eq!(
            IntDiv::evaluate(&int2(i64::MIN, -1), &mut ctx).unwrap(),
            Value::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let mut ctx = ctx();
        assert_eq!(
            IntDiv::evaluate(&int2(7, 2), &mut ctx).unwrap(),
            Value::Integer(3)
        );
        assert_eq!(
            IntDiv::evaluate(&int2(-7, 2), &mut ctx).unwrap(),
            Value::Integer(-3)
        );
        assert_eq!(
            IntDiv::evaluate(&int2(7, -2), &mut ctx).unwrap(),
            Value::Integer(-3)
        );
    }

    #[test]
    fn test_division_by_zero_fails() {
        let mut ctx = ctx();
        assert_eq!(
            IntDiv::evaluate(&int2(1, 0), &mut ctx).unwrap_err(),
            InvokeError::DivisionByZero
        );
        assert_eq!(
            IntModulo::evaluate(&int2(1, 0), &mut ctx).unwrap_err(),
            InvokeError::DivisionByZero
        );
    }

    #[test]
    fn test_modulo_takes_sign_of_dividend() {
        let mut ctx = ctx();
        assert_eq!(
            IntModulo::evaluate(&int2(7, 3), &mut ctx).unwrap(),
            Value::Integer(1)
        );
        assert_eq!(
            IntModulo::evaluate(&int2(-7, 3), &mut ctx).unwrap(),
            Value::Integer(-1)
        );
        assert_eq!(
            IntModulo::evaluate(&int2(7, -3), &mut ctx).unwrap(),
            Value::Integer(1)
        );
    }

    #[test]
    fn test_div_mod_reconstruct_dividend() {
        let mut ctx = ctx();
        for (a, b) in [(17, 5), (-17, 5), (17, -5), (-17, -5)] {
            let q = IntDiv::evaluate(&int2(a, b), &mut ctx).unwrap();
            let r = IntModulo::evaluate(&int2(a, b), &mut ctx).unwrap();
            let qb = IntMul::evaluate(&[q, Value::Integer(b)], &mut ctx).unwrap();
            let back = IntAdd::evaluate(&[qb, r], &mut ctx).unwrap();
            assert_eq!(back, Value::Integer(a));
        }
    }

    #[test]
    fn test_rand_bounds() {
        let mut ctx = ctx();
        assert_eq!(
            IntRand::evaluate(&int2(5, 5), &mut ctx).unwrap_err(),
            InvokeError::InvalidRange
        );
        assert_eq!(
            IntRand::evaluate(&int2(6, 5), &mut ctx).unwrap_err(),
            InvokeError::InvalidRange
        );
        // [0, 1) has exactly one inhabitant
        for _ in 0..32 {
            assert_eq!(
                IntRand::evaluate(&int2(0, 1), &mut ctx).unwrap(),
                Value::Integer(0)
            );
        }
    }

    #[test]
    fn test_rand_stays_in_range() {
        let mut ctx = ctx();
        for _ in 0..256 {
            let v = IntRand::evaluate(&int2(-3, 4), &mut ctx).unwrap();
            let v = v.as_int().unwrap();
            assert!((-3..4).contains(&v));
        }
    }

    #[test]
    fn test_comparisons() {
        let mut ctx = ctx();
        assert_eq!(
            IntEquals::evaluate(&int2(3, 3), &mut ctx).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            IntGreater::evaluate(&int2(3, 3), &mut ctx).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            IntGreaterEquals::evaluate(&int2(3, 3), &mut ctx).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            IntLess::evaluate(&int2(-1, 3), &mut ctx).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            IntLessEquals::evaluate(&int2(4, 3), &mut ctx).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn test_metadata() {
        let meta = IntDiv::metadata();
        assert_eq!(meta.key, "intdiv");
        assert_eq!(meta.inputs.len(), 2);
        assert_eq!(meta.inputs[0].name, "a");
        assert_eq!(meta.inputs[0].data_type, DataType::Integer);
        assert_eq!(meta.output.data_type, DataType::Integer);

        let meta = IntRand::metadata();
        assert_eq!(meta.inputs[0].name, "low");
        assert_eq!(meta.inputs[1].name, "high");
    }
}
