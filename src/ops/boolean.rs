//! Boolean cast, logic, and random operations

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::{bool_arg, bool_pair};

/// Register the boolean operations
pub fn register(registry: &mut OpRegistry) {
    registry.register::<BoolToInt>();
    registry.register::<BoolToFloat>();
    registry.register::<BoolNot>();
    registry.register::<BoolEquals>();
    registry.register::<BoolRand>();
}

fn bool_input(name: &'static str) -> PortDefinition {
    PortDefinition::required(name, DataType::Boolean)
        .with_description("Boolean operand")
        .with_default(Value::Boolean(true))
}

/// Casts a boolean to an integer: true becomes 1, false becomes 0
#[derive(Default)]
pub struct BoolToInt;

impl Operation for BoolToInt {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "booltoint",
            "Boolean to Integer",
            OpCategory::Cast,
            "Casts a boolean to an integer",
        )
        .with_tags(vec!["cast", "math", "boolean", "integer"])
        .with_inputs(vec![bool_input("a")])
        .with_output(PortDefinition::required("value", DataType::Integer))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = bool_arg(inputs, 0)?;
        Ok(Value::Integer(if a { 1 } else { 0 }))
    }
}

/// Casts a boolean to a float: true becomes 1.0, false becomes 0.0
#[derive(Default)]
pub struct BoolToFloat;

impl Operation for BoolToFloat {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "booltofloat",
            "Boolean to Float",
            OpCategory::Cast,
            "Casts a boolean to a float",
        )
        .with_tags(vec!["cast", "math", "boolean", "float"])
        .with_inputs(vec![bool_input("a")])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = bool_arg(inputs, 0)?;
        Ok(Value::Float(if a { 1.0 } else { 0.0 }))
    }
}

/// Inverts a boolean
#[derive(Default)]
pub struct BoolNot;

impl Operation for BoolNot {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "boolnot",
            "Boolean Not (!)",
            OpCategory::Logic,
            "Inverts a boolean",
        )
        .with_tags(vec!["logic", "math", "boolean", "not"])
        .with_inputs(vec![bool_input("a")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = bool_arg(inputs, 0)?;
        Ok(Value::Boolean(!a))
    }
}

/// Compares two booleans for equality
#[derive(Default)]
pub struct BoolEquals;

impl Operation for BoolEquals {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "boolequals",
            "Boolean Equals (==)",
            OpCategory::Logic,
            "Compares two booleans",
        )
        .with_tags(vec!["logic", "condition", "boolean", "equal"])
        .with_inputs(vec![bool_input("a"), bool_input("b")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = bool_pair(inputs)?;
        Ok(Value::Boolean(a == b))
    }
}

/// Uniform coin flip, p = 0.5
#[derive(Default)]
pub struct BoolRand;

impl Operation for BoolRand {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "boolrand",
            "Boolean Random",
            OpCategory::Random,
            "Outputs a random boolean",
        )
        .with_tags(vec!["math", "boolean", "random"])
        .with_output(PortDefinition::required("value", DataType::Boolean))
    }

    fn evaluate(_inputs: &[Value], ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        use rand::Rng;
        Ok(Value::Boolean(ctx.rng().random_bool(0.5)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> InvocationContext {
        InvocationContext::seeded(7)
    }

    #[test]
    fn test_bool_casts() {
        let mut ctx = ctx();
        assert_eq!(
            BoolToInt::evaluate(&[Value::Boolean(true)], &mut ctx).unwrap(),
            Value::Integer(1)
        );
        assert_eq!(
            BoolToInt::evaluate(&[Value::Boolean(false)], &mut ctx).unwrap(),
            Value::Integer(0)
        );
        assert_eq!(
            BoolToFloat::evaluate(&[Value::Boolean(true)], &mut ctx).unwrap(),
            Value::Float(1.0)
        );
        assert_eq!(
            BoolToFloat::evaluate(&[Value::Boolean(false)], &mut ctx).unwrap(),
            Value::Float(0.0)
        );
    }

    #[test]
    fn test_not_is_an_involution() {
        let mut ctx = ctx();
        for x in [true, false] {
            let once = BoolNot::evaluate(&[Value::Boolean(x)], &mut ctx).unwrap();
            let twice = BoolNot::evaluate(&[once], &mut ctx).unwrap();
            assert_eq!(twice, Value::Boolean(x));
        }
    }

    #[test]
    fn test_equals() {
        let mut ctx = ctx();
        let eq = |a, b, ctx: &mut InvocationContext| {
            BoolEquals::evaluate(&[Value::Boolean(a), Value::Boolean(b)], ctx).unwrap()
        };
        assert_eq!(eq(true, true, &mut ctx), Value::Boolean(true));
        assert_eq!(eq(false, false, &mut ctx), Value::Boolean(true));
        assert_eq!(eq(true, false, &mut ctx), Value::Boolean(false));
    }

    #[test]
    fn test_rand_is_deterministic_under_a_seed() {
        let mut a = InvocationContext::seeded(99);
        let mut b = InvocationContext::seeded(99);
        for _ in 0..32 {
            assert_eq!(
                BoolRand::evaluate(&[], &mut a).unwrap(),
                BoolRand::evaluate(&[], &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_metadata() {
        let meta = BoolEquals::metadata();
        assert_eq!(meta.key, "boolequals");
        assert_eq!(meta.inputs.len(), 2);
        assert_eq!(meta.output.data_type, DataType::Boolean);
        assert_eq!(BoolRand::metadata().inputs.len(), 0);
    }
}
