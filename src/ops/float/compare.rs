//! Float comparison operations
//!
//! These use exact IEEE comparison on purpose: NaN compares unequal to
//! everything, including itself, and every ordering test involving NaN is
//! false. Hosts wanting tolerance-based equality should compose it from
//! subtract, abs, and less-than nodes.

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::ops::float_pair;
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::float_input;

pub fn register(registry: &mut OpRegistry) {
    registry.register::<FloatEquals>();
    registry.register::<FloatGreater>();
    registry.register::<FloatGreaterEquals>();
    registry.register::<FloatLess>();
    registry.register::<FloatLessEquals>();
}

fn comparison(
    key: &'static str,
    display_name: &'static str,
    description: &'static str,
    tag: &'static str,
) -> OpMetadata {
    OpMetadata::new(key, display_name, OpCategory::Compare, description)
        .with_tags(vec!["condition", "float", tag])
        .with_inputs(vec![float_input("a"), float_input("b")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
}

/// Tests two floats for exact IEEE equality
#[derive(Default)]
pub struct FloatEquals;

impl Operation for FloatEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "floatequals",
            "Float Equals (==)",
            "Compares two floats",
            "equal",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Boolean(a == b))
    }
}

/// Tests a > b
#[derive(Default)]
pub struct FloatGreater;

impl Operation for FloatGreater {
    fn metadata() -> OpMetadata {
        comparison(
            "floatgreater",
            "Float Greater (>)",
            "Checks if the first float is greater than the second",
            "greater",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Boolean(a > b))
    }
}

/// Tests a >= b
#[derive(Default)]
pub struct FloatGreaterEquals;

impl Operation for FloatGreaterEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "floatgreaterequals",
            "Float Greater or Equals (>=)",
            "Checks if the first float is greater than or equal to the second",
            "greater",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Boolean(a >= b))
    }
}

/// Tests a < b
#[derive(Default)]
pub struct FloatLess;

impl Operation for FloatLess {
    fn metadata() -> OpMetadata {
        comparison(
            "floatless",
            "Float Less (<)",
            "Checks if the first float is less than the second",
            "less",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Boolean(a < b))
    }
}

/// Tests a <= b
#[derive(Default)]
pub struct FloatLessEquals;

impl Operation for FloatLessEquals {
    fn metadata() -> OpMetadata {
        comparison(
            "floatlessequals",
            "Float Less or Equals (<=)",
            "Checks if the first float is less than or equal to the second",
            "less",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Boolean(a <= b))
    }
}
