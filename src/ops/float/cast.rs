//! Casts from float to the other scalar types

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::ops::float_arg;
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::float_input;

pub fn register(registry: &mut OpRegistry) {
    registry.register::<FloatToBool>();
    registry.register::<FloatToInt>();
}

/// Casts a float to a boolean: any nonzero value is true.
///
/// NaN is nonzero by IEEE inequality, so NaN casts to true.
#[derive(Default)]
pub struct FloatToBool;

impl Operation for FloatToBool {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floattobool",
            "Float to Boolean",
            OpCategory::Cast,
            "Casts a float to a boolean",
        )
        .with_tags(vec!["cast", "math", "float", "boolean"])
        .with_inputs(vec![float_input("a")])
        .with_output(PortDefinition::required("value", DataType::Boolean))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        Ok(Value::Boolean(a != 0.0))
    }
}

/// Casts a float to an integer by truncating toward zero
#[derive(Default)]
pub struct FloatToInt;

impl Operation for FloatToInt {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floattoint",
            "Float to Integer",
            OpCategory::Cast,
            "Casts a float to an integer",
        )
        .with_tags(vec!["cast", "math", "float", "integer"])
        .with_inputs(vec![float_input("a")])
        .with_output(PortDefinition::required("value", DataType::Integer))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        Ok(Value::Integer(a.trunc() as i64))
    }
}
