//! Float-to-integer rounding operations
//!
//! All four return Integer. Round uses the half-up convention: ties go
//! toward positive infinity, so 2.5 rounds to 3 and -2.5 rounds to -2.

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::ops::{float_arg, float_pair};
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::float_input;

pub fn register(registry: &mut OpRegistry) {
    registry.register::<FloatRound>();
    registry.register::<FloatCeil>();
    registry.register::<FloatFloor>();
    registry.register::<FloatRoundToMultiple>();
}

fn rounding(
    key: &'static str,
    display_name: &'static str,
    description: &'static str,
    tag: &'static str,
) -> OpMetadata {
    OpMetadata::new(key, display_name, OpCategory::Math, description)
        .with_tags(vec!["math", "float", "integer", tag])
        .with_inputs(vec![float_input("a")])
        .with_output(PortDefinition::required("value", DataType::Integer))
}

/// Rounds a float half-up and casts to an integer
#[derive(Default)]
pub struct FloatRound;

impl Operation for FloatRound {
    fn metadata() -> OpMetadata {
        rounding(
            "floatround",
            "Float Round (round)",
            "Rounds a float and casts to an integer",
            "round",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        // round() is half-away-from-zero; only negative halves differ under
        // half-up, and .5 fractions are exactly representable so the fract
        // test is exact. Adding 0.5 up front would double-round at 2^52.
        let rounded = if a.fract() == -0.5 { a + 0.5 } else { a.round() };
        Ok(Value::Integer(rounded as i64))
    }
}

/// Rounds a float up and casts to an integer
#[derive(Default)]
pub struct FloatCeil;

impl Operation for FloatCeil {
    fn metadata() -> OpMetadata {
        rounding(
            "floatceil",
            "Float Ceiling (ceil)",
            "Rounds a float up and casts to an integer",
            "ceiling",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        Ok(Value::Integer(a.ceil() as i64))
    }
}

/// Rounds a float down and casts to an integer
#[derive(Default)]
pub struct FloatFloor;

impl Operation for FloatFloor {
    fn metadata() -> OpMetadata {
        rounding(
            "floatfloor",
            "Float Floor (floor)",
            "Rounds a float down and casts to an integer",
            "floor",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        Ok(Value::Integer(a.floor() as i64))
    }
}

/// Rounds a float down to the nearest multiple of n: floor(a / n) * n,
/// truncated to an integer
#[derive(Default)]
pub struct FloatRoundToMultiple;

impl Operation for FloatRoundToMultiple {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floatroundtomultiple",
            "Float Round to Multiple",
            OpCategory::Math,
            "Rounds a float down to the nearest multiple of n",
        )
        .with_tags(vec!["math", "float", "integer", "round", "multiple"])
        .with_inputs(vec![
            float_input("a"),
            PortDefinition::required("n", DataType::Float)
                .with_description("The multiple to round down to")
                .with_default(Value::Float(1.0)),
        ])
        .with_output(PortDefinition::required("value", DataType::Integer))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, n) = float_pair(inputs)?;
        if n == 0.0 {
            return Err(InvokeError::DivisionByZero);
        }
        Ok(Value::Integer(((a / n).floor() * n).trunc() as i64))
    }
}
