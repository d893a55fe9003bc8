//! Float arithmetic and the float random source
//!
//! Division and modulo fail on a zero divisor instead of producing IEEE
//! infinities or NaN, so both integer and float math paths share one error
//! contract.

use rand::Rng;

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::ops::{float_arg, float_pair};
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::float_input;

pub fn register(registry: &mut OpRegistry) {
    registry.register::<FloatAdd>();
    registry.register::<FloatSub>();
    registry.register::<FloatMul>();
    registry.register::<FloatDiv>();
    registry.register::<FloatModulo>();
    registry.register::<FloatAbs>();
    registry.register::<FloatRand>();
}

fn binary_math(
    key: &'static str,
    display_name: &'static str,
    description: &'static str,
    tag: &'static str,
) -> OpMetadata {
    OpMetadata::new(key, display_name, OpCategory::Math, description)
        .with_tags(vec!["math", "float", tag])
        .with_inputs(vec![float_input("a"), float_input("b")])
        .with_output(PortDefinition::required("value", DataType::Float))
}

/// Adds two floats
#[derive(Default)]
pub struct FloatAdd;

impl Operation for FloatAdd {
    fn metadata() -> OpMetadata {
        binary_math(
            "floatadd",
            "Float Addition (+)",
            "Adds two floating point numbers",
            "add",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Float(a + b))
    }
}

/// Subtracts two floats
#[derive(Default)]
pub struct FloatSub;

impl Operation for FloatSub {
    fn metadata() -> OpMetadata {
        binary_math(
            "floatsub",
            "Float Subtraction (-)",
            "Subtracts two floating point numbers",
            "subtract",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Float(a - b))
    }
}

/// Multiplies two floats
#[derive(Default)]
pub struct FloatMul;

impl Operation for FloatMul {
    fn metadata() -> OpMetadata {
        binary_math(
            "floatmul",
            "Float Multiplication (*)",
            "Multiplies two floating point numbers",
            "multiply",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        Ok(Value::Float(a * b))
    }
}

/// Divides two floats, failing on a zero divisor
#[derive(Default)]
pub struct FloatDiv;

impl Operation for FloatDiv {
    fn metadata() -> OpMetadata {
        binary_math(
            "floatdiv",
            "Float Division (/)",
            "Divides two floating point numbers",
            "divide",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        if b == 0.0 {
            return Err(InvokeError::DivisionByZero);
        }
        Ok(Value::Float(a / b))
    }
}

/// Remainder of float division, with the sign of the dividend
/// (truncated, C-style modulo)
#[derive(Default)]
pub struct FloatModulo;

impl Operation for FloatModulo {
    fn metadata() -> OpMetadata {
        binary_math(
            "floatmodulo",
            "Float Modulo (%)",
            "Calculates the remainder of a division as a float",
            "modulo",
        )
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (a, b) = float_pair(inputs)?;
        if b == 0.0 {
            return Err(InvokeError::DivisionByZero);
        }
        Ok(Value::Float(a % b))
    }
}

/// Absolute value of a float
#[derive(Default)]
pub struct FloatAbs;

impl Operation for FloatAbs {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floatabs",
            "Float Absolute (abs)",
            OpCategory::Math,
            "Calculates the absolute value of a float",
        )
        .with_tags(vec!["math", "float", "absolute"])
        .with_inputs(vec![float_input("a")])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        Ok(Value::Float(a.abs()))
    }
}

/// Uniform random float in [low, high)
#[derive(Default)]
pub struct FloatRand;

impl Operation for FloatRand {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floatrand",
            "Float Random",
            OpCategory::Random,
            "Outputs a single random floating point number",
        )
        .with_tags(vec!["math", "float", "random"])
        .with_inputs(vec![
            PortDefinition::required("low", DataType::Float)
                .with_description("The inclusive low value")
                .with_default(Value::Float(0.0)),
            PortDefinition::required("high", DataType::Float)
                .with_description("The exclusive high value")
                .with_default(Value::Float(1.0)),
        ])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let (low, high) = float_pair(inputs)?;
        // The sampler needs finite bounds and a finite span; a NaN or
        // infinite bound, or a span like f64::MIN..f64::MAX that overflows
        // to infinity, must come back as an error, not a panic.
        if !low.is_finite() || !high.is_finite() || !(high - low).is_finite() || !(low < high) {
            return Err(InvokeError::InvalidRange);
        }
        Ok(Value::Float(ctx.rng().random_range(low..high)))
    }
}
