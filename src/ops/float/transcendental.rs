//! Power, root, logarithm, trigonometric, and hyperbolic operations
//!
//! Angles are radians in and out. Domain-limited functions (sqrt, log,
//! asin, acos, acosh, atanh) fail with a domain error rather than silently
//! returning NaN.

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::ops::{float_arg, int_arg};
use crate::registry::{OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

use super::float_input;

pub fn register(registry: &mut OpRegistry) {
    registry.register::<FloatPow>();
    registry.register::<FloatSqrt>();
    registry.register::<FloatLog>();
    registry.register::<FloatLogN>();
    registry.register::<FloatSin>();
    registry.register::<FloatCos>();
    registry.register::<FloatTan>();
    registry.register::<FloatSinh>();
    registry.register::<FloatCosh>();
    registry.register::<FloatTanh>();
    registry.register::<FloatAsin>();
    registry.register::<FloatAcos>();
    registry.register::<FloatAtan>();
    registry.register::<FloatAsinh>();
    registry.register::<FloatAcosh>();
    registry.register::<FloatAtanh>();
}

/// Defines a single-argument transcendental operation. The body yields a
/// `Result<f64, InvokeError>` so domain checks live next to the math.
macro_rules! transcendental {
    ($name:ident, $key:literal, $display:literal, $desc:literal, $tag:literal,
     |$a:ident| $body:expr) => {
        #[doc = $desc]
        #[derive(Default)]
        pub struct $name;

        impl Operation for $name {
            fn metadata() -> OpMetadata {
                OpMetadata::new($key, $display, OpCategory::Math, $desc)
                    .with_tags(vec!["math", "float", $tag])
                    .with_inputs(vec![float_input("a")])
                    .with_output(PortDefinition::required("value", DataType::Float))
            }

            fn evaluate(
                inputs: &[Value],
                _ctx: &mut InvocationContext,
            ) -> Result<Value, InvokeError> {
                let $a = float_arg(inputs, 0)?;
                $body.map(Value::Float)
            }
        }
    };
}

transcendental!(
    FloatSqrt,
    "floatsqrt",
    "Float Square Root (sqrt)",
    "Calculates the square root of a float",
    "sqrt",
    |a| if a < 0.0 {
        Err(InvokeError::InvalidDomain {
            reason: "sqrt requires a non-negative argument",
        })
    } else {
        Ok(a.sqrt())
    }
);

transcendental!(
    FloatLog,
    "floatlog",
    "Float Natural Logarithm (ln)",
    "Calculates the natural logarithm of a float",
    "logarithm",
    |a| if a <= 0.0 {
        Err(InvokeError::InvalidDomain {
            reason: "log requires a positive argument",
        })
    } else {
        Ok(a.ln())
    }
);

transcendental!(
    FloatSin,
    "floatsin",
    "Float Sine (sin)",
    "Calculates the sine of a float as radians",
    "sine",
    |a| Ok(a.sin())
);

transcendental!(
    FloatCos,
    "floatcos",
    "Float Cosine (cos)",
    "Calculates the cosine of a float as radians",
    "cosine",
    |a| Ok(a.cos())
);

transcendental!(
    FloatTan,
    "floattan",
    "Float Tangent (tan)",
    "Calculates the tangent of a float as radians",
    "tangent",
    |a| Ok(a.tan())
);

transcendental!(
    FloatSinh,
    "floatsinh",
    "Float Hyperbolic Sine (sinh)",
    "Calculates the hyperbolic sine of a float",
    "sine",
    |a| Ok(a.sinh())
);

transcendental!(
    FloatCosh,
    "floatcosh",
    "Float Hyperbolic Cosine (cosh)",
    "Calculates the hyperbolic cosine of a float",
    "cosine",
    |a| Ok(a.cosh())
);

transcendental!(
    FloatTanh,
    "floattanh",
    "Float Hyperbolic Tangent (tanh)",
    "Calculates the hyperbolic tangent of a float",
    "tangent",
    |a| Ok(a.tanh())
);

transcendental!(
    FloatAsin,
    "floatasin",
    "Float Arcsine (asin)",
    "Calculates the arcsine of a float in radians",
    "arcsine",
    |a| if !(-1.0..=1.0).contains(&a) {
        Err(InvokeError::InvalidDomain {
            reason: "asin requires an argument in [-1, 1]",
        })
    } else {
        Ok(a.asin())
    }
);

transcendental!(
    FloatAcos,
    "floatacos",
    "Float Arccosine (acos)",
    "Calculates the arccosine of a float in radians",
    "arccosine",
    |a| if !(-1.0..=1.0).contains(&a) {
        Err(InvokeError::InvalidDomain {
            reason: "acos requires an argument in [-1, 1]",
        })
    } else {
        Ok(a.acos())
    }
);

transcendental!(
    FloatAtan,
    "floatatan",
    "Float Arctangent (atan)",
    "Calculates the arctangent of a float in radians",
    "arctangent",
    |a| Ok(a.atan())
);

transcendental!(
    FloatAsinh,
    "floatasinh",
    "Float Hyperbolic Arcsine (asinh)",
    "Calculates the hyperbolic arcsine of a float",
    "arcsine",
    |a| Ok(a.asinh())
);

transcendental!(
    FloatAcosh,
    "floatacosh",
    "Float Hyperbolic Arccosine (acosh)",
    "Calculates the hyperbolic arccosine of a float",
    "arccosine",
    |a| if a < 1.0 {
        Err(InvokeError::InvalidDomain {
            reason: "acosh requires an argument of at least 1",
        })
    } else {
        Ok(a.acosh())
    }
);

transcendental!(
    FloatAtanh,
    "floatatanh",
    "Float Hyperbolic Arctangent (atanh)",
    "Calculates the hyperbolic arctangent of a float",
    "arctangent",
    |a| if a.abs() >= 1.0 {
        Err(InvokeError::InvalidDomain {
            reason: "atanh requires an argument strictly inside (-1, 1)",
        })
    } else {
        Ok(a.atanh())
    }
);

/// Raises a float to an integer power
#[derive(Default)]
pub struct FloatPow;

impl Operation for FloatPow {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floatpow",
            "Float Power (pow)",
            OpCategory::Math,
            "Raises a float to an integer power",
        )
        .with_tags(vec!["math", "float", "power"])
        .with_inputs(vec![
            float_input("a"),
            PortDefinition::required("b", DataType::Integer)
                .with_description("The exponent")
                .with_default(Value::Integer(2)),
        ])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        let b = int_arg(inputs, 1)?;
        Ok(Value::Float(a.powf(b as f64)))
    }
}

/// Logarithm of a float in an integer base
#[derive(Default)]
pub struct FloatLogN;

impl Operation for FloatLogN {
    fn metadata() -> OpMetadata {
        OpMetadata::new(
            "floatlogn",
            "Float Logarithm Base N (log)",
            OpCategory::Math,
            "Calculates the logarithm of a float in base n",
        )
        .with_tags(vec!["math", "float", "logarithm"])
        .with_inputs(vec![
            float_input("a"),
            PortDefinition::required("n", DataType::Integer)
                .with_description("The logarithm base")
                .with_default(Value::Integer(10)),
        ])
        .with_output(PortDefinition::required("value", DataType::Float))
    }

    fn evaluate(inputs: &[Value], _ctx: &mut InvocationContext) -> Result<Value, InvokeError> {
        let a = float_arg(inputs, 0)?;
        let n = int_arg(inputs, 1)?;
        if a <= 0.0 {
            return Err(InvokeError::InvalidDomain {
                reason: "log requires a positive argument",
            });
        }
        if n <= 0 || n == 1 {
            return Err(InvokeError::InvalidDomain {
                reason: "log base must be positive and not 1",
            });
        }
        Ok(Value::Float(a.ln() / (n as f64).ln()))
    }
}
