//! Float cast, arithmetic, rounding, transcendental, comparison, and random
//! operations
//!
//! Floats are IEEE-754 doubles throughout. Where a mathematical domain is
//! limited (sqrt, log, inverse trig) the operation fails instead of letting
//! a NaN leak into the graph; the one deliberate exception is comparison,
//! which keeps exact IEEE semantics (NaN compares unequal to everything).

pub mod arithmetic;
pub mod cast;
pub mod compare;
pub mod rounding;
pub mod transcendental;

pub use arithmetic::{FloatAbs, FloatAdd, FloatDiv, FloatModulo, FloatMul, FloatRand, FloatSub};
pub use cast::{FloatToBool, FloatToInt};
pub use compare::{FloatEquals, FloatGreater, FloatGreaterEquals, FloatLess, FloatLessEquals};
pub use rounding::{FloatCeil, FloatFloor, FloatRound, FloatRoundToMultiple};
pub use transcendental::{
    FloatAcos, FloatAcosh, FloatAsin, FloatAsinh, FloatAtan, FloatAtanh, FloatCos, FloatCosh,
    FloatLog, FloatLogN, FloatPow, FloatSin, FloatSinh, FloatSqrt, FloatTan, FloatTanh,
};

use crate::registry::{OpRegistry, PortDefinition};
use crate::value::{DataType, Value};

/// Register the float operations
pub fn register(registry: &mut OpRegistry) {
    cast::register(registry);
    arithmetic::register(registry);
    rounding::register(registry);
    transcendental::register(registry);
    compare::register(registry);
}

fn float_input(name: &'static str) -> PortDefinition {
    PortDefinition::required(name, DataType::Float)
        .with_description("Float operand")
        .with_default(Value::Float(0.0))
}
