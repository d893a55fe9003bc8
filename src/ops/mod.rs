//! The operation catalog
//!
//! One module per input scalar type, mirroring how hosts group the nodes in
//! their menus. Every operation is a pure function from one or two scalars
//! (or none, for the random sources) to one scalar.

pub mod boolean;
pub mod float;
pub mod integer;

use crate::error::InvokeError;
use crate::registry::OpRegistry;
use crate::value::Value;

/// Register the whole builtin catalog on a registry
pub fn register_all(registry: &mut OpRegistry) {
    boolean::register(registry);
    integer::register(registry);
    float::register(registry);
}

fn arg(inputs: &[Value], index: usize) -> Result<&Value, InvokeError> {
    inputs.get(index).ok_or(InvokeError::ArityMismatch {
        expected: index + 1,
        got: inputs.len(),
    })
}

pub(crate) fn bool_arg(inputs: &[Value], index: usize) -> Result<bool, InvokeError> {
    arg(inputs, index)?.as_bool()
}

pub(crate) fn int_arg(inputs: &[Value], index: usize) -> Result<i64, InvokeError> {
    arg(inputs, index)?.as_int()
}

pub(crate) fn float_arg(inputs: &[Value], index: usize) -> Result<f64, InvokeError> {
    arg(inputs, index)?.as_float()
}

pub(crate) fn bool_pair(inputs: &[Value]) -> Result<(bool, bool), InvokeError> {
    Ok((bool_arg(inputs, 0)?, bool_arg(inputs, 1)?))
}

pub(crate) fn int_pair(inputs: &[Value]) -> Result<(i64, i64), InvokeError> {
    Ok((int_arg(inputs, 0)?, int_arg(inputs, 1)?))
}

pub(crate) fn float_pair(inputs: &[Value]) -> Result<(f64, f64), InvokeError> {
    Ok((float_arg(inputs, 0)?, float_arg(inputs, 1)?))
}
