//! node-essentials - scalar operation nodes for node-graph engines
//!
//! A flat catalog of stateless scalar operations (boolean, integer, float:
//! casts, arithmetic, comparisons, trigonometry, randomization), each
//! identified by a unique string key. A host node-graph engine owns graph
//! construction, scheduling, and dispatch; this crate owns the operation
//! contracts and their mathematical definitions.
//!
//! ```
//! use node_essentials::{builtin_registry, InvocationContext, Value};
//!
//! let mut ctx = InvocationContext::seeded(1);
//! let sum = builtin_registry()
//!     .invoke("intadd", &[Value::Integer(2), Value::Integer(3)], &mut ctx)
//!     .unwrap();
//! assert_eq!(sum, Value::Integer(5));
//! ```

pub mod context;
pub mod error;
pub mod ops;
pub mod registry;
pub mod value;

// Re-export core types
pub use context::InvocationContext;
pub use error::InvokeError;
pub use value::{DataType, Value};

// Re-export registry types
pub use registry::{
    builtin_registry, OpCategory, OpMetadata, Operation, OpRegistry, PortDefinition,
};
