//! Operation metadata and the dispatch registry
//!
//! Every operation in the catalog describes itself through [`OpMetadata`] and
//! registers a plain function pointer for evaluation. Descriptors are built
//! once and never mutated; entries hold no state, so a registry can be shared
//! freely across threads.

use std::collections::{BTreeMap, HashMap};

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::context::InvocationContext;
use crate::error::InvokeError;
use crate::value::{DataType, Value};

/// Flat category system for organizing operations in host menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpCategory {
    /// Conversions between scalar types
    Cast,
    /// Boolean logic
    Logic,
    /// Arithmetic and transcendental math
    Math,
    /// Ordering and equality tests
    Compare,
    /// Pseudo-random sources
    Random,
}

impl OpCategory {
    /// Get a human-readable name for this category
    pub fn name(&self) -> &'static str {
        match self {
            OpCategory::Cast => "Cast",
            OpCategory::Logic => "Logic",
            OpCategory::Math => "Math",
            OpCategory::Compare => "Compare",
            OpCategory::Random => "Random",
        }
    }
}

/// Port definition for operation inputs and outputs
#[derive(Debug, Clone)]
pub struct PortDefinition {
    pub name: &'static str,
    pub data_type: DataType,
    pub description: Option<&'static str>,
    /// Default the host should pre-fill when the port is unconnected
    pub default: Option<Value>,
}

impl PortDefinition {
    /// Create a port definition
    pub fn required(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            description: None,
            default: None,
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Add a default value to port
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }
}

/// Rich metadata for operations - the single source of truth for an
/// operation's identity and interface
#[derive(Debug, Clone)]
pub struct OpMetadata {
    /// Unique string key the host dispatches on
    pub key: &'static str,
    /// Display name for host menus
    pub display_name: &'static str,
    /// One-line description of the operation
    pub description: &'static str,
    /// Category for menu organization
    pub category: OpCategory,
    /// Search tags
    pub tags: Vec<&'static str>,
    /// Declared inputs, in call order
    pub inputs: Vec<PortDefinition>,
    /// The single output every operation produces
    pub output: PortDefinition,
}

impl OpMetadata {
    /// Create operation metadata with no inputs declared yet
    pub fn new(
        key: &'static str,
        display_name: &'static str,
        category: OpCategory,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            display_name,
            description,
            category,
            tags: vec![],
            inputs: vec![],
            output: PortDefinition::required("value", DataType::Float),
        }
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_output(mut self, output: PortDefinition) -> Self {
        self.output = output;
        self
    }
}

/// An operation in the catalog: static metadata plus a pure evaluator.
///
/// Evaluators take their inputs positionally, in the order the metadata
/// declares them, and return exactly one scalar. They hold no state; the
/// only ambient service is the context's random generator.
pub trait Operation: Send + Sync {
    /// Get the operation's metadata
    fn metadata() -> OpMetadata
    where
        Self: Sized;

    /// Evaluate the operation on the given inputs
    fn evaluate(inputs: &[Value], ctx: &mut InvocationContext) -> Result<Value, InvokeError>
    where
        Self: Sized;
}

/// Function pointer types backing registry entries
type Evaluator = fn(&[Value], &mut InvocationContext) -> Result<Value, InvokeError>;
type MetadataProvider = fn() -> OpMetadata;

struct OpEntry {
    metadata: MetadataProvider,
    evaluate: Evaluator,
}

/// Registry for managing the operation catalog
pub struct OpRegistry {
    entries: BTreeMap<&'static str, OpEntry>,
    categories: HashMap<OpCategory, Vec<&'static str>>,
}

impl OpRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Create a registry pre-loaded with the whole builtin catalog
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::ops::register_all(&mut registry);
        registry
    }

    /// Register an operation
    pub fn register<T: Operation + 'static>(&mut self) {
        let metadata = T::metadata();
        debug!("Registering operation: {}", metadata.key);

        let previous = self.entries.insert(
            metadata.key,
            OpEntry {
                metadata: T::metadata,
                evaluate: T::evaluate,
            },
        );
        if previous.is_some() {
            // Entry replaced; the key is already in the category index
            warn!("Operation key registered twice: {}", metadata.key);
        } else {
            self.categories
                .entry(metadata.category)
                .or_default()
                .push(metadata.key);
        }
    }

    /// Get metadata for an operation by key
    pub fn metadata(&self, key: &str) -> Option<OpMetadata> {
        self.entries.get(key).map(|entry| (entry.metadata)())
    }

    /// Check whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get all registered keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Get the keys registered under a category
    pub fn keys_in_category(&self, category: OpCategory) -> &[&'static str] {
        self.categories
            .get(&category)
            .map(|keys| keys.as_slice())
            .unwrap_or(&[])
    }

    /// Invoke an operation by key.
    ///
    /// Inputs are validated against the operation's declared ports (arity
    /// and data type) before the evaluator runs, so evaluators can assume a
    /// well-typed input slice.
    pub fn invoke(
        &self,
        key: &str,
        inputs: &[Value],
        ctx: &mut InvocationContext,
    ) -> Result<Value, InvokeError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| InvokeError::UnknownOperation(key.to_string()))?;

        let metadata = (entry.metadata)();
        if inputs.len() != metadata.inputs.len() {
            return Err(InvokeError::ArityMismatch {
                expected: metadata.inputs.len(),
                got: inputs.len(),
            });
        }
        for (port, value) in metadata.inputs.iter().zip(inputs) {
            if value.data_type() != port.data_type {
                return Err(InvokeError::TypeMismatch {
                    expected: port.data_type,
                    got: value.data_type(),
                });
            }
        }

        debug!("Invoking operation: {}", key);
        (entry.evaluate)(inputs, ctx)
    }
}

impl Default for OpRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

static BUILTINS: Lazy<OpRegistry> = Lazy::new(OpRegistry::with_builtins);

/// Shared registry holding the builtin catalog
pub fn builtin_registry() -> &'static OpRegistry {
    &BUILTINS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_unknown_key() {
        let registry = OpRegistry::new();
        let mut ctx = InvocationContext::seeded(0);
        let err = registry.invoke("nosuchop", &[], &mut ctx).unwrap_err();
        assert_eq!(err, InvokeError::UnknownOperation("nosuchop".to_string()));
    }

    #[test]
    fn test_invoke_validates_arity() {
        let registry = OpRegistry::with_builtins();
        let mut ctx = InvocationContext::seeded(0);
        let err = registry
            .invoke("intadd", &[Value::Integer(1)], &mut ctx)
            .unwrap_err();
        assert_eq!(err, InvokeError::ArityMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn test_invoke_validates_types() {
        let registry = OpRegistry::with_builtins();
        let mut ctx = InvocationContext::seeded(0);
        let err = registry
            .invoke("intadd", &[Value::Integer(1), Value::Float(2.0)], &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            InvokeError::TypeMismatch {
                expected: DataType::Integer,
                got: DataType::Float,
            }
        );
    }

    #[test]
    fn test_duplicate_registration_keeps_one_category_entry() {
        let mut registry = OpRegistry::new();
        registry.register::<crate::ops::integer::IntAdd>();
        registry.register::<crate::ops::integer::IntAdd>();

        let keys = registry.keys_in_category(OpCategory::Math);
        assert_eq!(keys.iter().filter(|k| **k == "intadd").count(), 1);
        assert_eq!(registry.keys().count(), 1);
    }

    #[test]
    fn test_builtin_registry_is_shared() {
        let a = builtin_registry();
        let b = builtin_registry();
        assert!(std::ptr::eq(a, b));
        assert!(a.contains("floatadd"));
    }
}
