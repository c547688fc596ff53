//! Creation of nodes from their identifiers.
//!
//! A tree reader or a genetic operator knows nodes only by identifier
//! (`PDIV`, `CVP`, ...). The registry turns an identifier into a fresh node
//! with empty child slots, configured from [`BuildOptions`].
//!
//! # Example
//!
//! ```
//! use epox_core::api::BuildOptions;
//! use epox_core::registry::NodeRegistry;
//!
//! let registry = NodeRegistry::standard(BuildOptions::default());
//! let node = registry.create("PDIV").unwrap();
//! assert_eq!(node.arity(), 2);
//! ```

use thiserror::Error;
use tracing::debug;

use crate::api::BuildOptions;
use crate::nodes::{CoefficientPower, ExpressionNode, ProtectedDivision};

/// Builds a placeholder node.
pub type NodeConstructor = fn(&BuildOptions) -> Box<dyn ExpressionNode>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("a node with identifier `{0}` is already registered")]
    DuplicateIdentifier(String),
}

/// Identifier to constructor table.
pub struct NodeRegistry {
    options: BuildOptions,
    // Sorted by identifier for binary search.
    entries: Vec<(String, NodeConstructor)>,
}

impl NodeRegistry {
    /// An empty registry.
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            entries: Vec::new(),
        }
    }

    /// A registry holding the built-in function nodes.
    pub fn standard(options: BuildOptions) -> Self {
        let mut registry = Self::new(options);
        registry.entries = vec![
            (
                CoefficientPower::IDENTIFIER.to_string(),
                new_coefficient_power as NodeConstructor,
            ),
            (
                ProtectedDivision::IDENTIFIER.to_string(),
                new_protected_division as NodeConstructor,
            ),
        ];
        registry.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        registry
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Register a constructor under `identifier`.
    pub fn register(
        &mut self,
        identifier: &str,
        constructor: NodeConstructor,
    ) -> Result<(), RegistryError> {
        match self.position(identifier) {
            Ok(_) => Err(RegistryError::DuplicateIdentifier(identifier.to_string())),
            Err(at) => {
                debug!(identifier, "registering node constructor");
                self.entries
                    .insert(at, (identifier.to_string(), constructor));
                Ok(())
            }
        }
    }

    /// A new node for `identifier`, with every child slot empty.
    pub fn create(&self, identifier: &str) -> Option<Box<dyn ExpressionNode>> {
        let at = self.position(identifier).ok()?;
        let (_, constructor) = &self.entries[at];
        Some(constructor(&self.options))
    }

    /// Arity of the node registered under `identifier`.
    pub fn arity_of(&self, identifier: &str) -> Option<usize> {
        self.create(identifier).map(|node| node.arity())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.position(identifier).is_ok()
    }

    /// Registered identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn position(&self, identifier: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(name, _)| name.as_str().cmp(identifier))
    }
}

fn new_coefficient_power(_options: &BuildOptions) -> Box<dyn ExpressionNode> {
    Box::new(CoefficientPower::placeholder())
}

fn new_protected_division(options: &BuildOptions) -> Box<dyn ExpressionNode> {
    Box::new(ProtectedDivision::placeholder_with_protection(
        options.protection_value,
    ))
}
