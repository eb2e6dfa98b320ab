//! The builtin registry.
//!
//! Maps builtin names to their [`BuiltinSignature`]s. A registry is built in
//! one step and never mutated afterwards; the process-wide instance is
//! materialized on first access behind a `OnceLock`, so concurrent readers
//! never observe a partially built table.
//!
//! The parametric and unary-parametric name sets are views filtered from the
//! primary table using each signature's precomputed flags and shape; they are
//! not stored separately.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::signature::SignatureError;
use crate::{catalog, BuiltinSignature, ResolveError};

/// Error building a custom registry.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("builtin `{name}` is registered twice")]
    DuplicateBuiltin { name: String },

    #[error("invalid signature for builtin `{name}`: {source}")]
    InvalidSignature {
        name: String,
        #[source]
        source: SignatureError,
    },
}

/// Immutable name → signature table.
#[derive(Debug)]
pub struct BuiltinRegistry {
    /// Sorted by name.
    signatures: Vec<BuiltinSignature>,
    by_name: FxHashMap<Box<str>, usize>,
}

static GLOBAL_REGISTRY: OnceLock<BuiltinRegistry> = OnceLock::new();

impl BuiltinRegistry {
    /// The process-wide registry of standard builtins (lazily initialized).
    pub fn global() -> &'static BuiltinRegistry {
        GLOBAL_REGISTRY.get_or_init(Self::standard)
    }

    /// Build a registry from the standard catalog.
    ///
    /// The catalog is validated by its tests, so this skips validation.
    pub fn standard() -> Self {
        let registry = Self::index(catalog::standard());
        tracing::debug!(builtins = registry.len(), "materialized builtin registry");
        registry
    }

    /// Build a validated registry from arbitrary signatures.
    pub fn from_signatures(
        signatures: impl IntoIterator<Item = BuiltinSignature>,
    ) -> Result<Self, RegistryError> {
        let signatures: Vec<_> = signatures.into_iter().collect();
        for sig in &signatures {
            sig.validate()
                .map_err(|source| RegistryError::InvalidSignature {
                    name: sig.name().to_string(),
                    source,
                })?;
        }
        let registry = Self::index(signatures);
        if let Some(name) = registry.first_duplicate() {
            return Err(RegistryError::DuplicateBuiltin {
                name: name.to_string(),
            });
        }
        Ok(registry)
    }

    fn index(mut signatures: Vec<BuiltinSignature>) -> Self {
        signatures.sort_by(|a, b| a.name().cmp(b.name()));
        let by_name = signatures
            .iter()
            .enumerate()
            .map(|(i, sig)| (Box::from(sig.name()), i))
            .collect();
        Self {
            signatures,
            by_name,
        }
    }

    fn first_duplicate(&self) -> Option<&str> {
        self.signatures
            .windows(2)
            .find(|pair| pair[0].name() == pair[1].name())
            .map(|pair| pair[0].name())
    }

    pub fn get(&self, name: &str) -> Option<&BuiltinSignature> {
        self.by_name.get(name).map(|&i| &self.signatures[i])
    }

    pub fn lookup(&self, name: &str) -> Result<&BuiltinSignature, ResolveError> {
        self.get(name).ok_or_else(|| ResolveError::UnknownBuiltin {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Whether `name` is a builtin whose formals or result mention a
    /// parametric variable. Unknown names are not parametric builtins.
    pub fn is_parametric_builtin(&self, name: &str) -> bool {
        self.get(name).is_some_and(BuiltinSignature::is_parametric)
    }

    /// Whether `name` is a builtin of shape [`Shape::UnaryParametric`](crate::Shape).
    pub fn is_unary_parametric_builtin(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(BuiltinSignature::is_unary_parametric)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// All signatures, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &BuiltinSignature> {
        self.signatures.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(BuiltinSignature::name)
    }

    /// Names of parametric builtins, sorted.
    pub fn parametric_names(&self) -> impl Iterator<Item = &str> {
        self.signatures
            .iter()
            .filter(|sig| sig.is_parametric())
            .map(BuiltinSignature::name)
    }

    /// Names of unary-parametric builtins, sorted.
    pub fn unary_parametric_names(&self) -> impl Iterator<Item = &str> {
        self.signatures
            .iter()
            .filter(|sig| sig.is_unary_parametric())
            .map(BuiltinSignature::name)
    }
}
