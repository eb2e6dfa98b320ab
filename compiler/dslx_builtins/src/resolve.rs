//! Builtin call-site resolution.
//!
//! The single entry point for type-checking a call to a builtin:
//!
//! ```text
//! lookup(name)            → UnknownBuiltin
//!     ↓
//! check_arity(#actuals)   → ArityMismatch
//!     ↓
//! unify formals, L→R      → TypeMismatch | Conflict   (first failure wins)
//!     ↓
//! substitute result       → UnboundVariable
//! ```
//!
//! Resolution is a pure function of the registry, the name, and the actual
//! types; the binding lives only for the duration of one call.

use dslx_types::{Binding, ConcreteType, UnifyEngine, UnifyError};

use crate::{Arity, BuiltinRegistry};

/// A builtin call as seen by the expression deducer.
#[derive(Copy, Clone, Debug)]
pub struct CallSite<'a> {
    pub name: &'a str,
    /// Deduced types of the actual arguments, in call order.
    pub args: &'a [ConcreteType],
}

/// A successfully resolved call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub ret: ConcreteType,
    /// Solved parametric variables, for callers that need the parametric
    /// environment of the call (e.g. constexpr evaluation).
    pub binding: Binding,
}

/// Error resolving a builtin call. Source locations are attached by the
/// caller.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("unknown builtin `{name}`")]
    UnknownBuiltin { name: String },

    #[error("`{builtin}` expects {expected} argument(s), found {found}")]
    ArityMismatch {
        builtin: String,
        expected: Arity,
        found: usize,
    },

    /// Unifying argument `index` against its formal failed.
    #[error("argument {index} of `{builtin}`: {source}")]
    Argument {
        builtin: String,
        index: usize,
        #[source]
        source: UnifyError,
    },

    /// Producing the concrete result type failed.
    #[error("result of `{builtin}`: {source}")]
    Return {
        builtin: String,
        #[source]
        source: UnifyError,
    },
}

/// Flat classification of a [`ResolveError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ResolveErrorKind {
    UnknownBuiltin,
    ArityMismatch,
    TypeMismatch,
    Conflict,
    UnboundVariable,
    /// The signature itself cannot produce a result (opaque result type).
    MalformedSignature,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::UnknownBuiltin { .. } => ResolveErrorKind::UnknownBuiltin,
            ResolveError::ArityMismatch { .. } => ResolveErrorKind::ArityMismatch,
            ResolveError::Argument { source, .. } | ResolveError::Return { source, .. } => {
                match source {
                    UnifyError::Mismatch { .. }
                    | UnifyError::ArityMismatch { .. }
                    | UnifyError::DimensionOverflow { .. } => ResolveErrorKind::TypeMismatch,
                    UnifyError::Conflict { .. } => ResolveErrorKind::Conflict,
                    UnifyError::UnboundVariable { .. } => ResolveErrorKind::UnboundVariable,
                    UnifyError::OpaqueResult => ResolveErrorKind::MalformedSignature,
                }
            }
        }
    }

    /// Name of the builtin the error concerns.
    pub fn builtin(&self) -> &str {
        match self {
            ResolveError::UnknownBuiltin { name } => name,
            ResolveError::ArityMismatch { builtin, .. }
            | ResolveError::Argument { builtin, .. }
            | ResolveError::Return { builtin, .. } => builtin,
        }
    }
}

/// Resolves builtin calls against one registry.
#[derive(Copy, Clone, Debug)]
pub struct Resolver<'r> {
    registry: &'r BuiltinRegistry,
}

impl Resolver<'static> {
    /// Resolver over the process-wide registry.
    pub fn global() -> Self {
        Self::new(BuiltinRegistry::global())
    }
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r BuiltinRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r BuiltinRegistry {
        self.registry
    }

    /// Concrete result type of calling builtin `name` with `args`.
    pub fn resolve_call(
        &self,
        name: &str,
        args: &[ConcreteType],
    ) -> Result<ConcreteType, ResolveError> {
        self.resolve(CallSite { name, args })
            .map(|resolution| resolution.ret)
    }

    /// Resolve a call site, returning the result type and the solved binding.
    #[tracing::instrument(level = "debug", skip_all, fields(
        builtin = call.name,
        args = call.args.len(),
    ))]
    pub fn resolve(&self, call: CallSite<'_>) -> Result<Resolution, ResolveError> {
        let signature = self.registry.lookup(call.name)?;
        signature.check_arity(call.args.len())?;

        let mut binding = Binding::new();
        let mut engine = UnifyEngine::new(&mut binding);
        for (index, (formal, actual)) in signature.formals().zip(call.args).enumerate() {
            engine
                .unify(formal, actual)
                .map_err(|source| ResolveError::Argument {
                    builtin: call.name.to_string(),
                    index,
                    source,
                })?;
        }

        let ret = signature
            .ret()
            .substitute(&binding)
            .map_err(|source| ResolveError::Return {
                builtin: call.name.to_string(),
                source,
            })?;

        tracing::debug!(%ret, %binding, "resolved builtin call");
        Ok(Resolution { ret, binding })
    }
}

/// Resolve a builtin call against the process-wide registry.
pub fn resolve_call(name: &str, args: &[ConcreteType]) -> Result<ConcreteType, ResolveError> {
    Resolver::global().resolve_call(name, args)
}
