//! Parametric builtin functions for DSLX.
//!
//! Many DSLX builtins are parametric: `clz` takes any `uN[N]` and returns the
//! same width, `concat` of `uN[N]` and `uN[M]` is `uN[N+M]`. This crate holds
//! the signature templates for those builtins and resolves call sites against
//! them.
//!
//! # Architecture
//!
//! ```text
//! catalog::standard()
//!     ↓
//! BuiltinRegistry (immutable, OnceLock singleton)
//!     ↓  lookup / is_parametric_builtin / is_unary_parametric_builtin
//! Resolver::resolve_call(name, actual types)
//!     ↓
//! concrete result type | ResolveError
//! ```

mod catalog;
mod registry;
mod resolve;
mod signature;

pub use registry::{BuiltinRegistry, RegistryError};
pub use resolve::{resolve_call, CallSite, Resolution, ResolveError, ResolveErrorKind, Resolver};
pub use signature::{Arity, BuiltinSignature, ParamDecl, Shape, SignatureBuilder, SignatureError};
