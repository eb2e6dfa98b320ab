//! Types for DSLX builtin call resolution.
//!
//! Two representations:
//! - [`ConcreteType`]: what the expression deducer produces for an argument;
//!   every width and element count is known.
//! - [`TypeExpr`]: a builtin's formal argument or result type, whose widths
//!   and counts may be [`Dim`] variables and whose positions may be type
//!   variables.
//!
//! [`UnifyEngine`] matches a formal against an actual, solving variables into
//! a per-call [`Binding`]; [`TypeExpr::substitute`] turns a formal back into a
//! concrete type once its variables are solved.

mod binding;
mod concrete;
mod dim;
mod expr;
mod flags;
mod unify;

pub use binding::{Binding, BoundValue};
pub use concrete::{ConcreteType, Signedness};
pub use dim::{Dim, ParamName};
pub use expr::{ParamKind, TypeExpr};
pub use flags::ExprFlags;
pub use unify::{ArityKind, UnifyContext, UnifyEngine, UnifyError};
