//! Parametric variable names and dimension expressions.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::{Binding, ExprFlags, UnifyError};

/// Name of a compile-time parameter (`N`, `M`, `T`, ...).
///
/// Cheap to clone: bindings and errors carry copies of these.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ParamName(Arc<str>);

impl ParamName {
    pub fn new(name: &str) -> Self {
        ParamName(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParamName {
    fn from(name: &str) -> Self {
        ParamName::new(name)
    }
}

impl Borrow<str> for ParamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A bit-width or element-count position in a parametric type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dim {
    /// Fixed value.
    Lit(u64),
    /// Solved per call site.
    Var(ParamName),
    /// Width arithmetic, e.g. `N+M`. Only evaluated, never solved for.
    Sum(Box<Dim>, Box<Dim>),
}

impl Dim {
    pub fn var(name: &str) -> Self {
        Dim::Var(ParamName::new(name))
    }

    pub fn sum(lhs: Dim, rhs: Dim) -> Self {
        Dim::Sum(Box::new(lhs), Box::new(rhs))
    }

    pub fn flags(&self) -> ExprFlags {
        match self {
            Dim::Lit(_) => ExprFlags::empty(),
            Dim::Var(_) => ExprFlags::HAS_DIM_VAR,
            Dim::Sum(lhs, rhs) => ExprFlags::HAS_DERIVED_DIM | lhs.flags() | rhs.flags(),
        }
    }

    /// Visit every variable occurrence, left to right.
    pub fn for_each_var(&self, f: &mut impl FnMut(&ParamName)) {
        match self {
            Dim::Lit(_) => {}
            Dim::Var(name) => f(name),
            Dim::Sum(lhs, rhs) => {
                lhs.for_each_var(f);
                rhs.for_each_var(f);
            }
        }
    }

    /// Evaluate against a binding.
    pub fn eval(&self, binding: &Binding) -> Result<u64, UnifyError> {
        match self {
            Dim::Lit(value) => Ok(*value),
            Dim::Var(name) => binding
                .dim(name.as_str())
                .ok_or_else(|| UnifyError::UnboundVariable { var: name.clone() }),
            Dim::Sum(lhs, rhs) => {
                let lhs = lhs.eval(binding)?;
                let rhs = rhs.eval(binding)?;
                lhs.checked_add(rhs)
                    .ok_or_else(|| UnifyError::DimensionOverflow { dim: self.clone() })
            }
        }
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Lit(value) => write!(f, "{value}"),
            Dim::Var(name) => write!(f, "{name}"),
            Dim::Sum(lhs, rhs) => write!(f, "{lhs}+{rhs}"),
        }
    }
}

#[cfg(test)]
mod tests;
