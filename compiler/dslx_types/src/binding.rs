//! Per-call parametric bindings.
//!
//! A `Binding` is created for one call-site resolution and dropped with it.
//! Variables are write-once: binding an already bound variable to an equal
//! value is a no-op, to a different value a [`UnifyError::Conflict`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::{ConcreteType, ParamName, UnifyError};

/// A value a parametric variable was solved to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundValue {
    Dim(u64),
    Type(ConcreteType),
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundValue::Dim(value) => write!(f, "{value}"),
            BoundValue::Type(ty) => write!(f, "{ty}"),
        }
    }
}

/// Solved parametric variables for one call site.
///
/// Ordered maps keep iteration (and therefore debug output) deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Binding {
    dims: BTreeMap<ParamName, u64>,
    types: BTreeMap<ParamName, ConcreteType>,
}

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty() && self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dims.len() + self.types.len()
    }

    pub fn dim(&self, name: &str) -> Option<u64> {
        self.dims.get(name).copied()
    }

    pub fn ty(&self, name: &str) -> Option<&ConcreteType> {
        self.types.get(name)
    }

    /// Dimension bindings in name order.
    pub fn dims(&self) -> impl Iterator<Item = (&ParamName, u64)> {
        self.dims.iter().map(|(name, value)| (name, *value))
    }

    /// Type bindings in name order.
    pub fn types(&self) -> impl Iterator<Item = (&ParamName, &ConcreteType)> {
        self.types.iter()
    }

    /// Bind a dimension variable, or check it against its existing value.
    pub fn bind_dim(&mut self, var: &ParamName, value: u64) -> Result<(), UnifyError> {
        match self.dims.entry(var.clone()) {
            Entry::Vacant(slot) => {
                tracing::trace!(%var, value, "bind dimension");
                slot.insert(value);
                Ok(())
            }
            Entry::Occupied(slot) if *slot.get() == value => Ok(()),
            Entry::Occupied(slot) => Err(UnifyError::Conflict {
                var: var.clone(),
                first: BoundValue::Dim(*slot.get()),
                second: BoundValue::Dim(value),
            }),
        }
    }

    /// Bind a type variable, or check it against its existing value.
    pub fn bind_type(&mut self, var: &ParamName, ty: &ConcreteType) -> Result<(), UnifyError> {
        match self.types.entry(var.clone()) {
            Entry::Vacant(slot) => {
                tracing::trace!(%var, %ty, "bind type");
                slot.insert(ty.clone());
                Ok(())
            }
            Entry::Occupied(slot) if slot.get() == ty => Ok(()),
            Entry::Occupied(slot) => Err(UnifyError::Conflict {
                var: var.clone(),
                first: BoundValue::Type(slot.get().clone()),
                second: BoundValue::Type(ty.clone()),
            }),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let dims = self
            .dims
            .iter()
            .map(|(name, value)| (name, BoundValue::Dim(*value)));
        let types = self
            .types
            .iter()
            .map(|(name, ty)| (name, BoundValue::Type(ty.clone())));
        for (i, (name, value)) in dims.chain(types).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests;
