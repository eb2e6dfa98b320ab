//! Concrete (fully resolved) types.
//!
//! These are the types the expression deducer hands to builtin resolution:
//! every width and element count is a known integer.

use std::fmt;

/// Signedness of a bits type.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Signedness {
    Unsigned,
    Signed,
}

impl Signedness {
    /// DSLX prefix for the bits constructor (`uN` / `sN`).
    pub fn prefix(self) -> &'static str {
        match self {
            Signedness::Unsigned => "uN",
            Signedness::Signed => "sN",
        }
    }
}

/// A fully concrete DSLX type.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ConcreteType {
    /// `uN[width]` or `sN[width]`.
    Bits { signedness: Signedness, width: u64 },
    /// `element[size]`.
    Array {
        element: Box<ConcreteType>,
        size: u64,
    },
    /// Ordered members; the empty tuple is the unit type.
    Tuple(Vec<ConcreteType>),
    /// Function value, e.g. the callee passed to `map`.
    Function {
        params: Vec<ConcreteType>,
        ret: Box<ConcreteType>,
    },
    /// Ordering token for side-effecting operations.
    Token,
}

impl ConcreteType {
    pub fn ubits(width: u64) -> Self {
        ConcreteType::Bits {
            signedness: Signedness::Unsigned,
            width,
        }
    }

    pub fn sbits(width: u64) -> Self {
        ConcreteType::Bits {
            signedness: Signedness::Signed,
            width,
        }
    }

    /// The single-bit unsigned type (`bool` in DSLX).
    pub fn bool() -> Self {
        Self::ubits(1)
    }

    pub fn array(element: ConcreteType, size: u64) -> Self {
        ConcreteType::Array {
            element: Box::new(element),
            size,
        }
    }

    pub fn tuple(members: impl IntoIterator<Item = ConcreteType>) -> Self {
        ConcreteType::Tuple(members.into_iter().collect())
    }

    pub fn unit() -> Self {
        ConcreteType::Tuple(Vec::new())
    }

    pub fn function(params: impl IntoIterator<Item = ConcreteType>, ret: ConcreteType) -> Self {
        ConcreteType::Function {
            params: params.into_iter().collect(),
            ret: Box::new(ret),
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, ConcreteType::Tuple(members) if members.is_empty())
    }

    /// Short name of the type's constructor, used in mismatch diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConcreteType::Bits { .. } => "bits",
            ConcreteType::Array { .. } => "array",
            ConcreteType::Tuple(_) => "tuple",
            ConcreteType::Function { .. } => "function",
            ConcreteType::Token => "token",
        }
    }
}

impl fmt::Display for ConcreteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConcreteType::Bits { signedness, width } => {
                write!(f, "{}[{width}]", signedness.prefix())
            }
            ConcreteType::Array { element, size } => write!(f, "{element}[{size}]"),
            ConcreteType::Tuple(members) => {
                f.write_str("(")?;
                write_list(f, members)?;
                f.write_str(")")
            }
            ConcreteType::Function { params, ret } => {
                f.write_str("(")?;
                write_list(f, params)?;
                write!(f, ") -> {ret}")
            }
            ConcreteType::Token => f.write_str("token"),
        }
    }
}

pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
