//! Pre-computed parametric-expression flags.
//!
//! `ExprFlags` summarize what a [`TypeExpr`](crate::TypeExpr) contains so that
//! registry queries ("is this builtin parametric at all?") and signature
//! validation never need to re-walk the expression tree.

use bitflags::bitflags;

bitflags! {
    /// Presence flags for a parametric type expression.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ExprFlags: u8 {
        /// References a dimension variable (`N` in `uN[N]`).
        const HAS_DIM_VAR = 1 << 0;
        /// References a type variable (`T`).
        const HAS_TYPE_VAR = 1 << 1;
        /// Contains width arithmetic (`N+M`).
        const HAS_DERIVED_DIM = 1 << 2;
        /// Contains the opaque `Any` type.
        const HAS_OPAQUE = 1 << 3;
    }
}

impl ExprFlags {
    /// Flags that make an expression parametric.
    pub const PARAMETRIC: Self = Self::HAS_DIM_VAR.union(Self::HAS_TYPE_VAR);

    /// Whether any parametric variable occurs.
    #[inline]
    pub const fn is_parametric(self) -> bool {
        self.intersects(Self::PARAMETRIC)
    }

    /// Union of all children's flags.
    pub fn union_all(children: impl IntoIterator<Item = Self>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, flags| acc | flags)
    }
}
