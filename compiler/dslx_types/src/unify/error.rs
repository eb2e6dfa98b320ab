//! Unification error types.

use crate::{BoundValue, ConcreteType, Dim, ParamName, TypeExpr};

/// Error from unifying a formal [`TypeExpr`] against a [`ConcreteType`], or
/// from substituting a binding into one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum UnifyError {
    /// Structural disagreement (bits vs. array, signedness, literal width).
    #[error("type mismatch in {}: expected `{expected}`, found `{found}`", .context.description())]
    Mismatch {
        expected: TypeExpr,
        found: ConcreteType,
        context: UnifyContext,
    },

    /// Nested element count disagreement (tuple members, function params).
    #[error(
        "arity mismatch in {}: expected {expected} {}, found {found}",
        .context.description(),
        .kind.description()
    )]
    ArityMismatch {
        expected: usize,
        found: usize,
        kind: ArityKind,
        context: UnifyContext,
    },

    /// A variable was solved to two different values.
    #[error("conflicting bindings for `{var}`: {first} vs. {second}")]
    Conflict {
        var: ParamName,
        first: BoundValue,
        second: BoundValue,
    },

    /// A variable needed for substitution was never solved.
    #[error("parametric `{var}` is not determined by any argument")]
    UnboundVariable { var: ParamName },

    /// `_` appeared where a concrete type must be produced.
    #[error("opaque type `_` cannot be made concrete")]
    OpaqueResult,

    /// Width arithmetic left the `u64` range.
    #[error("dimension `{dim}` overflows")]
    DimensionOverflow { dim: Dim },
}

/// What kind of nested construct has an arity mismatch.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ArityKind {
    /// Tuple member count.
    Tuple,
    /// Function-value parameter count.
    FunctionParams,
}

impl ArityKind {
    pub fn description(self) -> &'static str {
        match self {
            ArityKind::Tuple => "tuple elements",
            ArityKind::FunctionParams => "function parameters",
        }
    }
}

/// Position inside a type where unification failed (innermost).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum UnifyContext {
    #[default]
    TopLevel,

    /// In an array element type.
    ArrayElement,

    /// In a tuple member.
    TupleElement {
        /// Zero-based member index.
        index: usize,
    },

    /// In a parameter of a function-valued argument.
    FunctionParam {
        /// Zero-based parameter index.
        index: usize,
    },

    /// In the return type of a function-valued argument.
    FunctionReturn,
}

impl UnifyContext {
    pub fn tuple_elem(index: usize) -> Self {
        Self::TupleElement { index }
    }

    pub fn param(index: usize) -> Self {
        Self::FunctionParam { index }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::TopLevel => "types",
            Self::ArrayElement => "array element type",
            Self::TupleElement { .. } => "tuple element",
            Self::FunctionParam { .. } => "function parameter",
            Self::FunctionReturn => "function return type",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn context_descriptions() {
        assert_eq!(UnifyContext::TopLevel.description(), "types");
        assert_eq!(UnifyContext::param(0).description(), "function parameter");
        assert_eq!(
            UnifyContext::FunctionReturn.description(),
            "function return type"
        );
        assert_eq!(UnifyContext::tuple_elem(2).description(), "tuple element");
    }

    #[test]
    fn error_display() {
        let err = UnifyError::ArityMismatch {
            expected: 2,
            found: 3,
            kind: ArityKind::Tuple,
            context: UnifyContext::TopLevel,
        };
        assert_eq!(
            err.to_string(),
            "arity mismatch in types: expected 2 tuple elements, found 3"
        );

        let err = UnifyError::Mismatch {
            expected: TypeExpr::ubits(Dim::var("N")),
            found: ConcreteType::array(ConcreteType::ubits(8), 2),
            context: UnifyContext::ArrayElement,
        };
        assert_eq!(
            err.to_string(),
            "type mismatch in array element type: expected `uN[N]`, found `uN[8][2]`"
        );
    }
}
