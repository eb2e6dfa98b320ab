//! Parametric type expressions.
//!
//! A `TypeExpr` is the formal type of a builtin argument or result. It looks
//! like a [`ConcreteType`] except that widths and element counts may be
//! [`Dim`] variables and whole positions may be type variables (`T`) or the
//! opaque `_`.
//!
//! ```text
//! clz:      (uN[N]) -> uN[N]
//! concat:   (uN[N], uN[M]) -> uN[N+M]
//! map:      (T[N], (T) -> U) -> U[N]
//! ```

use std::fmt;

use crate::concrete::write_list;
use crate::{Binding, ConcreteType, Dim, ExprFlags, ParamName, Signedness, UnifyError};

/// Which namespace a parametric variable lives in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParamKind {
    /// Integer parameter (bit-width, element count).
    Dim,
    /// Whole-type parameter.
    Type,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Dim => "dimension",
            ParamKind::Type => "type",
        })
    }
}

/// Formal (possibly parametric) type.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeExpr {
    Bits {
        signedness: Signedness,
        width: Dim,
    },
    Array {
        element: Box<TypeExpr>,
        size: Dim,
    },
    Tuple(Vec<TypeExpr>),
    Function {
        params: Vec<TypeExpr>,
        ret: Box<TypeExpr>,
    },
    Token,
    /// Type variable, bound to a whole concrete type.
    Var(ParamName),
    /// Opaque: matches anything, never substitutable.
    Any,
}

impl TypeExpr {
    pub fn ubits(width: Dim) -> Self {
        TypeExpr::Bits {
            signedness: Signedness::Unsigned,
            width,
        }
    }

    pub fn sbits(width: Dim) -> Self {
        TypeExpr::Bits {
            signedness: Signedness::Signed,
            width,
        }
    }

    pub fn array(element: TypeExpr, size: Dim) -> Self {
        TypeExpr::Array {
            element: Box::new(element),
            size,
        }
    }

    pub fn tuple(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::Tuple(members.into_iter().collect())
    }

    pub fn unit() -> Self {
        TypeExpr::Tuple(Vec::new())
    }

    pub fn function(params: impl IntoIterator<Item = TypeExpr>, ret: TypeExpr) -> Self {
        TypeExpr::Function {
            params: params.into_iter().collect(),
            ret: Box::new(ret),
        }
    }

    pub fn var(name: &str) -> Self {
        TypeExpr::Var(ParamName::new(name))
    }

    pub fn flags(&self) -> ExprFlags {
        match self {
            TypeExpr::Bits { width, .. } => width.flags(),
            TypeExpr::Array { element, size } => element.flags() | size.flags(),
            TypeExpr::Tuple(members) => ExprFlags::union_all(members.iter().map(TypeExpr::flags)),
            TypeExpr::Function { params, ret } => {
                ExprFlags::union_all(params.iter().map(TypeExpr::flags)) | ret.flags()
            }
            TypeExpr::Token => ExprFlags::empty(),
            TypeExpr::Var(_) => ExprFlags::HAS_TYPE_VAR,
            TypeExpr::Any => ExprFlags::HAS_OPAQUE,
        }
    }

    #[inline]
    pub fn is_parametric(&self) -> bool {
        self.flags().is_parametric()
    }

    /// Visit every variable occurrence with its namespace, in textual order.
    pub fn for_each_var(&self, f: &mut impl FnMut(&ParamName, ParamKind)) {
        match self {
            TypeExpr::Bits { width, .. } => width.for_each_var(&mut |name| f(name, ParamKind::Dim)),
            TypeExpr::Array { element, size } => {
                element.for_each_var(f);
                size.for_each_var(&mut |name| f(name, ParamKind::Dim));
            }
            TypeExpr::Tuple(members) => {
                for member in members {
                    member.for_each_var(f);
                }
            }
            TypeExpr::Function { params, ret } => {
                for param in params {
                    param.for_each_var(f);
                }
                ret.for_each_var(f);
            }
            TypeExpr::Var(name) => f(name, ParamKind::Type),
            TypeExpr::Token | TypeExpr::Any => {}
        }
    }

    /// Replace every variable with its bound value.
    ///
    /// Fails on the first (leftmost) variable missing from `binding`.
    pub fn substitute(&self, binding: &Binding) -> Result<ConcreteType, UnifyError> {
        Ok(match self {
            TypeExpr::Bits { signedness, width } => ConcreteType::Bits {
                signedness: *signedness,
                width: width.eval(binding)?,
            },
            TypeExpr::Array { element, size } => {
                let element = element.substitute(binding)?;
                ConcreteType::array(element, size.eval(binding)?)
            }
            TypeExpr::Tuple(members) => ConcreteType::Tuple(
                members
                    .iter()
                    .map(|member| member.substitute(binding))
                    .collect::<Result<_, _>>()?,
            ),
            TypeExpr::Function { params, ret } => ConcreteType::Function {
                params: params
                    .iter()
                    .map(|param| param.substitute(binding))
                    .collect::<Result<_, _>>()?,
                ret: Box::new(ret.substitute(binding)?),
            },
            TypeExpr::Token => ConcreteType::Token,
            TypeExpr::Var(name) => binding
                .ty(name.as_str())
                .cloned()
                .ok_or_else(|| UnifyError::UnboundVariable { var: name.clone() })?,
            TypeExpr::Any => return Err(UnifyError::OpaqueResult),
        })
    }
}

impl From<&ConcreteType> for TypeExpr {
    fn from(ty: &ConcreteType) -> Self {
        match ty {
            ConcreteType::Bits { signedness, width } => TypeExpr::Bits {
                signedness: *signedness,
                width: Dim::Lit(*width),
            },
            ConcreteType::Array { element, size } => {
                TypeExpr::array(TypeExpr::from(element.as_ref()), Dim::Lit(*size))
            }
            ConcreteType::Tuple(members) => TypeExpr::tuple(members.iter().map(TypeExpr::from)),
            ConcreteType::Function { params, ret } => TypeExpr::function(
                params.iter().map(TypeExpr::from),
                TypeExpr::from(ret.as_ref()),
            ),
            ConcreteType::Token => TypeExpr::Token,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Bits { signedness, width } => write!(f, "{}[{width}]", signedness.prefix()),
            TypeExpr::Array { element, size } => write!(f, "{element}[{size}]"),
            TypeExpr::Tuple(members) => {
                f.write_str("(")?;
                write_list(f, members)?;
                f.write_str(")")
            }
            TypeExpr::Function { params, ret } => {
                f.write_str("(")?;
                write_list(f, params)?;
                write!(f, ") -> {ret}")
            }
            TypeExpr::Token => f.write_str("token"),
            TypeExpr::Var(name) => write!(f, "{name}"),
            TypeExpr::Any => f.write_str("_"),
        }
    }
}
