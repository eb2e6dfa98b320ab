//! Builtin signatures: formal parameter types, result type, and shape.

use std::fmt;

use dslx_types::{ExprFlags, ParamKind, ParamName, TypeExpr};
use rustc_hash::FxHashMap;

use crate::ResolveError;

/// Arity and parametric-structure classification of a builtin.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// Exactly `n` arguments.
    FixedArity(usize),
    /// A fixed prefix of `min` formals, then any number of actuals matching
    /// one repeating placeholder formal.
    Variadic { min: usize },
    /// One argument whose type carries the parametric variable; the builtin
    /// transforms that value and is usable as a `map` callee.
    UnaryParametric,
    /// Arity taken from the formal list as written.
    NullaryOrOther,
}

impl Shape {
    /// The argument-count rule for a signature with `params_len` formals.
    pub fn arity(self, params_len: usize) -> Arity {
        match self {
            Shape::FixedArity(n) => Arity::Exactly(n),
            Shape::Variadic { min } => Arity::AtLeast(min),
            Shape::UnaryParametric => Arity::Exactly(1),
            Shape::NullaryOrOther => Arity::Exactly(params_len),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::FixedArity(n) => write!(f, "fixed arity {n}"),
            Shape::Variadic { min } => write!(f, "variadic (at least {min})"),
            Shape::UnaryParametric => f.write_str("unary parametric"),
            Shape::NullaryOrOther => f.write_str("nullary or other"),
        }
    }
}

/// Accepted argument counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, found: usize) -> bool {
        match self {
            Arity::Exactly(n) => found == n,
            Arity::AtLeast(min) => found >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// A declared parametric variable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ParamDecl {
    pub name: ParamName,
    pub kind: ParamKind,
}

/// Why a signature is malformed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SignatureError {
    #[error("parametric `{0}` is declared twice")]
    DuplicateVar(ParamName),

    #[error("parametric `{0}` is used but not declared")]
    UndeclaredVar(ParamName),

    #[error("parametric `{var}` is declared as a {declared} but used as a {used}")]
    KindMismatch {
        var: ParamName,
        declared: ParamKind,
        used: ParamKind,
    },

    #[error("argument {index} uses width arithmetic, which only results may")]
    DerivedDimInArgument { index: usize },

    #[error("result type contains the opaque type `_`")]
    OpaqueResult,

    #[error("shape `{shape}` is inconsistent with {params} formal parameter(s)")]
    ShapeMismatch { shape: Shape, params: usize },
}

/// One builtin's type-signature template.
///
/// Immutable once built; owned by the registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuiltinSignature {
    name: Box<str>,
    vars: Vec<ParamDecl>,
    params: Vec<TypeExpr>,
    ret: TypeExpr,
    shape: Shape,
    flags: ExprFlags,
}

impl BuiltinSignature {
    pub fn builder(name: &str, shape: Shape) -> SignatureBuilder {
        SignatureBuilder {
            name: name.into(),
            shape,
            vars: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vars(&self) -> &[ParamDecl] {
        &self.vars
    }

    /// Formal parameters. For variadic signatures the last entry is the
    /// repeating placeholder.
    pub fn params(&self) -> &[TypeExpr] {
        &self.params
    }

    pub fn ret(&self) -> &TypeExpr {
        &self.ret
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Union of the flags of every formal and the result.
    pub fn flags(&self) -> ExprFlags {
        self.flags
    }

    #[inline]
    pub fn is_parametric(&self) -> bool {
        self.flags.is_parametric()
    }

    #[inline]
    pub fn is_unary_parametric(&self) -> bool {
        self.shape == Shape::UnaryParametric
    }

    pub fn arity(&self) -> Arity {
        self.shape.arity(self.params.len())
    }

    pub fn check_arity(&self, found: usize) -> Result<(), ResolveError> {
        let expected = self.arity();
        if expected.accepts(found) {
            Ok(())
        } else {
            Err(ResolveError::ArityMismatch {
                builtin: self.name.to_string(),
                expected,
                found,
            })
        }
    }

    /// Formal type for each actual argument position, in order.
    ///
    /// Variadic signatures yield the placeholder indefinitely after the fixed
    /// prefix; callers zip this with the actuals.
    pub fn formals(&self) -> impl Iterator<Item = &TypeExpr> + '_ {
        let (fixed, rest) = match self.shape {
            Shape::Variadic { min } => (min, self.params.get(min)),
            Shape::FixedArity(_) | Shape::UnaryParametric | Shape::NullaryOrOther => {
                (self.params.len(), None)
            }
        };
        self.params
            .iter()
            .take(fixed)
            .chain(std::iter::repeat(rest).map_while(|placeholder| placeholder))
    }

    /// Result variables that no formal mentions, in order of first use.
    ///
    /// Calls to such a builtin always fail with an unbound variable.
    pub fn undetermined_vars(&self) -> Vec<ParamName> {
        let mut determined = Vec::new();
        for param in &self.params {
            param.for_each_var(&mut |name, _| determined.push(name.clone()));
        }
        let mut undetermined: Vec<ParamName> = Vec::new();
        self.ret.for_each_var(&mut |name, _| {
            if !determined.contains(name) && !undetermined.contains(name) {
                undetermined.push(name.clone());
            }
        });
        undetermined
    }

    /// Check the signature's internal consistency.
    pub fn validate(&self) -> Result<(), SignatureError> {
        let mut declared: FxHashMap<&str, ParamKind> = FxHashMap::default();
        for decl in &self.vars {
            if declared.insert(decl.name.as_str(), decl.kind).is_some() {
                return Err(SignatureError::DuplicateVar(decl.name.clone()));
            }
        }

        let mut first_error = None;
        let mut check_use = |name: &ParamName, used: ParamKind| {
            if first_error.is_some() {
                return;
            }
            match declared.get(name.as_str()) {
                None => first_error = Some(SignatureError::UndeclaredVar(name.clone())),
                Some(&kind) if kind != used => {
                    first_error = Some(SignatureError::KindMismatch {
                        var: name.clone(),
                        declared: kind,
                        used,
                    });
                }
                Some(_) => {}
            }
        };
        for param in &self.params {
            param.for_each_var(&mut check_use);
        }
        self.ret.for_each_var(&mut check_use);
        if let Some(err) = first_error {
            return Err(err);
        }

        if let Some(index) = self
            .params
            .iter()
            .position(|param| param.flags().contains(ExprFlags::HAS_DERIVED_DIM))
        {
            return Err(SignatureError::DerivedDimInArgument { index });
        }
        if self.ret.flags().contains(ExprFlags::HAS_OPAQUE) {
            return Err(SignatureError::OpaqueResult);
        }

        let consistent = match self.shape {
            Shape::FixedArity(n) => self.params.len() == n,
            Shape::Variadic { min } => self.params.len() == min + 1,
            Shape::UnaryParametric => {
                matches!(self.params.as_slice(), [param] if param.is_parametric())
            }
            Shape::NullaryOrOther => true,
        };
        if !consistent {
            return Err(SignatureError::ShapeMismatch {
                shape: self.shape,
                params: self.params.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BuiltinSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
            if matches!(self.shape, Shape::Variadic { min } if i == min) {
                f.write_str("...")?;
            }
        }
        write!(f, ") -> {}", self.ret)
    }
}

/// Accumulates declarations and formals; [`SignatureBuilder::returns`]
/// finishes the signature.
#[derive(Clone, Debug)]
pub struct SignatureBuilder {
    name: Box<str>,
    shape: Shape,
    vars: Vec<ParamDecl>,
    params: Vec<TypeExpr>,
}

impl SignatureBuilder {
    /// Declare dimension variables.
    #[must_use]
    pub fn dims(mut self, names: &[&str]) -> Self {
        self.declare(names, ParamKind::Dim);
        self
    }

    /// Declare type variables.
    #[must_use]
    pub fn types(mut self, names: &[&str]) -> Self {
        self.declare(names, ParamKind::Type);
        self
    }

    #[must_use]
    pub fn param(mut self, formal: TypeExpr) -> Self {
        self.params.push(formal);
        self
    }

    pub fn returns(self, ret: TypeExpr) -> BuiltinSignature {
        let flags = ExprFlags::union_all(self.params.iter().map(TypeExpr::flags)) | ret.flags();
        BuiltinSignature {
            name: self.name,
            vars: self.vars,
            params: self.params,
            ret,
            shape: self.shape,
            flags,
        }
    }

    fn declare(&mut self, names: &[&str], kind: ParamKind) {
        self.vars.extend(names.iter().map(|name| ParamDecl {
            name: ParamName::new(name),
            kind,
        }));
    }
}
