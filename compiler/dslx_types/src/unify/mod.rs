//! One-sided unification of formal types against concrete types.
//!
//! Only the formal side can contain variables, so there is no occurs check
//! and no variable-to-variable linking: every variable is solved directly to
//! a value read off the actual type, and the [`Binding`] is the whole state.
//!
//! # Usage
//!
//! ```ignore
//! let mut binding = Binding::new();
//! let mut engine = UnifyEngine::new(&mut binding);
//!
//! engine.unify(&TypeExpr::ubits(Dim::var("N")), &ConcreteType::ubits(8))?;
//! assert_eq!(binding.dim("N"), Some(8));
//! ```

mod error;

pub use error::{ArityKind, UnifyContext, UnifyError};

use crate::{Binding, ConcreteType, Dim, TypeExpr};

/// Solves formal variables against actual types, extending a binding.
///
/// On error the binding may hold assignments made before the failure; callers
/// that stop at the first error simply drop it.
pub struct UnifyEngine<'b> {
    binding: &'b mut Binding,
}

impl<'b> UnifyEngine<'b> {
    pub fn new(binding: &'b mut Binding) -> Self {
        Self { binding }
    }

    /// Read-only access to the binding built so far.
    #[inline]
    pub fn binding(&self) -> &Binding {
        self.binding
    }

    pub fn unify(&mut self, formal: &TypeExpr, actual: &ConcreteType) -> Result<(), UnifyError> {
        self.unify_with_context(formal, actual, UnifyContext::TopLevel)
    }

    /// Unify with explicit context for better error messages.
    pub fn unify_with_context(
        &mut self,
        formal: &TypeExpr,
        actual: &ConcreteType,
        context: UnifyContext,
    ) -> Result<(), UnifyError> {
        match (formal, actual) {
            (TypeExpr::Any, _) => Ok(()),

            (TypeExpr::Var(name), _) => self.binding.bind_type(name, actual),

            (
                TypeExpr::Bits { signedness, width },
                ConcreteType::Bits {
                    signedness: actual_signedness,
                    width: actual_width,
                },
            ) => {
                if signedness != actual_signedness {
                    return Err(mismatch(formal, actual, context));
                }
                self.unify_dim(width, *actual_width, formal, actual, context)
            }

            (
                TypeExpr::Array { element, size },
                ConcreteType::Array {
                    element: actual_element,
                    size: actual_size,
                },
            ) => {
                self.unify_dim(size, *actual_size, formal, actual, context)?;
                self.unify_with_context(element, actual_element, UnifyContext::ArrayElement)
            }

            (TypeExpr::Tuple(members), ConcreteType::Tuple(actual_members)) => {
                check_len(members.len(), actual_members.len(), ArityKind::Tuple, context)?;
                for (i, (member, actual_member)) in members.iter().zip(actual_members).enumerate() {
                    self.unify_with_context(member, actual_member, UnifyContext::tuple_elem(i))?;
                }
                Ok(())
            }

            (
                TypeExpr::Function { params, ret },
                ConcreteType::Function {
                    params: actual_params,
                    ret: actual_ret,
                },
            ) => {
                check_len(
                    params.len(),
                    actual_params.len(),
                    ArityKind::FunctionParams,
                    context,
                )?;
                for (i, (param, actual_param)) in params.iter().zip(actual_params).enumerate() {
                    self.unify_with_context(param, actual_param, UnifyContext::param(i))?;
                }
                self.unify_with_context(ret, actual_ret, UnifyContext::FunctionReturn)
            }

            (TypeExpr::Token, ConcreteType::Token) => Ok(()),

            _ => Err(mismatch(formal, actual, context)),
        }
    }

    /// Solve or check one dimension position.
    ///
    /// Derived dimensions are evaluated with the current binding, so every
    /// variable they mention must already be solved.
    fn unify_dim(
        &mut self,
        dim: &Dim,
        actual_value: u64,
        formal: &TypeExpr,
        actual: &ConcreteType,
        context: UnifyContext,
    ) -> Result<(), UnifyError> {
        match dim {
            Dim::Var(name) => self.binding.bind_dim(name, actual_value),
            Dim::Lit(_) | Dim::Sum(..) => {
                if dim.eval(self.binding)? == actual_value {
                    Ok(())
                } else {
                    Err(mismatch(formal, actual, context))
                }
            }
        }
    }
}

impl TypeExpr {
    /// Unify this formal type against `actual`, extending `binding`.
    pub fn unify(&self, actual: &ConcreteType, binding: &mut Binding) -> Result<(), UnifyError> {
        UnifyEngine::new(binding).unify(self, actual)
    }
}

fn mismatch(formal: &TypeExpr, actual: &ConcreteType, context: UnifyContext) -> UnifyError {
    UnifyError::Mismatch {
        expected: formal.clone(),
        found: actual.clone(),
        context,
    }
}

fn check_len(
    expected: usize,
    found: usize,
    kind: ArityKind,
    context: UnifyContext,
) -> Result<(), UnifyError> {
    if expected == found {
        Ok(())
    } else {
        Err(UnifyError::ArityMismatch {
            expected,
            found,
            kind,
            context,
        })
    }
}

#[cfg(test)]
mod tests;
