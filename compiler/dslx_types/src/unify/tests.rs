use pretty_assertions::assert_eq;

use super::*;
use crate::{BoundValue, ParamName};

fn n(name: &str) -> Dim {
    Dim::var(name)
}

fn u(width: u64) -> ConcreteType {
    ConcreteType::ubits(width)
}

#[test]
fn unify_binds_width() {
    let mut binding = Binding::new();
    let mut engine = UnifyEngine::new(&mut binding);

    assert!(engine.unify(&TypeExpr::ubits(n("N")), &u(8)).is_ok());
    assert_eq!(engine.binding().dim("N"), Some(8));
}

#[test]
fn literal_width_must_match_exactly() {
    let mut binding = Binding::new();
    let formal = TypeExpr::ubits(Dim::Lit(1));

    assert!(formal.unify(&u(1), &mut binding).is_ok());
    assert_eq!(
        formal.unify(&u(2), &mut binding),
        Err(UnifyError::Mismatch {
            expected: formal.clone(),
            found: u(2),
            context: UnifyContext::TopLevel,
        })
    );
    assert!(binding.is_empty());
}

#[test]
fn signedness_must_match() {
    let mut binding = Binding::new();
    let result = TypeExpr::sbits(n("N")).unify(&u(8), &mut binding);
    assert!(matches!(result, Err(UnifyError::Mismatch { .. })));
}

#[test]
fn bits_does_not_match_array() {
    let mut binding = Binding::new();
    let actual = ConcreteType::array(u(8), 4);
    let result = TypeExpr::ubits(n("N")).unify(&actual, &mut binding);
    assert!(matches!(
        result,
        Err(UnifyError::Mismatch {
            context: UnifyContext::TopLevel,
            ..
        })
    ));
}

#[test]
fn shared_variable_conflict() {
    let mut binding = Binding::new();
    let mut engine = UnifyEngine::new(&mut binding);
    let formal = TypeExpr::ubits(n("N"));

    engine.unify(&formal, &u(8)).unwrap();
    assert_eq!(
        engine.unify(&formal, &u(16)),
        Err(UnifyError::Conflict {
            var: ParamName::new("N"),
            first: BoundValue::Dim(8),
            second: BoundValue::Dim(16),
        })
    );
}

#[test]
fn array_binds_size_and_element() {
    let mut binding = Binding::new();
    let formal = TypeExpr::array(TypeExpr::ubits(n("M")), n("N"));
    formal
        .unify(&ConcreteType::array(u(3), 5), &mut binding)
        .unwrap();

    assert_eq!(binding.dim("M"), Some(3));
    assert_eq!(binding.dim("N"), Some(5));
}

#[test]
fn array_element_mismatch_has_context() {
    let mut binding = Binding::new();
    let formal = TypeExpr::array(TypeExpr::ubits(n("M")), n("N"));
    let result = formal.unify(&ConcreteType::array(ConcreteType::Token, 2), &mut binding);

    assert!(matches!(
        result,
        Err(UnifyError::Mismatch {
            context: UnifyContext::ArrayElement,
            ..
        })
    ));
}

#[test]
fn type_variable_binds_whole_type() {
    let mut binding = Binding::new();
    let formal = TypeExpr::array(TypeExpr::var("T"), n("N"));
    let element = ConcreteType::tuple([u(1), ConcreteType::sbits(4)]);
    formal
        .unify(&ConcreteType::array(element.clone(), 7), &mut binding)
        .unwrap();

    assert_eq!(binding.ty("T"), Some(&element));
    assert_eq!(binding.dim("N"), Some(7));
}

#[test]
fn opaque_matches_anything() {
    let mut binding = Binding::new();
    for actual in [u(3), ConcreteType::Token, ConcreteType::unit()] {
        assert!(TypeExpr::Any.unify(&actual, &mut binding).is_ok());
    }
    assert!(binding.is_empty());
}

#[test]
fn tuple_length_mismatch() {
    let mut binding = Binding::new();
    let formal = TypeExpr::tuple([TypeExpr::ubits(n("N")), TypeExpr::ubits(n("N"))]);
    let result = formal.unify(&ConcreteType::tuple([u(8)]), &mut binding);

    assert_eq!(
        result,
        Err(UnifyError::ArityMismatch {
            expected: 2,
            found: 1,
            kind: ArityKind::Tuple,
            context: UnifyContext::TopLevel,
        })
    );
}

#[test]
fn tuple_member_conflict() {
    let mut binding = Binding::new();
    let formal = TypeExpr::tuple([TypeExpr::ubits(n("N")), TypeExpr::ubits(n("N"))]);
    let result = formal.unify(&ConcreteType::tuple([u(8), u(9)]), &mut binding);

    assert!(matches!(result, Err(UnifyError::Conflict { .. })));
}

#[test]
fn function_value_unifies_params_and_return() {
    let mut binding = Binding::new();
    let formal = TypeExpr::function([TypeExpr::var("T")], TypeExpr::var("U"));
    let actual = ConcreteType::function([u(8)], u(1));
    formal.unify(&actual, &mut binding).unwrap();

    assert_eq!(binding.ty("T"), Some(&u(8)));
    assert_eq!(binding.ty("U"), Some(&u(1)));
}

#[test]
fn function_value_param_count_mismatch() {
    let mut binding = Binding::new();
    let formal = TypeExpr::function([TypeExpr::var("T")], TypeExpr::var("U"));
    let actual = ConcreteType::function([u(8), u(8)], u(1));

    assert!(matches!(
        formal.unify(&actual, &mut binding),
        Err(UnifyError::ArityMismatch {
            kind: ArityKind::FunctionParams,
            ..
        })
    ));
}

#[test]
fn function_return_mismatch_has_context() {
    let mut binding = Binding::new();
    let formal = TypeExpr::function([TypeExpr::var("T")], TypeExpr::Token);
    let actual = ConcreteType::function([u(8)], u(1));

    assert!(matches!(
        formal.unify(&actual, &mut binding),
        Err(UnifyError::Mismatch {
            context: UnifyContext::FunctionReturn,
            ..
        })
    ));
}

#[test]
fn derived_dimension_checks_against_binding() {
    let mut binding = Binding::new();
    binding.bind_dim(&ParamName::new("N"), 4).unwrap();
    let formal = TypeExpr::ubits(Dim::sum(n("N"), Dim::Lit(1)));

    assert!(formal.unify(&u(5), &mut binding).is_ok());
    assert!(matches!(
        formal.unify(&u(4), &mut binding),
        Err(UnifyError::Mismatch { .. })
    ));
}

#[test]
fn derived_dimension_with_unsolved_variable() {
    let mut binding = Binding::new();
    let formal = TypeExpr::ubits(Dim::sum(n("N"), Dim::Lit(1)));

    assert_eq!(
        formal.unify(&u(5), &mut binding),
        Err(UnifyError::UnboundVariable {
            var: ParamName::new("N")
        })
    );
}

#[test]
fn token_matches_token_only() {
    let mut binding = Binding::new();
    assert!(TypeExpr::Token
        .unify(&ConcreteType::Token, &mut binding)
        .is_ok());
    assert!(TypeExpr::Token.unify(&u(1), &mut binding).is_err());
}
