use pretty_assertions::assert_eq;

use super::*;

#[test]
fn display_forms() {
    assert_eq!(Dim::Lit(8).to_string(), "8");
    assert_eq!(Dim::var("N").to_string(), "N");
    assert_eq!(Dim::sum(Dim::var("N"), Dim::var("M")).to_string(), "N+M");
    assert_eq!(Dim::sum(Dim::var("N"), Dim::Lit(1)).to_string(), "N+1");
}

#[test]
fn flags_track_variables_and_arithmetic() {
    assert_eq!(Dim::Lit(3).flags(), ExprFlags::empty());
    assert_eq!(Dim::var("N").flags(), ExprFlags::HAS_DIM_VAR);
    assert_eq!(
        Dim::sum(Dim::var("N"), Dim::Lit(1)).flags(),
        ExprFlags::HAS_DIM_VAR | ExprFlags::HAS_DERIVED_DIM
    );
}

#[test]
fn eval_sum() {
    let mut binding = Binding::new();
    binding.bind_dim(&ParamName::new("N"), 4).unwrap();
    binding.bind_dim(&ParamName::new("M"), 12).unwrap();

    assert_eq!(Dim::sum(Dim::var("N"), Dim::var("M")).eval(&binding), Ok(16));
    assert_eq!(Dim::sum(Dim::var("N"), Dim::Lit(1)).eval(&binding), Ok(5));
}

#[test]
fn eval_unbound_names_variable() {
    let binding = Binding::new();
    assert_eq!(
        Dim::sum(Dim::Lit(1), Dim::var("K")).eval(&binding),
        Err(UnifyError::UnboundVariable {
            var: ParamName::new("K")
        })
    );
}

#[test]
fn eval_overflow_is_an_error() {
    let mut binding = Binding::new();
    binding.bind_dim(&ParamName::new("N"), u64::MAX).unwrap();
    let dim = Dim::sum(Dim::var("N"), Dim::Lit(1));
    assert_eq!(
        dim.eval(&binding),
        Err(UnifyError::DimensionOverflow { dim: dim.clone() })
    );
}

#[test]
fn for_each_var_is_left_to_right() {
    let mut seen = Vec::new();
    let dim = Dim::sum(Dim::sum(Dim::var("A"), Dim::Lit(2)), Dim::var("B"));
    dim.for_each_var(&mut |name| seen.push(name.to_string()));
    assert_eq!(seen, vec!["A".to_string(), "B".to_string()]);
}
