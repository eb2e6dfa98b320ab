use pretty_assertions::assert_eq;

use super::*;

fn name(s: &str) -> ParamName {
    ParamName::new(s)
}

#[test]
fn new_binding_is_empty() {
    let binding = Binding::new();
    assert!(binding.is_empty());
    assert_eq!(binding.len(), 0);
    assert_eq!(binding.dim("N"), None);
    assert_eq!(binding.ty("T"), None);
}

#[test]
fn rebinding_same_value_is_noop() {
    let mut binding = Binding::new();
    assert!(binding.bind_dim(&name("N"), 8).is_ok());
    assert!(binding.bind_dim(&name("N"), 8).is_ok());
    assert_eq!(binding.dim("N"), Some(8));
    assert_eq!(binding.len(), 1);
}

#[test]
fn rebinding_different_dim_conflicts() {
    let mut binding = Binding::new();
    binding.bind_dim(&name("N"), 8).unwrap();

    assert_eq!(
        binding.bind_dim(&name("N"), 16),
        Err(UnifyError::Conflict {
            var: name("N"),
            first: BoundValue::Dim(8),
            second: BoundValue::Dim(16),
        })
    );
    // The first value survives.
    assert_eq!(binding.dim("N"), Some(8));
}

#[test]
fn rebinding_different_type_conflicts() {
    let mut binding = Binding::new();
    binding.bind_type(&name("T"), &ConcreteType::ubits(4)).unwrap();

    let err = binding
        .bind_type(&name("T"), &ConcreteType::sbits(4))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "conflicting bindings for `T`: uN[4] vs. sN[4]"
    );
}

#[test]
fn dims_and_types_are_separate_namespaces() {
    let mut binding = Binding::new();
    binding.bind_dim(&name("N"), 3).unwrap();
    binding.bind_type(&name("T"), &ConcreteType::Token).unwrap();

    assert_eq!(binding.dim("T"), None);
    assert_eq!(binding.ty("N"), None);
    assert_eq!(binding.len(), 2);
}

#[test]
fn display_is_name_ordered() {
    let mut binding = Binding::new();
    binding.bind_dim(&name("N"), 8).unwrap();
    binding.bind_dim(&name("M"), 2).unwrap();
    binding.bind_type(&name("T"), &ConcreteType::bool()).unwrap();

    assert_eq!(binding.to_string(), "{M: 2, N: 8, T: uN[1]}");
    let dims: Vec<_> = binding.dims().map(|(n, v)| (n.to_string(), v)).collect();
    assert_eq!(dims, vec![("M".to_string(), 2), ("N".to_string(), 8)]);
}
