//! The standard builtin catalog.
//!
//! Every entry must pass [`BuiltinSignature::validate`] and determine all of
//! its result variables from its formals; the catalog tests enforce both.

use dslx_types::{Dim, TypeExpr};

use crate::{BuiltinSignature, Shape};

fn n(name: &str) -> Dim {
    Dim::var(name)
}

fn lit(value: u64) -> Dim {
    Dim::Lit(value)
}

fn u(width: Dim) -> TypeExpr {
    TypeExpr::ubits(width)
}

fn s(width: Dim) -> TypeExpr {
    TypeExpr::sbits(width)
}

fn t(name: &str) -> TypeExpr {
    TypeExpr::var(name)
}

fn arr(element: TypeExpr, size: Dim) -> TypeExpr {
    TypeExpr::array(element, size)
}

fn u1() -> TypeExpr {
    u(lit(1))
}

fn u32_bits() -> TypeExpr {
    u(lit(32))
}

/// `(uN[N]) -> ret`
fn bits_unary(name: &str, ret: TypeExpr) -> BuiltinSignature {
    BuiltinSignature::builder(name, Shape::UnaryParametric)
        .dims(&["N"])
        .param(u(n("N")))
        .returns(ret)
}

/// `(T[N]) -> ret`
fn array_unary(name: &str, ret: TypeExpr) -> BuiltinSignature {
    BuiltinSignature::builder(name, Shape::UnaryParametric)
        .dims(&["N"])
        .types(&["T"])
        .param(arr(t("T"), n("N")))
        .returns(ret)
}

/// `(T) -> T`, side-effecting.
fn passthrough(name: &str) -> BuiltinSignature {
    BuiltinSignature::builder(name, Shape::FixedArity(1))
        .types(&["T"])
        .param(t("T"))
        .returns(t("T"))
}

pub(crate) fn standard() -> Vec<BuiltinSignature> {
    vec![
        // Unary bit transforms.
        bits_unary("clz", u(n("N"))),
        bits_unary("ctz", u(n("N"))),
        bits_unary("rev", u(n("N"))),
        bits_unary("and_reduce", u1()),
        bits_unary("or_reduce", u1()),
        bits_unary("xor_reduce", u1()),
        // Unary array transforms.
        array_unary("array_rev", arr(t("T"), n("N"))),
        array_unary("array_size", u32_bits()),
        array_unary(
            "enumerate",
            arr(TypeExpr::tuple([u32_bits(), t("T")]), n("N")),
        ),
        // Arithmetic.
        BuiltinSignature::builder("add_with_carry", Shape::FixedArity(2))
            .dims(&["N"])
            .param(u(n("N")))
            .param(u(n("N")))
            .returns(TypeExpr::tuple([u1(), u(n("N"))])),
        BuiltinSignature::builder("umulp", Shape::FixedArity(2))
            .dims(&["N"])
            .param(u(n("N")))
            .param(u(n("N")))
            .returns(TypeExpr::tuple([u(n("N")), u(n("N"))])),
        BuiltinSignature::builder("smulp", Shape::FixedArity(2))
            .dims(&["N"])
            .param(s(n("N")))
            .param(s(n("N")))
            .returns(TypeExpr::tuple([s(n("N")), s(n("N"))])),
        // Width-changing bit operations.
        BuiltinSignature::builder("concat", Shape::FixedArity(2))
            .dims(&["N", "M"])
            .param(u(n("N")))
            .param(u(n("M")))
            .returns(u(Dim::sum(n("N"), n("M")))),
        BuiltinSignature::builder("one_hot", Shape::FixedArity(2))
            .dims(&["N"])
            .param(u(n("N")))
            .param(u1())
            .returns(u(Dim::sum(n("N"), lit(1)))),
        BuiltinSignature::builder("bit_slice_update", Shape::FixedArity(3))
            .dims(&["N", "U", "V"])
            .param(u(n("N")))
            .param(u(n("U")))
            .param(u(n("V")))
            .returns(u(n("N"))),
        // Selects.
        BuiltinSignature::builder("one_hot_sel", Shape::FixedArity(2))
            .dims(&["N", "M"])
            .param(u(n("N")))
            .param(arr(u(n("M")), n("N")))
            .returns(u(n("M"))),
        BuiltinSignature::builder("priority_sel", Shape::FixedArity(3))
            .dims(&["N", "M"])
            .param(u(n("N")))
            .param(arr(u(n("M")), n("N")))
            .param(u(n("M")))
            .returns(u(n("M"))),
        // Array operations.
        BuiltinSignature::builder("update", Shape::FixedArity(3))
            .dims(&["N", "M"])
            .types(&["T"])
            .param(arr(t("T"), n("N")))
            .param(u(n("M")))
            .param(t("T"))
            .returns(arr(t("T"), n("N"))),
        BuiltinSignature::builder("slice", Shape::FixedArity(3))
            .dims(&["M", "N", "P"])
            .types(&["T"])
            .param(arr(t("T"), n("M")))
            .param(u(n("N")))
            .param(arr(t("T"), n("P")))
            .returns(arr(t("T"), n("P"))),
        BuiltinSignature::builder("zip", Shape::FixedArity(2))
            .dims(&["N"])
            .types(&["T", "U"])
            .param(arr(t("T"), n("N")))
            .param(arr(t("U"), n("N")))
            .returns(arr(TypeExpr::tuple([t("T"), t("U")]), n("N"))),
        BuiltinSignature::builder("map", Shape::FixedArity(2))
            .dims(&["N"])
            .types(&["T", "U"])
            .param(arr(t("T"), n("N")))
            .param(TypeExpr::function([t("T")], t("U")))
            .returns(arr(t("U"), n("N"))),
        // Assertions and instrumentation.
        BuiltinSignature::builder("assert_eq", Shape::FixedArity(2))
            .types(&["T"])
            .param(t("T"))
            .param(t("T"))
            .returns(TypeExpr::unit()),
        BuiltinSignature::builder("assert_lt", Shape::FixedArity(2))
            .dims(&["N"])
            .param(u(n("N")))
            .param(u(n("N")))
            .returns(TypeExpr::unit()),
        BuiltinSignature::builder("gate!", Shape::FixedArity(2))
            .types(&["T"])
            .param(u1())
            .param(t("T"))
            .returns(t("T")),
        BuiltinSignature::builder("cover!", Shape::FixedArity(2))
            .dims(&["N"])
            .param(arr(u(lit(8)), n("N")))
            .param(u1())
            .returns(TypeExpr::unit()),
        passthrough("trace!"),
        passthrough("fail!"),
        // Token plumbing.
        BuiltinSignature::builder("join", Shape::Variadic { min: 0 })
            .param(TypeExpr::Token)
            .returns(TypeExpr::Token),
    ]
}
