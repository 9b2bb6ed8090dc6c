//! Comparisons agree with native semantics; compare-for-sort is the raw
//! difference

mod common;

use common::TestContext;
use granite_codegen::{emit_comparison, ComparisonKind, Error, Type, TypeId};

#[test]
fn test_comparisons_agree_with_native() {
    let mut ctx = TestContext::new();

    for (a, b) in [(3_i64, 7_i64), (7, 3), (5, 5), (-4, 4), (-4, -9)] {
        let (lhs, rhs) = (ctx.integer(a), ctx.integer(b));
        for (kind, expected) in [
            (ComparisonKind::Lt, a < b),
            (ComparisonKind::Le, a <= b),
            (ComparisonKind::Eq, a == b),
            (ComparisonKind::Ne, a != b),
            (ComparisonKind::Gt, a > b),
            (ComparisonKind::Ge, a >= b),
        ] {
            let result =
                emit_comparison(&ctx.registry, &mut ctx.emitter, kind, &lhs, &rhs).unwrap();
            assert_eq!(result.ty, Type::new(TypeId::Boolean));
            assert_eq!(ctx.bool_of(&result), expected, "{a} {kind:?} {b}");
        }
    }
}

#[test]
fn test_for_sort_is_raw_difference() {
    let mut ctx = TestContext::new();

    let (a, b) = (ctx.integer(7), ctx.integer(10));
    let delta = emit_comparison(
        &ctx.registry,
        &mut ctx.emitter,
        ComparisonKind::ForSort,
        &a,
        &b,
    )
    .unwrap();
    assert_eq!(delta.ty, Type::new(TypeId::Integer));
    assert_eq!(ctx.int_of(&delta), -3);

    // Not a normalized sign: a large gap keeps its magnitude
    let (a, b) = (ctx.integer(1000), ctx.integer(1));
    let delta = emit_comparison(
        &ctx.registry,
        &mut ctx.emitter,
        ComparisonKind::ForSort,
        &a,
        &b,
    )
    .unwrap();
    assert_eq!(ctx.int_of(&delta), 999);
}

#[test]
fn test_decimal_comparisons() {
    let mut ctx = TestContext::new();

    let (a, b) = (ctx.decimal(1.5), ctx.decimal(2.5));
    let lt = emit_comparison(&ctx.registry, &mut ctx.emitter, ComparisonKind::Lt, &a, &b)
        .unwrap();
    assert!(ctx.bool_of(&lt));

    let delta = emit_comparison(
        &ctx.registry,
        &mut ctx.emitter,
        ComparisonKind::ForSort,
        &a,
        &b,
    )
    .unwrap();
    assert_eq!(delta.ty, Type::new(TypeId::Decimal));
    assert_eq!(ctx.float_of(&delta), -1.0);
}

#[test]
fn test_boolean_sort_delta_is_integer() {
    let mut ctx = TestContext::new();

    let (f, t) = (ctx.boolean(false), ctx.boolean(true));
    let delta = emit_comparison(
        &ctx.registry,
        &mut ctx.emitter,
        ComparisonKind::ForSort,
        &f,
        &t,
    )
    .unwrap();
    assert_eq!(delta.ty, Type::new(TypeId::Integer));
    assert_eq!(ctx.int_of(&delta), -1);
}

#[test]
fn test_mismatched_types_are_rejected() {
    let mut ctx = TestContext::new();

    let (a, b) = (ctx.integer(1), ctx.bigint(1));
    let err = emit_comparison(&ctx.registry, &mut ctx.emitter, ComparisonKind::Eq, &a, &b)
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_nullability_does_not_affect_dispatch() {
    // A nullable and a non-null INTEGER compare through the same operator
    let mut ctx = TestContext::new();

    let a = ctx.nullable_integer(3, false);
    let b = ctx.integer(7);
    let result =
        emit_comparison(&ctx.registry, &mut ctx.emitter, ComparisonKind::Lt, &a, &b).unwrap();
    assert!(ctx.bool_of(&result));
    assert!(!ctx.is_null(&result));
}
