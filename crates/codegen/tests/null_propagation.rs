//! Null-dispatch wrapper behavior end to end

mod common;

use common::TestContext;
use granite_codegen::{
    emit_binary, emit_comparison, emit_unary, ComparisonKind, ErrorPolicy, InvocationContext,
    OperatorId,
};

#[test]
fn test_unary_null_operand_yields_null() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    let v = ctx.nullable_integer(0, true);
    let result =
        emit_unary(&ctx.registry, &mut ctx.emitter, OperatorId::Negate, &v, &call).unwrap();
    assert!(result.ty.nullable);
    assert!(ctx.is_null(&result));
}

#[test]
fn test_binary_either_null_yields_null() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    let a = ctx.nullable_integer(0, true);
    let b = ctx.integer(3);
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Add,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(ctx.is_null(&result));

    let a = ctx.integer(3);
    let b = ctx.nullable_integer(0, true);
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Add,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(ctx.is_null(&result));
}

#[test]
fn test_nullable_but_present_operands_compute() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    let a = ctx.nullable_integer(5, false);
    let b = ctx.nullable_integer(3, false);
    let sum = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Add,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(!ctx.is_null(&sum));
    assert_eq!(ctx.int_of(&sum), 8);
}

#[test]
fn test_non_null_fast_path_emits_no_null_flag() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    let (a, b) = (ctx.integer(5), ctx.integer(3));
    let sum = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Add,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(sum.null.is_none());
    assert!(!sum.ty.nullable);
}

#[test]
fn test_null_operand_suppresses_concrete_faults() {
    // The null operand's data handle is the null sentinel, which is the
    // one value whose negation overflows. The wrapper's non-null arm is
    // emitted anyway, so the fault must be confined to the taken path.
    let mut ctx = TestContext::new();
    let call = InvocationContext::new(ErrorPolicy::RaiseError);

    let v = ctx.nullable_integer(0, true);
    let result =
        emit_unary(&ctx.registry, &mut ctx.emitter, OperatorId::Negate, &v, &call).unwrap();
    assert!(ctx.is_null(&result));
}

#[test]
fn test_null_divisor_with_return_null() {
    // Nested branching: the null wrapper around division, with the
    // divisor both nullable and zero when present
    let mut ctx = TestContext::new();
    let call = InvocationContext::new(ErrorPolicy::ReturnNull);

    let a = ctx.integer(10);
    let b = ctx.nullable_integer(0, true);
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(ctx.is_null(&result));

    let b = ctx.nullable_integer(0, false);
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(ctx.is_null(&result), "present zero divisor still nulls");

    let b = ctx.nullable_integer(5, false);
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &b,
        &call,
    )
    .unwrap();
    assert!(!ctx.is_null(&result));
    assert_eq!(ctx.int_of(&result), 2);
}

#[test]
fn test_comparison_null_propagation() {
    let mut ctx = TestContext::new();

    let a = ctx.nullable_integer(0, true);
    let b = ctx.integer(3);
    let result =
        emit_comparison(&ctx.registry, &mut ctx.emitter, ComparisonKind::Eq, &a, &b).unwrap();
    assert!(result.ty.nullable);
    assert!(ctx.is_null(&result));

    let delta = emit_comparison(
        &ctx.registry,
        &mut ctx.emitter,
        ComparisonKind::ForSort,
        &a,
        &b,
    )
    .unwrap();
    assert!(ctx.is_null(&delta));
}

#[test]
fn test_wrapper_preserves_result_type() {
    // The wrapper only adds nullability; the result id comes from the
    // concrete operator
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    let v = ctx.nullable_integer(9, false);
    let root =
        emit_unary(&ctx.registry, &mut ctx.emitter, OperatorId::Sqrt, &v, &call).unwrap();
    assert_eq!(root.ty.id, granite_codegen::TypeId::Decimal);
    assert!(root.ty.nullable);
    assert!(!ctx.is_null(&root));
    assert_eq!(ctx.float_of(&root), 3.0);
}
