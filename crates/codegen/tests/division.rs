//! Division and modulo: the zero-test and both error policies

mod common;

use common::TestContext;
use granite_codegen::{
    emit_binary, Error, ErrorPolicy, InvocationContext, OperatorId, TypeId,
};

#[test]
fn test_div_by_zero_raises() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::new(ErrorPolicy::RaiseError);

    let (a, z) = (ctx.integer(10), ctx.integer(0));
    let err = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &z,
        &call,
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DivideByZero {
            operator: OperatorId::Div,
            ty: TypeId::Integer,
        }
    );
}

#[test]
fn test_div_by_zero_returns_null() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::new(ErrorPolicy::ReturnNull);

    let (a, z) = (ctx.integer(10), ctx.integer(0));
    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &z,
        &call,
    )
    .unwrap();
    assert!(result.ty.nullable);
    assert!(ctx.is_null(&result));
}

#[test]
fn test_div_nonzero_under_return_null() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::new(ErrorPolicy::ReturnNull);

    let (a, b) = (ctx.integer(10), ctx.integer(4));
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
fn test_div_truncates_toward_zero() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    for (a, b, expected) in [(7, 2, 3), (-7, 2, -3), (7, -2, -3), (-7, -2, 3)] {
        let (lhs, rhs) = (ctx.integer(a), ctx.integer(b));
        let q = emit_binary(
            &ctx.registry,
            &mut ctx.emitter,
            OperatorId::Div,
            &lhs,
            &rhs,
            &call,
        )
        .unwrap();
        assert_eq!(ctx.int_of(&q), expected, "{a} / {b}");
    }
}

#[test]
fn test_modulo_sign_follows_dividend() {
    let mut ctx = TestContext::new();
    let call = InvocationContext::default();

    for (a, b, expected) in [(7, 3, 1), (-7, 3, -1), (7, -3, 1), (-7, -3, -1)] {
        let (lhs, rhs) = (ctx.integer(a), ctx.integer(b));
        let r = emit_binary(
            &ctx.registry,
            &mut ctx.emitter,
            OperatorId::Mod,
            &lhs,
            &rhs,
            &call,
        )
        .unwrap();
        assert_eq!(ctx.int_of(&r), expected, "{a} % {b}");
    }
}

#[test]
fn test_modulo_by_zero_policies() {
    let mut ctx = TestContext::new();

    let (a, z) = (ctx.integer(10), ctx.integer(0));
    let err = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Mod,
        &a,
        &z,
        &InvocationContext::new(ErrorPolicy::RaiseError),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DivideByZero {
            operator: OperatorId::Mod,
            ty: TypeId::Integer,
        }
    );

    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Mod,
        &a,
        &z,
        &InvocationContext::new(ErrorPolicy::ReturnNull),
    )
    .unwrap();
    assert!(ctx.is_null(&result));
}

#[test]
fn test_decimal_division_policies() {
    let mut ctx = TestContext::new();

    let (a, z) = (ctx.decimal(1.5), ctx.decimal(0.0));
    let err = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &z,
        &InvocationContext::new(ErrorPolicy::RaiseError),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::DivideByZero {
            operator: OperatorId::Div,
            ty: TypeId::Decimal,
        }
    );

    let result = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &z,
        &InvocationContext::new(ErrorPolicy::ReturnNull),
    )
    .unwrap();
    assert!(ctx.is_null(&result));

    let b = ctx.decimal(0.5);
    let q = emit_binary(
        &ctx.registry,
        &mut ctx.emitter,
        OperatorId::Div,
        &a,
        &b,
        &InvocationContext::default(),
    )
    .unwrap();
    assert_eq!(ctx.float_of(&q), 3.0);
}
