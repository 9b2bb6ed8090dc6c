//! Null-dispatch wrappers
//!
//! Decorator functions that factor the "any null operand produces a null
//! result" short-circuit out of every concrete operator, so type families
//! only implement the non-null case. When no operand carries a null flag
//! the concrete implementation is called directly with no branching
//! overhead; otherwise the concrete path is emitted in the else arm of an
//! if-region keyed on the combined null flag and merged with the result
//! type's null value.
//!
//! Because a backend may evaluate both arms, the concrete path must be
//! safe to evaluate with garbage operands; see the emitter contract.
//!
//! The wrappers are transparent with respect to `supports` queries: they
//! take an already-selected operator and never re-check or alter the
//! result type beyond marking it nullable.

use crate::error::{Error, Result};
use crate::operators::traits::{BinaryOperator, ComparisonOperator, UnaryOperator};
use crate::operators::{ComparisonKind, InvocationContext};
use crate::registry::TypeRegistry;
use crate::types::{Type, TypeId, Value};
use granite_ir::{Emitter, ValueId};

/// Apply a unary operator with null short-circuiting.
pub fn unary(
    registry: &TypeRegistry,
    op: &dyn UnaryOperator,
    emitter: &mut dyn Emitter,
    value: &Value,
    ctx: &InvocationContext,
) -> Result<Value> {
    let result_ty = op.result_type(value.ty);
    with_null_check(registry, emitter, value.null, result_ty, |e| {
        op.emit(e, value, ctx)
    })
}

/// Apply a binary operator with "either operand null" short-circuiting.
pub fn binary(
    registry: &TypeRegistry,
    op: &dyn BinaryOperator,
    emitter: &mut dyn Emitter,
    left: &Value,
    right: &Value,
    ctx: &InvocationContext,
) -> Result<Value> {
    let result_ty = op.result_type(left.ty, right.ty);
    let null_flag = combined_null_flag(emitter, left, right);
    with_null_check(registry, emitter, null_flag, result_ty, |e| {
        op.emit(e, left, right, ctx)
    })
}

/// Apply one comparison operation with null short-circuiting.
pub fn comparison(
    registry: &TypeRegistry,
    op: &dyn ComparisonOperator,
    kind: ComparisonKind,
    emitter: &mut dyn Emitter,
    left: &Value,
    right: &Value,
) -> Result<Value> {
    let result_ty = match kind {
        ComparisonKind::ForSort => op.sort_type(left.ty, right.ty),
        _ => Type::new(TypeId::Boolean),
    };
    let null_flag = combined_null_flag(emitter, left, right);
    with_null_check(registry, emitter, null_flag, result_ty, |e| match kind {
        ComparisonKind::Lt => op.emit_lt(e, left, right),
        ComparisonKind::Le => op.emit_le(e, left, right),
        ComparisonKind::Eq => op.emit_eq(e, left, right),
        ComparisonKind::Ne => op.emit_ne(e, left, right),
        ComparisonKind::Gt => op.emit_gt(e, left, right),
        ComparisonKind::Ge => op.emit_ge(e, left, right),
        ComparisonKind::ForSort => op.emit_for_sort(e, left, right),
    })
}

/// "Either operand null", evaluated once. `None` when both operands are
/// proven non-null.
fn combined_null_flag(
    emitter: &mut dyn Emitter,
    left: &Value,
    right: &Value,
) -> Option<ValueId> {
    match (left.null, right.null) {
        (Some(l), Some(r)) => Some(emitter.or(l, r)),
        (Some(n), None) | (None, Some(n)) => Some(n),
        (None, None) => None,
    }
}

fn with_null_check(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    null_flag: Option<ValueId>,
    result_ty: Type,
    concrete: impl FnOnce(&mut dyn Emitter) -> Result<Value>,
) -> Result<Value> {
    // Fast path: no null flag, no branches
    let Some(null_flag) = null_flag else {
        return concrete(emitter);
    };

    let result_sql = registry.lookup(result_ty.id)?;

    emitter.begin_if(null_flag);
    let null_val = result_sql.null_value(emitter);
    emitter.begin_else();
    let computed = concrete(emitter)?;
    let computed_null = match computed.null {
        Some(n) => n,
        None => emitter.const_bool(false),
    };
    emitter.end_if();

    let Some(null_in) = null_val.null else {
        return Err(Error::Internal(
            "null value emitted without a null flag".into(),
        ));
    };

    let data = emitter.phi(null_val.data, computed.data);
    let length = match (null_val.length, computed.length) {
        (Some(l), Some(r)) => Some(emitter.phi(l, r)),
        _ => None,
    };
    let null = emitter.phi(null_in, computed_null);

    Ok(Value {
        ty: result_ty.with_nullable(true),
        data,
        length,
        null: Some(null),
    })
}
