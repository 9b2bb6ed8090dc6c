//! The dispatch facade called by the expression compiler
//!
//! Each function resolves the operand's type system through the registry,
//! selects the first table entry whose `supports` predicate accepts the
//! operand types, applies the null-dispatch wrapper, and emits. A lookup
//! miss means the caller skipped its own `supports` pre-check, so it
//! surfaces as a type mismatch (or unsupported cast) and aborts the
//! expression's compilation.

use crate::error::{Error, Result};
use crate::operators::{null_check, ComparisonKind, InvocationContext, OperatorId};
use crate::registry::TypeRegistry;
use crate::types::{Type, Value};
use granite_ir::Emitter;

/// Explicitly cast `value` to `to`.
pub fn emit_cast(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    value: &Value,
    to: Type,
) -> Result<Value> {
    let sql_type = registry.lookup(value.ty.id)?;
    let op = sql_type
        .type_system()
        .find_cast(value.ty, to)
        .ok_or(Error::UnsupportedCast {
            from: value.ty.id,
            to: to.id,
        })?;
    tracing::debug!(from = %value.ty.id, to = %to.id, "emitting cast");
    op.emit(emitter, value, to)
}

/// Emit one comparison operation over `left` and `right`.
pub fn emit_comparison(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    kind: ComparisonKind,
    left: &Value,
    right: &Value,
) -> Result<Value> {
    let sql_type = registry.lookup(left.ty.id)?;
    let op = sql_type
        .type_system()
        .find_comparison(left.ty, right.ty)
        .ok_or_else(|| Error::TypeMismatch {
            operator: format!("{kind:?} comparison"),
            operands: format!("{}, {}", left.ty.id, right.ty.id),
        })?;
    tracing::debug!(ty = %left.ty.id, ?kind, "emitting comparison");
    null_check::comparison(registry, op, kind, emitter, left, right)
}

/// Emit the unary operator `id` over `value`.
pub fn emit_unary(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    id: OperatorId,
    value: &Value,
    ctx: &InvocationContext,
) -> Result<Value> {
    let sql_type = registry.lookup(value.ty.id)?;
    let op = sql_type
        .type_system()
        .find_unary(id, value.ty)
        .ok_or_else(|| Error::TypeMismatch {
            operator: id.to_string(),
            operands: value.ty.id.to_string(),
        })?;
    tracing::debug!(ty = %value.ty.id, operator = %id, "emitting unary operator");
    null_check::unary(registry, op, emitter, value, ctx)
}

/// Emit the binary operator `id` over `left` and `right`.
pub fn emit_binary(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    id: OperatorId,
    left: &Value,
    right: &Value,
    ctx: &InvocationContext,
) -> Result<Value> {
    let sql_type = registry.lookup(left.ty.id)?;
    let op = sql_type
        .type_system()
        .find_binary(id, left.ty, right.ty)
        .ok_or_else(|| Error::TypeMismatch {
            operator: id.to_string(),
            operands: format!("{}, {}", left.ty.id, right.ty.id),
        })?;
    tracing::debug!(ty = %left.ty.id, operator = %id, "emitting binary operator");
    null_check::binary(registry, op, emitter, left, right, ctx)
}

/// Emit the n-ary operator `id` over `args`. The first operand's type
/// system owns the table.
pub fn emit_nary(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    id: OperatorId,
    args: &[Value],
    ctx: &InvocationContext,
) -> Result<Value> {
    let first = args.first().ok_or_else(|| Error::TypeMismatch {
        operator: id.to_string(),
        operands: "no operands".into(),
    })?;
    let types: Vec<Type> = args.iter().map(|arg| arg.ty).collect();
    let sql_type = registry.lookup(first.ty.id)?;
    let op = sql_type
        .type_system()
        .find_nary(id, &types)
        .ok_or_else(|| Error::TypeMismatch {
            operator: id.to_string(),
            operands: types
                .iter()
                .map(|ty| ty.id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;
    tracing::debug!(ty = %first.ty.id, operator = %id, "emitting n-ary operator");
    op.emit(emitter, args, ctx)
}

/// Emit the zero-argument operator `id` from the table of type `ty`.
pub fn emit_zero_arg(
    registry: &TypeRegistry,
    emitter: &mut dyn Emitter,
    id: OperatorId,
    ty: Type,
    ctx: &InvocationContext,
) -> Result<Value> {
    let sql_type = registry.lookup(ty.id)?;
    let op = sql_type
        .type_system()
        .find_zero_arg(id)
        .ok_or_else(|| Error::TypeMismatch {
            operator: id.to_string(),
            operands: ty.id.to_string(),
        })?;
    tracing::debug!(ty = %ty.id, operator = %id, "emitting zero-arg operator");
    op.emit(emitter, ctx)
}
