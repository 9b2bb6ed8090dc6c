//! Core traits for scalar operators
//!
//! One unit-struct implementation exists per (operator, type family) pair;
//! the family's tables hold `&'static` references to them. Each `emit`
//! appends instructions through the emitter and returns a new [`Value`];
//! implementations never retain references to their caller.
//!
//! `supports_*` predicates compare type ids only, never nullability; the
//! null-dispatch wrappers are transparent with respect to these checks and
//! forward them unchanged.

use crate::error::Result;
use crate::operators::InvocationContext;
use crate::types::{Type, Value};
use granite_ir::Emitter;

/// An explicit cast from one scalar type to another.
pub trait CastOperator: Send + Sync {
    /// Whether this operator can cast `from` into `to`.
    fn supports_types(&self, from: Type, to: Type) -> bool;

    /// Emit the cast. The result's nullability is taken from `to`; a
    /// non-null source casting to a nullable destination gets a
    /// constant-false null flag.
    fn emit(&self, emitter: &mut dyn Emitter, value: &Value, to: Type) -> Result<Value>;
}

/// The comparison operations of one type family.
///
/// The six boolean comparisons return Boolean values; `emit_for_sort`
/// returns the raw signed difference `left - right` in the family's own
/// type so sort routines can use it directly as a tie-break delta.
pub trait ComparisonOperator: Send + Sync {
    fn supports_types(&self, left: Type, right: Type) -> bool;

    /// Result type of `emit_for_sort`, needed by the null wrapper before
    /// any instruction is emitted.
    fn sort_type(&self, left: Type, right: Type) -> Type {
        let _ = right;
        Type::new(left.id)
    }

    fn emit_lt(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_le(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_eq(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_ne(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_gt(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_ge(&self, emitter: &mut dyn Emitter, left: &Value, right: &Value) -> Result<Value>;
    fn emit_for_sort(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
    ) -> Result<Value>;
}

/// A one-operand operator.
pub trait UnaryOperator: Send + Sync {
    fn supports_type(&self, ty: Type) -> bool;

    /// Result type for the given operand type.
    fn result_type(&self, ty: Type) -> Type;

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value>;
}

/// A two-operand operator.
pub trait BinaryOperator: Send + Sync {
    fn supports_types(&self, left: Type, right: Type) -> bool;

    fn result_type(&self, left: Type, right: Type) -> Type;

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value>;
}

/// An operator over an arbitrary number of operands.
pub trait NaryOperator: Send + Sync {
    fn supports_types(&self, types: &[Type]) -> bool;

    fn result_type(&self, types: &[Type]) -> Type;

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        args: &[Value],
        ctx: &InvocationContext,
    ) -> Result<Value>;
}

/// An operator taking no operands.
pub trait ZeroArgOperator: Send + Sync {
    fn result_type(&self) -> Type;

    fn emit(&self, emitter: &mut dyn Emitter, ctx: &InvocationContext) -> Result<Value>;
}
