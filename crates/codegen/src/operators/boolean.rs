//! The BOOLEAN type
//!
//! Comparisons, zero-extending casts into the numeric types, and logical
//! NOT. AND/OR are deliberately absent: SQL three-valued logic
//! (`FALSE AND NULL` is `FALSE`) contradicts the null-dispatch wrapper's
//! short-circuit contract, so the connectives are lowered by the
//! expression translator, which owns their control flow.

use crate::error::{Error, Result};
use crate::operators::traits::{CastOperator, ComparisonOperator, UnaryOperator};
use crate::operators::{InvocationContext, OperatorId};
use crate::types::{CastEntry, Sentinel, SqlType, Type, TypeId, TypeSystem, UnaryEntry, Value};
use granite_ir::{Emitter, NativeKind, Predicate};

////////////////////////////////////////////////////////////////////////////
//
// Casting
//
////////////////////////////////////////////////////////////////////////////

struct Cast;

impl CastOperator for Cast {
    fn supports_types(&self, from: Type, to: Type) -> bool {
        from.id == TypeId::Boolean
            && matches!(
                to.id,
                TypeId::Boolean
                    | TypeId::TinyInt
                    | TypeId::SmallInt
                    | TypeId::Integer
                    | TypeId::BigInt
                    | TypeId::Decimal
            )
    }

    fn emit(&self, emitter: &mut dyn Emitter, value: &Value, to: Type) -> Result<Value> {
        if !self.supports_types(value.ty, to) {
            return Err(Error::UnsupportedCast {
                from: value.ty.id,
                to: to.id,
            });
        }

        // false is 0, true is 1: always a zero extension
        let data = match to.id {
            TypeId::Boolean => value.data,
            TypeId::Decimal => {
                let widened = emitter.zext(value.data, NativeKind::I32);
                emitter.int_to_float(widened)
            }
            _ => emitter.zext(value.data, to.id.native_kind()),
        };

        let null = match value.null {
            Some(n) => Some(n),
            None if to.nullable => Some(emitter.const_bool(false)),
            None => None,
        };

        Ok(Value {
            ty: to,
            data,
            length: None,
            null,
        })
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Comparison
//
////////////////////////////////////////////////////////////////////////////

struct Compare;

impl Compare {
    fn boolean(raw: granite_ir::ValueId) -> Value {
        Value::new(Type::new(TypeId::Boolean), raw)
    }
}

impl ComparisonOperator for Compare {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Boolean && left.id == right.id
    }

    /// Booleans sort as 0/1, so the tie-break delta is an INTEGER.
    fn sort_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Integer)
    }

    fn emit_lt(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Lt, l.data, r.data)))
    }

    fn emit_le(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Le, l.data, r.data)))
    }

    fn emit_eq(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Eq, l.data, r.data)))
    }

    fn emit_ne(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Ne, l.data, r.data)))
    }

    fn emit_gt(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Gt, l.data, r.data)))
    }

    fn emit_ge(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.icmp(Predicate::Ge, l.data, r.data)))
    }

    fn emit_for_sort(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        let lw = e.zext(l.data, NativeKind::I32);
        let rw = e.zext(r.data, NativeKind::I32);
        let diff = e.sub(lw, rw);
        Ok(Value::new(Type::new(TypeId::Integer), diff))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Unary operators
//
////////////////////////////////////////////////////////////////////////////

struct LogicalNot;

impl UnaryOperator for LogicalNot {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Boolean
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Boolean)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_type(value.ty));
        let raw = emitter.not(value.data);
        Ok(Value::new(Type::new(TypeId::Boolean), raw))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Tables and type singleton
//
////////////////////////////////////////////////////////////////////////////

static CAST_BOOLEAN: Cast = Cast;
static COMPARE_BOOLEAN: Compare = Compare;
static NOT_BOOLEAN: LogicalNot = LogicalNot;

static BOOLEAN_IMPLICIT: [TypeId; 1] = [TypeId::Boolean];
static BOOLEAN_CASTS: [CastEntry; 6] = [
    CastEntry { from: TypeId::Boolean, to: TypeId::Boolean, op: &CAST_BOOLEAN },
    CastEntry { from: TypeId::Boolean, to: TypeId::TinyInt, op: &CAST_BOOLEAN },
    CastEntry { from: TypeId::Boolean, to: TypeId::SmallInt, op: &CAST_BOOLEAN },
    CastEntry { from: TypeId::Boolean, to: TypeId::Integer, op: &CAST_BOOLEAN },
    CastEntry { from: TypeId::Boolean, to: TypeId::BigInt, op: &CAST_BOOLEAN },
    CastEntry { from: TypeId::Boolean, to: TypeId::Decimal, op: &CAST_BOOLEAN },
];
static BOOLEAN_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_BOOLEAN];
static BOOLEAN_UNARY: [UnaryEntry; 1] = [UnaryEntry {
    id: OperatorId::LogicalNot,
    op: &NOT_BOOLEAN,
}];

pub static BOOLEAN: SqlType = SqlType::new(
    TypeId::Boolean,
    NativeKind::Bool,
    None,
    Some(Sentinel::Bool(false)),
    Some(Sentinel::Bool(true)),
    Sentinel::Bool(false),
    TypeSystem::new(
        &BOOLEAN_IMPLICIT,
        &BOOLEAN_CASTS,
        &BOOLEAN_COMPARISONS,
        &BOOLEAN_UNARY,
        &[],
        &[],
        &[],
    ),
);
