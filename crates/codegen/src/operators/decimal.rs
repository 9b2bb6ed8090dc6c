//! The DECIMAL type
//!
//! Lowered as a native double. Arithmetic carries no overflow flags;
//! division and modulo keep the same zero-test and policy branching as the
//! integer family, since a zero divisor is just as undefined for the float
//! division primitive in emitted code.

use crate::error::{Error, Result};
use crate::operators::traits::{BinaryOperator, CastOperator, ComparisonOperator, UnaryOperator};
use crate::operators::{ErrorPolicy, InvocationContext, OperatorId};
use crate::types::{
    BinaryEntry, CastEntry, Sentinel, SqlType, Type, TypeId, TypeSystem, UnaryEntry, Value,
};
use granite_ir::{Emitter, Fault, NativeKind, Predicate};

////////////////////////////////////////////////////////////////////////////
//
// Casting
//
// DECIMAL casts to the integer widths by truncation toward zero, never to
// BOOLEAN or VARCHAR.
//
////////////////////////////////////////////////////////////////////////////

struct Cast;

impl CastOperator for Cast {
    fn supports_types(&self, from: Type, to: Type) -> bool {
        from.id == TypeId::Decimal
            && matches!(
                to.id,
                TypeId::TinyInt
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

        let data = match to.id {
            TypeId::Decimal => value.data,
            _ => emitter.float_to_int(value.data, to.id.native_kind()),
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
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn emit_lt(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Lt, l.data, r.data)))
    }

    fn emit_le(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Le, l.data, r.data)))
    }

    fn emit_eq(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Eq, l.data, r.data)))
    }

    fn emit_ne(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Ne, l.data, r.data)))
    }

    fn emit_gt(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Gt, l.data, r.data)))
    }

    fn emit_ge(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        Ok(Self::boolean(e.fcmp(Predicate::Ge, l.data, r.data)))
    }

    fn emit_for_sort(&self, e: &mut dyn Emitter, l: &Value, r: &Value) -> Result<Value> {
        let diff = e.fsub(l.data, r.data);
        Ok(Value::new(Type::new(TypeId::Decimal), diff))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Unary operators
//
////////////////////////////////////////////////////////////////////////////

struct Negate;

impl UnaryOperator for Negate {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Decimal
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_type(value.ty));
        // Float negation cannot overflow: no fault path
        let zero = emitter.const_float(0.0);
        let raw = emitter.fsub(zero, value.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Abs;

impl UnaryOperator for Abs {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Decimal
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        // Same shape as the integer family: the family's own subtraction
        // plus a select, never a library abs
        let sub = Sub;
        let zero = Value::new(Type::new(TypeId::Decimal), emitter.const_float(0.0));
        let negated = sub.emit(emitter, &zero, value, ctx)?;
        let lt_zero = emitter.fcmp(Predicate::Lt, value.data, zero.data);
        let raw = emitter.select(lt_zero, negated.data, value.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Ceil;

impl UnaryOperator for Ceil {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Decimal
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        let raw = emitter.fceil(value.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Floor;

impl UnaryOperator for Floor {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Decimal
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        let raw = emitter.ffloor(value.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Sqrt;

impl UnaryOperator for Sqrt {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == TypeId::Decimal
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        let raw = emitter.sqrt(value.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Binary operators
//
////////////////////////////////////////////////////////////////////////////

struct Add;

impl BinaryOperator for Add {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));
        let raw = emitter.fadd(left.data, right.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Sub;

impl BinaryOperator for Sub {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));
        let raw = emitter.fsub(left.data, right.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Mul;

impl BinaryOperator for Mul {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));
        let raw = emitter.fmul(left.data, right.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

struct Div;

impl BinaryOperator for Div {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let zero = emitter.const_float(0.0);
        let div0 = emitter.fcmp(Predicate::Eq, right.data, zero);

        match ctx.on_error {
            ErrorPolicy::ReturnNull => {
                emitter.begin_if(div0);
                let null_val = DECIMAL.null_value(emitter);
                emitter.begin_else();
                let quotient = emitter.fdiv(left.data, right.data);
                let not_null = emitter.const_bool(false);
                emitter.end_if();

                let Some(is_null) = null_val.null else {
                    return Err(Error::Internal(
                        "null value emitted without a null flag".into(),
                    ));
                };
                let data = emitter.phi(null_val.data, quotient);
                let null = emitter.phi(is_null, not_null);
                Ok(Value::with_null(
                    Type::nullable(TypeId::Decimal),
                    data,
                    Some(null),
                ))
            }
            ErrorPolicy::RaiseError => {
                emitter
                    .fault_if(div0, Fault::DivideByZero)
                    .map_err(|_| Error::DivideByZero {
                        operator: OperatorId::Div,
                        ty: TypeId::Decimal,
                    })?;
                let quotient = emitter.fdiv(left.data, right.data);
                Ok(Value::new(Type::new(TypeId::Decimal), quotient))
            }
        }
    }
}

struct Modulo;

impl BinaryOperator for Modulo {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == TypeId::Decimal && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(TypeId::Decimal)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let zero = emitter.const_float(0.0);
        let div0 = emitter.fcmp(Predicate::Eq, right.data, zero);

        match ctx.on_error {
            ErrorPolicy::ReturnNull => {
                emitter.begin_if(div0);
                let null_val = DECIMAL.null_value(emitter);
                emitter.begin_else();
                let remainder = emitter.frem(left.data, right.data);
                let not_null = emitter.const_bool(false);
                emitter.end_if();

                let Some(is_null) = null_val.null else {
                    return Err(Error::Internal(
                        "null value emitted without a null flag".into(),
                    ));
                };
                let data = emitter.phi(null_val.data, remainder);
                let null = emitter.phi(is_null, not_null);
                Ok(Value::with_null(
                    Type::nullable(TypeId::Decimal),
                    data,
                    Some(null),
                ))
            }
            ErrorPolicy::RaiseError => {
                emitter
                    .fault_if(div0, Fault::DivideByZero)
                    .map_err(|_| Error::DivideByZero {
                        operator: OperatorId::Mod,
                        ty: TypeId::Decimal,
                    })?;
                let remainder = emitter.frem(left.data, right.data);
                Ok(Value::new(Type::new(TypeId::Decimal), remainder))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Tables and type singleton
//
////////////////////////////////////////////////////////////////////////////

static CAST_DECIMAL: Cast = Cast;
static COMPARE_DECIMAL: Compare = Compare;
static NEGATE_DECIMAL: Negate = Negate;
static ABS_DECIMAL: Abs = Abs;
static CEIL_DECIMAL: Ceil = Ceil;
static FLOOR_DECIMAL: Floor = Floor;
static SQRT_DECIMAL: Sqrt = Sqrt;
static ADD_DECIMAL: Add = Add;
static SUB_DECIMAL: Sub = Sub;
static MUL_DECIMAL: Mul = Mul;
static DIV_DECIMAL: Div = Div;
static MOD_DECIMAL: Modulo = Modulo;

static DECIMAL_IMPLICIT: [TypeId; 1] = [TypeId::Decimal];
static DECIMAL_CASTS: [CastEntry; 5] = [
    CastEntry { from: TypeId::Decimal, to: TypeId::TinyInt, op: &CAST_DECIMAL },
    CastEntry { from: TypeId::Decimal, to: TypeId::SmallInt, op: &CAST_DECIMAL },
    CastEntry { from: TypeId::Decimal, to: TypeId::Integer, op: &CAST_DECIMAL },
    CastEntry { from: TypeId::Decimal, to: TypeId::BigInt, op: &CAST_DECIMAL },
    CastEntry { from: TypeId::Decimal, to: TypeId::Decimal, op: &CAST_DECIMAL },
];
static DECIMAL_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_DECIMAL];
static DECIMAL_UNARY: [UnaryEntry; 5] = [
    UnaryEntry { id: OperatorId::Negate, op: &NEGATE_DECIMAL },
    UnaryEntry { id: OperatorId::Abs, op: &ABS_DECIMAL },
    UnaryEntry { id: OperatorId::Ceil, op: &CEIL_DECIMAL },
    UnaryEntry { id: OperatorId::Floor, op: &FLOOR_DECIMAL },
    UnaryEntry { id: OperatorId::Sqrt, op: &SQRT_DECIMAL },
];
static DECIMAL_BINARY: [BinaryEntry; 5] = [
    BinaryEntry { id: OperatorId::Add, op: &ADD_DECIMAL },
    BinaryEntry { id: OperatorId::Sub, op: &SUB_DECIMAL },
    BinaryEntry { id: OperatorId::Mul, op: &MUL_DECIMAL },
    BinaryEntry { id: OperatorId::Div, op: &DIV_DECIMAL },
    BinaryEntry { id: OperatorId::Mod, op: &MOD_DECIMAL },
];

pub static DECIMAL: SqlType = SqlType::new(
    TypeId::Decimal,
    NativeKind::F64,
    None,
    Some(Sentinel::Float(f64::MIN)),
    Some(Sentinel::Float(f64::MAX)),
    Sentinel::Float(f64::MIN),
    TypeSystem::new(
        &DECIMAL_IMPLICIT,
        &DECIMAL_CASTS,
        &DECIMAL_COMPARISONS,
        &DECIMAL_UNARY,
        &DECIMAL_BINARY,
        &[],
        &[],
    ),
);
