//! The fixed-width signed integer family
//!
//! Reference implementation for all numeric families: one parameterized
//! operator set shared by TINYINT, SMALLINT, INTEGER, and BIGINT, with one
//! table block and one [`SqlType`] singleton per width.
//!
//! Overflow policy: add/sub/mul arm a run-time fault only under
//! [`ErrorPolicy::RaiseError`]; division and modulo are the only operators
//! that honor [`ErrorPolicy::ReturnNull`]; negation faults unconditionally.

use crate::error::{Error, Result};
use crate::operators::traits::{BinaryOperator, CastOperator, ComparisonOperator, UnaryOperator};
use crate::operators::{ErrorPolicy, InvocationContext, OperatorId};
use crate::types::{
    BinaryEntry, CastEntry, Sentinel, SqlType, Type, TypeId, TypeSystem, UnaryEntry, Value,
};
use granite_ir::{Emitter, Fault, NativeKind, Predicate};

/// Descriptor of the width-`ty` singleton, for operators that need to
/// build their family's null value.
fn sql_type(ty: TypeId) -> &'static SqlType {
    match ty {
        TypeId::TinyInt => &TINYINT,
        TypeId::SmallInt => &SMALLINT,
        TypeId::Integer => &INTEGER,
        TypeId::BigInt => &BIGINT,
        other => panic!("{other} is not an integer type"),
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Casting
//
// Integer widths cast to BOOLEAN, any integer width, and DECIMAL, never
// to VARCHAR.
//
////////////////////////////////////////////////////////////////////////////

struct Cast {
    ty: TypeId,
}

impl CastOperator for Cast {
    fn supports_types(&self, from: Type, to: Type) -> bool {
        from.id == self.ty
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

        let from_kind = self.ty.native_kind();
        let data = match to.id {
            TypeId::Boolean => emitter.trunc(value.data, NativeKind::Bool),
            TypeId::Decimal => emitter.int_to_float(value.data),
            _ => {
                let to_kind = to.id.native_kind();
                match to_kind.bits().cmp(&from_kind.bits()) {
                    std::cmp::Ordering::Less => emitter.trunc(value.data, to_kind),
                    std::cmp::Ordering::Equal => value.data,
                    std::cmp::Ordering::Greater => emitter.sext(value.data, to_kind),
                }
            }
        };

        // We may be casting a non-null value to a nullable type
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

struct Compare {
    ty: TypeId,
}

impl Compare {
    fn boolean(raw: granite_ir::ValueId) -> Value {
        Value::new(Type::new(TypeId::Boolean), raw)
    }
}

impl ComparisonOperator for Compare {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
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
        // Sort code consumes the raw difference as a tie-break delta, so
        // this must stay `left - right`, not a normalized -1/0/1
        let diff = e.sub(l.data, r.data);
        Ok(Value::new(Type::new(self.ty), diff))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Unary operators
//
////////////////////////////////////////////////////////////////////////////

struct Negate {
    ty: TypeId,
}

impl UnaryOperator for Negate {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == self.ty
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        _ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_type(value.ty));

        let zero = emitter.const_int(self.ty.native_kind(), 0);
        let (result, overflow) = emitter.sub_overflow(zero, value.data);

        // Negation overflow faults regardless of the caller's policy
        emitter
            .fault_if(overflow, Fault::IntegerOverflow)
            .map_err(|_| Error::ArithmeticOverflow {
                operator: OperatorId::Negate,
                ty: self.ty,
            })?;

        Ok(Value::new(Type::new(self.ty), result))
    }
}

struct Abs {
    ty: TypeId,
}

impl UnaryOperator for Abs {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == self.ty
    }

    fn result_type(&self, _ty: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        value: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        // Defined through the family's own subtraction, not a library abs,
        // so the overflow policy stays consistent with subtraction's
        let sub = Sub { ty: self.ty };
        let zero = Value::new(
            Type::new(self.ty),
            emitter.const_int(self.ty.native_kind(), 0),
        );

        // raw = (value < 0 ? 0 - value : value)
        let negated = sub.emit(emitter, &zero, value, ctx)?;
        let lt_zero = emitter.icmp(Predicate::Lt, value.data, zero.data);
        let raw = emitter.select(lt_zero, negated.data, value.data);

        Ok(Value::new(Type::new(self.ty), raw))
    }
}

struct Ceil {
    ty: TypeId,
}

impl UnaryOperator for Ceil {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == self.ty
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
        // Integers are already integral: ceiling is the decimal cast
        let cast = Cast { ty: self.ty };
        cast.emit(emitter, value, Type::new(TypeId::Decimal))
    }
}

struct Floor {
    ty: TypeId,
}

impl UnaryOperator for Floor {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == self.ty
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
        let cast = Cast { ty: self.ty };
        cast.emit(emitter, value, Type::new(TypeId::Decimal))
    }
}

struct Sqrt {
    ty: TypeId,
}

impl UnaryOperator for Sqrt {
    fn supports_type(&self, ty: Type) -> bool {
        ty.id == self.ty
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
        let cast = Cast { ty: self.ty };
        let casted = cast.emit(emitter, value, Type::new(TypeId::Decimal))?;
        let raw = emitter.sqrt(casted.data);
        Ok(Value::new(Type::new(TypeId::Decimal), raw))
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Binary operators
//
////////////////////////////////////////////////////////////////////////////

struct Add {
    ty: TypeId,
}

impl BinaryOperator for Add {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let (result, overflow) = emitter.add_overflow(left.data, right.data);

        // Only RaiseError arms the fault; under ReturnNull the overflow
        // flag is dropped; the policy covers division and modulo only
        if ctx.on_error == ErrorPolicy::RaiseError {
            emitter
                .fault_if(overflow, Fault::IntegerOverflow)
                .map_err(|_| Error::ArithmeticOverflow {
                    operator: OperatorId::Add,
                    ty: self.ty,
                })?;
        }

        Ok(Value::new(Type::new(self.ty), result))
    }
}

struct Sub {
    ty: TypeId,
}

impl BinaryOperator for Sub {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let (result, overflow) = emitter.sub_overflow(left.data, right.data);

        if ctx.on_error == ErrorPolicy::RaiseError {
            emitter
                .fault_if(overflow, Fault::IntegerOverflow)
                .map_err(|_| Error::ArithmeticOverflow {
                    operator: OperatorId::Sub,
                    ty: self.ty,
                })?;
        }

        Ok(Value::new(Type::new(self.ty), result))
    }
}

struct Mul {
    ty: TypeId,
}

impl BinaryOperator for Mul {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let (result, overflow) = emitter.mul_overflow(left.data, right.data);

        if ctx.on_error == ErrorPolicy::RaiseError {
            emitter
                .fault_if(overflow, Fault::IntegerOverflow)
                .map_err(|_| Error::ArithmeticOverflow {
                    operator: OperatorId::Mul,
                    ty: self.ty,
                })?;
        }

        Ok(Value::new(Type::new(self.ty), result))
    }
}

struct Div {
    ty: TypeId,
}

impl BinaryOperator for Div {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        // The divisor zero-test always comes first
        let zero = emitter.const_int(self.ty.native_kind(), 0);
        let div0 = emitter.icmp(Predicate::Eq, right.data, zero);

        match ctx.on_error {
            ErrorPolicy::ReturnNull => {
                // The two paths have incompatible preconditions (the
                // quotient primitive is undefined on a zero divisor), so a
                // real branch is mandatory here, not an optimization
                emitter.begin_if(div0);
                let null_val = sql_type(self.ty).null_value(emitter);
                emitter.begin_else();
                let quotient = emitter.sdiv(left.data, right.data);
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
                    Type::nullable(self.ty),
                    data,
                    Some(null),
                ))
            }
            ErrorPolicy::RaiseError => {
                emitter
                    .fault_if(div0, Fault::DivideByZero)
                    .map_err(|_| Error::DivideByZero {
                        operator: OperatorId::Div,
                        ty: self.ty,
                    })?;
                let quotient = emitter.sdiv(left.data, right.data);
                Ok(Value::new(Type::new(self.ty), quotient))
            }
        }
    }
}

struct Modulo {
    ty: TypeId,
}

impl BinaryOperator for Modulo {
    fn supports_types(&self, left: Type, right: Type) -> bool {
        left.id == self.ty && left.id == right.id
    }

    fn result_type(&self, _left: Type, _right: Type) -> Type {
        Type::new(self.ty)
    }

    fn emit(
        &self,
        emitter: &mut dyn Emitter,
        left: &Value,
        right: &Value,
        ctx: &InvocationContext,
    ) -> Result<Value> {
        debug_assert!(self.supports_types(left.ty, right.ty));

        let zero = emitter.const_int(self.ty.native_kind(), 0);
        let div0 = emitter.icmp(Predicate::Eq, right.data, zero);

        match ctx.on_error {
            ErrorPolicy::ReturnNull => {
                emitter.begin_if(div0);
                let null_val = sql_type(self.ty).null_value(emitter);
                emitter.begin_else();
                let remainder = emitter.srem(left.data, right.data);
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
                    Type::nullable(self.ty),
                    data,
                    Some(null),
                ))
            }
            ErrorPolicy::RaiseError => {
                emitter
                    .fault_if(div0, Fault::DivideByZero)
                    .map_err(|_| Error::DivideByZero {
                        operator: OperatorId::Mod,
                        ty: self.ty,
                    })?;
                let remainder = emitter.srem(left.data, right.data);
                Ok(Value::new(Type::new(self.ty), remainder))
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////
//
// Tables and type singletons, one block per width
//
////////////////////////////////////////////////////////////////////////////

static CAST_TINYINT: Cast = Cast { ty: TypeId::TinyInt };
static COMPARE_TINYINT: Compare = Compare { ty: TypeId::TinyInt };
static NEGATE_TINYINT: Negate = Negate { ty: TypeId::TinyInt };
static ABS_TINYINT: Abs = Abs { ty: TypeId::TinyInt };
static CEIL_TINYINT: Ceil = Ceil { ty: TypeId::TinyInt };
static FLOOR_TINYINT: Floor = Floor { ty: TypeId::TinyInt };
static SQRT_TINYINT: Sqrt = Sqrt { ty: TypeId::TinyInt };
static ADD_TINYINT: Add = Add { ty: TypeId::TinyInt };
static SUB_TINYINT: Sub = Sub { ty: TypeId::TinyInt };
static MUL_TINYINT: Mul = Mul { ty: TypeId::TinyInt };
static DIV_TINYINT: Div = Div { ty: TypeId::TinyInt };
static MOD_TINYINT: Modulo = Modulo { ty: TypeId::TinyInt };

static TINYINT_IMPLICIT: [TypeId; 5] = [
    TypeId::TinyInt,
    TypeId::SmallInt,
    TypeId::Integer,
    TypeId::BigInt,
    TypeId::Decimal,
];
static TINYINT_CASTS: [CastEntry; 6] = [
    CastEntry { from: TypeId::TinyInt, to: TypeId::Boolean, op: &CAST_TINYINT },
    CastEntry { from: TypeId::TinyInt, to: TypeId::TinyInt, op: &CAST_TINYINT },
    CastEntry { from: TypeId::TinyInt, to: TypeId::SmallInt, op: &CAST_TINYINT },
    CastEntry { from: TypeId::TinyInt, to: TypeId::Integer, op: &CAST_TINYINT },
    CastEntry { from: TypeId::TinyInt, to: TypeId::BigInt, op: &CAST_TINYINT },
    CastEntry { from: TypeId::TinyInt, to: TypeId::Decimal, op: &CAST_TINYINT },
];
static TINYINT_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_TINYINT];
static TINYINT_UNARY: [UnaryEntry; 5] = [
    UnaryEntry { id: OperatorId::Negate, op: &NEGATE_TINYINT },
    UnaryEntry { id: OperatorId::Abs, op: &ABS_TINYINT },
    UnaryEntry { id: OperatorId::Ceil, op: &CEIL_TINYINT },
    UnaryEntry { id: OperatorId::Floor, op: &FLOOR_TINYINT },
    UnaryEntry { id: OperatorId::Sqrt, op: &SQRT_TINYINT },
];
static TINYINT_BINARY: [BinaryEntry; 5] = [
    BinaryEntry { id: OperatorId::Add, op: &ADD_TINYINT },
    BinaryEntry { id: OperatorId::Sub, op: &SUB_TINYINT },
    BinaryEntry { id: OperatorId::Mul, op: &MUL_TINYINT },
    BinaryEntry { id: OperatorId::Div, op: &DIV_TINYINT },
    BinaryEntry { id: OperatorId::Mod, op: &MOD_TINYINT },
];

pub static TINYINT: SqlType = SqlType::new(
    TypeId::TinyInt,
    NativeKind::I8,
    None,
    Some(Sentinel::Int(i8::MIN as i64 + 1)),
    Some(Sentinel::Int(i8::MAX as i64)),
    Sentinel::Int(i8::MIN as i64),
    TypeSystem::new(
        &TINYINT_IMPLICIT,
        &TINYINT_CASTS,
        &TINYINT_COMPARISONS,
        &TINYINT_UNARY,
        &TINYINT_BINARY,
        &[],
        &[],
    ),
);

static CAST_SMALLINT: Cast = Cast { ty: TypeId::SmallInt };
static COMPARE_SMALLINT: Compare = Compare { ty: TypeId::SmallInt };
static NEGATE_SMALLINT: Negate = Negate { ty: TypeId::SmallInt };
static ABS_SMALLINT: Abs = Abs { ty: TypeId::SmallInt };
static CEIL_SMALLINT: Ceil = Ceil { ty: TypeId::SmallInt };
static FLOOR_SMALLINT: Floor = Floor { ty: TypeId::SmallInt };
static SQRT_SMALLINT: Sqrt = Sqrt { ty: TypeId::SmallInt };
static ADD_SMALLINT: Add = Add { ty: TypeId::SmallInt };
static SUB_SMALLINT: Sub = Sub { ty: TypeId::SmallInt };
static MUL_SMALLINT: Mul = Mul { ty: TypeId::SmallInt };
static DIV_SMALLINT: Div = Div { ty: TypeId::SmallInt };
static MOD_SMALLINT: Modulo = Modulo { ty: TypeId::SmallInt };

static SMALLINT_IMPLICIT: [TypeId; 4] = [
    TypeId::SmallInt,
    TypeId::Integer,
    TypeId::BigInt,
    TypeId::Decimal,
];
static SMALLINT_CASTS: [CastEntry; 6] = [
    CastEntry { from: TypeId::SmallInt, to: TypeId::Boolean, op: &CAST_SMALLINT },
    CastEntry { from: TypeId::SmallInt, to: TypeId::TinyInt, op: &CAST_SMALLINT },
    CastEntry { from: TypeId::SmallInt, to: TypeId::SmallInt, op: &CAST_SMALLINT },
    CastEntry { from: TypeId::SmallInt, to: TypeId::Integer, op: &CAST_SMALLINT },
    CastEntry { from: TypeId::SmallInt, to: TypeId::BigInt, op: &CAST_SMALLINT },
    CastEntry { from: TypeId::SmallInt, to: TypeId::Decimal, op: &CAST_SMALLINT },
];
static SMALLINT_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_SMALLINT];
static SMALLINT_UNARY: [UnaryEntry; 5] = [
    UnaryEntry { id: OperatorId::Negate, op: &NEGATE_SMALLINT },
    UnaryEntry { id: OperatorId::Abs, op: &ABS_SMALLINT },
    UnaryEntry { id: OperatorId::Ceil, op: &CEIL_SMALLINT },
    UnaryEntry { id: OperatorId::Floor, op: &FLOOR_SMALLINT },
    UnaryEntry { id: OperatorId::Sqrt, op: &SQRT_SMALLINT },
];
static SMALLINT_BINARY: [BinaryEntry; 5] = [
    BinaryEntry { id: OperatorId::Add, op: &ADD_SMALLINT },
    BinaryEntry { id: OperatorId::Sub, op: &SUB_SMALLINT },
    BinaryEntry { id: OperatorId::Mul, op: &MUL_SMALLINT },
    BinaryEntry { id: OperatorId::Div, op: &DIV_SMALLINT },
    BinaryEntry { id: OperatorId::Mod, op: &MOD_SMALLINT },
];

pub static SMALLINT: SqlType = SqlType::new(
    TypeId::SmallInt,
    NativeKind::I16,
    None,
    Some(Sentinel::Int(i16::MIN as i64 + 1)),
    Some(Sentinel::Int(i16::MAX as i64)),
    Sentinel::Int(i16::MIN as i64),
    TypeSystem::new(
        &SMALLINT_IMPLICIT,
        &SMALLINT_CASTS,
        &SMALLINT_COMPARISONS,
        &SMALLINT_UNARY,
        &SMALLINT_BINARY,
        &[],
        &[],
    ),
);

static CAST_INTEGER: Cast = Cast { ty: TypeId::Integer };
static COMPARE_INTEGER: Compare = Compare { ty: TypeId::Integer };
static NEGATE_INTEGER: Negate = Negate { ty: TypeId::Integer };
static ABS_INTEGER: Abs = Abs { ty: TypeId::Integer };
static CEIL_INTEGER: Ceil = Ceil { ty: TypeId::Integer };
static FLOOR_INTEGER: Floor = Floor { ty: TypeId::Integer };
static SQRT_INTEGER: Sqrt = Sqrt { ty: TypeId::Integer };
static ADD_INTEGER: Add = Add { ty: TypeId::Integer };
static SUB_INTEGER: Sub = Sub { ty: TypeId::Integer };
static MUL_INTEGER: Mul = Mul { ty: TypeId::Integer };
static DIV_INTEGER: Div = Div { ty: TypeId::Integer };
static MOD_INTEGER: Modulo = Modulo { ty: TypeId::Integer };

static INTEGER_IMPLICIT: [TypeId; 3] = [TypeId::Integer, TypeId::BigInt, TypeId::Decimal];
static INTEGER_CASTS: [CastEntry; 6] = [
    CastEntry { from: TypeId::Integer, to: TypeId::Boolean, op: &CAST_INTEGER },
    CastEntry { from: TypeId::Integer, to: TypeId::TinyInt, op: &CAST_INTEGER },
    CastEntry { from: TypeId::Integer, to: TypeId::SmallInt, op: &CAST_INTEGER },
    CastEntry { from: TypeId::Integer, to: TypeId::Integer, op: &CAST_INTEGER },
    CastEntry { from: TypeId::Integer, to: TypeId::BigInt, op: &CAST_INTEGER },
    CastEntry { from: TypeId::Integer, to: TypeId::Decimal, op: &CAST_INTEGER },
];
static INTEGER_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_INTEGER];
static INTEGER_UNARY: [UnaryEntry; 5] = [
    UnaryEntry { id: OperatorId::Negate, op: &NEGATE_INTEGER },
    UnaryEntry { id: OperatorId::Abs, op: &ABS_INTEGER },
    UnaryEntry { id: OperatorId::Ceil, op: &CEIL_INTEGER },
    UnaryEntry { id: OperatorId::Floor, op: &FLOOR_INTEGER },
    UnaryEntry { id: OperatorId::Sqrt, op: &SQRT_INTEGER },
];
static INTEGER_BINARY: [BinaryEntry; 5] = [
    BinaryEntry { id: OperatorId::Add, op: &ADD_INTEGER },
    BinaryEntry { id: OperatorId::Sub, op: &SUB_INTEGER },
    BinaryEntry { id: OperatorId::Mul, op: &MUL_INTEGER },
    BinaryEntry { id: OperatorId::Div, op: &DIV_INTEGER },
    BinaryEntry { id: OperatorId::Mod, op: &MOD_INTEGER },
];

pub static INTEGER: SqlType = SqlType::new(
    TypeId::Integer,
    NativeKind::I32,
    None,
    Some(Sentinel::Int(i32::MIN as i64 + 1)),
    Some(Sentinel::Int(i32::MAX as i64)),
    Sentinel::Int(i32::MIN as i64),
    TypeSystem::new(
        &INTEGER_IMPLICIT,
        &INTEGER_CASTS,
        &INTEGER_COMPARISONS,
        &INTEGER_UNARY,
        &INTEGER_BINARY,
        &[],
        &[],
    ),
);

static CAST_BIGINT: Cast = Cast { ty: TypeId::BigInt };
static COMPARE_BIGINT: Compare = Compare { ty: TypeId::BigInt };
static NEGATE_BIGINT: Negate = Negate { ty: TypeId::BigInt };
static ABS_BIGINT: Abs = Abs { ty: TypeId::BigInt };
static CEIL_BIGINT: Ceil = Ceil { ty: TypeId::BigInt };
static FLOOR_BIGINT: Floor = Floor { ty: TypeId::BigInt };
static SQRT_BIGINT: Sqrt = Sqrt { ty: TypeId::BigInt };
static ADD_BIGINT: Add = Add { ty: TypeId::BigInt };
static SUB_BIGINT: Sub = Sub { ty: TypeId::BigInt };
static MUL_BIGINT: Mul = Mul { ty: TypeId::BigInt };
static DIV_BIGINT: Div = Div { ty: TypeId::BigInt };
static MOD_BIGINT: Modulo = Modulo { ty: TypeId::BigInt };

static BIGINT_IMPLICIT: [TypeId; 2] = [TypeId::BigInt, TypeId::Decimal];
static BIGINT_CASTS: [CastEntry; 6] = [
    CastEntry { from: TypeId::BigInt, to: TypeId::Boolean, op: &CAST_BIGINT },
    CastEntry { from: TypeId::BigInt, to: TypeId::TinyInt, op: &CAST_BIGINT },
    CastEntry { from: TypeId::BigInt, to: TypeId::SmallInt, op: &CAST_BIGINT },
    CastEntry { from: TypeId::BigInt, to: TypeId::Integer, op: &CAST_BIGINT },
    CastEntry { from: TypeId::BigInt, to: TypeId::BigInt, op: &CAST_BIGINT },
    CastEntry { from: TypeId::BigInt, to: TypeId::Decimal, op: &CAST_BIGINT },
];
static BIGINT_COMPARISONS: [&dyn ComparisonOperator; 1] = [&COMPARE_BIGINT];
static BIGINT_UNARY: [UnaryEntry; 5] = [
    UnaryEntry { id: OperatorId::Negate, op: &NEGATE_BIGINT },
    UnaryEntry { id: OperatorId::Abs, op: &ABS_BIGINT },
    UnaryEntry { id: OperatorId::Ceil, op: &CEIL_BIGINT },
    UnaryEntry { id: OperatorId::Floor, op: &FLOOR_BIGINT },
    UnaryEntry { id: OperatorId::Sqrt, op: &SQRT_BIGINT },
];
static BIGINT_BINARY: [BinaryEntry; 5] = [
    BinaryEntry { id: OperatorId::Add, op: &ADD_BIGINT },
    BinaryEntry { id: OperatorId::Sub, op: &SUB_BIGINT },
    BinaryEntry { id: OperatorId::Mul, op: &MUL_BIGINT },
    BinaryEntry { id: OperatorId::Div, op: &DIV_BIGINT },
    BinaryEntry { id: OperatorId::Mod, op: &MOD_BIGINT },
];

pub static BIGINT: SqlType = SqlType::new(
    TypeId::BigInt,
    NativeKind::I64,
    None,
    Some(Sentinel::Int(i64::MIN + 1)),
    Some(Sentinel::Int(i64::MAX)),
    Sentinel::Int(i64::MIN),
    TypeSystem::new(
        &BIGINT_IMPLICIT,
        &BIGINT_CASTS,
        &BIGINT_COMPARISONS,
        &BIGINT_UNARY,
        &BIGINT_BINARY,
        &[],
        &[],
    ),
);

#[cfg(test)]
mod tests {
    use super::*;
    use granite_ir::InterpEmitter;

    fn int32(e: &mut InterpEmitter, v: i64) -> Value {
        let data = e.const_int(NativeKind::I32, v);
        Value::new(Type::new(TypeId::Integer), data)
    }

    #[test]
    fn test_add_in_range() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::default();
        let (a, b) = (int32(&mut e, 5), int32(&mut e, 3));
        let sum = ADD_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap();
        assert_eq!(sum.ty, Type::new(TypeId::Integer));
        assert_eq!(e.int_value(sum.data), 8);
        assert!(sum.null.is_none());
    }

    #[test]
    fn test_add_overflow_raises() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::default();
        let (a, b) = (int32(&mut e, i32::MAX as i64), int32(&mut e, 1));
        let err = ADD_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap_err();
        assert_eq!(
            err,
            Error::ArithmeticOverflow {
                operator: OperatorId::Add,
                ty: TypeId::Integer,
            }
        );
    }

    #[test]
    fn test_add_overflow_not_suppressed_by_return_null() {
        // The ReturnNull policy covers division only: overflowing addition
        // neither faults nor nulls, it wraps
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::new(ErrorPolicy::ReturnNull);
        let (a, b) = (int32(&mut e, i32::MAX as i64), int32(&mut e, 1));
        let sum = ADD_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap();
        assert!(sum.null.is_none());
        assert_eq!(e.int_value(sum.data), i32::MIN as i64);
    }

    #[test]
    fn test_negate_raises_even_under_return_null() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::new(ErrorPolicy::ReturnNull);
        let v = int32(&mut e, i32::MIN as i64);
        let err = NEGATE_INTEGER.emit(&mut e, &v, &ctx).unwrap_err();
        assert_eq!(
            err,
            Error::ArithmeticOverflow {
                operator: OperatorId::Negate,
                ty: TypeId::Integer,
            }
        );

        let v = int32(&mut e, 7);
        let negated = NEGATE_INTEGER.emit(&mut e, &v, &ctx).unwrap();
        assert_eq!(e.int_value(negated.data), -7);
    }

    #[test]
    fn test_abs_selects_on_sign() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::default();
        let v = int32(&mut e, -41);
        let abs = ABS_INTEGER.emit(&mut e, &v, &ctx).unwrap();
        assert_eq!(e.int_value(abs.data), 41);

        let v = int32(&mut e, 41);
        let abs = ABS_INTEGER.emit(&mut e, &v, &ctx).unwrap();
        assert_eq!(e.int_value(abs.data), 41);
    }

    #[test]
    fn test_div_by_zero_policies() {
        let mut e = InterpEmitter::new();
        let (a, z) = (int32(&mut e, 10), int32(&mut e, 0));

        let raise = InvocationContext::new(ErrorPolicy::RaiseError);
        let err = DIV_INTEGER.emit(&mut e, &a, &z, &raise).unwrap_err();
        assert_eq!(
            err,
            Error::DivideByZero {
                operator: OperatorId::Div,
                ty: TypeId::Integer,
            }
        );

        let ret_null = InvocationContext::new(ErrorPolicy::ReturnNull);
        let result = DIV_INTEGER.emit(&mut e, &a, &z, &ret_null).unwrap();
        let null = result.null.expect("divide by zero must produce a null path");
        assert!(e.bool_value(null));
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::default();
        let (a, b) = (int32(&mut e, -7), int32(&mut e, 2));
        let q = DIV_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap();
        assert_eq!(e.int_value(q.data), -3);
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        let mut e = InterpEmitter::new();
        let ctx = InvocationContext::default();
        let (a, b) = (int32(&mut e, -7), int32(&mut e, 3));
        let r = MOD_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap();
        assert_eq!(e.int_value(r.data), -1);

        let (a, b) = (int32(&mut e, 7), int32(&mut e, -3));
        let r = MOD_INTEGER.emit(&mut e, &a, &b, &ctx).unwrap();
        assert_eq!(e.int_value(r.data), 1);
    }

    #[test]
    fn test_compare_for_sort_is_raw_difference() {
        let mut e = InterpEmitter::new();
        let (a, b) = (int32(&mut e, 7), int32(&mut e, 10));
        let delta = COMPARE_INTEGER.emit_for_sort(&mut e, &a, &b).unwrap();
        assert_eq!(delta.ty, Type::new(TypeId::Integer));
        assert_eq!(e.int_value(delta.data), -3);
    }

    #[test]
    fn test_cast_to_boolean_keeps_low_bit() {
        let mut e = InterpEmitter::new();
        let v = int32(&mut e, 300);
        let b = CAST_INTEGER
            .emit(&mut e, &v, Type::new(TypeId::Boolean))
            .unwrap();
        assert!(!e.bool_value(b.data));
    }

    #[test]
    fn test_cast_rejects_varchar() {
        let mut e = InterpEmitter::new();
        let v = int32(&mut e, 1);
        let err = CAST_INTEGER
            .emit(&mut e, &v, Type::new(TypeId::Varchar))
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedCast {
                from: TypeId::Integer,
                to: TypeId::Varchar,
            }
        );
    }

    #[test]
    fn test_cast_to_nullable_marks_known_non_null() {
        let mut e = InterpEmitter::new();
        let v = int32(&mut e, 42);
        let wide = CAST_INTEGER
            .emit(&mut e, &v, Type::nullable(TypeId::BigInt))
            .unwrap();
        assert_eq!(wide.ty, Type::nullable(TypeId::BigInt));
        let null = wide.null.expect("nullable destination carries a flag");
        assert!(!e.bool_value(null));
    }

    #[test]
    fn test_table_order_resolves_first_match() {
        let sys = INTEGER.type_system();
        assert!(sys
            .find_binary(
                OperatorId::Add,
                Type::new(TypeId::Integer),
                Type::new(TypeId::Integer)
            )
            .is_some());
        // Mixed widths are not supported without an implicit cast
        assert!(sys
            .find_binary(
                OperatorId::Add,
                Type::new(TypeId::Integer),
                Type::new(TypeId::BigInt)
            )
            .is_none());
    }

    #[test]
    fn test_implicit_widening_targets() {
        let sys = INTEGER.type_system();
        assert_eq!(
            sys.implicit_cast_targets(),
            &[TypeId::Integer, TypeId::BigInt, TypeId::Decimal]
        );
        assert!(sys.can_implicit_cast(TypeId::BigInt));
        assert!(!sys.can_implicit_cast(TypeId::TinyInt));
    }
}
