//! An emitter that evaluates instructions immediately
//!
//! `InterpEmitter` holds one concrete slot per emitted value and computes
//! each instruction as it is emitted. Structured if-regions are handled by
//! tracking which arm the already-known condition selects: instructions in
//! the non-taken arm still execute (producing garbage that `phi` discards),
//! but `fault_if` is suppressed there, and the division primitives yield an
//! unspecified value instead of trapping on a zero divisor so that the
//! non-taken arm is always safe to evaluate.

use crate::emitter::{Emitter, Fault, NativeKind, Predicate, ValueId};

#[derive(Debug, Clone, Copy)]
enum Slot {
    Bool(bool),
    Int(NativeKind, i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    cond: bool,
    in_else: bool,
}

impl Frame {
    fn taken(&self) -> bool {
        self.cond != self.in_else
    }
}

/// Evaluating backend for tests and compile-time constant folding.
#[derive(Debug, Default)]
pub struct InterpEmitter {
    slots: Vec<Slot>,
    frames: Vec<Frame>,
    last_cond: Option<bool>,
}

impl InterpEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back an emitted Bool value.
    pub fn bool_value(&self, v: ValueId) -> bool {
        match self.slot(v) {
            Slot::Bool(b) => b,
            other => panic!("expected Bool slot, found {other:?}"),
        }
    }

    /// Read back an emitted integer value, sign-extended to 64 bits.
    pub fn int_value(&self, v: ValueId) -> i64 {
        match self.slot(v) {
            Slot::Int(_, i) => i,
            other => panic!("expected integer slot, found {other:?}"),
        }
    }

    /// Read back an emitted float value.
    pub fn float_value(&self, v: ValueId) -> f64 {
        match self.slot(v) {
            Slot::Float(f) => f,
            other => panic!("expected Float slot, found {other:?}"),
        }
    }

    fn slot(&self, v: ValueId) -> Slot {
        self.slots[v.index() as usize]
    }

    fn push(&mut self, slot: Slot) -> ValueId {
        self.slots.push(slot);
        ValueId::from_raw(self.slots.len() as u32 - 1)
    }

    /// Whether the current emission position would execute at run time.
    fn taken(&self) -> bool {
        self.frames.iter().all(Frame::taken)
    }

    fn int(&self, v: ValueId) -> i64 {
        match self.slot(v) {
            Slot::Int(_, i) => i,
            // icmp accepts Bool operands as 0/1, matching a backend that
            // widens i1 before comparing
            Slot::Bool(b) => b as i64,
            Slot::Float(f) => panic!("integer operand expected, found float {f}"),
        }
    }

    fn float(&self, v: ValueId) -> f64 {
        match self.slot(v) {
            Slot::Float(f) => f,
            other => panic!("float operand expected, found {other:?}"),
        }
    }

    fn bool(&self, v: ValueId) -> bool {
        match self.slot(v) {
            Slot::Bool(b) => b,
            other => panic!("bool operand expected, found {other:?}"),
        }
    }

    fn int_kind(&self, v: ValueId) -> NativeKind {
        match self.slot(v) {
            Slot::Int(kind, _) => kind,
            other => panic!("integer operand expected, found {other:?}"),
        }
    }

    /// Reduce a 64-bit value to `kind`'s range, keeping the slot
    /// sign-extended.
    fn wrap(kind: NativeKind, v: i64) -> i64 {
        match kind {
            NativeKind::I8 => v as i8 as i64,
            NativeKind::I16 => v as i16 as i64,
            NativeKind::I32 => v as i32 as i64,
            NativeKind::I64 | NativeKind::Ptr => v,
            NativeKind::Bool | NativeKind::F64 => {
                panic!("non-integer kind {kind:?} in integer op")
            }
        }
    }

    fn int_binop(
        &mut self,
        lhs: ValueId,
        rhs: ValueId,
        f: impl Fn(i64, i64) -> i64,
    ) -> ValueId {
        let kind = self.int_kind(lhs);
        let v = Self::wrap(kind, f(self.int(lhs), self.int(rhs)));
        self.push(Slot::Int(kind, v))
    }

    fn overflow_binop(
        &mut self,
        lhs: ValueId,
        rhs: ValueId,
        f: impl Fn(i64, i64) -> i64,
    ) -> (ValueId, ValueId) {
        // Sub-64-bit kinds only: the exact result fits in i64, so wrapping
        // to the kind detects overflow. Callers handle I64 with the
        // machine overflow flags.
        let kind = self.int_kind(lhs);
        let exact = f(self.int(lhs), self.int(rhs));
        let wrapped = Self::wrap(kind, exact);
        let result = self.push(Slot::Int(kind, wrapped));
        let overflow = self.push(Slot::Bool(wrapped != exact));
        (result, overflow)
    }

    fn float_binop(
        &mut self,
        lhs: ValueId,
        rhs: ValueId,
        f: impl Fn(f64, f64) -> f64,
    ) -> ValueId {
        let v = f(self.float(lhs), self.float(rhs));
        self.push(Slot::Float(v))
    }
}

fn cmp_holds<T: PartialOrd>(pred: Predicate, a: T, b: T) -> bool {
    match pred {
        Predicate::Lt => a < b,
        Predicate::Le => a <= b,
        Predicate::Eq => a == b,
        Predicate::Ne => a != b,
        Predicate::Gt => a > b,
        Predicate::Ge => a >= b,
    }
}

impl Emitter for InterpEmitter {
    fn const_bool(&mut self, v: bool) -> ValueId {
        self.push(Slot::Bool(v))
    }

    fn const_int(&mut self, kind: NativeKind, v: i64) -> ValueId {
        match kind {
            NativeKind::Bool => self.push(Slot::Bool(v != 0)),
            NativeKind::F64 => self.push(Slot::Float(v as f64)),
            NativeKind::Ptr => self.push(Slot::Int(NativeKind::I64, v)),
            _ => self.push(Slot::Int(kind, Self::wrap(kind, v))),
        }
    }

    fn const_float(&mut self, v: f64) -> ValueId {
        self.push(Slot::Float(v))
    }

    fn add_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId) {
        let kind = self.int_kind(lhs);
        if kind == NativeKind::I64 {
            let (v, o) = self.int(lhs).overflowing_add(self.int(rhs));
            let result = self.push(Slot::Int(kind, v));
            let overflow = self.push(Slot::Bool(o));
            return (result, overflow);
        }
        self.overflow_binop(lhs, rhs, |a, b| a + b)
    }

    fn sub_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId) {
        let kind = self.int_kind(lhs);
        if kind == NativeKind::I64 {
            let (v, o) = self.int(lhs).overflowing_sub(self.int(rhs));
            let result = self.push(Slot::Int(kind, v));
            let overflow = self.push(Slot::Bool(o));
            return (result, overflow);
        }
        self.overflow_binop(lhs, rhs, |a, b| a - b)
    }

    fn mul_overflow(&mut self, lhs: ValueId, rhs: ValueId) -> (ValueId, ValueId) {
        let kind = self.int_kind(lhs);
        if kind == NativeKind::I64 {
            let (v, o) = self.int(lhs).overflowing_mul(self.int(rhs));
            let result = self.push(Slot::Int(kind, v));
            let overflow = self.push(Slot::Bool(o));
            return (result, overflow);
        }
        let exact = (self.int(lhs) as i128) * (self.int(rhs) as i128);
        let wrapped = Self::wrap(kind, exact as i64);
        let result = self.push(Slot::Int(kind, wrapped));
        let overflow = self.push(Slot::Bool(wrapped as i128 != exact));
        (result, overflow)
    }

    fn sub(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        let kind = self.int_kind(lhs);
        if kind == NativeKind::I64 {
            let v = self.int(lhs).wrapping_sub(self.int(rhs));
            return self.push(Slot::Int(kind, v));
        }
        self.int_binop(lhs, rhs, |a, b| a - b)
    }

    fn sdiv(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        // Zero divisors and MIN/-1 only occur on a non-taken arm; produce
        // an unspecified value rather than trapping
        self.int_binop(lhs, rhs, |a, b| {
            if b == 0 {
                0
            } else {
                a.wrapping_div(b)
            }
        })
    }

    fn srem(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.int_binop(lhs, rhs, |a, b| {
            if b == 0 {
                0
            } else {
                a.wrapping_rem(b)
            }
        })
    }

    fn fadd(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.float_binop(lhs, rhs, |a, b| a + b)
    }

    fn fsub(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.float_binop(lhs, rhs, |a, b| a - b)
    }

    fn fmul(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.float_binop(lhs, rhs, |a, b| a * b)
    }

    fn fdiv(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.float_binop(lhs, rhs, |a, b| a / b)
    }

    fn frem(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        self.float_binop(lhs, rhs, |a, b| a % b)
    }

    fn sqrt(&mut self, v: ValueId) -> ValueId {
        let f = self.float(v);
        self.push(Slot::Float(f.sqrt()))
    }

    fn fceil(&mut self, v: ValueId) -> ValueId {
        let f = self.float(v);
        self.push(Slot::Float(f.ceil()))
    }

    fn ffloor(&mut self, v: ValueId) -> ValueId {
        let f = self.float(v);
        self.push(Slot::Float(f.floor()))
    }

    fn icmp(&mut self, pred: Predicate, lhs: ValueId, rhs: ValueId) -> ValueId {
        let holds = cmp_holds(pred, self.int(lhs), self.int(rhs));
        self.push(Slot::Bool(holds))
    }

    fn fcmp(&mut self, pred: Predicate, lhs: ValueId, rhs: ValueId) -> ValueId {
        let holds = cmp_holds(pred, self.float(lhs), self.float(rhs));
        self.push(Slot::Bool(holds))
    }

    fn trunc(&mut self, v: ValueId, to: NativeKind) -> ValueId {
        let i = self.int(v);
        match to {
            // Truncation to i1 keeps the low bit
            NativeKind::Bool => self.push(Slot::Bool(i & 1 != 0)),
            _ => self.push(Slot::Int(to, Self::wrap(to, i))),
        }
    }

    fn sext(&mut self, v: ValueId, to: NativeKind) -> ValueId {
        // Slots already hold the sign-extended 64-bit image; re-tag
        let i = self.int(v);
        self.push(Slot::Int(to, i))
    }

    fn zext(&mut self, v: ValueId, to: NativeKind) -> ValueId {
        let i = match self.slot(v) {
            Slot::Bool(b) => b as i64,
            Slot::Int(from, i) => match from {
                NativeKind::I8 => i as u8 as i64,
                NativeKind::I16 => i as u16 as i64,
                NativeKind::I32 => i as u32 as i64,
                _ => i,
            },
            Slot::Float(f) => panic!("integer operand expected, found float {f}"),
        };
        self.push(Slot::Int(to, i))
    }

    fn int_to_float(&mut self, v: ValueId) -> ValueId {
        let i = self.int(v);
        self.push(Slot::Float(i as f64))
    }

    fn float_to_int(&mut self, v: ValueId, to: NativeKind) -> ValueId {
        let f = self.float(v);
        self.push(Slot::Int(to, Self::wrap(to, f as i64)))
    }

    fn and(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        let v = self.bool(lhs) & self.bool(rhs);
        self.push(Slot::Bool(v))
    }

    fn or(&mut self, lhs: ValueId, rhs: ValueId) -> ValueId {
        let v = self.bool(lhs) | self.bool(rhs);
        self.push(Slot::Bool(v))
    }

    fn not(&mut self, v: ValueId) -> ValueId {
        let b = self.bool(v);
        self.push(Slot::Bool(!b))
    }

    fn select(&mut self, cond: ValueId, then_v: ValueId, else_v: ValueId) -> ValueId {
        let pick = if self.bool(cond) { then_v } else { else_v };
        let slot = self.slot(pick);
        self.push(slot)
    }

    fn begin_if(&mut self, cond: ValueId) {
        let cond = self.bool(cond);
        self.frames.push(Frame {
            cond,
            in_else: false,
        });
    }

    fn begin_else(&mut self) {
        let frame = self
            .frames
            .last_mut()
            .unwrap_or_else(|| panic!("begin_else outside an if-region"));
        frame.in_else = true;
    }

    fn end_if(&mut self) {
        let frame = self
            .frames
            .pop()
            .unwrap_or_else(|| panic!("end_if outside an if-region"));
        self.last_cond = Some(frame.cond);
    }

    fn phi(&mut self, then_v: ValueId, else_v: ValueId) -> ValueId {
        let cond = self
            .last_cond
            .unwrap_or_else(|| panic!("phi without a closed if-region"));
        let pick = if cond { then_v } else { else_v };
        let slot = self.slot(pick);
        self.push(slot)
    }

    fn fault_if(&mut self, cond: ValueId, fault: Fault) -> Result<(), Fault> {
        if self.taken() && self.bool(cond) {
            return Err(fault);
        }
        Ok(())
    }

    fn kind_of(&self, v: ValueId) -> NativeKind {
        match self.slot(v) {
            Slot::Bool(_) => NativeKind::Bool,
            Slot::Int(kind, _) => kind,
            Slot::Float(_) => NativeKind::F64,
        }
    }
}
