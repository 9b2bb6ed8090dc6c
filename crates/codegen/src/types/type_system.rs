//! Per-type operator tables
//!
//! Every [`super::SqlType`] owns one `TypeSystem`: seven ordered tables
//! built once at const-construction time and queried by linear scan. The
//! first entry whose `supports` predicate accepts the operand types wins,
//! so table order encodes dispatch priority and must be preserved when a
//! type is extended.

use super::{Type, TypeId};
use crate::operators::traits::{
    BinaryOperator, CastOperator, ComparisonOperator, NaryOperator, UnaryOperator,
    ZeroArgOperator,
};
use crate::operators::OperatorId;

/// Explicit cast table row.
pub struct CastEntry {
    pub from: TypeId,
    pub to: TypeId,
    pub op: &'static dyn CastOperator,
}

/// Unary operator table row.
pub struct UnaryEntry {
    pub id: OperatorId,
    pub op: &'static dyn UnaryOperator,
}

/// Binary operator table row.
pub struct BinaryEntry {
    pub id: OperatorId,
    pub op: &'static dyn BinaryOperator,
}

/// N-ary operator table row.
pub struct NaryEntry {
    pub id: OperatorId,
    pub op: &'static dyn NaryOperator,
}

/// Zero-argument operator table row.
pub struct ZeroArgEntry {
    pub id: OperatorId,
    pub op: &'static dyn ZeroArgOperator,
}

/// The operator tables of one SQL type.
pub struct TypeSystem {
    implicit_casts: &'static [TypeId],
    casts: &'static [CastEntry],
    comparisons: &'static [&'static dyn ComparisonOperator],
    unary: &'static [UnaryEntry],
    binary: &'static [BinaryEntry],
    nary: &'static [NaryEntry],
    zero_arg: &'static [ZeroArgEntry],
}

impl TypeSystem {
    pub const fn new(
        implicit_casts: &'static [TypeId],
        casts: &'static [CastEntry],
        comparisons: &'static [&'static dyn ComparisonOperator],
        unary: &'static [UnaryEntry],
        binary: &'static [BinaryEntry],
        nary: &'static [NaryEntry],
        zero_arg: &'static [ZeroArgEntry],
    ) -> Self {
        TypeSystem {
            implicit_casts,
            casts,
            comparisons,
            unary,
            binary,
            nary,
            zero_arg,
        }
    }

    /// Acceptable implicit widening targets, in priority order. Consumed by
    /// the expression compiler when deciding whether to insert an automatic
    /// cast; not used for dispatch inside this layer.
    pub fn implicit_cast_targets(&self) -> &[TypeId] {
        self.implicit_casts
    }

    pub fn can_implicit_cast(&self, to: TypeId) -> bool {
        self.implicit_casts.contains(&to)
    }

    pub fn find_cast(&self, from: Type, to: Type) -> Option<&'static dyn CastOperator> {
        self.casts
            .iter()
            .find(|entry| {
                entry.from == from.id && entry.to == to.id && entry.op.supports_types(from, to)
            })
            .map(|entry| entry.op)
    }

    pub fn find_comparison(
        &self,
        left: Type,
        right: Type,
    ) -> Option<&'static dyn ComparisonOperator> {
        self.comparisons
            .iter()
            .find(|op| op.supports_types(left, right))
            .copied()
    }

    pub fn find_unary(&self, id: OperatorId, ty: Type) -> Option<&'static dyn UnaryOperator> {
        self.unary
            .iter()
            .find(|entry| entry.id == id && entry.op.supports_type(ty))
            .map(|entry| entry.op)
    }

    pub fn find_binary(
        &self,
        id: OperatorId,
        left: Type,
        right: Type,
    ) -> Option<&'static dyn BinaryOperator> {
        self.binary
            .iter()
            .find(|entry| entry.id == id && entry.op.supports_types(left, right))
            .map(|entry| entry.op)
    }

    pub fn find_nary(&self, id: OperatorId, types: &[Type]) -> Option<&'static dyn NaryOperator> {
        self.nary
            .iter()
            .find(|entry| entry.id == id && entry.op.supports_types(types))
            .map(|entry| entry.op)
    }

    pub fn find_zero_arg(&self, id: OperatorId) -> Option<&'static dyn ZeroArgOperator> {
        self.zero_arg
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.op)
    }
}
