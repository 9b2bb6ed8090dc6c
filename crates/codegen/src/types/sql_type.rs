//! Per-type singleton descriptors

use super::{Type, TypeId, TypeSystem, Value};
use crate::error::{Error, Result};
use granite_ir::{Emitter, NativeKind, ValueId};

/// A compile-time constant in a type's physical representation.
#[derive(Debug, Clone, Copy)]
pub enum Sentinel {
    Bool(bool),
    Int(i64),
    Float(f64),
}

/// Immutable descriptor for one SQL scalar type.
///
/// Exactly one `static` instance exists per [`TypeId`]; equality is
/// identity. Instances are const-constructed with their operator tables and
/// registered with a [`crate::TypeRegistry`] at startup, never mutated, and
/// safe for unsynchronized concurrent reads.
///
/// The sentinel layout follows the engine's storage convention for signed
/// representations: the null sentinel is the machine minimum and the SQL
/// minimum is one above it.
pub struct SqlType {
    id: TypeId,
    data_kind: NativeKind,
    length_kind: Option<NativeKind>,
    min: Option<Sentinel>,
    max: Option<Sentinel>,
    null: Sentinel,
    system: TypeSystem,
}

impl SqlType {
    pub const fn new(
        id: TypeId,
        data_kind: NativeKind,
        length_kind: Option<NativeKind>,
        min: Option<Sentinel>,
        max: Option<Sentinel>,
        null: Sentinel,
        system: TypeSystem,
    ) -> Self {
        SqlType {
            id,
            data_kind,
            length_kind,
            min,
            max,
            null,
            system,
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn data_kind(&self) -> NativeKind {
        self.data_kind
    }

    pub fn length_kind(&self) -> Option<NativeKind> {
        self.length_kind
    }

    pub fn type_system(&self) -> &TypeSystem {
        &self.system
    }

    /// Smallest non-null value of this type.
    pub fn min_value(&self, emitter: &mut dyn Emitter) -> Result<Value> {
        let sentinel = self.min.ok_or_else(|| {
            Error::Internal(format!("{} has no minimum sentinel", self.id))
        })?;
        let data = self.emit_sentinel(emitter, sentinel);
        Ok(Value::new(Type::new(self.id), data))
    }

    /// Largest non-null value of this type.
    pub fn max_value(&self, emitter: &mut dyn Emitter) -> Result<Value> {
        let sentinel = self.max.ok_or_else(|| {
            Error::Internal(format!("{} has no maximum sentinel", self.id))
        })?;
        let data = self.emit_sentinel(emitter, sentinel);
        Ok(Value::new(Type::new(self.id), data))
    }

    /// The null value of this type: sentinel data with a constant-true
    /// null flag. The data handle must not be inspected by callers.
    pub fn null_value(&self, emitter: &mut dyn Emitter) -> Value {
        let data = self.emit_sentinel(emitter, self.null);
        let null = emitter.const_bool(true);
        let length = self
            .length_kind
            .map(|kind| emitter.const_int(kind, 0));
        Value {
            ty: Type::nullable(self.id),
            data,
            length,
            null: Some(null),
        }
    }

    fn emit_sentinel(&self, emitter: &mut dyn Emitter, sentinel: Sentinel) -> ValueId {
        match sentinel {
            Sentinel::Bool(b) => emitter.const_bool(b),
            Sentinel::Int(i) => emitter.const_int(self.data_kind, i),
            Sentinel::Float(f) => emitter.const_float(f),
        }
    }
}

impl PartialEq for SqlType {
    /// Identity equality: two descriptors are equal iff they are the same
    /// singleton.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for SqlType {}

impl std::fmt::Debug for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlType")
            .field("id", &self.id)
            .field("data_kind", &self.data_kind)
            .field("length_kind", &self.length_kind)
            .finish_non_exhaustive()
    }
}
