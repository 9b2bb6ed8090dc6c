//! SQL scalar type identifiers

use granite_ir::NativeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed enumeration of the SQL scalar types.
///
/// The identifier is the registry key; the per-type descriptor behind it is
/// a [`super::SqlType`] singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeId {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Varchar,
}

impl TypeId {
    /// Whether this is one of the fixed-width signed integer types.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            TypeId::TinyInt | TypeId::SmallInt | TypeId::Integer | TypeId::BigInt
        )
    }

    /// Whether this type is numeric (integer or decimal).
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self == TypeId::Decimal
    }

    /// Whether values of this type carry an out-of-line length.
    pub fn is_variable_length(self) -> bool {
        self == TypeId::Varchar
    }

    /// Physical representation of this type's data during code generation.
    pub fn native_kind(self) -> NativeKind {
        match self {
            TypeId::Boolean => NativeKind::Bool,
            TypeId::TinyInt => NativeKind::I8,
            TypeId::SmallInt => NativeKind::I16,
            TypeId::Integer => NativeKind::I32,
            TypeId::BigInt => NativeKind::I64,
            TypeId::Decimal => NativeKind::F64,
            TypeId::Varchar => NativeKind::Ptr,
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeId::Boolean => write!(f, "BOOLEAN"),
            TypeId::TinyInt => write!(f, "TINYINT"),
            TypeId::SmallInt => write!(f, "SMALLINT"),
            TypeId::Integer => write!(f, "INTEGER"),
            TypeId::BigInt => write!(f, "BIGINT"),
            TypeId::Decimal => write!(f, "DECIMAL"),
            TypeId::Varchar => write!(f, "VARCHAR"),
        }
    }
}
