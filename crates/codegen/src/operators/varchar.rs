//! The VARCHAR type
//!
//! Registered so the registry and cast tables can name it, but its
//! operator tables are empty: variable-length operator semantics live
//! behind the extension points and are owned by the string runtime.

use crate::types::{Sentinel, SqlType, TypeId, TypeSystem};
use granite_ir::NativeKind;

pub static VARCHAR: SqlType = SqlType::new(
    TypeId::Varchar,
    NativeKind::Ptr,
    Some(NativeKind::I32),
    None,
    None,
    Sentinel::Int(0),
    TypeSystem::new(&[TypeId::Varchar], &[], &[], &[], &[], &[], &[]),
);
