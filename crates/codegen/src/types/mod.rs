//! The value/type model flowing through code generation

mod sql_type;
mod type_id;
mod type_system;
mod value;

pub use sql_type::{Sentinel, SqlType};
pub use type_id::TypeId;
pub use type_system::{BinaryEntry, CastEntry, NaryEntry, TypeSystem, UnaryEntry, ZeroArgEntry};
pub use value::{Type, Value};
