//! Scalar type operators and code generation for the granite query compiler
//!
//! This crate defines how each SQL scalar type implements casts,
//! comparisons, and arithmetic, and how those operations are lowered into
//! primitive IR at query-compile time rather than interpreted at
//! query-run time:
//! - A value/type model ([`Value`], [`Type`], [`SqlType`], [`TypeId`])
//! - Per-type operator tables ([`TypeSystem`]) dispatched by linear scan
//! - Null-dispatch wrappers that factor null short-circuiting out of every
//!   concrete operator
//! - The fixed-width signed integer reference family, plus BOOLEAN and
//!   DECIMAL
//! - An explicit, immutable [`TypeRegistry`] built at initialization and
//!   passed by reference into compilation
//!
//! Instructions are emitted through the [`granite_ir::Emitter`] trait;
//! compilation-time failures come back as [`Error`], while overflow and
//! divide-by-zero under the raise policy are armed as run-time faults in
//! the emitted code.

mod dispatch;
mod error;
mod operators;
mod registry;
mod types;

pub use dispatch::{
    emit_binary, emit_cast, emit_comparison, emit_nary, emit_unary, emit_zero_arg,
};
pub use error::{Error, Result};
pub use operators::boolean::BOOLEAN;
pub use operators::decimal::DECIMAL;
pub use operators::integer::{BIGINT, INTEGER, SMALLINT, TINYINT};
pub use operators::null_check;
pub use operators::traits::{
    BinaryOperator, CastOperator, ComparisonOperator, NaryOperator, UnaryOperator,
    ZeroArgOperator,
};
pub use operators::varchar::VARCHAR;
pub use operators::{ComparisonKind, ErrorPolicy, InvocationContext, OperatorId};
pub use registry::TypeRegistry;
pub use types::{
    BinaryEntry, CastEntry, NaryEntry, Sentinel, SqlType, Type, TypeId, TypeSystem, UnaryEntry,
    Value, ZeroArgEntry,
};
