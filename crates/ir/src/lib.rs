//! IR emission interface for the granite query compiler
//!
//! The scalar operator layer lowers casts, comparisons, and arithmetic into
//! primitive instructions through the [`Emitter`] trait. A production build
//! wires it to a native code backend; this crate also ships
//! [`InterpEmitter`], a backend that evaluates every instruction immediately
//! over concrete values, which is what the operator tests and the plan
//! constant-folder run against.
//!
//! Emitted values are referred to by opaque [`ValueId`] handles. The emitter
//! is confined to a single query compilation; it is driven through `&mut`
//! and never shared across threads.

mod emitter;
mod interp;

pub use emitter::{Emitter, Fault, NativeKind, Predicate, ValueId};
pub use interp::InterpEmitter;
