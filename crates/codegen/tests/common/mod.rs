//! Common test utilities for scalar operator integration tests
#![allow(dead_code)]

use granite_codegen::{Type, TypeId, TypeRegistry, Value};
use granite_ir::{Emitter, InterpEmitter, NativeKind};

/// Test context bundling a registry with an evaluating emitter, plus
/// helpers to build and read back typed values.
pub struct TestContext {
    pub registry: TypeRegistry,
    pub emitter: InterpEmitter,
}

impl TestContext {
    pub fn new() -> Self {
        TestContext {
            registry: TypeRegistry::new(),
            emitter: InterpEmitter::new(),
        }
    }

    pub fn tinyint(&mut self, v: i64) -> Value {
        let data = self.emitter.const_int(NativeKind::I8, v);
        Value::new(Type::new(TypeId::TinyInt), data)
    }

    pub fn integer(&mut self, v: i64) -> Value {
        let data = self.emitter.const_int(NativeKind::I32, v);
        Value::new(Type::new(TypeId::Integer), data)
    }

    pub fn bigint(&mut self, v: i64) -> Value {
        let data = self.emitter.const_int(NativeKind::I64, v);
        Value::new(Type::new(TypeId::BigInt), data)
    }

    pub fn boolean(&mut self, v: bool) -> Value {
        let data = self.emitter.const_bool(v);
        Value::new(Type::new(TypeId::Boolean), data)
    }

    pub fn decimal(&mut self, v: f64) -> Value {
        let data = self.emitter.const_float(v);
        Value::new(Type::new(TypeId::Decimal), data)
    }

    /// An INTEGER with an explicit null flag. When `is_null` is true the
    /// data handle is the null sentinel, as a scan of a nullable column
    /// would produce.
    pub fn nullable_integer(&mut self, v: i64, is_null: bool) -> Value {
        let data = if is_null {
            self.emitter.const_int(NativeKind::I32, i32::MIN as i64)
        } else {
            self.emitter.const_int(NativeKind::I32, v)
        };
        let null = self.emitter.const_bool(is_null);
        Value::with_null(Type::nullable(TypeId::Integer), data, Some(null))
    }

    pub fn int_of(&self, v: &Value) -> i64 {
        self.emitter.int_value(v.data)
    }

    pub fn float_of(&self, v: &Value) -> f64 {
        self.emitter.float_value(v.data)
    }

    pub fn bool_of(&self, v: &Value) -> bool {
        self.emitter.bool_value(v.data)
    }

    /// Whether the value's null flag is set. Values without a flag are
    /// non-null by construction.
    pub fn is_null(&self, v: &Value) -> bool {
        v.null.map(|n| self.emitter.bool_value(n)).unwrap_or(false)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
