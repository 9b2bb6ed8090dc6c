//! The type registry
//!
//! An explicit, eagerly-built, immutable table of [`SqlType`] singletons.
//! The compiling caller constructs one at a well-defined initialization
//! point and passes it by reference into compilation; there is no global
//! state, no lazy initialization, and no unregister operation. After
//! construction the registry is safe for unsynchronized concurrent reads
//! from any number of compilation threads.

use crate::error::{Error, Result};
use crate::operators::{boolean, decimal, integer, varchar};
use crate::types::{SqlType, TypeId};

pub struct TypeRegistry {
    entries: Vec<&'static SqlType>,
}

impl TypeRegistry {
    /// A registry over the built-in scalar types.
    pub fn new() -> Self {
        Self::with_types(&[
            &boolean::BOOLEAN,
            &integer::TINYINT,
            &integer::SMALLINT,
            &integer::INTEGER,
            &integer::BIGINT,
            &decimal::DECIMAL,
            &varchar::VARCHAR,
        ])
    }

    /// A registry over a caller-supplied list of singletons. Extension
    /// point: new types are registered by listing them here, never by
    /// modifying existing entries.
    pub fn with_types(types: &[&'static SqlType]) -> Self {
        tracing::debug!(count = types.len(), "building type registry");
        TypeRegistry {
            entries: types.to_vec(),
        }
    }

    /// The singleton descriptor for `id`.
    pub fn lookup(&self, id: TypeId) -> Result<&'static SqlType> {
        self.entries
            .iter()
            .find(|ty| ty.id() == id)
            .copied()
            .ok_or(Error::UnknownType(id))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_singletons() {
        let registry = TypeRegistry::new();
        let a = registry.lookup(TypeId::Integer).unwrap();
        let b = registry.lookup(TypeId::Integer).unwrap();
        // Identity equality: same singleton
        assert_eq!(a, b);
        assert_eq!(a.id(), TypeId::Integer);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let registry = TypeRegistry::with_types(&[&integer::INTEGER]);
        assert!(registry.lookup(TypeId::Integer).is_ok());
        assert_eq!(
            registry.lookup(TypeId::Varchar).unwrap_err(),
            Error::UnknownType(TypeId::Varchar)
        );
    }

    #[test]
    fn test_all_builtins_registered() {
        let registry = TypeRegistry::new();
        for id in [
            TypeId::Boolean,
            TypeId::TinyInt,
            TypeId::SmallInt,
            TypeId::Integer,
            TypeId::BigInt,
            TypeId::Decimal,
            TypeId::Varchar,
        ] {
            assert!(registry.lookup(id).is_ok(), "{id} missing from registry");
        }
    }
}
