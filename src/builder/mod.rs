//! Host query builder.
//!
//! A small PostgreSQL-flavoured fluent builder:
//!
//! - **[`Db`]**: cloneable handle tying a registry to an identifier escaper.
//! - **[`query`]**: the chainable [`QueryBuilder`] and its compiled [`BuiltQuery`].
//! - **[`raw`]**: raw fragments with `??` identifier and `?` value bindings.
//! - **[`value`]**: bound values and the dynamic argument convention.

pub mod query;
pub mod raw;
pub mod value;

use std::fmt;
use std::sync::Arc;

pub use query::{BuiltQuery, Order, QueryBuilder};
pub use raw::{Binding, Escaper, Raw};
pub use value::{Arg, Args, Value};

use crate::error::Result;
use crate::registry::{self, OperationRegistry};

#[derive(Clone)]
pub struct Db {
    registry: Arc<dyn OperationRegistry>,
    escaper: Escaper,
}

impl Db {
    /// Handle backed by the process-wide registry.
    pub fn new() -> Self {
        Self::with_registry(registry::global())
    }

    pub fn with_registry(registry: Arc<dyn OperationRegistry>) -> Self {
        Self {
            registry,
            escaper: Escaper,
        }
    }

    pub fn registry(&self) -> &Arc<dyn OperationRegistry> {
        &self.registry
    }

    pub fn escaper(&self) -> Escaper {
        self.escaper
    }

    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::new(self.registry.clone(), self.escaper)
    }

    pub fn table(&self, name: impl Into<String>) -> QueryBuilder {
        self.query().from(name)
    }

    pub fn raw(&self, template: &str, bindings: Vec<Binding>) -> Result<Raw> {
        Raw::new(&self.escaper, template, bindings)
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("registry", &self.registry.name())
            .finish()
    }
}

impl PartialEq for Db {
    /// Two handles are equal when they share the same registry.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry) && self.escaper == other.escaper
    }
}
