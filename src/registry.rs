//! Operation registry: the query builder's extension point.
//!
//! Operations are looked up by name when a builder dispatches a call, so
//! everything registered here is visible to every builder sharing the
//! registry. [`global`] returns the process-wide instance that [`crate::Db::new`]
//! uses; embedders and tests can inject their own through
//! [`crate::Db::with_registry`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::builder::query::QueryBuilder;
use crate::builder::value::Args;
use crate::error::{Error, Result};

/// A chainable operation: takes the builder by value and hands it back.
pub type Operation = Arc<dyn Fn(QueryBuilder, &Args) -> Result<QueryBuilder> + Send + Sync>;

/// Outcome of [`OperationRegistry::extend`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extended {
    pub added: Vec<String>,
    /// Names that were already present and left untouched.
    pub existing: Vec<String>,
}

pub trait OperationRegistry: Send + Sync + fmt::Debug {
    /// Name used in diagnostics.
    fn name(&self) -> &str;

    fn supports_extension(&self) -> bool;

    fn contains(&self, name: &str) -> bool;

    fn get(&self, name: &str) -> Option<Operation>;

    /// Register a batch of operations in one step.
    ///
    /// Names already registered are skipped and reported in
    /// [`Extended::existing`]; either every new name lands or none does.
    fn extend(&self, ops: Vec<(String, Operation)>) -> Result<Extended>;
}

/// In-memory registry guarded by a single lock.
#[derive(Default)]
pub struct Registry {
    name: String,
    ops: RwLock<HashMap<String, Operation>>,
}

impl Registry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: RwLock::new(HashMap::new()),
        }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.ops.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("ops", &self.names())
            .finish()
    }
}

impl OperationRegistry for Registry {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_extension(&self) -> bool {
        true
    }

    fn contains(&self, name: &str) -> bool {
        self.ops.read().contains_key(name)
    }

    fn get(&self, name: &str) -> Option<Operation> {
        self.ops.read().get(name).cloned()
    }

    fn extend(&self, ops: Vec<(String, Operation)>) -> Result<Extended> {
        let mut guard = self.ops.write();
        let mut out = Extended::default();
        for (name, op) in ops {
            if guard.contains_key(&name) || out.added.contains(&name) {
                out.existing.push(name);
                continue;
            }
            guard.insert(name.clone(), op);
            out.added.push(name);
        }
        Ok(out)
    }
}

/// Registry of a host build without an extension point.
///
/// Lookups work against the fixed set it was built with; any attempt to
/// extend fails with [`Error::ExtensionUnsupported`].
#[derive(Default)]
pub struct FixedRegistry {
    ops: HashMap<String, Operation>,
}

impl FixedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operations(ops: impl IntoIterator<Item = (String, Operation)>) -> Self {
        Self {
            ops: ops.into_iter().collect(),
        }
    }
}

impl fmt::Debug for FixedRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedRegistry")
            .field("ops", &self.ops.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl OperationRegistry for FixedRegistry {
    fn name(&self) -> &str {
        "fixed"
    }

    fn supports_extension(&self) -> bool {
        false
    }

    fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<Operation> {
        self.ops.get(name).cloned()
    }

    fn extend(&self, _ops: Vec<(String, Operation)>) -> Result<Extended> {
        Err(Error::ExtensionUnsupported {
            registry: self.name().to_string(),
        })
    }
}

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new("global")));

/// The process-wide registry shared by every [`crate::Db::new`] handle.
pub fn global() -> Arc<Registry> {
    GLOBAL.clone()
}
