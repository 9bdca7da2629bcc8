//! Full-text web search for a fluent PostgreSQL query builder.
//!
//! [`install`] registers two chainable operations on the builder's operation
//! registry:
//!
//! - `whereWebSearch(column, query)` adds
//!   `"column" @@ websearch_to_tsquery('simple', ?)`
//! - `selectWebSearchRank(column, query, alias = 'rank')` adds
//!   `ts_rank("column", websearch_to_tsquery('simple', ?)) as "alias"`
//!
//! Both are reachable through [`WebSearchExt`] or by name with
//! [`QueryBuilder::call`]. An absent query ([`SearchQuery::Absent`]) leaves the
//! builder untouched.
//!
//! ```no_run
//! use websearch_sql::{Db, Order, WebSearchExt, install};
//!
//! let db = install(Db::new());
//!
//! let built = db
//!     .table("products")
//!     .select(["id"])
//!     .select_web_search_rank("description", "Shoes")?
//!     .where_web_search("description", "Shoes")?
//!     .order_by("rank", Order::Desc)
//!     .to_native()?;
//! # Ok::<(), websearch_sql::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod registry;
pub mod websearch;

pub use builder::{Arg, Args, Binding, BuiltQuery, Db, Escaper, Order, QueryBuilder, Raw, Value};
pub use config::{ConfigError, WebSearchConfig};
pub use error::{Error, ErrorKind, Result};
pub use registry::{FixedRegistry, Operation, OperationRegistry, Registry};
pub use websearch::{
    InstallOutcome, InstallReport, SearchQuery, WebSearchExt, install, install_into, install_with,
};
