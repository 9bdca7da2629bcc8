//! PostgreSQL web-search operations for the query builder.
//!
//! - **[`install`]** / **[`install_with`]**: register `whereWebSearch` and
//!   `selectWebSearchRank` into the handle's registry.
//! - **[`ext`]**: the [`WebSearchExt`] trait, typed access to both operations.
//! - **[`ops`]**: the operations themselves and their SQL templates.
//! - **[`query`]**: [`SearchQuery`], which keeps "no search" apart from a `NULL` search.

pub mod ext;
pub mod ops;
pub mod query;

pub use ext::WebSearchExt;
pub use query::SearchQuery;

use tracing::{debug, warn};

use crate::builder::Db;
use crate::builder::raw::Escaper;
use crate::config::WebSearchConfig;
use crate::error::ErrorKind;
use crate::registry::OperationRegistry;

/// What an installation attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
    /// The registry has no extension point; nothing was registered.
    Unsupported,
    /// An unexpected error, already logged.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub outcome: InstallOutcome,
    pub added: Vec<String>,
    pub existing: Vec<String>,
}

impl InstallReport {
    fn outcome(outcome: InstallOutcome) -> Self {
        Self {
            outcome,
            added: Vec::new(),
            existing: Vec::new(),
        }
    }
}

/// Register the web-search operations into `db`'s registry and hand `db` back.
///
/// Never fails: a registry without an extension point is skipped quietly and
/// any other error is logged. Running it again is harmless.
pub fn install(db: Db) -> Db {
    install_with(db, &WebSearchConfig::default())
}

/// [`install`] with non-default settings. The first installation into a
/// registry decides the settings; later ones find the names taken.
pub fn install_with(db: Db, config: &WebSearchConfig) -> Db {
    install_into(&**db.registry(), db.escaper(), config);
    db
}

#[tracing::instrument(name = "websearch_install", skip_all, fields(registry = registry.name()))]
pub fn install_into(
    registry: &dyn OperationRegistry,
    escaper: Escaper,
    config: &WebSearchConfig,
) -> InstallReport {
    if !registry.supports_extension() {
        debug!("registry has no extension point; skipping");
        return InstallReport::outcome(InstallOutcome::Unsupported);
    }

    if let Err(e) = config.validate() {
        warn!(error = %e, "invalid web search config; operations not installed");
        return InstallReport::outcome(InstallOutcome::Failed(e.to_string()));
    }

    let pending: Vec<_> = ops::operations(config, escaper)
        .into_iter()
        .filter(|(name, _)| !registry.contains(name))
        .collect();
    if pending.is_empty() {
        debug!("web search operations already registered");
        return InstallReport {
            outcome: InstallOutcome::AlreadyInstalled,
            added: Vec::new(),
            existing: vec![
                ops::WHERE_WEB_SEARCH.to_string(),
                ops::SELECT_WEB_SEARCH_RANK.to_string(),
            ],
        };
    }

    match registry.extend(pending) {
        Ok(extended) => {
            for name in &extended.added {
                debug!(operation = %name, "registered query builder operation");
            }
            for name in &extended.existing {
                debug!(operation = %name, "operation already registered");
            }
            let outcome = if extended.added.is_empty() {
                InstallOutcome::AlreadyInstalled
            } else {
                InstallOutcome::Installed
            };
            InstallReport {
                outcome,
                added: extended.added,
                existing: extended.existing,
            }
        }
        Err(e) if e.kind() == ErrorKind::ExtensionUnsupported => {
            debug!(error = %e, "registry refused extension; skipping");
            InstallReport::outcome(InstallOutcome::Unsupported)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyRegistered => {
            debug!(error = %e, "web search operations already registered");
            InstallReport::outcome(InstallOutcome::AlreadyInstalled)
        }
        Err(e) => {
            warn!(error = %e, "error extending query builder registry");
            InstallReport::outcome(InstallOutcome::Failed(e.to_string()))
        }
    }
}
