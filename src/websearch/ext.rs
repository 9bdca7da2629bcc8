use crate::builder::query::QueryBuilder;
use crate::builder::value::Arg;
use crate::error::Result;
use crate::websearch::SearchQuery;
use crate::websearch::ops::{SELECT_WEB_SEARCH_RANK, WHERE_WEB_SEARCH};

/// Typed access to the web-search operations.
///
/// Each method dispatches by name through the builder's registry, so it fails
/// with [`crate::ErrorKind::UnknownOperation`] until [`crate::install`] has
/// run against that registry.
pub trait WebSearchExt: Sized {
    /// Filter rows whose `tsvector` column matches `query`, parsed with
    /// `websearch_to_tsquery`.
    ///
    /// Used with [`WebSearchExt::select_web_search_rank`] to order by score:
    ///
    /// ```no_run
    /// use websearch_sql::{Db, Order, WebSearchExt, install};
    ///
    /// let db = install(Db::new());
    /// let built = db
    ///     .table("products")
    ///     .select(["id", "name"])
    ///     .select_web_search_rank("description", "Shoes")?
    ///     .where_web_search("description", "Shoes")?
    ///     .order_by("rank", Order::Desc)
    ///     .to_native()?;
    /// # Ok::<(), websearch_sql::Error>(())
    /// ```
    ///
    /// [`SearchQuery::Absent`] returns the builder unchanged; [`SearchQuery::Null`] does not.
    fn where_web_search(self, column: &str, query: impl Into<SearchQuery>) -> Result<Self>;

    /// Add a `ts_rank` column named `rank` (or the configured default alias).
    fn select_web_search_rank(self, column: &str, query: impl Into<SearchQuery>) -> Result<Self>;

    /// Add a `ts_rank` column under `alias`.
    fn select_web_search_rank_as(
        self,
        column: &str,
        query: impl Into<SearchQuery>,
        alias: &str,
    ) -> Result<Self>;
}

impl WebSearchExt for QueryBuilder {
    fn where_web_search(self, column: &str, query: impl Into<SearchQuery>) -> Result<Self> {
        self.call(WHERE_WEB_SEARCH, [Arg::from(column), query_arg(query)])
    }

    fn select_web_search_rank(self, column: &str, query: impl Into<SearchQuery>) -> Result<Self> {
        self.call(SELECT_WEB_SEARCH_RANK, [Arg::from(column), query_arg(query)])
    }

    fn select_web_search_rank_as(
        self,
        column: &str,
        query: impl Into<SearchQuery>,
        alias: &str,
    ) -> Result<Self> {
        self.call(
            SELECT_WEB_SEARCH_RANK,
            [Arg::from(column), query_arg(query), Arg::from(alias)],
        )
    }
}

fn query_arg(query: impl Into<SearchQuery>) -> Arg {
    let query: SearchQuery = query.into();
    query.into()
}
